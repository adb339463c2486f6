//! MCP server implementation.
//!
//! Provides both stdio (for desktop agent hosts) and HTTP transports.

pub mod protocol;
pub mod stdio;
pub mod transport;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::ResearchClient;
use crate::tools::{self, McpTool, ToolContext};

/// MCP server exposing the research tools.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Create a new MCP server.
    #[must_use]
    pub fn new(client: ResearchClient) -> Self {
        let ctx = ToolContext::new(Arc::new(client));
        let tools = tools::register_all_tools();

        Self { ctx, tools }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.tools.len());

        stdio::run_stdio(self.tools, self.ctx).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, addr: SocketAddr) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in HTTP mode on {}", addr);
        tracing::info!("Registered {} tools", self.tools.len());

        let router = self.into_router();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("HTTP server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Build the HTTP router without binding a socket.
    #[must_use]
    pub fn into_router(self) -> axum::Router {
        transport::create_router(self.tools, self.ctx)
    }

    /// Get tool by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.tools.iter().map(|t| (t.name(), t.description())).collect()
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.tools.len()).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

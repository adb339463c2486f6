//! Academic Research MCP Server - Entry Point
//!
//! Provides both stdio and HTTP transports.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use academic_research_mcp::{ResearchClient, config::Config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "academic-research-mcp")]
#[command(about = "MCP server with web fetch and Semantic Scholar search tools")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP bind address (only used with --transport http)
    #[arg(long, default_value = "127.0.0.1", env = "HOST")]
    host: IpAddr,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Default character budget for fetch_url
    #[arg(long, default_value_t = academic_research_mcp::config::api::MAX_CONTENT_CHARS)]
    max_chars: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// Stateless JSON-RPC over HTTP
    Http,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout belongs to the stdio transport
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let env_file = dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        env_file = ?env_file,
        "Starting academic research MCP server"
    );

    let config = Config::new(cli.api_key).with_max_content_chars(cli.max_chars);
    tracing::info!(has_api_key = config.has_api_key(), "Configuration loaded");

    let client = ResearchClient::new(config)?;
    let server = McpServer::new(client);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            let addr = SocketAddr::new(cli.host, cli.port);
            tracing::info!(%addr, "Running in HTTP mode");
            server.run_http(addr).await?;
        }
    }

    Ok(())
}

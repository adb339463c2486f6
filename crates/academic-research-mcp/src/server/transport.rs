//! HTTP transport.
//!
//! Stateless JSON-RPC over `POST /mcp`: every request is answered in its
//! own response, so there are no sessions and no event stream.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::protocol::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR, handle_request};
use crate::tools::{McpTool, ToolContext};

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub tools: Vec<Box<dyn McpTool>>,
    pub ctx: ToolContext,
}

/// Create the HTTP router for MCP.
pub fn create_router(tools: Vec<Box<dyn McpTool>>, ctx: ToolContext) -> Router {
    let state = Arc::new(HttpState { tools, ctx });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/mcp", post(handle_mcp_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "academic-research-mcp",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handle POST requests to /mcp.
async fn handle_mcp_post(State(state): State<Arc<HttpState>>, body: Bytes) -> Response {
    let req: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected malformed JSON-RPC body");
            let response = JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    match handle_request(&req, &state.tools, &state.ctx).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

//! JSON-RPC 2.0 message types and MCP method dispatch.
//!
//! Shared by the stdio and HTTP transports.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::tools::{McpTool, ToolContext};

/// Protocol version answered when the client does not name one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Parse error.
pub const PARSE_ERROR: i32 = -32700;
/// Method not found.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid params.
pub const INVALID_PARAMS: i32 = -32602;
/// Tool execution failed.
pub const TOOL_ERROR: i32 = -32000;

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Requests without an id are notifications and get no response.
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 error.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// JSON-RPC version constant.
    const VERSION: &'static str = "2.0";

    #[must_use]
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self { jsonrpc: Cow::Borrowed(Self::VERSION), result: Some(result), error: None, id }
    }

    #[must_use]
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: Cow::Borrowed(Self::VERSION),
            result: None,
            error: Some(JsonRpcError { code, message: message.into(), data: None }),
            id,
        }
    }
}

/// MCP tool info for tools/list response.
#[derive(Debug, Serialize)]
pub struct McpToolInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Dispatch one request.
///
/// Returns `None` for notifications, which must not be answered.
pub async fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> Option<JsonRpcResponse> {
    tracing::debug!(method = %req.method, "Received request");

    let response = match req.method.as_str() {
        "initialize" => JsonRpcResponse::success(req.id.clone(), initialize_result(&req.params)),
        "initialized" | "notifications/initialized" | "notifications/cancelled" => {
            JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))
        }
        "tools/list" => handle_tools_list(req.id.clone(), tools),
        "tools/call" => handle_tools_call(req.id.clone(), &req.params, tools, ctx).await,
        "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),
        _ => JsonRpcResponse::error(
            req.id.clone(),
            METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    if req.is_notification() { None } else { Some(response) }
}

fn initialize_result(params: &serde_json::Value) -> serde_json::Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    tracing::info!("MCP initialize: protocol version {}", protocol_version);

    serde_json::json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "serverInfo": {
            "name": "academic-research-mcp",
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn handle_tools_list(id: Option<serde_json::Value>, tools: &[Box<dyn McpTool>]) -> JsonRpcResponse {
    let tool_list: Vec<McpToolInfo> = tools
        .iter()
        .map(|t| McpToolInfo {
            name: t.name().to_string(),
            description: t.description().to_string(),
            input_schema: t.input_schema(),
        })
        .collect();

    JsonRpcResponse::success(id, serde_json::json!({ "tools": tool_list }))
}

async fn handle_tools_call(
    id: Option<serde_json::Value>,
    params: &serde_json::Value,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> JsonRpcResponse {
    let tool_name = match params.get("name").and_then(|v| v.as_str()) {
        Some(name) => name,
        None => {
            return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing 'name' parameter");
        }
    };

    let arguments = params.get("arguments").cloned().unwrap_or(serde_json::json!({}));

    let tool = match tools.iter().find(|t| t.name() == tool_name) {
        Some(t) => t,
        None => {
            return JsonRpcResponse::error(
                id,
                INVALID_PARAMS,
                format!("Tool not found: {}", tool_name),
            );
        }
    };

    tracing::info!(tool = %tool_name, "Executing tool");

    match tool.execute(ctx, arguments).await {
        Ok(result) => JsonRpcResponse::success(
            id,
            serde_json::json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            }),
        ),
        Err(e) => {
            tracing::error!(tool = %tool_name, error = %e, "Tool execution failed");
            JsonRpcResponse::error(id, TOOL_ERROR, format!("Tool error: {}", e.to_user_message()))
        }
    }
}

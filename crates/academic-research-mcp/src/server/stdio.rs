//! Stdio transport for MCP protocol.
//!
//! Handles newline-delimited JSON-RPC 2.0 over stdin/stdout.

use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::tools::{McpTool, ToolContext};

use super::protocol::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR, handle_request};

/// Handle MCP protocol over stdio.
pub async fn run_stdio(tools: Vec<Box<dyn McpTool>>, ctx: ToolContext) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    tracing::info!("MCP stdio server ready, waiting for requests...");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            // EOF
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(req) => req,
            Err(e) => {
                let error_response =
                    JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
                write_response(&mut stdout, &error_response).await?;
                continue;
            }
        };

        if let Some(response) = handle_request(&request, &tools, &ctx).await {
            write_response(&mut stdout, &response).await?;
        }
    }

    Ok(())
}

async fn write_response<W>(out: &mut W, response: &JsonRpcResponse) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response_json = serde_json::to_string(response)?;
    out.write_all(response_json.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

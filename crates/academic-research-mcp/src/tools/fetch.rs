//! Page fetch tool: fetch_url.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::models::{FetchOutcome, FetchUrlInput};

/// Fetch a web page as readable text.
pub struct FetchUrlTool;

#[async_trait::async_trait]
impl McpTool for FetchUrlTool {
    fn name(&self) -> &'static str {
        "fetch_url"
    }

    fn description(&self) -> &'static str {
        "Fetch content from a URL for reading (paper abstracts, landing pages). \
         HTML pages are converted to readable text; PDFs and other binary formats \
         are not supported. Long content is truncated. Errors are returned as text."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The full URL to fetch (http or https)"
                },
                "max_chars": {
                    "type": "integer",
                    "default": 50000,
                    "minimum": 0,
                    "description": "Maximum number of characters to return"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: FetchUrlInput = serde_json::from_value(input)?;
        let max_chars = params.max_chars.unwrap_or_else(|| ctx.client.max_content_chars());

        let outcome = ctx.client.fetch_url(&params.url, max_chars).await;

        match &outcome {
            FetchOutcome::Content(text) => {
                tracing::info!(url = %params.url, chars = text.chars().count(), "Fetched URL");
            }
            FetchOutcome::Failed(failure) => {
                tracing::warn!(url = %params.url, error = %failure, "Fetch failed");
            }
        }

        Ok(outcome.into_text())
    }
}

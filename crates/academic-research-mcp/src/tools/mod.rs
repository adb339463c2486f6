//! MCP tool implementations.
//!
//! Each tool module provides a tool that:
//! 1. Parses input parameters
//! 2. Calls the research client
//! 3. Returns text (page content, or JSON for search)

mod fetch;
mod search;

pub use fetch::*;
pub use search::*;

use std::sync::Arc;

use crate::client::ResearchClient;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// HTTP client.
    pub client: Arc<ResearchClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ResearchClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "fetch_url").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(fetch::FetchUrlTool), Box::new(search::BulkSearchTool)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_tool_names() {
        let names: Vec<&str> = register_all_tools().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["fetch_url", "semanticscholar_search_bulk"]);
    }

    #[test]
    fn test_schemas_require_primary_argument() {
        for tool in register_all_tools() {
            let schema = tool.input_schema();
            assert_eq!(schema["type"], "object");
            assert_eq!(schema["required"].as_array().map(Vec::len), Some(1), "{}", tool.name());
        }
    }
}

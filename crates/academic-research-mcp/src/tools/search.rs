//! Search tool: semanticscholar_search_bulk.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::search;
use crate::error::{ToolError, ToolResult};
use crate::models::BulkSearchInput;

/// Semantic Scholar bulk search with boolean query syntax.
pub struct BulkSearchTool;

#[async_trait::async_trait]
impl McpTool for BulkSearchTool {
    fn name(&self) -> &'static str {
        "semanticscholar_search_bulk"
    }

    fn description(&self) -> &'static str {
        "Search for academic papers via the Semantic Scholar bulk search API. \
         Query supports boolean syntax: + AND, | OR, - negate, \"phrase\", ( ) precedence. \
         Returns JSON with total, token (if more results) and a data array of papers."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Text query matched against title and abstract"
                },
                "limit": {
                    "type": "integer",
                    "default": search::DEFAULT_LIMIT,
                    "minimum": 1,
                    "maximum": search::MAX_LIMIT,
                    "description": "Maximum number of papers to return"
                },
                "fields": {
                    "type": "string",
                    "default": search::DEFAULT_FIELDS,
                    "description": "Comma-separated paper fields to return"
                },
                "sort": {
                    "type": "string",
                    "default": search::DEFAULT_SORT,
                    "description": "citationCount:desc, publicationDate:desc, paperId:asc"
                },
                "year": {
                    "type": "string",
                    "description": "Year or range: 2020, 2018-2024, 2020-, -2015"
                },
                "token": {
                    "type": "string",
                    "description": "Pagination token from a previous response"
                },
                "publication_types": {
                    "type": "string",
                    "description": "Comma-separated: Review, JournalArticle, Conference, Dataset"
                },
                "open_access_pdf": {
                    "type": "boolean",
                    "default": false,
                    "description": "Only papers with a public PDF"
                },
                "min_citation_count": {
                    "type": "integer",
                    "default": 0,
                    "description": "Minimum citation count (0 to skip)"
                },
                "fields_of_study": {
                    "type": "string",
                    "description": "Comma-separated: Computer Science, Medicine, Biology, Physics"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: BulkSearchInput = serde_json::from_value(input)?;

        tracing::info!(query = %params.query, limit = params.max_papers(), "Bulk search");

        ctx.client.search_papers_bulk(&params).await.map_err(ToolError::from)
    }
}

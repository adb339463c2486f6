//! Configuration for the academic research MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Semantic Scholar bulk paper search endpoint.
    pub const BULK_SEARCH_URL: &str = "https://api.semanticscholar.org/graph/v1/paper/search/bulk";

    /// Timeout for fetching arbitrary web pages.
    pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

    /// Timeout for a bulk search call.
    pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum characters of page text handed back to the LLM.
    pub const MAX_CONTENT_CHARS: usize = 50_000;

    /// User agent sent when fetching web pages.
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (compatible; AcademicResearchBot/1.0; +https://github.com)";

    /// Accept header sent when fetching web pages.
    pub const FETCH_ACCEPT: &str = "text/html,application/xhtml+xml,application/json,text/plain,*/*";
}

/// Bulk search defaults.
pub mod search {
    /// Default comma-separated paper fields.
    pub const DEFAULT_FIELDS: &str = "title,url,abstract,venue,year";

    /// Default sort order.
    pub const DEFAULT_SORT: &str = "citationCount:desc";

    /// Default number of papers returned.
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Upper bound on papers returned from a single call.
    pub const MAX_LIMIT: i64 = 100;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Bulk search endpoint (overridable for mock servers).
    pub bulk_search_url: String,

    /// Timeout for `fetch_url`.
    pub fetch_timeout: Duration,

    /// Timeout for bulk search.
    pub search_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Default character budget for fetched text.
    pub max_content_chars: usize,

    /// User agent for page fetches.
    pub user_agent: String,
}

impl Config {
    /// Create a new configuration with optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            bulk_search_url: api::BULK_SEARCH_URL.to_string(),
            fetch_timeout: api::FETCH_TIMEOUT,
            search_timeout: api::SEARCH_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_content_chars: api::MAX_CONTENT_CHARS,
            user_agent: api::USER_AGENT.to_string(),
        }
    }

    /// Create a test configuration pointing the search endpoint at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            bulk_search_url: format!("{}/graph/v1/paper/search/bulk", base_url),
            fetch_timeout: Duration::from_secs(5),
            search_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_content_chars: api::MAX_CONTENT_CHARS,
            user_agent: api::USER_AGENT.to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        Ok(Self::new(api_key))
    }

    /// Override the default character budget.
    #[must_use]
    pub fn with_max_content_chars(mut self, max_chars: usize) -> Self {
        self.max_content_chars = max_chars;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

//! Error types for the academic research MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be built
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Rate limited by Semantic Scholar API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Map a reqwest error, surfacing timeouts as [`ClientError::Timeout`].
    #[must_use]
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() { Self::Timeout(timeout) } else { Self::Http(err) }
    }

    /// Returns true if this error is transient.
    ///
    /// Nothing retries automatically; the caller decides.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Timeout(_) | Self::Server { .. })
    }

}

/// Why a page fetch produced no content.
///
/// The `Display` output is exactly the text handed back to the agent.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// URL scheme other than http/https (empty if the URL did not parse)
    #[error("Error: Only http/https URLs are supported. Got scheme: {0}")]
    UnsupportedScheme(String),

    /// Response was a PDF
    #[error(
        "Error: PDF content is not supported. Use the URL for an HTML or text page instead."
    )]
    PdfNotSupported,

    /// Non-success HTTP status
    #[error("Error fetching URL: HTTP {code}{}", reason_suffix(.reason))]
    Status {
        /// HTTP status code
        code: u16,
        /// Canonical reason phrase (empty for unregistered codes)
        reason: String,
    },

    /// Connection, DNS, TLS, timeout or body read failure
    #[error("Error fetching URL: {0}")]
    Transport(String),
}

impl FetchFailure {
    /// Describe a reqwest error including its source chain.
    #[must_use]
    pub fn transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Transport("timed out".to_string());
        }

        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Transport(message)
    }
}

fn reason_suffix(reason: &str) -> String {
    if reason.is_empty() { String::new() } else { format!(" {reason}") }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        if let Self::Client(ClientError::RateLimited { retry_after }) = self {
            return format!(
                "Rate limited by Semantic Scholar API. Please wait {:?} before retrying.",
                retry_after
            );
        }
        self.to_string()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_retryable() {
        assert!(ClientError::rate_limited(60).is_retryable());
        assert!(ClientError::Timeout(Duration::from_secs(30)).is_retryable());
        assert!(ClientError::server(500, "Internal error").is_retryable());

        assert!(!ClientError::not_found("search").is_retryable());
        assert!(!ClientError::bad_request("invalid query").is_retryable());
    }

    #[test]
    fn test_fetch_failure_messages() {
        assert_eq!(
            FetchFailure::UnsupportedScheme("ftp".to_string()).to_string(),
            "Error: Only http/https URLs are supported. Got scheme: ftp"
        );
        assert_eq!(
            FetchFailure::Status { code: 404, reason: "Not Found".to_string() }.to_string(),
            "Error fetching URL: HTTP 404 Not Found"
        );
        assert_eq!(
            FetchFailure::Status { code: 599, reason: String::new() }.to_string(),
            "Error fetching URL: HTTP 599"
        );
        assert!(FetchFailure::PdfNotSupported.to_string().starts_with("Error: PDF content"));
        assert_eq!(
            FetchFailure::Transport("timed out".to_string()).to_string(),
            "Error fetching URL: timed out"
        );
    }

    #[test]
    fn test_tool_error_user_message() {
        let err = ToolError::from(ClientError::rate_limited(5));
        assert!(err.to_user_message().contains("Rate limited"));
    }
}

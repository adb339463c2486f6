//! HTTP client for the research tools.
//!
//! Provides async HTTP access with:
//! - Page fetching with HTML-to-text extraction (15 s timeout)
//! - Semantic Scholar bulk search (30 s timeout)
//!
//! Every call is a single attempt: no retries, no cache, no state shared
//! between calls beyond the connection pool.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult, FetchFailure};
use crate::formatters;
use crate::models::{BulkSearchInput, FetchOutcome};

/// HTTP client shared by the research tools.
#[derive(Clone)]
pub struct ResearchClient {
    /// HTTP client.
    client: Client,

    /// Headers for bulk search (Accept, optional x-api-key).
    search_headers: HeaderMap,

    /// API key presence (the key itself lives only in `search_headers`).
    has_api_key: bool,

    /// Bulk search endpoint.
    bulk_search_url: String,

    /// Page fetch timeout.
    fetch_timeout: Duration,

    /// Bulk search timeout.
    search_timeout: Duration,

    /// Default character budget for fetched text.
    max_content_chars: usize,
}

impl ResearchClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or HTTP
    /// client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut search_headers = HeaderMap::new();
        search_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref key) = config.api_key {
            let mut value = HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            search_headers.insert("x-api-key", value);
        }

        let client = Client::builder()
            .user_agent(config.user_agent)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            search_headers,
            has_api_key: config.api_key.is_some(),
            bulk_search_url: config.bulk_search_url,
            fetch_timeout: config.fetch_timeout,
            search_timeout: config.search_timeout,
            max_content_chars: config.max_content_chars,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Default character budget for [`fetch_url`](Self::fetch_url).
    #[must_use]
    pub const fn max_content_chars(&self) -> usize {
        self.max_content_chars
    }

    /// Fetch a web page and return its readable text.
    ///
    /// HTML and XHTML are run through [`formatters::html_to_text`]; other
    /// text is returned as decoded (invalid UTF-8 replaced). PDFs are
    /// declined. The result is cut to `max_chars` characters with a visible
    /// marker. Never returns an error: every failure becomes
    /// [`FetchOutcome::Failed`].
    pub async fn fetch_url(&self, url: &str, max_chars: usize) -> FetchOutcome {
        let parsed = match Url::parse(url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => u,
            Ok(u) => return FetchFailure::UnsupportedScheme(u.scheme().to_string()).into(),
            Err(e) => {
                tracing::debug!(url, error = %e, "Unparseable URL");
                return FetchFailure::UnsupportedScheme(String::new()).into();
            }
        };

        tracing::debug!(url = %parsed, max_chars, "Fetching URL");

        let response = match self
            .client
            .get(parsed)
            .header(ACCEPT, api::FETCH_ACCEPT)
            .timeout(self.fetch_timeout)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return FetchFailure::transport(&e).into(),
        };

        let status = response.status();
        if !status.is_success() {
            return FetchFailure::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            }
            .into();
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();

        if content_type.contains("application/pdf") {
            return FetchFailure::PdfNotSupported.into();
        }

        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => return FetchFailure::transport(&e).into(),
        };

        let raw = String::from_utf8_lossy(&body);
        let text = if content_type.contains("text/html") || content_type.contains("application/xhtml")
        {
            formatters::html_to_text(&raw)
        } else {
            raw.into_owned()
        };

        FetchOutcome::Content(formatters::truncate_chars(text, max_chars))
    }

    /// Bulk search for papers with boolean query syntax.
    ///
    /// Makes exactly one request; the endpoint may return up to 1000 papers
    /// and `data` is cut to [`BulkSearchInput::max_papers`] here. The body
    /// is re-serialized with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// that is not JSON.
    pub async fn search_papers_bulk(&self, input: &BulkSearchInput) -> ClientResult<String> {
        let params = input.query_params();
        let mut response = self.get_json(&self.bulk_search_url, &params).await?;

        let dropped = formatters::truncate_data(&mut response, input.max_papers());
        tracing::debug!(kept = input.max_papers(), dropped, "Truncated bulk search results");

        Ok(formatters::to_pretty_json(&response)?)
    }

    /// Make a GET request to the search API and parse the JSON body.
    async fn get_json(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> ClientResult<serde_json::Value> {
        let url = Url::parse_with_params(url, params)?;

        tracing::debug!(url = %url.path(), params = params.len(), "Search API request");

        let response = self
            .client
            .get(url)
            .headers(self.search_headers.clone())
            .timeout(self.search_timeout)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.search_timeout))?;

        let response = self.handle_response(response).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.search_timeout))?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for ResearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchClient")
            .field("has_api_key", &self.has_api_key())
            .field("bulk_search_url", &self.bulk_search_url)
            .finish()
    }
}

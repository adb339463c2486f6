//! Input models for MCP tool parameters.
//!
//! Argument names follow the snake_case names the agent runtime passes.

use serde::{Deserialize, Serialize};

use crate::config::search;

/// Input for `fetch_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchUrlInput {
    /// Full http(s) URL to fetch.
    pub url: String,

    /// Character budget for the returned text (server default when absent).
    #[serde(default)]
    pub max_chars: Option<usize>,
}

/// Input for `semanticscholar_search_bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSearchInput {
    /// Text query with boolean syntax: `+` AND, `|` OR, `-` NOT, `"phrase"`, `( )`.
    ///
    /// Passed to the API verbatim.
    pub query: String,

    /// Maximum papers to return, clamped to 1..=100.
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Comma-separated paper fields.
    #[serde(default = "default_fields")]
    pub fields: String,

    /// Sort order, e.g. "citationCount:desc", "publicationDate:desc", "paperId:asc".
    #[serde(default = "default_sort")]
    pub sort: String,

    /// Year or range: "2020", "2018-2024", "2020-", "-2015".
    #[serde(default)]
    pub year: Option<String>,

    /// Continuation token from a previous response.
    #[serde(default)]
    pub token: Option<String>,

    /// Comma-separated types: Review, JournalArticle, Conference, Dataset, ...
    #[serde(default)]
    pub publication_types: Option<String>,

    /// Restrict to papers with a public PDF.
    #[serde(default)]
    pub open_access_pdf: bool,

    /// Minimum citation count (0 disables the filter).
    #[serde(default)]
    pub min_citation_count: i64,

    /// Comma-separated fields of study: Computer Science, Medicine, ...
    #[serde(default)]
    pub fields_of_study: Option<String>,
}

fn default_limit() -> i64 {
    search::DEFAULT_LIMIT
}

fn default_fields() -> String {
    search::DEFAULT_FIELDS.to_string()
}

fn default_sort() -> String {
    search::DEFAULT_SORT.to_string()
}

impl BulkSearchInput {
    /// Create an input with every optional argument at its default.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: default_limit(),
            fields: default_fields(),
            sort: default_sort(),
            year: None,
            token: None,
            publication_types: None,
            open_access_pdf: false,
            min_citation_count: 0,
            fields_of_study: None,
        }
    }

    /// Number of papers kept from the response: `clamp(limit, 1, 100)`.
    #[must_use]
    pub fn max_papers(&self) -> usize {
        usize::try_from(self.limit.clamp(1, search::MAX_LIMIT)).unwrap_or(1)
    }

    /// Build query parameters for the bulk endpoint.
    ///
    /// `query`, `fields` and `sort` are always sent. Filters are sent only
    /// when set: empty strings, `false` and a zero citation floor are omitted
    /// rather than sent empty. `openAccessPdf` is a presence flag and carries
    /// an empty value.
    #[must_use]
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("query".to_string(), self.query.clone()),
            ("fields".to_string(), self.fields.clone()),
            ("sort".to_string(), self.sort.clone()),
        ];

        let optional = [
            ("token", &self.token),
            ("year", &self.year),
            ("publicationTypes", &self.publication_types),
        ];
        for (key, value) in optional {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key.to_string(), v.to_string()));
            }
        }

        if self.open_access_pdf {
            params.push(("openAccessPdf".to_string(), String::new()));
        }

        if self.min_citation_count > 0 {
            params.push(("minCitationCount".to_string(), self.min_citation_count.to_string()));
        }

        if let Some(fos) = self.fields_of_study.as_deref().filter(|v| !v.is_empty()) {
            params.push(("fieldsOfStudy".to_string(), fos.to_string()));
        }

        params
    }
}

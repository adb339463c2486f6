//! Result of a page fetch.

use crate::error::FetchFailure;

/// Outcome of `fetch_url`: page text or a readable failure.
///
/// Both arms end up as plain text for the agent; keeping them apart lets
/// callers log or branch without parsing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Extracted (and possibly truncated) page text.
    Content(String),
    /// Why nothing could be returned.
    Failed(FetchFailure),
}

impl FetchOutcome {
    /// Check if the fetch produced content.
    #[must_use]
    pub const fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    /// Caller-facing text: the content itself or the failure message.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Content(text) => text,
            Self::Failed(failure) => failure.to_string(),
        }
    }
}

impl From<FetchFailure> for FetchOutcome {
    fn from(failure: FetchFailure) -> Self {
        Self::Failed(failure)
    }
}

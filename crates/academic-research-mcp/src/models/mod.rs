//! Data models for tool inputs and results.
//!
//! Search responses are not modelled: they pass through as `serde_json::Value`
//! so any requested field projection survives unchanged.

mod fetch;
mod inputs;

pub use fetch::FetchOutcome;
pub use inputs::{BulkSearchInput, FetchUrlInput};

//! JSON output formatting for search responses.

use serde_json::Value;

/// Cap the `data` array of a search response at `max_papers` entries.
///
/// Leaves the value untouched when `data` is absent or not an array. Order is
/// preserved, so an upstream sort survives truncation. Returns the number of
/// entries dropped.
pub fn truncate_data(response: &mut Value, max_papers: usize) -> usize {
    match response.get_mut("data").and_then(Value::as_array_mut) {
        Some(papers) if papers.len() > max_papers => {
            let dropped = papers.len() - max_papers;
            papers.truncate(max_papers);
            dropped
        }
        _ => 0,
    }
}

/// Serialize with 2-space indentation, leaving non-ASCII characters as-is.
///
/// Object keys keep their insertion order, so identical input always yields
/// byte-identical output.
pub fn to_pretty_json(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

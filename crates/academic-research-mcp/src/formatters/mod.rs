//! Output formatters for page text and JSON.

pub mod html;
mod json;

pub use self::json::*;
pub use html::{TRUNCATION_MARKER, html_to_text, truncate_chars};

//! Fuzzing library for academic-research-mcp.
//!
//! This crate provides fuzzing targets for the HTML text extraction and
//! tool input parsing.
//!
//! # Usage
//!
//! ```bash
//! cd crates/research-fuzz
//! cargo +nightly fuzz run fuzz_html_to_text -- -max_total_time=60
//! ```

pub use academic_research_mcp::{formatters, models};

#![no_main]

use academic_research_mcp::formatters::{TRUNCATION_MARKER, html_to_text, truncate_chars};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let text = html_to_text(&html);

    assert!(!text.contains("\n\n\n"));

    let cut = truncate_chars(text, 64);
    assert!(cut.chars().count() <= 64 + TRUNCATION_MARKER.chars().count());
});

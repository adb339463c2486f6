#![no_main]

use academic_research_mcp::models::{BulkSearchInput, FetchUrlInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<FetchUrlInput>(data);

    if let Ok(input) = serde_json::from_slice::<BulkSearchInput>(data) {
        let kept = input.max_papers();
        assert!((1..=100).contains(&kept));
        let _ = input.query_params();
    }
});

//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use academic_research_mcp::client::ResearchClient;
use academic_research_mcp::config::{Config, api};
use academic_research_mcp::server::McpServer;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_api_key() {
    let config = Config::default();
    assert!(!config.has_api_key());
}

#[test]
fn test_config_with_api_key() {
    let config = Config::new(Some("test-key".to_string()));
    assert!(config.has_api_key());
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
}

#[test]
fn test_config_empty_api_key_ignored() {
    let config = Config::new(Some(String::new()));
    assert!(!config.has_api_key());
}

#[test]
fn test_config_for_testing_points_at_mock() {
    let config = Config::for_testing("http://127.0.0.1:4321");
    assert_eq!(config.bulk_search_url, "http://127.0.0.1:4321/graph/v1/paper/search/bulk");
    assert!(!config.has_api_key());
}

#[test]
fn test_config_budget_override() {
    let config = Config::default().with_max_content_chars(1_234);
    assert_eq!(config.max_content_chars, 1_234);
    assert_eq!(Config::default().max_content_chars, api::MAX_CONTENT_CHARS);
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = ResearchClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_reports_api_key_status() {
    let client = ResearchClient::new(Config::new(Some("key".to_string()))).unwrap();
    assert!(client.has_api_key());

    let client_no_key = ResearchClient::new(Config::default()).unwrap();
    assert!(!client_no_key.has_api_key());
}

#[test]
fn test_client_rejects_unusable_api_key() {
    let client = ResearchClient::new(Config::new(Some("bad\nkey".to_string())));
    assert!(client.is_err());
}

#[test]
fn test_client_debug_hides_api_key() {
    let client = ResearchClient::new(Config::new(Some("super-secret".to_string()))).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("has_api_key: true"));
}

#[test]
fn test_client_carries_budget() {
    let client = ResearchClient::new(Config::default().with_max_content_chars(42)).unwrap();
    assert_eq!(client.max_content_chars(), 42);
}

// =============================================================================
// Server Wiring Tests
// =============================================================================

#[test]
fn test_server_registers_both_tools() {
    let server = McpServer::new(ResearchClient::new(Config::default()).unwrap());

    let names: Vec<&str> = server.list_tools().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["fetch_url", "semanticscholar_search_bulk"]);

    assert!(server.get_tool("fetch_url").is_some());
    assert!(server.get_tool("paper_details").is_none());
}

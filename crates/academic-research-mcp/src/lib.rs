//! Academic Research MCP Server
//!
//! A Model Context Protocol (MCP) server providing the tools an academic
//! research agent calls to read the web and search the literature.
//!
//! # Features
//!
//! - **`fetch_url`**: fetch a page and extract readable text, bounded to a
//!   character budget; failures come back as text, never as errors
//! - **`semanticscholar_search_bulk`**: Semantic Scholar bulk search with
//!   boolean queries and filters, truncated to the requested limit
//! - **Stateless**: no cache, no retries, one upstream request per call
//!
//! # Example
//!
//! ```no_run
//! use academic_research_mcp::{client::ResearchClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ResearchClient::new(config)?;
//!
//!     let text = client.fetch_url("https://example.org", 2_000).await.into_text();
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::ResearchClient;
pub use config::Config;
pub use error::{ClientError, FetchFailure, ToolError};

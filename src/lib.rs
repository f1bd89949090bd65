//! Jellyfin MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes a Jellyfin media
//! library as a set of read-only tools. Each tool performs one GET against
//! the Jellyfin REST API and returns a compact JSON projection of the result.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **jellyfin**: HTTP client, response models and field projection
//!   - **tools**: the MCP tools, their router and registry
//!
//! # Example
//!
//! ```rust,no_run
//! use jellyfin_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

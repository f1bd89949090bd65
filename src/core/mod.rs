//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, server lifecycle management,
//! and the stdio transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, JellyfinConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::StdioTransport;

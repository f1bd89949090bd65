//! MCP Server implementation and lifecycle management.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` method (rmcp routing)
//!
//! The ToolRouter is built in `domains/tools/router.rs`; adding a tool does
//! not touch this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolContext, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the HTTP client cannot be built. Missing Jellyfin
    /// settings are reported per tool call instead.
    pub fn new(config: Config) -> crate::Result<Self> {
        let config = Arc::new(config);
        let ctx = Arc::new(ToolContext::connect(config.jellyfin.clone())?);
        info!("Jellyfin base URL: {}", config.jellyfin.url);

        Ok(Self {
            tool_router: build_tool_router::<Self>(ctx),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Metadata of every routed tool.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only access to a Jellyfin media library: search music, browse albums, \
                 artists, genres, playlists, movies and series, and look up stream URLs."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

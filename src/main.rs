//! Jellyfin MCP Server Entry Point
//!
//! Loads configuration, initializes logging on stderr and serves MCP over
//! stdin/stdout.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use jellyfin_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    config.log_summary();

    let server = McpServer::new(config)?;
    info!(
        "Starting {} v{} with {} tools",
        server.name(),
        server.version(),
        server.list_tools().len()
    );

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Stdout is reserved for MCP frames, so everything goes to stderr.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

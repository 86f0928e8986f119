//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, resolves the downstream API
//! credentials and starts the server with the configured transport.
//! Missing credentials abort startup with a non-zero exit code.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use neutrino_mcp_server::core::{
    Config, ConfigCredentialResolver, CredentialResolver, McpServer, TransportService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Credentials are resolved once and shared by every tool handler
    let resolver = ConfigCredentialResolver::new(config.credentials.clone());
    let credentials = resolver.resolve().inspect_err(|e| {
        error!("Failed to start server: {}", e);
    })?;
    info!("Using API base URL {}", credentials.base_url);

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, Arc::new(credentials))
        .context("Failed to build MCP server")?;

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the STDIO transport.
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

//! Neutrino API MCP Server Library
//!
//! This crate exposes a fixed catalog of Neutrino API endpoints (user-agent
//! lookup, email/phone validation, BIN/IP/domain lookups, geocoding,
//! telephony, URL probing) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, credential resolution, the MCP
//!   server handler and the transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool descriptors, registry, dispatcher and the generic
//!     HTTP tool handler, plus the tool catalog
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use neutrino_mcp_server::core::{
//!     Config, ConfigCredentialResolver, CredentialResolver, McpServer,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let credentials =
//!         ConfigCredentialResolver::new(config.credentials.clone()).resolve()?;
//!     let server = McpServer::new(config, Arc::new(credentials))?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, credential resolution, server
//! lifecycle management, and transport layer abstractions.

pub mod config;
pub mod credentials;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use credentials::{ApiCredentials, ConfigCredentialResolver, CredentialResolver, CredentialsError};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};

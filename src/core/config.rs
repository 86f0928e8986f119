//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Downstream API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Outbound HTTP client configuration.
    pub http_client: HttpClientConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Where the downstream API credentials come from.
///
/// Values set here take precedence; anything missing is read from the
/// JSON file at `config_path`.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// API base URL (`API_BASE_URL`).
    pub api_base_url: Option<String>,

    /// Bearer token (`API_BEARER_TOKEN`).
    pub api_bearer_token: Option<String>,

    /// Fallback credentials file (`API_CONFIG_PATH`, default `~/.api/config.json`).
    pub config_path: PathBuf,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_base_url", &self.api_base_url)
            .field(
                "api_bearer_token",
                &self.api_bearer_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("config_path", &self.config_path)
            .finish()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_bearer_token: None,
            config_path: default_config_path(),
        }
    }
}

/// Outbound HTTP client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Per-request timeout in seconds; `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl HttpClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".api")
        .join("config.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "neutrino-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            http_client: HttpClientConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); downstream API settings use
    /// `API_BASE_URL`, `API_BEARER_TOKEN`, `API_CONFIG_PATH` and
    /// `API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.credentials.api_base_url = std::env::var("API_BASE_URL").ok();
        config.credentials.api_bearer_token = std::env::var("API_BEARER_TOKEN").ok();
        if let Ok(path) = std::env::var("API_CONFIG_PATH") {
            config.credentials.config_path = PathBuf::from(path);
        }

        if let Ok(timeout) = std::env::var("API_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.http_client.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid API_TIMEOUT_SECS value: {}", timeout),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("API_BASE_URL", "https://neutrinoapi.net");
            std::env::set_var("API_BEARER_TOKEN", "test_token_12345");
            std::env::set_var("API_CONFIG_PATH", "/tmp/api-config.json");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.api_base_url.as_deref(),
            Some("https://neutrinoapi.net")
        );
        assert_eq!(
            config.credentials.api_bearer_token.as_deref(),
            Some("test_token_12345")
        );
        assert_eq!(
            config.credentials.config_path,
            PathBuf::from("/tmp/api-config.json")
        );
        unsafe {
            std::env::remove_var("API_BASE_URL");
            std::env::remove_var("API_BEARER_TOKEN");
            std::env::remove_var("API_CONFIG_PATH");
        }
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("API_TIMEOUT_SECS", "15");
        }
        let config = Config::from_env();
        assert_eq!(config.http_client.timeout(), Some(Duration::from_secs(15)));

        unsafe {
            std::env::set_var("API_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.http_client.timeout(), None);
        unsafe {
            std::env::remove_var("API_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_default_config_path() {
        let config = Config::default();
        assert!(config.credentials.config_path.ends_with(".api/config.json"));
        assert!(config.http_client.timeout().is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            api_bearer_token: Some("super_secret_token".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}

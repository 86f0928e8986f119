//! Downstream API credential resolution.
//!
//! Credentials come from `API_BASE_URL` / `API_BEARER_TOKEN` (captured in
//! [`CredentialsConfig`]) and fall back, field by field, to a JSON file
//! (`~/.api/config.json` by default):
//!
//! ```json
//! { "baseURL": "https://neutrinoapi.net", "bearerToken": "..." }
//! ```
//!
//! The server resolves once at startup and injects the resulting
//! [`ApiCredentials`] into every tool handler.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use super::config::CredentialsConfig;

/// Errors raised while resolving API credentials.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// Environment incomplete and the config file could not be loaded.
    #[error(
        "Configuration not found. Please set API_BASE_URL and API_BEARER_TOKEN environment variables or create config file at {path}"
    )]
    NotFound { path: String },

    /// A value is still missing after merging environment and file.
    #[error("Missing {0} in API configuration")]
    Missing(&'static str),
}

/// Base URL and bearer token for the downstream API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub base_url: String,
    pub bearer_token: String,
}

impl ApiCredentials {
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

/// Source of downstream API credentials.
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self) -> Result<ApiCredentials, CredentialsError>;
}

/// Already-resolved credentials resolve to themselves.
impl CredentialResolver for ApiCredentials {
    fn resolve(&self) -> Result<ApiCredentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// On-disk credentials file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsFile {
    #[serde(rename = "baseURL")]
    base_url: Option<String>,
    bearer_token: Option<String>,
}

impl CredentialsFile {
    fn load(path: &Path) -> Result<Self, CredentialsError> {
        let not_found = || CredentialsError::NotFound {
            path: home_relative(path),
        };
        let raw = fs::read_to_string(path).map_err(|e| {
            debug!("Cannot read {}: {}", path.display(), e);
            not_found()
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            debug!("Cannot parse {}: {}", path.display(), e);
            not_found()
        })
    }
}

/// Render `path` with the home directory abbreviated to `~`.
fn home_relative(path: &Path) -> String {
    dirs::home_dir()
        .and_then(|home| path.strip_prefix(home).ok().map(Path::to_path_buf))
        .map(|rest| format!("~/{}", rest.display()))
        .unwrap_or_else(|| path.display().to_string())
}

/// Resolver reading the environment-derived config, then the config file.
#[derive(Debug, Clone)]
pub struct ConfigCredentialResolver {
    config: CredentialsConfig,
}

impl ConfigCredentialResolver {
    pub fn new(config: CredentialsConfig) -> Self {
        Self { config }
    }
}

impl CredentialResolver for ConfigCredentialResolver {
    fn resolve(&self) -> Result<ApiCredentials, CredentialsError> {
        let env_base = non_empty(self.config.api_base_url.as_deref());
        let env_token = non_empty(self.config.api_bearer_token.as_deref());

        if let (Some(base_url), Some(token)) = (env_base, env_token) {
            return Ok(ApiCredentials::new(base_url, token));
        }

        let file = CredentialsFile::load(&self.config.config_path)?;
        info!(
            "API credentials loaded from {}",
            self.config.config_path.display()
        );

        let base_url = env_base
            .or(non_empty(file.base_url.as_deref()))
            .ok_or(CredentialsError::Missing("baseURL"))?;
        let token = env_token
            .or(non_empty(file.bearer_token.as_deref()))
            .ok_or(CredentialsError::Missing("bearerToken"))?;

        Ok(ApiCredentials::new(base_url, token))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

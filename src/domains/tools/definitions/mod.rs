//! Tool definitions module.
//!
//! Every tool of the catalog is a unit struct implementing [`HttpTool`]:
//! a name, a description, the downstream path and the declared parameters.
//! Tools are grouped by API category, one file per category.

use std::sync::Arc;

use reqwest::Client;

use super::descriptor::{ParamSpec, ToolDescriptor};
use super::handlers::HttpToolHandler;
use crate::core::credentials::CredentialResolver;

pub mod data_tools;
pub mod e_commerce;
pub mod geolocation;
pub mod security;
pub mod telephony;
pub mod www;

pub use data_tools::{EmailValidateTool, PhoneValidateTool, UaLookupTool};
pub use e_commerce::{BinListDownloadTool, BinLookupTool, ConvertTool};
pub use geolocation::{GeocodeAddressTool, GeocodeReverseTool, IpInfoTool};
pub use security::{
    DomainLookupTool, EmailVerifyTool, HostReputationTool, IpBlocklistDownloadTool,
    IpBlocklistTool, IpProbeTool,
};
pub use telephony::{HlrLookupTool, VerifySecurityCodeTool};
pub use www::UrlInfoTool;

/// A catalog tool backed by one downstream GET endpoint.
pub trait HttpTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Downstream path, relative to the API base URL.
    const PATH: &'static str;

    /// Declared parameters, in the order they are sent downstream.
    fn params() -> Vec<ParamSpec>;
}

/// Builds descriptors whose handlers share one HTTP client and resolver.
#[derive(Clone)]
pub struct HttpToolFactory {
    client: Client,
    credentials: Arc<dyn CredentialResolver>,
}

impl HttpToolFactory {
    pub fn new(client: Client, credentials: Arc<dyn CredentialResolver>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Create the descriptor for tool `T`.
    pub fn build<T: HttpTool>(&self) -> ToolDescriptor {
        let params = T::params();
        let handler = HttpToolHandler::new(
            self.client.clone(),
            self.credentials.clone(),
            T::PATH,
            &params,
        );
        ToolDescriptor::new(T::NAME, T::DESCRIPTION, params, Arc::new(handler))
    }

    /// Descriptors for the whole catalog, in registration order.
    pub fn catalog(&self) -> Vec<ToolDescriptor> {
        vec![
            self.build::<UaLookupTool>(),
            self.build::<EmailValidateTool>(),
            self.build::<PhoneValidateTool>(),
            self.build::<BinListDownloadTool>(),
            self.build::<BinLookupTool>(),
            self.build::<ConvertTool>(),
            self.build::<IpBlocklistDownloadTool>(),
            self.build::<IpProbeTool>(),
            self.build::<DomainLookupTool>(),
            self.build::<HostReputationTool>(),
            self.build::<IpBlocklistTool>(),
            self.build::<EmailVerifyTool>(),
            self.build::<IpInfoTool>(),
            self.build::<GeocodeAddressTool>(),
            self.build::<GeocodeReverseTool>(),
            self.build::<HlrLookupTool>(),
            self.build::<VerifySecurityCodeTool>(),
            self.build::<UrlInfoTool>(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::ApiCredentials;

    fn factory() -> HttpToolFactory {
        HttpToolFactory::new(
            Client::new(),
            Arc::new(ApiCredentials::new("https://api.example", "token")),
        )
    }

    #[test]
    fn test_catalog_size_and_naming() {
        let catalog = factory().catalog();
        assert_eq!(catalog.len(), 18);
        for tool in &catalog {
            let name = tool.name();
            assert!(name.starts_with("get-"), "{name} is not a get- tool");
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{name} is not kebab-case"
            );
            assert!(!tool.description().is_empty());
        }
    }

    #[test]
    fn test_build_uses_tool_constants() {
        let descriptor = factory().build::<ConvertTool>();
        assert_eq!(descriptor.name(), ConvertTool::NAME);
        assert_eq!(descriptor.description(), ConvertTool::DESCRIPTION);
        assert_eq!(
            descriptor.required_names(),
            vec!["from-value", "from-type", "to-type"]
        );
    }
}

//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool requests to the [`ToolDispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are declared in `domains/tools/definitions/` and registered once,
//! when the server is built. `tools/list` and `tools/call` are answered by
//! the dispatcher for every transport; the STDIO/TCP path goes through
//! rmcp's `ServerHandler`, the HTTP path through the `*_json` helpers.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::{Config, HttpClientConfig};
use super::credentials::CredentialResolver;
use super::error::{Error, Result};
use crate::domains::tools::{
    HttpToolFactory, ToolDispatcher, ToolError, ToolRegistry, build_tool_registry,
    to_call_result,
};

const INSTRUCTIONS: &str = "Tools forwarding to the Neutrino API: user-agent lookup, email and phone \
validation, BIN, IP and domain lookups, geocoding, telephony and URL probing. Every tool returns the \
API response as text; failures are reported as text starting with 'Request failed:' or \
'Failed to format JSON:'.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. The tool
/// registry behind it is immutable once the server is built.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the registered tools.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server with the full tool catalog.
    ///
    /// Every tool handler shares one HTTP client and the given credentials.
    pub fn new(config: Config, credentials: Arc<dyn CredentialResolver>) -> Result<Self> {
        let client = build_http_client(&config.http_client)?;
        let factory = HttpToolFactory::new(client, credentials);
        let registry = build_tool_registry(&factory)?;
        info!("Registered {} tools", registry.len());

        Ok(Self::with_registry(config, registry))
    }

    /// Create a server over an already-built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools_json(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return the MCP result as JSON (for HTTP transport).
    pub async fn call_tool_json(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            _ => return Err(ToolError::invalid_arguments("arguments must be an object")),
        };

        let output = self.dispatcher.call_tool(name, arguments).await?;
        serde_json::to_value(to_call_result(output))
            .map_err(|e| ToolError::execution_failed(e.to_string()))
    }
}

/// Build the HTTP client shared by all tool handlers.
fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let output = self
            .dispatcher
            .call_tool(&request.name, request.arguments)
            .await?;
        Ok(to_call_result(output))
    }
}

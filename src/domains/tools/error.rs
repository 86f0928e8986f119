//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool registration and dispatch.
///
/// Downstream HTTP failures are not represented here: the HTTP tool
/// handler reports those as text inside a successful result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// A tool with the same name is already registered.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// A descriptor is malformed (e.g. it declares a parameter twice).
    #[error("Invalid descriptor for tool '{tool}': {reason}")]
    InvalidDescriptor { tool: String, reason: String },

    /// Required arguments were absent or empty.
    #[error("Missing required argument(s) for tool '{tool}': {}", .names.join(", "))]
    MissingArguments { tool: String, names: Vec<String> },

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool handler failed outside of its own contract.
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "invalid descriptor" error.
    pub fn invalid_descriptor(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// JSON-RPC error code used when this error reaches a client.
    pub fn code(&self) -> i32 {
        match self {
            Self::ExecutionFailed(_) | Self::DuplicateName(_) | Self::InvalidDescriptor { .. } => {
                -32603
            }
            Self::NotFound(_) | Self::MissingArguments { .. } | Self::InvalidArguments(_) => -32602,
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::NotFound(_)
            | ToolError::MissingArguments { .. }
            | ToolError::InvalidArguments(_) => McpError::invalid_params(message, None),
            _ => McpError::internal_error(message, None),
        }
    }
}

//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients; every
//! tool in this server forwards to one endpoint of the downstream API.
//!
//! ## Architecture
//!
//! - `descriptor.rs` - Tool descriptors (name, description, parameters, handler)
//! - `registry.rs` - Ordered, name-unique registry built once at startup
//! - `dispatcher.rs` - Resolves and validates calls, runs exactly one handler
//! - `handlers.rs` - The generic HTTP tool handler
//! - `definitions/` - The tool catalog, one file per API category
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing `HttpTool` in the matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `HttpToolFactory::catalog()`

pub mod definitions;
mod descriptor;
mod dispatcher;
mod error;
mod handlers;
mod registry;

pub use definitions::{HttpTool, HttpToolFactory};
pub use descriptor::{ParamSpec, ParamType, ToolDescriptor};
pub use dispatcher::{ToolDispatcher, to_call_result, validate_arguments};
pub use error::ToolError;
pub use handlers::{HttpToolHandler, ToolHandler, ToolOutput, render_body};
pub use registry::{ToolRegistry, build_tool_registry};

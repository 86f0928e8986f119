//! Tool Registry - central registration of all tools.
//!
//! The registry is filled once while the server is composed and is
//! read-only afterwards; it keeps registration order for listing and an
//! index for lookups by name.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::definitions::HttpToolFactory;
use super::descriptor::ToolDescriptor;
use super::error::ToolError;

/// Ordered, name-unique set of tool descriptors.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor.
    ///
    /// Fails if the name is already taken or the descriptor declares the
    /// same parameter twice.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        if self.index.contains_key(descriptor.name()) {
            return Err(ToolError::DuplicateName(descriptor.name().to_string()));
        }

        let mut seen = HashSet::new();
        for param in descriptor.params() {
            if !seen.insert(param.name.as_str()) {
                return Err(ToolError::invalid_descriptor(
                    descriptor.name(),
                    format!("parameter '{}' declared twice", param.name),
                ));
            }
        }

        debug!("Registered tool: {}", descriptor.name());
        self.index
            .insert(descriptor.name().to_string(), self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    /// Builder-style registration.
    pub fn with(mut self, descriptor: ToolDescriptor) -> Result<Self, ToolError> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// All descriptors in registration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Look up a descriptor by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Build the registry holding the whole tool catalog.
pub fn build_tool_registry(factory: &HttpToolFactory) -> Result<ToolRegistry, ToolError> {
    factory
        .catalog()
        .into_iter()
        .try_fold(ToolRegistry::new(), ToolRegistry::with)
}

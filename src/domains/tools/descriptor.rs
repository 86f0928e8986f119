//! Tool descriptors: the declarative half of a tool.
//!
//! A [`ToolDescriptor`] pairs a name, a description and an ordered list of
//! [`ParamSpec`]s with the [`ToolHandler`] that executes the tool. The
//! descriptor renders its own JSON input schema and rmcp [`Tool`] model;
//! the handler is never part of that projection.

use std::fmt;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::handlers::ToolHandler;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
}

impl ParamType {
    /// Name used in the JSON schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Whether `value` can be sent downstream as this type.
    ///
    /// Scalars are accepted loosely (clients frequently send numbers and
    /// booleans as strings); objects and arrays never are.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::String, Value::String(_) | Value::Number(_) | Value::Bool(_)) => true,
            (Self::Number, Value::Number(_)) => true,
            (Self::Number, Value::String(s)) => s.is_empty() || s.trim().parse::<f64>().is_ok(),
            (Self::Boolean, Value::Bool(_)) => true,
            (Self::Boolean, Value::String(s)) => matches!(s.as_str(), "" | "true" | "false"),
            _ => false,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
    /// Key used in the downstream query string.
    pub query_key: String,
}

impl ParamSpec {
    fn new(name: &str, param_type: ParamType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            description: description.to_string(),
            required: false,
            query_key: name.to_string(),
        }
    }

    /// Declare an optional string parameter.
    pub fn string(name: &str, description: &str) -> Self {
        Self::new(name, ParamType::String, description)
    }

    /// Declare an optional number parameter.
    pub fn number(name: &str, description: &str) -> Self {
        Self::new(name, ParamType::Number, description)
    }

    /// Declare an optional boolean parameter.
    pub fn boolean(name: &str, description: &str) -> Self {
        Self::new(name, ParamType::Boolean, description)
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Send the parameter downstream under a different query key.
    pub fn query_key(mut self, key: &str) -> Self {
        self.query_key = key.to_string();
        self
    }
}

/// A registered tool: schema plus handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    params: Vec<ParamSpec>,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        params: Vec<ParamSpec>,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Names of the required parameters, in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }

    /// Render the JSON schema advertised in `tools/list`.
    pub fn input_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .params
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    json!({
                        "type": p.param_type.as_str(),
                        "description": p.description,
                    }),
                )
            })
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(self.required_names()));
        schema
    }

    /// Create a Tool model for this descriptor (metadata only).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

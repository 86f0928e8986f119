//! Request dispatcher - routes `tools/list` and `tools/call` to the registry.
//!
//! A call is resolved by name, its arguments are checked against the
//! descriptor's parameters, and exactly one handler runs. Whatever text the
//! handler returns is passed through untouched.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::descriptor::ToolDescriptor;
use super::error::ToolError;
use super::handlers::{ToolOutput, query_value};
use super::registry::ToolRegistry;

/// Dispatches protocol requests to registered tools.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Metadata for every registered tool, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list().iter().map(|t| t.to_tool()).collect()
    }

    /// Resolve, validate and execute one tool call.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<ToolOutput, ToolError> {
        let descriptor = self.registry.lookup(name).inspect_err(|_| {
            warn!("Unknown tool requested: {}", name);
        })?;

        let arguments = arguments.unwrap_or_default();
        validate_arguments(descriptor, &arguments)?;

        info!("Calling tool {}", name);
        let handler = descriptor.handler().clone();
        match AssertUnwindSafe(handler.call(arguments)).catch_unwind().await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(ToolError::execution_failed(e.to_string())),
            Err(panic) => Err(ToolError::execution_failed(panic_message(panic.as_ref()))),
        }
    }
}

/// Check `arguments` against the descriptor's parameters.
///
/// Required parameters must carry a value that is actually sent
/// downstream: absent, `null`, `""`, `false` and `0` all count as missing. Present values must have a shape that can be sent as the
/// declared type. Unknown names are ignored.
pub fn validate_arguments(
    descriptor: &ToolDescriptor,
    arguments: &JsonObject,
) -> Result<(), ToolError> {
    let missing: Vec<String> = descriptor
        .params()
        .iter()
        .filter(|p| p.required && is_blank(arguments.get(&p.name)))
        .map(|p| p.name.clone())
        .collect();

    if !missing.is_empty() {
        return Err(ToolError::MissingArguments {
            tool: descriptor.name().to_string(),
            names: missing,
        });
    }

    for param in descriptor.params() {
        if let Some(value) = arguments.get(&param.name) {
            if !param.param_type.accepts(value) {
                return Err(ToolError::invalid_arguments(format!(
                    "'{}' must be a {}",
                    param.name, param.param_type
                )));
            }
        }
    }

    Ok(())
}

/// Wrap a tool output into the single-text MCP result.
///
/// Tool-level failures stay inside a nominally successful result; the
/// message text is the only failure signal clients receive.
pub fn to_call_result(output: ToolOutput) -> CallToolResult {
    CallToolResult::success(vec![Content::text(output.text)])
}

fn is_blank(value: Option<&Value>) -> bool {
    value.and_then(query_value).is_none()
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::descriptor::ParamSpec;
    use crate::domains::tools::handlers::{StaticHandler, ToolHandler};
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl ToolHandler for CountingHandler {
        async fn call(&self, arguments: JsonObject) -> Result<ToolOutput, ToolError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(ToolOutput::success(Value::Object(arguments).to_string()))
        }
    }

    struct BrokenHandler;

    #[async_trait::async_trait]
    impl ToolHandler for BrokenHandler {
        async fn call(&self, _arguments: JsonObject) -> Result<ToolOutput, ToolError> {
            Err(ToolError::invalid_arguments("unexpected"))
        }
    }

    struct PanickingHandler;

    #[async_trait::async_trait]
    impl ToolHandler for PanickingHandler {
        async fn call(&self, _arguments: JsonObject) -> Result<ToolOutput, ToolError> {
            panic!("handler exploded");
        }
    }

    fn dispatcher(calls: Arc<AtomicUsize>) -> ToolDispatcher {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDescriptor::new(
                "get-convert",
                "Convert",
                vec![
                    ParamSpec::string("from-value", "value").required(),
                    ParamSpec::string("from-type", "from").required(),
                    ParamSpec::string("to-type", "to").required(),
                ],
                Arc::new(CountingHandler(calls)),
            ))
            .unwrap();
        registry
            .register(ToolDescriptor::new(
                "get-url-info",
                "URL Info",
                vec![
                    ParamSpec::string("url", "url").required(),
                    ParamSpec::number("timeout", "seconds"),
                    ParamSpec::boolean("fetch-content", "content"),
                ],
                Arc::new(StaticHandler::new("static")),
            ))
            .unwrap();
        registry
            .register(ToolDescriptor::new("get-broken", "Broken", vec![], Arc::new(BrokenHandler)))
            .unwrap();
        registry
            .register(ToolDescriptor::new(
                "get-panic",
                "Panics",
                vec![],
                Arc::new(PanickingHandler),
            ))
            .unwrap();
        ToolDispatcher::new(registry)
    }

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn test_list_tools_is_stable() {
        let dispatcher = dispatcher(Arc::default());
        let first = dispatcher.list_tools();
        let second = dispatcher.list_tools();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
        let names: Vec<_> = first.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, vec!["get-convert", "get-url-info", "get-broken", "get-panic"]);
    }

    #[tokio::test]
    async fn test_unknown_tool_never_invokes_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let err = dispatcher(calls.clone())
            .call_tool("get-nothing", args(json!({"from-value": "1"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref n) if n == "get-nothing"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_required_arguments_fail_fast() {
        let calls = Arc::new(AtomicUsize::new(0));
        let err = dispatcher(calls.clone())
            .call_tool("get-convert", args(json!({"from-type": "USD", "to-type": ""})))
            .await
            .unwrap_err();
        match err {
            ToolError::MissingArguments { tool, names } => {
                assert_eq!(tool, "get-convert");
                assert_eq!(names, vec!["from-value", "to-type"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_omitted_falsy_values_count_as_missing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher(calls.clone());
        for value in [json!(0), json!(false), json!(0.0)] {
            let err = dispatcher
                .call_tool(
                    "get-convert",
                    args(json!({"from-value": value, "from-type": "USD", "to-type": "EUR"})),
                )
                .await
                .unwrap_err();
            assert!(
                matches!(err, ToolError::MissingArguments { ref names, .. } if names == &["from-value"])
            );
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_absent_arguments_treated_as_empty() {
        let err = dispatcher(Arc::default())
            .call_tool("get-convert", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::MissingArguments { ref names, .. } if names.len() == 3));
    }

    #[tokio::test]
    async fn test_extra_arguments_are_tolerated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let output = dispatcher(calls.clone())
            .call_tool(
                "get-convert",
                args(json!({
                    "from-value": "10.95",
                    "from-type": "USD",
                    "to-type": "EUR",
                    "unexpected": {"nested": true},
                })),
            )
            .await
            .unwrap();
        assert!(output.success);
        assert!(output.text.contains("unexpected"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wrong_shape_rejected() {
        let err = dispatcher(Arc::default())
            .call_tool("get-url-info", args(json!({"url": "x", "timeout": "soon"})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid arguments: 'timeout' must be a number");
    }

    #[tokio::test]
    async fn test_handler_error_becomes_execution_failure() {
        let err = dispatcher(Arc::default())
            .call_tool("get-broken", None)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tool execution failed: Invalid arguments: unexpected"
        );
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_execution_failure() {
        let err = dispatcher(Arc::default())
            .call_tool("get-panic", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Tool execution failed: handler exploded");
    }

    #[test]
    fn test_call_result_is_single_text_success() {
        let result = to_call_result(ToolOutput::failure("Request failed: network down"));
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Request failed: network down"),
            _ => panic!("Expected text content"),
        }
    }
}

//! Tool handlers module.
//!
//! Every catalog tool is executed by the same [`HttpToolHandler`]: it turns
//! the call arguments into a query string, performs one authenticated GET
//! against the downstream API and renders the outcome as text.
//!
//! The handler never fails past its own boundary. Credential, network and
//! HTTP status failures all come back as a [`ToolOutput`] whose text
//! describes the problem, so callers only see dispatcher-level errors for
//! unknown tools and invalid arguments.

use std::sync::Arc;

use reqwest::{Client, header::ACCEPT};
use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::descriptor::ParamSpec;
use super::error::ToolError;
use crate::core::credentials::CredentialResolver;

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Whether the downstream call succeeded.
    pub success: bool,

    /// Text returned to the client, for both outcomes.
    pub text: String,
}

impl ToolOutput {
    /// Create a successful tool output.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    /// Create a failed tool output.
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }
}

/// Trait implemented by everything a [`ToolDescriptor`] can dispatch to.
///
/// [`ToolDescriptor`]: super::descriptor::ToolDescriptor
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with already-validated arguments.
    ///
    /// An `Err` means the handler broke its own contract; the dispatcher
    /// reports it as an execution failure.
    async fn call(&self, arguments: JsonObject) -> Result<ToolOutput, ToolError>;
}

/// Binding of a declared parameter to its downstream query key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryBinding {
    param: String,
    key: String,
}

/// Generic handler performing one GET against `<base_url>/<path>`.
pub struct HttpToolHandler {
    client: Client,
    credentials: Arc<dyn CredentialResolver>,
    path: String,
    bindings: Vec<QueryBinding>,
}

impl HttpToolHandler {
    /// Create a handler for `path`, forwarding `params` in declaration order.
    pub fn new(
        client: Client,
        credentials: Arc<dyn CredentialResolver>,
        path: impl Into<String>,
        params: &[ParamSpec],
    ) -> Self {
        let bindings = params
            .iter()
            .map(|p| QueryBinding {
                param: p.name.clone(),
                key: p.query_key.clone(),
            })
            .collect();

        Self {
            client,
            credentials,
            path: path.into(),
            bindings,
        }
    }

    /// Build the url-encoded query string for `arguments`.
    ///
    /// Absent, `null`, empty, `false` and `0` values are left out, so an
    /// explicit `false` cannot be told apart from an omitted flag.
    pub fn query_string(&self, arguments: &JsonObject) -> String {
        let pairs: Vec<(&str, String)> = self
            .bindings
            .iter()
            .filter_map(|b| {
                arguments
                    .get(&b.param)
                    .and_then(query_value)
                    .map(|v| (b.key.as_str(), v))
            })
            .collect();

        // Serializing a sequence of string pairs cannot fail.
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    /// Full request URL for `base_url` and `arguments`.
    pub fn request_url(&self, base_url: &str, arguments: &JsonObject) -> String {
        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let query = self.query_string(arguments);
        if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query)
        }
    }

    async fn fetch(&self, arguments: &JsonObject) -> Result<ToolOutput, String> {
        let credentials = self.credentials.resolve().map_err(|e| e.to_string())?;
        let url = self.request_url(&credentials.base_url, arguments);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&credentials.bearer_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            // Message kept byte-compatible with existing clients.
            let message = match status.canonical_reason() {
                Some(reason) => format!("Failed to format JSON: {} {}", status.as_u16(), reason),
                None => format!("Failed to format JSON: {}", status.as_u16()),
            };
            return Ok(ToolOutput::failure(message));
        }

        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(ToolOutput::success(render_body(body)))
    }
}

#[async_trait::async_trait]
impl ToolHandler for HttpToolHandler {
    async fn call(&self, arguments: JsonObject) -> Result<ToolOutput, ToolError> {
        let output = match self.fetch(&arguments).await {
            Ok(output) => output,
            Err(message) => ToolOutput::failure(format!("Request failed: {}", message)),
        };

        if !output.success {
            warn!("Request to /{} failed: {}", self.path, output.text);
        }
        Ok(output)
    }
}

/// Render a successful body: pretty-printed JSON when it parses, raw text otherwise.
pub fn render_body(body: String) -> String {
    match serde_json::from_str::<Value>(&body) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or(body),
        Err(_) => body,
    }
}

/// Query-string form of an argument, or `None` when it should be omitted.
pub(super) fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            let f = n.as_f64().unwrap_or_default();
            if f == 0.0 || f.is_nan() {
                None
            } else if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", f as i64))
            } else {
                Some(n.to_string())
            }
        }
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Handler returning a fixed text, used as a test double.
#[cfg(test)]
pub(crate) struct StaticHandler {
    text: String,
}

#[cfg(test)]
impl StaticHandler {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl ToolHandler for StaticHandler {
    async fn call(&self, _arguments: JsonObject) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::success(self.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::{ApiCredentials, CredentialsError};
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FailingResolver;

    impl CredentialResolver for FailingResolver {
        fn resolve(&self) -> Result<ApiCredentials, CredentialsError> {
            Err(CredentialsError::Missing("bearerToken"))
        }
    }

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("url", "The URL to probe").required(),
            ParamSpec::number("timeout", "Timeout in seconds"),
            ParamSpec::number("retry", "Retries"),
            ParamSpec::boolean("fetch-content", "Return content"),
        ]
    }

    fn handler_for(base_url: &str) -> HttpToolHandler {
        let credentials = ApiCredentials::new(base_url, "secret-token");
        HttpToolHandler::new(Client::new(), Arc::new(credentials), "url-info", &params())
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_query_string_follows_declaration_order() {
        let handler = handler_for("http://unused");
        let query = handler.query_string(&args(json!({
            "fetch-content": true,
            "retry": 2,
            "url": "https://example.com/a b",
        })));
        assert_eq!(
            query,
            "url=https%3A%2F%2Fexample.com%2Fa+b&retry=2&fetch-content=true"
        );
    }

    #[test]
    fn test_query_string_omits_falsy_values() {
        let handler = handler_for("http://unused");
        for falsy in [json!(""), json!(false), json!(0), json!(null)] {
            let query = handler.query_string(&args(json!({
                "url": "x",
                "timeout": falsy.clone(),
                "fetch-content": falsy,
            })));
            assert_eq!(query, "url=x");
        }
        assert_eq!(handler.query_string(&args(json!({"url": "x"}))), "url=x");
    }

    #[test]
    fn test_query_string_ignores_unknown_arguments() {
        let handler = handler_for("http://unused");
        let query = handler.query_string(&args(json!({"url": "x", "extra": "y"})));
        assert_eq!(query, "url=x");
    }

    #[test]
    fn test_query_value_numbers() {
        assert_eq!(query_value(&json!(10)), Some("10".to_string()));
        assert_eq!(query_value(&json!(10.0)), Some("10".to_string()));
        assert_eq!(query_value(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(query_value(&json!(-3)), Some("-3".to_string()));
        assert_eq!(query_value(&json!(0.0)), None);
    }

    #[test]
    fn test_request_url_without_query() {
        let handler = HttpToolHandler::new(
            Client::new(),
            Arc::new(ApiCredentials::new("http://api", "t")),
            "bin-list-download",
            &[ParamSpec::boolean("include-iso3", "ISO3")],
        );
        assert_eq!(
            handler.request_url("https://api.example.com/", &JsonObject::new()),
            "https://api.example.com/bin-list-download"
        );
    }

    #[test]
    fn test_render_body() {
        assert_eq!(render_body(r#"{"a":1}"#.to_string()), "{\n  \"a\": 1\n}");
        assert_eq!(render_body("hello world".to_string()), "hello world");
    }

    #[tokio::test]
    async fn test_success_pretty_prints_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/url-info"))
            .and(query_param("url", "https://example.com"))
            .and(header("authorization", "Bearer secret-token"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":1}"#))
            .expect(1)
            .mount(&server)
            .await;

        let output = handler_for(&server.uri())
            .call(args(json!({"url": "https://example.com"})))
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(output.text, "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_success_passes_non_json_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/url-info"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello world"))
            .mount(&server)
            .await;

        let output = handler_for(&server.uri())
            .call(args(json!({"url": "x"})))
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(output.text, "hello world");
    }

    #[tokio::test]
    async fn test_non_success_status_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"api-error":1}"#))
            .mount(&server)
            .await;

        let output = handler_for(&server.uri())
            .call(args(json!({"url": "x"})))
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.text, "Failed to format JSON: 404 Not Found");
    }

    #[tokio::test]
    async fn test_unregistered_status_has_no_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(599))
            .mount(&server)
            .await;

        let output = handler_for(&server.uri())
            .call(args(json!({"url": "x"})))
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.text, "Failed to format JSON: 599");
    }

    #[tokio::test]
    async fn test_retry_argument_is_forwarded_not_interpreted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("retry", "3"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let output = handler_for(&server.uri())
            .call(args(json!({"url": "x", "retry": 3})))
            .await
            .unwrap();

        assert_eq!(output.text, "Failed to format JSON: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_network_failure_is_swallowed() {
        // Nothing listens on port 9 of the loopback interface.
        let output = handler_for("http://127.0.0.1:9")
            .call(args(json!({"url": "x"})))
            .await
            .unwrap();

        assert!(!output.success);
        assert!(output.text.starts_with("Request failed: "));
    }

    #[tokio::test]
    async fn test_credential_failure_is_swallowed() {
        let handler =
            HttpToolHandler::new(Client::new(), Arc::new(FailingResolver), "url-info", &params());

        let output = handler.call(args(json!({"url": "x"}))).await.unwrap();

        assert!(!output.success);
        assert_eq!(
            output.text,
            "Request failed: Missing bearerToken in API configuration"
        );
    }
}

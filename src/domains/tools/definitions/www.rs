//! WWW tools.

use super::HttpTool;
use crate::domains::tools::descriptor::ParamSpec;

/// Parse, analyze and retrieve content from the supplied URL.
///
/// `timeout` and `retry` are options of the downstream probe; they are
/// forwarded as query values and never applied to the outbound request.
pub struct UrlInfoTool;

impl HttpTool for UrlInfoTool {
    const NAME: &'static str = "get-url-info";
    const DESCRIPTION: &'static str = "URL Info";
    const PATH: &'static str = "url-info";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("url", "The URL to probe").required(),
            ParamSpec::number(
                "timeout",
                "Timeout in seconds. Give up if still trying to load the URL after this number of seconds",
            ),
            ParamSpec::number(
                "retry",
                "If the request fails for any reason try again this many times",
            ),
            ParamSpec::boolean(
                "fetch-content",
                "If this URL responds with html, text, json or xml then return the response. This option is useful if you want to perform further processing on the URL content (e.g. with the HTML Extract or HTML Clean APIs)",
            ),
            ParamSpec::boolean(
                "ignore-certificate-errors",
                "Ignore any TLS/SSL certificate errors and load the URL anyway",
            ),
        ]
    }
}

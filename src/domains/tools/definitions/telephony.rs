//! Telephony tools.

use super::HttpTool;
use crate::domains::tools::descriptor::ParamSpec;

/// Connect to the global mobile cellular network and retrieve the status of a mobile device.
pub struct HlrLookupTool;

impl HttpTool for HlrLookupTool {
    const NAME: &'static str = "get-hlr-lookup";
    const DESCRIPTION: &'static str = "HLR Lookup";
    const PATH: &'static str = "hlr-lookup";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("number", "A phone number").required(),
            ParamSpec::string(
                "country-code",
                "ISO 2-letter country code, assume numbers are based in this country. <br>If not set numbers are assumed to be in international format (with or without the leading + sign)",
            ),
        ]
    }
}

/// Verify a security code generated by the SMS or phone verify APIs.
pub struct VerifySecurityCodeTool;

impl HttpTool for VerifySecurityCodeTool {
    const NAME: &'static str = "get-verify-security-code";
    const DESCRIPTION: &'static str = "Verify Security Code";
    const PATH: &'static str = "verify-security-code";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("security-code", "The security code to verify").required(),
            ParamSpec::string(
                "limit-by",
                "If set then enable additional brute-force protection by limiting the number of attempts by the supplied value. This can be set to any unique identifier you would like to limit by, for example a hash of the users email, phone number or IP address. Requests to this API will be ignored after approximately 10 failed verification attempts",
            ),
        ]
    }
}

//! Data tools: user-agent lookup, email and phone validation.

use super::HttpTool;
use crate::domains::tools::descriptor::ParamSpec;

/// Parse, validate and get detailed user-agent information.
pub struct UaLookupTool;

impl HttpTool for UaLookupTool {
    const NAME: &'static str = "get-ua-lookup";
    const DESCRIPTION: &'static str = "UA Lookup";
    const PATH: &'static str = "ua-lookup";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string(
                "ua",
                "The user-agent string to lookup. For client hints use the 'UA' header or the JSON data directly from 'navigator.userAgentData.brands' or 'navigator.userAgentData.getHighEntropyValues()'",
            )
            .required(),
            ParamSpec::string(
                "ua-version",
                "For client hints this corresponds to the 'UA-Full-Version' header or 'uaFullVersion' from NavigatorUAData",
            ),
            ParamSpec::string(
                "ua-platform",
                "For client hints this corresponds to the 'UA-Platform' header or 'platform' from NavigatorUAData",
            ),
            ParamSpec::string(
                "ua-platform-version",
                "For client hints this corresponds to the 'UA-Platform-Version' header or 'platformVersion' from NavigatorUAData",
            ),
            ParamSpec::string(
                "ua-mobile",
                "For client hints this corresponds to the 'UA-Mobile' header or 'mobile' from NavigatorUAData",
            ),
            ParamSpec::string(
                "device-model",
                "For client hints this corresponds to the 'UA-Model' header or 'model' from NavigatorUAData. <br>You can also use this parameter to lookup a device directly by its model name, model code or hardware code, on android you can get the model name from: https://developer.android.com/reference/android/os/Build.html#MODEL",
            ),
            ParamSpec::string(
                "device-brand",
                "This parameter is only used in combination with 'device-model' when doing direct device lookups without any user-agent data. Set this to the brand or manufacturer name, this is required for accurate device detection with ambiguous model names. On android you can get the device brand from: https://developer.android.com/reference/android/os/Build#MANUFACTURER",
            ),
        ]
    }
}

/// Parse, validate and clean an email address.
pub struct EmailValidateTool;

impl HttpTool for EmailValidateTool {
    const NAME: &'static str = "get-email-validate";
    const DESCRIPTION: &'static str = "Email Validate";
    const PATH: &'static str = "email-validate";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("email", "An email address").required(),
            ParamSpec::boolean(
                "fix-typos",
                "Automatically attempt to fix typos in the address",
            ),
        ]
    }
}

/// Parse, validate and get location information about a phone number.
pub struct PhoneValidateTool;

impl HttpTool for PhoneValidateTool {
    const NAME: &'static str = "get-phone-validate";
    const DESCRIPTION: &'static str = "Phone Validate";
    const PATH: &'static str = "phone-validate";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string(
                "number",
                "A phone number. This can be in international format (E.164) or local format. If passing local format you must also set either the 'country-code' OR 'ip' options as well",
            )
            .required(),
            ParamSpec::string(
                "country-code",
                "ISO 2-letter country code, assume numbers are based in this country. If not set numbers are assumed to be in international format (with or without the leading + sign)",
            ),
            ParamSpec::string(
                "ip",
                "Pass in a users IP address and we will assume numbers are based in the country of the IP address",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ua_lookup_requires_only_ua() {
        let required: Vec<_> = UaLookupTool::params()
            .into_iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        assert_eq!(required, vec!["ua"]);
        assert_eq!(UaLookupTool::params().len(), 7);
    }

    #[test]
    fn test_email_validate_fix_typos_is_boolean() {
        let params = EmailValidateTool::params();
        assert_eq!(params[1].name, "fix-typos");
        assert_eq!(
            params[1].param_type,
            crate::domains::tools::descriptor::ParamType::Boolean
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(UaLookupTool::PATH, "ua-lookup");
        assert_eq!(EmailValidateTool::PATH, "email-validate");
        assert_eq!(PhoneValidateTool::PATH, "phone-validate");
    }
}

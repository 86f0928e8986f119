//! E-commerce tools: BIN data and currency/unit conversion.

use super::HttpTool;
use crate::domains::tools::descriptor::ParamSpec;

/// Download the entire BIN database as a CSV file.
pub struct BinListDownloadTool;

impl HttpTool for BinListDownloadTool {
    const NAME: &'static str = "get-bin-list-download";
    const DESCRIPTION: &'static str = "BIN List Download";
    const PATH: &'static str = "bin-list-download";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::boolean(
                "include-iso3",
                "Include ISO 3-letter country codes and ISO 3-letter currency codes in the data. These will be added to columns 10 and 11 respectively",
            ),
            ParamSpec::boolean(
                "include-8digit",
                "Include 8-digit and higher BIN codes. This option includes all 6-digit BINs and all 8-digit and higher BINs (including some 9, 10 and 11 digit BINs where available)",
            ),
        ]
    }
}

/// Perform a BIN (Bank Identification Number) or IIN lookup.
pub struct BinLookupTool;

impl HttpTool for BinLookupTool {
    const NAME: &'static str = "get-bin-lookup";
    const DESCRIPTION: &'static str = "BIN Lookup";
    const PATH: &'static str = "bin-lookup";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string(
                "bin-number",
                "The BIN or IIN number. This is the first 6, 8 or 10 digits of a card number, use 8 (or more) digits for the highest level of accuracy",
            )
            .required(),
            ParamSpec::string(
                "customer-ip",
                "Pass in the customers IP address and we will return some extra information about them",
            ),
        ]
    }
}

/// Convert between currencies and units of measure.
pub struct ConvertTool;

impl HttpTool for ConvertTool {
    const NAME: &'static str = "get-convert";
    const DESCRIPTION: &'static str = "Convert";
    const PATH: &'static str = "convert";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("from-value", "The value to convert from (e.g. 10.95)").required(),
            ParamSpec::string("from-type", "The type of the value to convert from (e.g. USD)")
                .required(),
            ParamSpec::string("to-type", "The type to convert to (e.g. EUR)").required(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_list_download_has_no_required_params() {
        assert!(BinListDownloadTool::params().iter().all(|p| !p.required));
    }

    #[test]
    fn test_convert_requires_all_params() {
        assert!(ConvertTool::params().iter().all(|p| p.required));
    }
}

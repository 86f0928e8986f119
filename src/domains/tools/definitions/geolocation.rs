//! Geolocation tools: IP geolocation and forward/reverse geocoding.

use super::HttpTool;
use crate::domains::tools::descriptor::ParamSpec;

/// Get location information about an IP address and do reverse DNS (PTR) lookups.
pub struct IpInfoTool;

impl HttpTool for IpInfoTool {
    const NAME: &'static str = "get-ip-info";
    const DESCRIPTION: &'static str = "IP Info";
    const PATH: &'static str = "ip-info";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("ip", "IPv4 or IPv6 address").required(),
            ParamSpec::boolean(
                "reverse-lookup",
                "Do a reverse DNS (PTR) lookup. This option can add extra delay to the request so only use it if you need it",
            ),
        ]
    }
}

/// Geocode an address, partial address or just the name of a place.
pub struct GeocodeAddressTool;

impl HttpTool for GeocodeAddressTool {
    const NAME: &'static str = "get-geocode-address";
    const DESCRIPTION: &'static str = "Geocode Address";
    const PATH: &'static str = "geocode-address";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string(
                "address",
                "The full address, partial address or name of a place to try and locate. Comma separated address components are preferred.",
            ),
            ParamSpec::string("house-number", "The house/building number to locate"),
            ParamSpec::string("street", "The street/road name to locate"),
            ParamSpec::string("city", "The city/town name to locate"),
            ParamSpec::string("county", "The county/region name to locate"),
            ParamSpec::string("state", "The state name to locate"),
            ParamSpec::string("postal-code", "The postal code to locate"),
            ParamSpec::string(
                "country-code",
                "Limit result to this country (the default is no country bias)",
            ),
            ParamSpec::string(
                "language-code",
                "The language to display results in, available languages are: <ul> <li>de, en, es, fr, it, pt, ru, zh</li> </ul>",
            ),
            ParamSpec::boolean(
                "fuzzy-search",
                "If no matches are found for the given address, start performing a recursive fuzzy search until a geolocation is found. This option is recommended for processing user input or implementing auto-complete. We use a combination of approximate string matching and data cleansing to find possible location matches",
            ),
        ]
    }
}

/// Convert a geographic coordinate (latitude and longitude) into a real world address.
pub struct GeocodeReverseTool;

impl HttpTool for GeocodeReverseTool {
    const NAME: &'static str = "get-geocode-reverse";
    const DESCRIPTION: &'static str = "Geocode Reverse";
    const PATH: &'static str = "geocode-reverse";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("latitude", "The location latitude in decimal degrees format")
                .required(),
            ParamSpec::string("longitude", "The location longitude in decimal degrees format")
                .required(),
            ParamSpec::string(
                "language-code",
                "The language to display results in, available languages are: <ul> <li>de, en, es, fr, it, pt, ru</li> </ul>",
            ),
            ParamSpec::string(
                "zoom",
                "The zoom level to respond with: <br> <ul> <li>address - the most precise address available</li> <li>street - the street level</li> <li>city - the city level</li> <li>state - the state level</li> <li>country - the country level</li> </ul>",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_address_is_fully_optional() {
        let params = GeocodeAddressTool::params();
        assert_eq!(params.len(), 10);
        assert!(params.iter().all(|p| !p.required));
    }

    #[test]
    fn test_geocode_reverse_requires_coordinates() {
        let required: Vec<_> = GeocodeReverseTool::params()
            .into_iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        assert_eq!(required, vec!["latitude", "longitude"]);
    }
}

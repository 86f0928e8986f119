//! Security and networking tools: blocklists, reputation and probes.

use super::HttpTool;
use crate::domains::tools::descriptor::ParamSpec;

/// Download a list of malicious IP addresses.
pub struct IpBlocklistDownloadTool;

impl HttpTool for IpBlocklistDownloadTool {
    const NAME: &'static str = "get-ip-blocklist-download";
    const DESCRIPTION: &'static str = "IP Blocklist Download";
    const PATH: &'static str = "ip-blocklist-download";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("format", "The data format. Can be either CSV or TXT"),
            ParamSpec::boolean(
                "include-vpn",
                "Include public VPN provider addresses, this option is only available for Tier 3 or higher accounts. Adds any IPs which are solely listed as VPN providers, IPs that are listed on multiple sensors will still be included without enabling this option. <br><b>WARNING</b>: This adds at least an additional 8 million IP addresses to the download if not using CIDR notation",
            ),
            ParamSpec::boolean(
                "cidr",
                "Output IPs using CIDR notation. This option should be preferred but is off by default for backwards compatibility",
            ),
            ParamSpec::boolean(
                "ip6",
                "Output the IPv6 version of the blocklist, the default is to output IPv4 only. Note that this option enables CIDR notation too as this is the only notation currently supported for IPv6",
            ),
        ]
    }
}

/// Analyze and extract provider information for an IP address.
pub struct IpProbeTool;

impl HttpTool for IpProbeTool {
    const NAME: &'static str = "get-ip-probe";
    const DESCRIPTION: &'static str = "IP Probe";
    const PATH: &'static str = "ip-probe";

    fn params() -> Vec<ParamSpec> {
        vec![ParamSpec::string("ip", "IPv4 or IPv6 address").required()]
    }
}

/// Retrieve domain name details and detect potentially malicious or dangerous domains.
pub struct DomainLookupTool;

impl HttpTool for DomainLookupTool {
    const NAME: &'static str = "get-domain-lookup";
    const DESCRIPTION: &'static str = "Domain Lookup";
    const PATH: &'static str = "domain-lookup";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string(
                "host",
                "A domain name, hostname, FQDN, URL, HTML link or email address to lookup",
            )
            .required(),
            ParamSpec::boolean(
                "live",
                "For domains that we have never seen before then perform various live checks and realtime reconnaissance. <br>NOTE: this option may add additional non-deterministic delay to the request, if you require consistently fast API response times or just want to check our domain blocklists then you can disable this option",
            ),
        ]
    }
}

/// Check the reputation of an IP address, domain name or URL against DNSBLs.
pub struct HostReputationTool;

impl HttpTool for HostReputationTool {
    const NAME: &'static str = "get-host-reputation";
    const DESCRIPTION: &'static str = "Host Reputation";
    const PATH: &'static str = "host-reputation";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string(
                "host",
                "An IP address, domain name, FQDN or URL. <br>If you supply a domain/URL it will be checked against the URI DNSBL lists",
            )
            .required(),
            ParamSpec::string(
                "zones",
                "Only check these DNSBL zones/hosts. Multiple zones can be supplied as comma-separated values",
            ),
            ParamSpec::number("list-rating", "Only check lists with this rating or better"),
        ]
    }
}

/// Detect potentially malicious or dangerous IP addresses.
pub struct IpBlocklistTool;

impl HttpTool for IpBlocklistTool {
    const NAME: &'static str = "get-ip-blocklist";
    const DESCRIPTION: &'static str = "IP Blocklist";
    const PATH: &'static str = "ip-blocklist";

    fn params() -> Vec<ParamSpec> {
        vec![
            ParamSpec::string(
                "ip",
                "An IPv4 or IPv6 address. Accepts standard IP notation (with or without port number), CIDR notation and IPv6 compressed notation. If multiple IPs are passed using comma-separated values the first non-bogon address on the list will be checked",
            )
            .required(),
            ParamSpec::boolean(
                "vpn-lookup",
                r#"Include public VPN provider IP addresses. <br><b>NOTE</b>: For more advanced VPN detection including the ability to identify private and stealth VPNs use the <a href="https://www.neutrinoapi.com/api/ip-probe/">IP Probe API</a>"#,
            ),
        ]
    }
}

/// SMTP based email address verification.
pub struct EmailVerifyTool;

impl HttpTool for EmailVerifyTool {
    const NAME: &'static str = "get-email-verify";
    const DESCRIPTION: &'static str = "Email Verify";
    const PATH: &'static str = "email-verify";

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::descriptor::ParamType;

    #[test]
    fn test_host_reputation_list_rating_is_number() {
        let params = HostReputationTool::params();
        let rating = params.iter().find(|p| p.name == "list-rating").unwrap();
        assert_eq!(rating.param_type, ParamType::Number);
        assert!(!rating.required);
    }

    #[test]
    fn test_ip_blocklist_download_flags() {
        let types: Vec<_> = IpBlocklistDownloadTool::params()
            .into_iter()
            .map(|p| p.param_type)
            .collect();
        assert_eq!(
            types,
            vec![
                ParamType::String,
                ParamType::Boolean,
                ParamType::Boolean,
                ParamType::Boolean
            ]
        );
    }
}

//! Shared provider types.

use serde::{Deserialize, Serialize};

/// Normalized geolocation document produced by every provider.
///
/// Each provider maps its own response schema into this shape. Downstream
/// layers (cache, reports) treat it as an opaque JSON document; the fields
/// here only matter at the provider boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPayload {
    /// The IP address the document describes (echoed back by the API).
    pub ip: String,
    /// "IPv4" or "IPv6".
    pub ip_version: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA timezone id, e.g. "America/Sao_Paulo".
    pub timezone: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    /// Autonomous system, formatted as "AS####" when numeric.
    pub asn: Option<String>,
}

impl GeoPayload {
    /// Derive the IP version string from the address when the API does not
    /// report one.
    #[must_use]
    pub fn version_of(ip: &str) -> String {
        if ip.parse::<std::net::Ipv6Addr>().is_ok() {
            "IPv6".to_string()
        } else {
            "IPv4".to_string()
        }
    }
}

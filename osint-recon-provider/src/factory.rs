//! Provider factory functions and identifiers.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::providers::{IpApiProvider, IpWhoisProvider, IpapiCoProvider};
use crate::traits::GeoProvider;

/// Identifier for a configurable geolocation provider.
///
/// The order in which these appear in configuration is the fallback order;
/// it is preserved exactly, never re-scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeoProviderKind {
    IpWhois,
    IpapiCo,
    IpApi,
}

impl GeoProviderKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IpWhois => "ipwhois",
            Self::IpapiCo => "ipapi.co",
            Self::IpApi => "ip-api",
        }
    }
}

impl fmt::Display for GeoProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipwhois" | "ipwho.is" => Ok(Self::IpWhois),
            "ipapi.co" | "ipapi-co" => Ok(Self::IpapiCo),
            "ip-api" | "ip-api.com" => Ok(Self::IpApi),
            other => Err(format!("Unknown provider: {other}")),
        }
    }
}

/// Default fallback order, matching the order the sources are tried in the
/// original toolkit: ipwho.is first, then ipapi.co, then ip-api.com.
#[must_use]
pub fn default_provider_order() -> Vec<GeoProviderKind> {
    vec![
        GeoProviderKind::IpWhois,
        GeoProviderKind::IpapiCo,
        GeoProviderKind::IpApi,
    ]
}

/// Create a [`GeoProvider`] instance for the given kind.
///
/// All providers share one HTTP client; `timeout` is the overall per-call
/// budget applied to each lookup request.
#[must_use]
pub fn create_provider(
    kind: GeoProviderKind,
    client: reqwest::Client,
    timeout: Duration,
) -> Arc<dyn GeoProvider> {
    match kind {
        GeoProviderKind::IpWhois => Arc::new(IpWhoisProvider::new(client, timeout)),
        GeoProviderKind::IpapiCo => Arc::new(IpapiCoProvider::new(client, timeout)),
        GeoProviderKind::IpApi => Arc::new(IpApiProvider::new(client, timeout)),
    }
}

/// Build the ordered provider chain described by `order`.
#[must_use]
pub fn create_provider_chain(
    order: &[GeoProviderKind],
    client: &reqwest::Client,
    timeout: Duration,
) -> Vec<Arc<dyn GeoProvider>> {
    order
        .iter()
        .map(|kind| create_provider(*kind, client.clone(), timeout))
        .collect()
}

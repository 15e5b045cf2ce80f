//! ip-api.com provider.
//!
//! HTTP-only free tier. Failures are reported with `status: "fail"` and a
//! `message` field; the HTTP status stays 200.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{ProviderError, ProviderResult};
use crate::http::{execute_request, parse_json};
use crate::traits::GeoProvider;
use crate::types::GeoPayload;

pub(crate) const PROVIDER_ID: &str = "ip-api";
const API_BASE: &str = "http://ip-api.com/json";

/// Response structure from the ip-api.com API.
#[derive(Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    query: Option<String>,
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    as_field: Option<String>,
}

impl IpApiResponse {
    fn into_payload(self, queried_ip: &str) -> GeoPayload {
        let ip = self.query.unwrap_or_else(|| queried_ip.to_string());
        let ip_version = GeoPayload::version_of(&ip);

        // "AS15169 Google LLC" -> keep the leading AS number only.
        let asn = self
            .as_field
            .as_deref()
            .and_then(|s| s.split_whitespace().next())
            .map(String::from);

        GeoPayload {
            ip,
            ip_version,
            country: self.country,
            country_code: self.country_code,
            region: self.region_name,
            city: self.city,
            latitude: self.lat,
            longitude: self.lon,
            timezone: self.timezone,
            isp: self.isp,
            org: self.org,
            asn,
        }
    }
}

/// ip-api.com geolocation provider.
pub struct IpApiProvider {
    client: Client,
    timeout: Duration,
}

impl IpApiProvider {
    #[must_use]
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl GeoProvider for IpApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, ip: &str) -> ProviderResult<GeoPayload> {
        let url = format!(
            "{API_BASE}/{ip}?fields=status,message,query,country,countryCode,regionName,city,lat,lon,timezone,isp,org,as"
        );

        let (_, body) =
            execute_request(self.client.get(&url), PROVIDER_ID, &url, self.timeout).await?;
        let response: IpApiResponse = parse_json(&body, PROVIDER_ID)?;

        if response.status != "success" {
            return Err(ProviderError::Rejected {
                provider: PROVIDER_ID.to_string(),
                message: response
                    .message
                    .unwrap_or_else(|| "Lookup failed".to_string()),
            });
        }

        Ok(response.into_payload(ip))
    }
}

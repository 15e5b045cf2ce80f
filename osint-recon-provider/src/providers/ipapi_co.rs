//! ipapi.co provider.
//!
//! Flat JSON schema; errors reported with `error: true` plus a `reason`
//! string (still HTTP 200 in some cases, 4xx in others).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{ProviderError, ProviderResult};
use crate::http::{execute_request, parse_json};
use crate::traits::GeoProvider;
use crate::types::GeoPayload;

pub(crate) const PROVIDER_ID: &str = "ipapi.co";
const API_BASE: &str = "https://ipapi.co";

/// Response structure from the ipapi.co API.
#[derive(Deserialize)]
struct IpapiCoResponse {
    ip: Option<String>,
    version: Option<String>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
    region: Option<String>,
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<String>,
    org: Option<String>,
    asn: Option<String>,
}

impl IpapiCoResponse {
    fn into_payload(self, queried_ip: &str) -> GeoPayload {
        let ip = self.ip.unwrap_or_else(|| queried_ip.to_string());
        let ip_version = self
            .version
            .unwrap_or_else(|| GeoPayload::version_of(&ip));

        GeoPayload {
            ip,
            ip_version,
            country: self.country_name,
            country_code: self.country_code,
            region: self.region,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone,
            // ipapi.co reports the AS operator in `org` and has no
            // separate ISP field.
            isp: self.org.clone(),
            org: self.org,
            asn: self.asn,
        }
    }
}

/// ipapi.co geolocation provider.
pub struct IpapiCoProvider {
    client: Client,
    timeout: Duration,
}

impl IpapiCoProvider {
    #[must_use]
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl GeoProvider for IpapiCoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, ip: &str) -> ProviderResult<GeoPayload> {
        let url = format!("{API_BASE}/{ip}/json/");

        let (_, body) =
            execute_request(self.client.get(&url), PROVIDER_ID, &url, self.timeout).await?;
        let response: IpapiCoResponse = parse_json(&body, PROVIDER_ID)?;

        if response.error {
            return Err(ProviderError::Rejected {
                provider: PROVIDER_ID.to_string(),
                message: response
                    .reason
                    .unwrap_or_else(|| "Lookup failed".to_string()),
            });
        }

        Ok(response.into_payload(ip))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn maps_success_response() {
        let body = r#"{
            "ip": "1.1.1.1",
            "version": "IPv4",
            "city": "Sydney",
            "region": "New South Wales",
            "country_name": "Australia",
            "country_code": "AU",
            "latitude": -33.86,
            "longitude": 151.2,
            "timezone": "Australia/Sydney",
            "org": "CLOUDFLARENET",
            "asn": "AS13335"
        }"#;
        let response: IpapiCoResponse = serde_json::from_str(body).unwrap();
        assert!(!response.error);
        let payload = response.into_payload("1.1.1.1");
        assert_eq!(payload.country.as_deref(), Some("Australia"));
        assert_eq!(payload.asn.as_deref(), Some("AS13335"));
        assert_eq!(payload.isp.as_deref(), Some("CLOUDFLARENET"));
    }

    #[test]
    fn maps_error_response() {
        let body = r#"{"ip": "127.0.0.1", "error": true, "reason": "Reserved IP Address"}"#;
        let response: IpapiCoResponse = serde_json::from_str(body).unwrap();
        assert!(response.error);
        assert_eq!(response.reason.as_deref(), Some("Reserved IP Address"));
    }
}

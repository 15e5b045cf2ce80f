//! ipwho.is provider.
//!
//! Free endpoint, no API key. Failures are signalled in-band via the
//! `success` field rather than HTTP status codes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{ProviderError, ProviderResult};
use crate::http::{execute_request, parse_json};
use crate::traits::GeoProvider;
use crate::types::GeoPayload;

pub(crate) const PROVIDER_ID: &str = "ipwhois";
const API_BASE: &str = "https://ipwho.is";

/// Response structure from the ipwho.is API.
#[derive(Deserialize)]
struct IpWhoisResponse {
    ip: Option<String>,
    success: bool,
    message: Option<String>,
    #[serde(rename = "type")]
    ip_type: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    region: Option<String>,
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<IpWhoisTimezone>,
    connection: Option<IpWhoisConnection>,
}

#[derive(Deserialize)]
struct IpWhoisTimezone {
    id: Option<String>,
}

#[derive(Deserialize)]
struct IpWhoisConnection {
    asn: Option<i64>,
    org: Option<String>,
    isp: Option<String>,
}

impl IpWhoisResponse {
    fn into_payload(self, queried_ip: &str) -> GeoPayload {
        let ip = self.ip.unwrap_or_else(|| queried_ip.to_string());
        let ip_version = self
            .ip_type
            .unwrap_or_else(|| GeoPayload::version_of(&ip));

        let (isp, org, asn) = self.connection.map_or((None, None, None), |conn| {
            (conn.isp, conn.org, conn.asn.map(|n| format!("AS{n}")))
        });

        GeoPayload {
            ip,
            ip_version,
            country: self.country,
            country_code: self.country_code,
            region: self.region,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone.and_then(|tz| tz.id),
            isp,
            org,
            asn,
        }
    }
}

/// ipwho.is geolocation provider.
pub struct IpWhoisProvider {
    client: Client,
    timeout: Duration,
}

impl IpWhoisProvider {
    #[must_use]
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl GeoProvider for IpWhoisProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup(&self, ip: &str) -> ProviderResult<GeoPayload> {
        let url = format!(
            "{API_BASE}/{ip}?fields=ip,success,message,type,country,country_code,region,city,latitude,longitude,timezone,connection"
        );

        let (_, body) =
            execute_request(self.client.get(&url), PROVIDER_ID, &url, self.timeout).await?;
        let response: IpWhoisResponse = parse_json(&body, PROVIDER_ID)?;

        if !response.success {
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

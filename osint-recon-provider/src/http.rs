//! Generic HTTP request helpers shared by all providers.
//!
//! Unified processing for sending requests, mapping transport errors,
//! logging, and reading response bodies. Each provider builds its own
//! `RequestBuilder` (URL shape and query strings differ per API) and hands
//! it here for execution.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, ProviderResult};

/// User-Agent sent with every provider request.
pub const USER_AGENT: &str = concat!("osint-recon/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used by all providers.
///
/// The per-request timeout is applied by [`execute_request`] so that the
/// same client can serve providers with different configured timeouts.
#[must_use]
pub fn create_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_default()
}

/// Execute a request and return `(status, body)`.
///
/// Transport failures are mapped to [`ProviderError::Timeout`] or
/// [`ProviderError::NetworkError`]; non-2xx statuses are mapped to
/// [`ProviderError::HttpStatus`]. Body parsing is left to the caller.
pub async fn execute_request(
    request_builder: RequestBuilder,
    provider_name: &str,
    url: &str,
    timeout: Duration,
) -> ProviderResult<(u16, String)> {
    log::debug!("[{provider_name}] GET {url}");

    let response = request_builder.timeout(timeout).send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        } else {
            ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("[{provider_name}] Response Status: {status_code}");

    if !(200..300).contains(&status_code) {
        return Err(ProviderError::HttpStatus {
            provider: provider_name.to_string(),
            status: status_code,
        });
    }

    let response_text = response
        .text()
        .await
        .map_err(|e| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

    Ok((status_code, response_text))
}

/// Parse a JSON response body into `T`.
pub fn parse_json<T>(response_text: &str, provider_name: &str) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::warn!("[{provider_name}] JSON parse failed: {e}");
        ProviderError::ParseError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    })
}

//! Geolocation provider trait.

use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::types::GeoPayload;

/// A single external geolocation data source.
///
/// Providers are consulted by the fallback resolver strictly in configured
/// order; each call is independent and carries its own timeout. A provider
/// must never panic on malformed upstream data; it maps every failure mode
/// into a [`ProviderError`](crate::ProviderError) variant.
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Stable provider identifier, used in configuration, logs, and
    /// failure reports.
    fn id(&self) -> &'static str;

    /// Look up geolocation data for a single IP address.
    ///
    /// `ip` is already validated and normalized by the caller; providers do
    /// not re-validate it.
    async fn lookup(&self, ip: &str) -> ProviderResult<GeoPayload>;
}

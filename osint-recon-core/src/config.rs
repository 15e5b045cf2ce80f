//! Runtime configuration for the recon services.
//!
//! The configuration is an explicit value injected into service
//! constructors at startup. There is no process-wide mutable state; runtime
//! changes go through the app layer's `update_settings`, which swaps the
//! whole value under a lock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use osint_recon_provider::{default_provider_order, GeoProviderKind};

use crate::error::{CoreError, CoreResult};

/// Default bounded concurrency for the probe engine.
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 10;
/// Default overall per-call network timeout in seconds.
pub const DEFAULT_PER_CALL_TIMEOUT_SECS: u64 = 15;

/// Recognized configuration surface consumed by the core services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconConfig {
    /// Global cache toggle. When `false` the cache layer behaves as
    /// permanently empty; no reads or writes reach the backing store.
    pub caching_enabled: bool,
    /// Probe worker pool size. Must be >= 1.
    pub max_concurrent_probes: usize,
    /// Overall timeout applied to each outbound call. Must be >= 1.
    pub per_call_timeout_secs: u64,
    /// Ordered fallback chain for address resolution. Order is significant
    /// and preserved exactly; first success wins.
    pub provider_order: Vec<GeoProviderKind>,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            caching_enabled: true,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            per_call_timeout_secs: DEFAULT_PER_CALL_TIMEOUT_SECS,
            provider_order: default_provider_order(),
        }
    }
}

impl ReconConfig {
    /// Validate option ranges before the configuration is put into service.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_concurrent_probes < 1 {
            return Err(CoreError::ValidationError(
                "max_concurrent_probes must be >= 1".to_string(),
            ));
        }
        if self.per_call_timeout_secs < 1 {
            return Err(CoreError::ValidationError(
                "per_call_timeout_secs must be >= 1".to_string(),
            ));
        }
        if self.provider_order.is_empty() {
            return Err(CoreError::ValidationError(
                "provider_order must name at least one provider".to_string(),
            ));
        }
        Ok(())
    }

    /// Per-call timeout as a [`Duration`].
    #[must_use]
    pub fn per_call_timeout(&self) -> Duration {
        Duration::from_secs(self.per_call_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ReconConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_concurrency() {
        let config = ReconConfig {
            max_concurrent_probes: 0,
            ..ReconConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ReconConfig {
            per_call_timeout_secs: 0,
            ..ReconConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_provider_order() {
        let config = ReconConfig {
            provider_order: vec![],
            ..ReconConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

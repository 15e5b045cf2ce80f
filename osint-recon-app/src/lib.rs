//! Platform-agnostic application bootstrap for the OSINT recon toolkit.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter
//! injection), and the storage adapters (`SqliteStore`, `MemoryStore`).

pub mod adapters;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use osint_recon_core::error::{CoreError, CoreResult};
use osint_recon_core::services::catalog::default_probes;
use osint_recon_core::services::probe::{HttpTransport, ProbeEngine, ProbeTransport};
use osint_recon_core::services::resolver::FallbackResolver;
use osint_recon_core::traits::{CacheGate, CacheStore};
use osint_recon_core::types::{ProbeResult, ResolutionResult, Subject};
use osint_recon_core::ReconConfig;
use osint_recon_provider::create_provider_chain;
use osint_recon_provider::http::create_http_client;

/// Platform-agnostic application state.
///
/// Holds the cache gate, the provider chain, and the probe transport.
/// Every frontend constructs this once at startup via [`AppStateBuilder`].
/// Settings can change at runtime through [`AppState::update_settings`],
/// which keeps the cache gate, provider chain, and probe limits in step
/// with the stored configuration.
pub struct AppState {
    gate: Arc<CacheGate>,
    resolver: RwLock<FallbackResolver>,
    transport: Arc<dyn ProbeTransport>,
    config: RwLock<ReconConfig>,
    client: reqwest::Client,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Resolve an IP to a geolocation document, cache first.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidSubject` for input that does not parse as
    /// an IP address, and `CoreError::ResolutionExhausted` when every
    /// provider failed.
    pub async fn resolve_ip(&self, ip: &str) -> CoreResult<ResolutionResult> {
        let subject = Subject::ip(ip)?;
        let resolver = self.resolver.read().await;
        resolver.resolve(&subject, &self.gate).await
    }

    /// Probe a handle across the built-in platform catalog.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidSubject` for a handle that fails
    /// canonicalization.
    pub async fn probe_handle(&self, handle: &str) -> CoreResult<(Subject, Vec<ProbeResult>)> {
        let subject = Subject::handle(handle)?;
        let config = self.config.read().await;
        let engine = ProbeEngine::new(
            Arc::clone(&self.transport),
            config.max_concurrent_probes,
            config.per_call_timeout(),
        );
        drop(config);

        let specs = default_probes();
        let results = engine.probe_all(subject.key(), &specs).await;
        Ok((subject, results))
    }

    /// Snapshot of the current configuration.
    pub async fn settings(&self) -> ReconConfig {
        self.config.read().await.clone()
    }

    /// Apply a new configuration atomically.
    ///
    /// The cache toggle, provider order, concurrency cap, and timeout all
    /// take effect together; in-flight operations finish under the old
    /// settings.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the new configuration is
    /// invalid; the old settings stay in force.
    pub async fn update_settings(&self, new_config: ReconConfig) -> CoreResult<()> {
        new_config.validate()?;

        let mut config = self.config.write().await;
        let mut resolver = self.resolver.write().await;

        // Providers hold their per-call timeout, so the chain is rebuilt
        // when either the order or the timeout changes.
        if config.provider_order != new_config.provider_order
            || config.per_call_timeout_secs != new_config.per_call_timeout_secs
        {
            let chain = create_provider_chain(
                &new_config.provider_order,
                &self.client,
                new_config.per_call_timeout(),
            );
            *resolver = FallbackResolver::new(chain);
        }
        self.gate.set_enabled(new_config.caching_enabled);
        *config = new_config;

        log::info!("Settings updated");
        Ok(())
    }
}

/// Builder for constructing `AppState` with a platform-specific cache store.
pub struct AppStateBuilder {
    cache_store: Option<Arc<dyn CacheStore>>,
    config: ReconConfig,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_store: None,
            config: ReconConfig::default(),
        }
    }

    #[must_use]
    pub fn cache_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.cache_store = Some(store);
        self
    }

    #[must_use]
    pub fn config(mut self, config: ReconConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the cache store is missing or
    /// the configuration is invalid.
    pub fn build(self) -> CoreResult<AppState> {
        let cache_store = self
            .cache_store
            .ok_or_else(|| CoreError::ValidationError("cache_store is required".to_string()))?;
        self.config.validate()?;

        let client = create_http_client();
        let chain = create_provider_chain(
            &self.config.provider_order,
            &client,
            self.config.per_call_timeout(),
        );
        let probe_client = create_probe_client();

        Ok(AppState {
            gate: Arc::new(CacheGate::new(cache_store, self.config.caching_enabled)),
            resolver: RwLock::new(FallbackResolver::new(chain)),
            transport: Arc::new(HttpTransport::new(probe_client)),
            config: RwLock::new(self.config),
            client,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Probe fetches follow redirects and present a browser-like user agent,
/// since several platforms serve bot traffic a different page than the one
/// the existence heuristics were written against. Timeouts are enforced by
/// the probe engine, not the client, so runtime settings changes apply.
fn create_probe_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (X11; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0")
        .redirect(reqwest::redirect::Policy::limited(10))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_default()
}

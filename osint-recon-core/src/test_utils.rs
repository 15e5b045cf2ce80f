//! Shared mock implementations for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use osint_recon_provider::{GeoPayload, GeoProvider, ProviderError, ProviderResult};

use crate::error::CoreResult;
use crate::services::probe::{ProbeResponse, ProbeTransport};
use crate::traits::CacheStore;

/// Shared, ordered record of which providers were invoked.
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn record(&self, id: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(id.to_string());
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

/// Scripted [`GeoProvider`] that records every lookup in a [`CallLog`].
pub struct MockGeoProvider {
    id: &'static str,
    succeed: bool,
    log: CallLog,
}

impl MockGeoProvider {
    pub fn succeeding(id: &'static str, log: &CallLog) -> Arc<dyn GeoProvider> {
        Arc::new(Self {
            id,
            succeed: true,
            log: log.clone(),
        })
    }

    pub fn failing(id: &'static str, log: &CallLog) -> Arc<dyn GeoProvider> {
        Arc::new(Self {
            id,
            succeed: false,
            log: log.clone(),
        })
    }
}

#[async_trait]
impl GeoProvider for MockGeoProvider {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn lookup(&self, ip: &str) -> ProviderResult<GeoPayload> {
        self.log.record(self.id);
        if self.succeed {
            Ok(GeoPayload {
                ip: ip.to_string(),
                ip_version: "IPv4".to_string(),
                country: Some("United States".to_string()),
                country_code: Some("US".to_string()),
                region: Some("California".to_string()),
                city: Some("Mountain View".to_string()),
                latitude: Some(37.386),
                longitude: Some(-122.084),
                timezone: Some("America/Los_Angeles".to_string()),
                isp: Some("Example ISP".to_string()),
                org: Some("Example Org".to_string()),
                asn: Some("AS15169".to_string()),
            })
        } else {
            Err(ProviderError::NetworkError {
                provider: self.id.to_string(),
                detail: "connection refused".to_string(),
            })
        }
    }
}

/// In-memory [`CacheStore`] with a switchable failure mode.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<(String, String), serde_json::Value>>,
    fail: AtomicBool,
}

impl MemoryCache {
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    fn check(&self) -> CoreResult<()> {
        if self.fail.load(Ordering::Relaxed) {
            Err(crate::error::CoreError::StorageError(
                "simulated storage failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, category: &str, key: &str) -> CoreResult<Option<serde_json::Value>> {
        self.check()?;
        Ok(self
            .entries
            .lock()
            .map(|e| e.get(&(category.to_string(), key.to_string())).cloned())
            .unwrap_or_default())
    }

    async fn put(
        &self,
        category: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> CoreResult<()> {
        self.check()?;
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert((category.to_string(), key.to_string()), payload.clone());
        }
        Ok(())
    }
}

/// [`CacheStore`] that only counts calls, for asserting zero interaction.
#[derive(Default)]
pub struct CountingStubStore {
    count: AtomicUsize,
}

impl CountingStubStore {
    #[must_use]
    pub fn interactions(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CacheStore for CountingStubStore {
    async fn get(&self, _category: &str, _key: &str) -> CoreResult<Option<serde_json::Value>> {
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(None)
    }

    async fn put(
        &self,
        _category: &str,
        _key: &str,
        _payload: &serde_json::Value,
    ) -> CoreResult<()> {
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// One canned answer applied to every fetch. URLs containing `slow_marker`
/// get `slow_delay` instead of `delay`.
#[derive(Debug, Clone)]
pub struct TransportScript {
    pub delay: Duration,
    pub slow_marker: Option<String>,
    pub slow_delay: Duration,
    pub status: u16,
    pub final_url: Option<String>,
    pub body: String,
    pub fail: bool,
}

impl Default for TransportScript {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            slow_marker: None,
            slow_delay: Duration::ZERO,
            status: 200,
            final_url: None,
            body: String::new(),
            fail: false,
        }
    }
}

/// [`ProbeTransport`] that replays a [`TransportScript`] and tracks how many
/// fetches were in flight at once.
pub struct ScriptedTransport {
    script: TransportScript,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new(script: TransportScript) -> Self {
        Self {
            script,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ProbeTransport for ScriptedTransport {
    async fn fetch(&self, url: &str) -> Result<ProbeResponse, String> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let delay = match &self.script.slow_marker {
            Some(marker) if url.contains(marker.as_str()) => self.script.slow_delay,
            _ => self.script.delay,
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.script.fail {
            return Err("connection reset".to_string());
        }
        Ok(ProbeResponse {
            status: self.script.status,
            final_url: self
                .script
                .final_url
                .clone()
                .unwrap_or_else(|| url.to_string()),
            body: self.script.body.clone(),
        })
    }
}

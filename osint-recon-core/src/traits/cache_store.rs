//! Cache storage abstraction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;

/// Durable key-to-document cache.
///
/// Entries are keyed by `(category, key)`, one namespace per subject
/// class, and hold an opaque JSON document. Semantics are replace-into:
/// `put` overwrites whole entries, last writer wins, there is no merge.
/// There is deliberately no TTL or eviction; entries persist until the
/// backing data is cleared manually, which is a documented staleness risk
/// accepted for this toolkit.
///
/// Platform implementations:
/// - `SqliteStore` (app crate): `SeaORM` over a local `SQLite` file.
/// - `MemoryStore` (app crate): in-process map, for tests and `--no-db`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read an entry. Pure local read, never a network call.
    ///
    /// Implementations must report a corrupt stored document as `Ok(None)`
    /// (logged), not as an error; `Err` is reserved for storage-level
    /// failures.
    async fn get(&self, category: &str, key: &str) -> CoreResult<Option<serde_json::Value>>;

    /// Insert or replace an entry. Idempotent; repeated writes of the same
    /// value leave the store unchanged.
    async fn put(&self, category: &str, key: &str, payload: &serde_json::Value)
        -> CoreResult<()>;
}

/// Toggle-aware front for a [`CacheStore`].
///
/// Absorbs the global `caching_enabled` configuration so that callers never
/// special-case it: when disabled, `get` reports a miss and `put` is a
/// no-op, and the inner store is not touched at all. Also absorbs storage
/// faults, degrading them to miss / skipped-write with a log line; a
/// broken cache must never fail a resolution.
pub struct CacheGate {
    inner: Arc<dyn CacheStore>,
    enabled: AtomicBool,
}

impl CacheGate {
    #[must_use]
    pub fn new(inner: Arc<dyn CacheStore>, enabled: bool) -> Self {
        Self {
            inner,
            enabled: AtomicBool::new(enabled),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Flip the toggle at runtime (settings update path).
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Read through the gate. Disabled gate or storage fault both surface
    /// as a miss.
    pub async fn get(&self, category: &str, key: &str) -> Option<serde_json::Value> {
        if !self.is_enabled() {
            return None;
        }
        match self.inner.get(category, key).await {
            Ok(hit) => hit,
            Err(e) => {
                log::warn!("Cache read failed for {category}/{key}, treating as miss: {e}");
                None
            }
        }
    }

    /// Write through the gate. Disabled gate skips silently; storage
    /// faults are logged and swallowed.
    pub async fn put(&self, category: &str, key: &str, payload: &serde_json::Value) {
        if !self.is_enabled() {
            return;
        }
        if let Err(e) = self.inner.put(category, key, payload).await {
            log::warn!("Cache write failed for {category}/{key}, skipping: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{CountingStubStore, MemoryCache};

    #[tokio::test]
    async fn disabled_gate_never_touches_inner_store() {
        let stub = Arc::new(CountingStubStore::default());
        let gate = CacheGate::new(stub.clone(), false);

        assert!(gate.get("ip", "8.8.8.8").await.is_none());
        gate.put("ip", "8.8.8.8", &serde_json::json!({"a": 1})).await;

        assert_eq!(stub.interactions(), 0);
    }

    #[tokio::test]
    async fn enabled_gate_round_trips() {
        let gate = CacheGate::new(Arc::new(MemoryCache::default()), true);
        let payload = serde_json::json!({"country": "US"});

        gate.put("ip", "8.8.8.8", &payload).await;
        assert_eq!(gate.get("ip", "8.8.8.8").await, Some(payload));
    }

    #[tokio::test]
    async fn storage_fault_degrades_to_miss() {
        let store = Arc::new(MemoryCache::default());
        store.set_fail(true);
        let gate = CacheGate::new(store, true);

        assert!(gate.get("ip", "1.1.1.1").await.is_none());
        // put must not panic or surface the error
        gate.put("ip", "1.1.1.1", &serde_json::json!({})).await;
    }

    #[tokio::test]
    async fn toggle_flips_at_runtime() {
        let stub = Arc::new(CountingStubStore::default());
        let gate = CacheGate::new(stub.clone(), false);
        assert!(!gate.is_enabled());

        gate.set_enabled(true);
        let _ = gate.get("ip", "x").await;
        assert_eq!(stub.interactions(), 1);
    }
}

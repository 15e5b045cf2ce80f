//! In-process cache store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use osint_recon_core::error::CoreResult;
use osint_recon_core::traits::CacheStore;

/// Volatile [`CacheStore`] for `--no-db` runs. Entries live as long as the
/// process.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<(String, String), serde_json::Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, category: &str, key: &str) -> CoreResult<Option<serde_json::Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(category.to_string(), key.to_string())).cloned())
    }

    async fn put(
        &self,
        category: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> CoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert((category.to_string(), key.to_string()), payload.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_and_replaces() {
        let store = MemoryStore::new();

        assert!(store.get("ip", "8.8.8.8").await.unwrap().is_none());

        store
            .put("ip", "8.8.8.8", &serde_json::json!({"v": 1}))
            .await
            .unwrap();
        store
            .put("ip", "8.8.8.8", &serde_json::json!({"v": 2}))
            .await
            .unwrap();

        assert_eq!(
            store.get("ip", "8.8.8.8").await.unwrap(),
            Some(serde_json::json!({"v": 2}))
        );
    }

    #[tokio::test]
    async fn categories_do_not_collide() {
        let store = MemoryStore::new();
        store
            .put("ip", "target", &serde_json::json!({"kind": "ip"}))
            .await
            .unwrap();
        store
            .put("handle", "target", &serde_json::json!({"kind": "handle"}))
            .await
            .unwrap();

        assert_eq!(
            store.get("ip", "target").await.unwrap(),
            Some(serde_json::json!({"kind": "ip"}))
        );
        assert_eq!(
            store.get("handle", "target").await.unwrap(),
            Some(serde_json::json!({"kind": "handle"}))
        );
    }
}

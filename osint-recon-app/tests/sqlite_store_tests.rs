#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `SqliteStore` against a real on-disk database.

use std::sync::Arc;

use osint_recon_app::adapters::SqliteStore;
use osint_recon_core::traits::{CacheGate, CacheStore};

async fn create_test_sqlite_store() -> (Arc<SqliteStore>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = tmp.path().join("test.db");
    let store = SqliteStore::new(&db_path)
        .await
        .expect("failed to create SqliteStore");
    (Arc::new(store), tmp)
}

#[tokio::test]
async fn miss_then_round_trip() {
    let (store, _tmp) = create_test_sqlite_store().await;

    assert!(store.get("ip", "8.8.8.8").await.unwrap().is_none());

    let payload = serde_json::json!({"country": "US", "city": "Mountain View"});
    store.put("ip", "8.8.8.8", &payload).await.unwrap();

    assert_eq!(store.get("ip", "8.8.8.8").await.unwrap(), Some(payload));
}

#[tokio::test]
async fn put_replaces_the_whole_entry() {
    let (store, _tmp) = create_test_sqlite_store().await;

    store
        .put("ip", "1.1.1.1", &serde_json::json!({"country": "AU", "isp": "Cloudflare"}))
        .await
        .unwrap();
    store
        .put("ip", "1.1.1.1", &serde_json::json!({"country": "US"}))
        .await
        .unwrap();

    // last write wins wholesale, no merge of the old fields
    assert_eq!(
        store.get("ip", "1.1.1.1").await.unwrap(),
        Some(serde_json::json!({"country": "US"}))
    );
}

#[tokio::test]
async fn repeated_identical_puts_are_idempotent() {
    let (store, _tmp) = create_test_sqlite_store().await;
    let payload = serde_json::json!({"country": "DE"});

    store.put("ip", "9.9.9.9", &payload).await.unwrap();
    store.put("ip", "9.9.9.9", &payload).await.unwrap();

    assert_eq!(store.get("ip", "9.9.9.9").await.unwrap(), Some(payload));
}

#[tokio::test]
async fn categories_namespace_the_same_key() {
    let (store, _tmp) = create_test_sqlite_store().await;

    store
        .put("ip", "shared", &serde_json::json!({"from": "ip"}))
        .await
        .unwrap();
    store
        .put("handle", "shared", &serde_json::json!({"from": "handle"}))
        .await
        .unwrap();

    assert_eq!(
        store.get("ip", "shared").await.unwrap(),
        Some(serde_json::json!({"from": "ip"}))
    );
    assert_eq!(
        store.get("handle", "shared").await.unwrap(),
        Some(serde_json::json!({"from": "handle"}))
    );
}

#[tokio::test]
async fn entries_survive_a_reopen() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = tmp.path().join("persist.db");

    {
        let store = SqliteStore::new(&db_path).await.unwrap();
        store
            .put("ip", "8.8.4.4", &serde_json::json!({"country": "US"}))
            .await
            .unwrap();
    }

    let reopened = SqliteStore::new(&db_path).await.unwrap();
    assert_eq!(
        reopened.get("ip", "8.8.4.4").await.unwrap(),
        Some(serde_json::json!({"country": "US"}))
    );
}

#[tokio::test]
async fn gate_round_trips_through_sqlite() {
    let (store, _tmp) = create_test_sqlite_store().await;
    let gate = CacheGate::new(store, true);
    let payload = serde_json::json!({"country": "JP"});

    gate.put("ip", "203.0.113.9", &payload).await;
    assert_eq!(gate.get("ip", "203.0.113.9").await, Some(payload));
}

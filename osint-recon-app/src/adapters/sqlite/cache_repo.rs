//! `CacheStore` implementation for `SqliteStore`.

use async_trait::async_trait;

use sea_orm::{ActiveValue::Set, EntityTrait};

use osint_recon_core::error::{CoreError, CoreResult};
use osint_recon_core::traits::CacheStore;

use super::entity::cache_entry;
use super::SqliteStore;

#[async_trait]
impl CacheStore for SqliteStore {
    async fn get(&self, category: &str, key: &str) -> CoreResult<Option<serde_json::Value>> {
        let row = cache_entry::Entity::find_by_id((category.to_string(), key.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query cache: {e}")))?;

        match row {
            Some(r) => match serde_json::from_str(&r.payload) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    // A corrupt row is a miss, not a failure.
                    log::warn!("Corrupt cache payload for {category}/{key}: {e}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        category: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> CoreResult<()> {
        let payload_json = serde_json::to_string(payload)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let active_model = cache_entry::ActiveModel {
            category: Set(category.to_string()),
            subject: Set(key.to_string()),
            payload: Set(payload_json),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        cache_entry::Entity::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    cache_entry::Column::Category,
                    cache_entry::Column::Subject,
                ])
                .update_columns([cache_entry::Column::Payload, cache_entry::Column::CreatedAt])
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to upsert cache entry: {e}")))?;

        Ok(())
    }
}

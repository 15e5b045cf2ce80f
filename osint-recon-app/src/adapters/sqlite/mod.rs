//! SQLite-based cache store using `SeaORM`.

mod cache_repo;
pub(crate) mod entity;
mod migration;

use std::path::Path;

use osint_recon_core::error::{CoreError, CoreResult};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// Persistent [`osint_recon_core::traits::CacheStore`] backed by a local
/// `SQLite` database file.
///
/// Entries are replace-into on `(category, subject)` and never expire.
pub struct SqliteStore {
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Create a new `SQLite` store.
    ///
    /// - `db_path`: Path to the `SQLite` database file (created if not exists).
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };

        // Ensure schema is up to date before the store is used.
        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))?;

        Ok(store)
    }
}

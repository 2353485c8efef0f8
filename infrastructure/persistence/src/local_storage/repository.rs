use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::StorageError;
use business::domain::storage::LocalStorage;

use super::entity::LocalStorageEntity;

/// `LocalStorage` kept in a SQLite table, one row per key.
pub struct LocalStorageSqlite {
    pool: SqlitePool,
}

impl LocalStorageSqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocalStorage for LocalStorageSqlite {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entity = sqlx::query_as::<_, LocalStorageEntity>(
            "SELECT key, value, updated_at FROM local_storage WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::warn!(key, error = %e, "local storage read failed");
            StorageError::ReadFailed
        })?;

        Ok(entity.map(|e| e.value))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO local_storage (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::warn!(key, error = %e, "local storage write failed");
            StorageError::WriteFailed
        })?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|_| StorageError::WriteFailed)?;

        Ok(())
    }
}

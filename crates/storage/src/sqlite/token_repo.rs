use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{AuthTokenStore, StorageError};

use super::SqliteStore;

#[async_trait]
impl AuthTokenStore for SqliteStore {
    async fn load_token(&self) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT token FROM auth_token WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let token: String = row
            .try_get("token")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(token))
    }

    async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO auth_token (id, token, saved_at)
            VALUES (1, ?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                token = excluded.token,
                saved_at = excluded.saved_at
            ",
        )
        .bind(token)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM auth_token WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}

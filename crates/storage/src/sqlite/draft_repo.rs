use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use campus_core::model::CourseDraft;

use crate::repository::{DraftRecord, DraftStore, StorageError};

use super::SqliteStore;

#[async_trait]
impl DraftStore for SqliteStore {
    async fn load_draft(&self, key: &str) -> Result<Option<DraftRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT title, description, category, updated_at
            FROM drafts
            WHERE key = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let title: String = row
            .try_get("title")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let description: String = row
            .try_get("description")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let category: String = row
            .try_get("category")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let updated_at: String = row
            .try_get("updated_at")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|err| StorageError::Serialization(err.to_string()))?
            .with_timezone(&Utc);

        Ok(Some(DraftRecord {
            draft: CourseDraft {
                title,
                description,
                category,
            },
            updated_at,
        }))
    }

    async fn save_draft(
        &self,
        key: &str,
        draft: &CourseDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO drafts (key, title, description, category, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(key) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                category = excluded.category,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.category)
        .bind(updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }

    async fn clear_draft(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM drafts WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}

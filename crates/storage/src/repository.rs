//! Local store contracts: the bearer auth token and the course-creation
//! draft. This is the desktop analog of the original app's browser
//! local-storage keys.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use campus_core::model::CourseDraft;

/// Errors surfaced by local-store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A draft together with when it was last autosaved, so the form can tell
/// the user what it restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRecord {
    pub draft: CourseDraft,
    pub updated_at: DateTime<Utc>,
}

/// Persistence for the bearer token attached to every backend request.
#[async_trait]
pub trait AuthTokenStore: Send + Sync {
    /// Load the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn load_token(&self) -> Result<Option<String>, StorageError>;

    /// Persist the token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn save_token(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn clear_token(&self) -> Result<(), StorageError>;
}

/// Persistence for form drafts cached under fixed keys.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Load the draft stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn load_draft(&self, key: &str) -> Result<Option<DraftRecord>, StorageError>;

    /// Persist the draft under `key`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn save_draft(
        &self,
        key: &str,
        draft: &CourseDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Remove the draft stored under `key`. Absent keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn clear_draft(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    token: Arc<Mutex<Option<String>>>,
    drafts: Arc<Mutex<HashMap<String, DraftRecord>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthTokenStore for InMemoryStore {
    async fn load_token(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .token
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[async_trait]
impl DraftStore for InMemoryStore {
    async fn load_draft(&self, key: &str) -> Result<Option<DraftRecord>, StorageError> {
        let guard = self
            .drafts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn save_draft(
        &self,
        key: &str,
        draft: &CourseDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .drafts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(
            key.to_string(),
            DraftRecord {
                draft: draft.clone(),
                updated_at,
            },
        );
        Ok(())
    }

    async fn clear_draft(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .drafts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the local stores behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct LocalStore {
    pub tokens: Arc<dyn AuthTokenStore>,
    pub drafts: Arc<dyn DraftStore>,
}

impl LocalStore {
    #[must_use]
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        let tokens: Arc<dyn AuthTokenStore> = Arc::new(store.clone());
        let drafts: Arc<dyn DraftStore> = Arc::new(store);
        Self { tokens, drafts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::model::COURSE_DRAFT_KEY;
    use campus_core::time::fixed_now;

    #[tokio::test]
    async fn token_round_trips_and_clears() {
        let store = InMemoryStore::new();
        assert_eq!(store.load_token().await.unwrap(), None);

        store.save_token("bearer-abc").await.unwrap();
        assert_eq!(
            store.load_token().await.unwrap(),
            Some("bearer-abc".to_string())
        );

        store.clear_token().await.unwrap();
        assert_eq!(store.load_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn draft_round_trips_under_fixed_key() {
        let store = InMemoryStore::new();
        let draft = CourseDraft {
            title: "Algebra".to_string(),
            description: String::new(),
            category: "Math".to_string(),
        };

        store
            .save_draft(COURSE_DRAFT_KEY, &draft, fixed_now())
            .await
            .unwrap();
        let record = store.load_draft(COURSE_DRAFT_KEY).await.unwrap().unwrap();
        assert_eq!(record.draft, draft);
        assert_eq!(record.updated_at, fixed_now());

        store.clear_draft(COURSE_DRAFT_KEY).await.unwrap();
        assert_eq!(store.load_draft(COURSE_DRAFT_KEY).await.unwrap(), None);
    }
}

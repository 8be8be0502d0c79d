use std::sync::Arc;
use std::time::Duration;

use campus_core::Clock;
use campus_core::model::{COURSE_DRAFT_KEY, CourseDraft};
use storage::repository::{DraftRecord, DraftStore};

use crate::error::DraftServiceError;

/// How long input must stay idle before the form autosaves its draft.
pub const AUTOSAVE_DELAY: Duration = Duration::from_secs(2);

/// Local persistence for the course-creation draft under its fixed key.
#[derive(Clone)]
pub struct DraftService {
    clock: Clock,
    drafts: Arc<dyn DraftStore>,
}

impl DraftService {
    #[must_use]
    pub fn new(clock: Clock, drafts: Arc<dyn DraftStore>) -> Self {
        Self { clock, drafts }
    }

    /// # Errors
    ///
    /// Returns `DraftServiceError` if the local store cannot be read.
    pub async fn load(&self) -> Result<Option<DraftRecord>, DraftServiceError> {
        Ok(self.drafts.load_draft(COURSE_DRAFT_KEY).await?)
    }

    /// Persist the draft. A blank draft clears the cache instead, so an
    /// emptied form does not resurrect on the next visit.
    ///
    /// # Errors
    ///
    /// Returns `DraftServiceError` if the local store cannot be written.
    pub async fn save(&self, draft: &CourseDraft) -> Result<(), DraftServiceError> {
        if draft.is_blank() {
            self.drafts.clear_draft(COURSE_DRAFT_KEY).await?;
        } else {
            self.drafts
                .save_draft(COURSE_DRAFT_KEY, draft, self.clock.now())
                .await?;
        }
        Ok(())
    }

    /// Drop the cached draft, typically after a successful course creation.
    ///
    /// # Errors
    ///
    /// Returns `DraftServiceError` if the local store cannot be written.
    pub async fn clear(&self) -> Result<(), DraftServiceError> {
        Ok(self.drafts.clear_draft(COURSE_DRAFT_KEY).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::time::fixed_clock;
    use storage::repository::InMemoryStore;

    fn service() -> DraftService {
        DraftService::new(fixed_clock(), Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let drafts = service();
        let draft = CourseDraft {
            title: "Algebra".to_string(),
            description: String::new(),
            category: "Math".to_string(),
        };
        drafts.save(&draft).await.unwrap();

        let record = drafts.load().await.unwrap().expect("draft cached");
        assert_eq!(record.draft, draft);
    }

    #[tokio::test]
    async fn blank_draft_clears_the_cache() {
        let drafts = service();
        let draft = CourseDraft {
            title: "Algebra".to_string(),
            ..CourseDraft::default()
        };
        drafts.save(&draft).await.unwrap();
        drafts.save(&CourseDraft::default()).await.unwrap();
        assert!(drafts.load().await.unwrap().is_none());
    }
}

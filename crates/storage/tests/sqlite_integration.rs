use campus_core::model::{COURSE_DRAFT_KEY, CourseDraft};
use campus_core::time::fixed_now;
use storage::repository::{AuthTokenStore, DraftStore, LocalStore};

#[tokio::test]
async fn sqlite_token_round_trip() {
    let store = LocalStore::sqlite("sqlite::memory:").await.unwrap();

    assert_eq!(store.tokens.load_token().await.unwrap(), None);

    store.tokens.save_token("bearer-one").await.unwrap();
    store.tokens.save_token("bearer-two").await.unwrap();
    assert_eq!(
        store.tokens.load_token().await.unwrap(),
        Some("bearer-two".to_string())
    );

    store.tokens.clear_token().await.unwrap();
    assert_eq!(store.tokens.load_token().await.unwrap(), None);

    // Clearing again must stay a no-op.
    store.tokens.clear_token().await.unwrap();
}

#[tokio::test]
async fn sqlite_draft_round_trip() {
    let store = LocalStore::sqlite("sqlite::memory:").await.unwrap();
    let now = fixed_now();

    let draft = CourseDraft {
        title: "Intro to Rust".to_string(),
        description: "Ownership first".to_string(),
        category: "Programming".to_string(),
    };
    store
        .drafts
        .save_draft(COURSE_DRAFT_KEY, &draft, now)
        .await
        .unwrap();

    let record = store
        .drafts
        .load_draft(COURSE_DRAFT_KEY)
        .await
        .unwrap()
        .expect("draft persisted");
    assert_eq!(record.draft, draft);
    assert_eq!(record.updated_at, now);

    // Overwrite under the same key keeps a single row.
    let revised = CourseDraft {
        title: "Intro to Rust, 2nd draft".to_string(),
        ..draft
    };
    store
        .drafts
        .save_draft(COURSE_DRAFT_KEY, &revised, now)
        .await
        .unwrap();
    let record = store
        .drafts
        .load_draft(COURSE_DRAFT_KEY)
        .await
        .unwrap()
        .expect("draft persisted");
    assert_eq!(record.draft.title, "Intro to Rust, 2nd draft");

    store.drafts.clear_draft(COURSE_DRAFT_KEY).await.unwrap();
    assert_eq!(
        store.drafts.load_draft(COURSE_DRAFT_KEY).await.unwrap(),
        None
    );
}

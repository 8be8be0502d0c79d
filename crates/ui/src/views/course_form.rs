use dioxus::prelude::*;
use dioxus_router::use_navigator;

use campus_core::model::{CourseDraft, DraftError};
use services::{AUTOSAVE_DELAY, CatalogError};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::format_datetime;

#[component]
pub fn CourseFormView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let drafts = ctx.drafts();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    // Bumped on every keystroke; an autosave task only writes if it is still
    // the latest revision after the idle delay.
    let revision = use_signal(|| 0_u64);
    let mut restored_label = use_signal(|| None::<String>);
    let mut title_error = use_signal(|| None::<&'static str>);
    let mut category_error = use_signal(|| None::<&'static str>);
    let mut submit_error = use_signal(|| None::<ViewError>);
    let mut creating = use_signal(|| false);

    // Restore a cached draft once on mount.
    let drafts_for_restore = drafts.clone();
    use_future(move || {
        let drafts = drafts_for_restore.clone();
        let mut title = title;
        let mut description = description;
        let mut category = category;
        let mut restored_label = restored_label;
        async move {
            if let Ok(Some(record)) = drafts.load().await {
                title.set(record.draft.title);
                description.set(record.draft.description);
                category.set(record.draft.category);
                restored_label.set(Some(format!(
                    "Draft restored from {}",
                    format_datetime(record.updated_at)
                )));
            }
        }
    });

    let current_draft = move || CourseDraft {
        title: title(),
        description: description(),
        category: category(),
    };

    let schedule_autosave = {
        let drafts = drafts.clone();
        use_callback(move |()| {
            let mut revision = revision;
            let drafts = drafts.clone();
            revision += 1;
            let scheduled = revision();
            spawn(async move {
                tokio::time::sleep(AUTOSAVE_DELAY).await;
                // Input arrived in the meantime; a newer task owns the save.
                if revision() != scheduled {
                    return;
                }
                let _ = drafts
                    .save(&CourseDraft {
                        title: title(),
                        description: description(),
                        category: category(),
                    })
                    .await;
            });
        })
    };

    let on_create = {
        let catalog = catalog.clone();
        let drafts = drafts.clone();
        use_callback(move |()| {
            if creating() {
                return;
            }
            let catalog = catalog.clone();
            let drafts = drafts.clone();
            let nav = navigator;
            let draft = current_draft();
            let mut creating = creating;
            let mut title_error = title_error;
            let mut category_error = category_error;
            let mut submit_error = submit_error;
            spawn(async move {
                creating.set(true);
                title_error.set(None);
                category_error.set(None);
                submit_error.set(None);
                match catalog.create_course(draft).await {
                    Ok(course) => {
                        let _ = drafts.clear().await;
                        creating.set(false);
                        let _ = nav.replace(Route::CourseDetail {
                            course_id: course.id().value(),
                        });
                    }
                    Err(CatalogError::Draft(DraftError::EmptyTitle)) => {
                        creating.set(false);
                        title_error.set(Some("Title is required."));
                    }
                    Err(CatalogError::Draft(DraftError::EmptyCategory)) => {
                        creating.set(false);
                        category_error.set(Some("Category is required."));
                    }
                    Err(CatalogError::Api(err)) => {
                        creating.set(false);
                        submit_error.set(Some(ViewError::from_api(&err)));
                    }
                    Err(_) => {
                        creating.set(false);
                        submit_error.set(Some(ViewError::Unknown));
                    }
                }
            });
        })
    };

    rsx! {
        div { class: "page course-form-page",
            header { class: "view-header",
                h2 { class: "view-title", "New Course" }
                p { class: "view-subtitle", "Drafts save automatically while you type." }
            }
            div { class: "view-divider" }
            if let Some(label) = restored_label() {
                p { class: "draft-hint", "{label}" }
            }
            if let Some(err) = submit_error() {
                p { class: "form-error", "{err.message()}" }
            }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_create.call(());
                },
                label { class: "form-label", "Title"
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{title()}",
                        oninput: move |evt| {
                            title.set(evt.value());
                            schedule_autosave.call(());
                        },
                    }
                }
                if let Some(message) = title_error() {
                    p { class: "field-error", "{message}" }
                }
                label { class: "form-label", "Category"
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{category()}",
                        oninput: move |evt| {
                            category.set(evt.value());
                            schedule_autosave.call(());
                        },
                    }
                }
                if let Some(message) = category_error() {
                    p { class: "field-error", "{message}" }
                }
                label { class: "form-label", "Description"
                    textarea {
                        class: "form-input form-textarea",
                        value: "{description()}",
                        oninput: move |evt| {
                            description.set(evt.value());
                            schedule_autosave.call(());
                        },
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: creating(),
                    if creating() { "Creating..." } else { "Create course" }
                }
            }
        }
    }
}

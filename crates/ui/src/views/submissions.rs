use dioxus::prelude::*;
use dioxus_router::use_navigator;

use campus_core::listing::{FilterState, SortOrder, displayed};
use campus_core::model::{AssignmentId, GradeError, MAX_FEEDBACK_LEN, SubmissionId};
use services::GradingError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    SubmissionFilter, SubmissionRowVm, SubmissionSortKey, map_submission_row, map_submission_rows,
};

fn sort_marker(state: &FilterState<SubmissionSortKey>, key: SubmissionSortKey) -> &'static str {
    if state.sort_key != key {
        return "";
    }
    match state.sort_order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}

#[component]
pub fn SubmissionsView(assignment_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let assignments = ctx.assignments();
    let assignment_id = AssignmentId::new(assignment_id);

    let mut filter_state = use_signal(|| FilterState::new(SubmissionSortKey::SubmittedAt));
    let mut status_filter = use_signal(SubmissionFilter::default);
    // Grading form state for the selected submission.
    let mut grading_target = use_signal(|| None::<SubmissionId>);
    let mut grade_input = use_signal(String::new);
    let mut feedback_input = use_signal(String::new);
    let mut grade_error = use_signal(|| None::<&'static str>);
    let mut feedback_error = use_signal(|| None::<&'static str>);
    let mut submit_error = use_signal(|| None::<ViewError>);
    let mut grading = use_signal(|| false);
    // Rows graded this visit, patched locally after a successful write.
    let mut patched = use_signal(Vec::<SubmissionRowVm>::new);

    let assignments_for_resource = assignments.clone();
    let resource = use_resource(move || {
        let assignments = assignments_for_resource.clone();
        async move {
            let list = assignments
                .list_submissions(assignment_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(map_submission_rows(&list))
        }
    });

    let on_grade = {
        let assignments = assignments.clone();
        use_callback(move |()| {
            if grading() {
                return;
            }
            let Some(target) = grading_target() else {
                return;
            };
            grade_error.set(None);
            feedback_error.set(None);
            submit_error.set(None);

            let Ok(grade) = grade_input().trim().parse::<f64>() else {
                grade_error.set(Some("Enter a grade between 0 and 100."));
                return;
            };

            let assignments = assignments.clone();
            let mut grading = grading;
            let mut grading_target = grading_target;
            let mut patched = patched;
            spawn(async move {
                grading.set(true);
                let result = assignments.grade(target, grade, &feedback_input()).await;
                grading.set(false);
                match result {
                    Ok(updated) => {
                        patched.write().push(map_submission_row(&updated));
                        grading_target.set(None);
                        grade_input.set(String::new);
                        feedback_input.set(String::new);
                    }
                    Err(GradingError::Grade(GradeError::OutOfRange)) => {
                        grade_error.set(Some("Enter a grade between 0 and 100."));
                    }
                    Err(GradingError::Grade(GradeError::FeedbackTooLong { .. })) => {
                        feedback_error.set(Some("Feedback is too long."));
                    }
                    Err(GradingError::Api(err)) => {
                        submit_error.set(Some(ViewError::from_api(&err)));
                    }
                    Err(_) => submit_error.set(Some(ViewError::Unknown)),
                }
            });
        })
    };

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page submissions-page",
            header { class: "view-header",
                h2 { class: "view-title", "Submissions" }
                p { class: "view-subtitle", "Review delivered work and record grades." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "not-found",
                        h2 { "Assignment not found" }
                        p { "This assignment may have been removed." }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::Courses {});
                            },
                            "Back to courses"
                        }
                    }
                },
                ViewState::Error(err) => {
                    if err == ViewError::Unauthorized {
                        let _ = navigator.replace(Route::Login {});
                    }
                    rsx! {
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                }
                ViewState::Ready(rows) => {
                    // Prefer locally patched rows over the fetched snapshot.
                    let merged: Vec<SubmissionRowVm> = rows
                        .iter()
                        .map(|row| {
                            patched
                                .read()
                                .iter()
                                .rev()
                                .find(|candidate| candidate.id == row.id)
                                .cloned()
                                .unwrap_or_else(|| row.clone())
                        })
                        .collect();
                    let filter = status_filter();
                    let visible: Vec<SubmissionRowVm> =
                        displayed(&merged, &filter_state.read(), |row| filter.matches(row));
                    let empty_message = if merged.is_empty() {
                        "Nothing has been submitted yet."
                    } else {
                        "No submissions match that search."
                    };
                    let student_marker = sort_marker(&filter_state.read(), SubmissionSortKey::Student);
                    let submitted_marker =
                        sort_marker(&filter_state.read(), SubmissionSortKey::SubmittedAt);
                    let grade_marker = sort_marker(&filter_state.read(), SubmissionSortKey::Grade);
                    let filter_options = SubmissionFilter::ALL.iter().map(|choice| {
                        let choice = *choice;
                        rsx! {
                            option {
                                value: "{choice.value()}",
                                selected: filter == choice,
                                "{choice.label()}"
                            }
                        }
                    });
                    let submission_rows = visible.iter().map(|row| {
                        let id = row.id;
                        let student = row.student_name.clone();
                        let submitted_label = row.submitted_label.clone();
                        let status_label = row.status.label();
                        let grade_label = row.grade_label.clone();
                        rsx! {
                            tr { class: "submission-row",
                                td { "{student}" }
                                td { "{submitted_label}" }
                                td { span { class: "status-pill", "{status_label}" } }
                                td { "{grade_label}" }
                                td {
                                    button {
                                        class: "link-button",
                                        r#type: "button",
                                        onclick: move |_| {
                                            grading_target.set(Some(id));
                                            grade_input.set(String::new);
                                            feedback_input.set(String::new);
                                            grade_error.set(None);
                                            feedback_error.set(None);
                                            submit_error.set(None);
                                        },
                                        "Grade"
                                    }
                                }
                            }
                        }
                    });
                    let grading_pane = grading_target().and_then(|target| {
                        visible
                            .iter()
                            .find(|row| row.id == target)
                            .cloned()
                            .or_else(|| merged.iter().find(|row| row.id == target).cloned())
                    });
                    rsx! {
                        div { class: "list-controls",
                            input {
                                class: "list-search",
                                r#type: "text",
                                placeholder: "Search students...",
                                value: "{filter_state.read().search_query}",
                                oninput: move |evt| filter_state.write().search_query = evt.value(),
                            }
                            select {
                                class: "list-status",
                                onchange: move |evt| {
                                    status_filter.set(SubmissionFilter::from_value(&evt.value()));
                                },
                                {filter_options}
                            }
                        }
                        if visible.is_empty() {
                            p { class: "empty-hint", "{empty_message}" }
                        } else {
                            table { class: "list-table",
                                thead {
                                    tr {
                                        th {
                                            button {
                                                class: "sort-header",
                                                r#type: "button",
                                                onclick: move |_| filter_state.write().toggle_sort(SubmissionSortKey::Student),
                                                "Student{student_marker}"
                                            }
                                        }
                                        th {
                                            button {
                                                class: "sort-header",
                                                r#type: "button",
                                                onclick: move |_| filter_state.write().toggle_sort(SubmissionSortKey::SubmittedAt),
                                                "Submitted{submitted_marker}"
                                            }
                                        }
                                        th { "Status" }
                                        th {
                                            button {
                                                class: "sort-header",
                                                r#type: "button",
                                                onclick: move |_| filter_state.write().toggle_sort(SubmissionSortKey::Grade),
                                                "Grade{grade_marker}"
                                            }
                                        }
                                        th { "" }
                                    }
                                }
                                tbody { {submission_rows} }
                            }
                        }
                        if let Some(row) = grading_pane {
                            div { class: "grading-pane",
                                h3 { "Grade {row.student_name}" }
                                p { class: "submission-body", "{row.body}" }
                                if let Some(err) = submit_error() {
                                    p { class: "form-error", "{err.message()}" }
                                }
                                form {
                                    onsubmit: move |evt| {
                                        evt.prevent_default();
                                        on_grade.call(());
                                    },
                                    label { class: "form-label", "Grade (0-100)"
                                        input {
                                            class: "form-input",
                                            r#type: "number",
                                            min: "0",
                                            max: "100",
                                            step: "0.5",
                                            value: "{grade_input()}",
                                            oninput: move |evt| grade_input.set(evt.value()),
                                        }
                                    }
                                    if let Some(message) = grade_error() {
                                        p { class: "field-error", "{message}" }
                                    }
                                    label { class: "form-label", "Feedback"
                                        textarea {
                                            class: "form-input form-textarea",
                                            maxlength: "{MAX_FEEDBACK_LEN}",
                                            value: "{feedback_input()}",
                                            oninput: move |evt| feedback_input.set(evt.value()),
                                        }
                                    }
                                    if let Some(message) = feedback_error() {
                                        p { class: "field-error", "{message}" }
                                    }
                                    div { class: "grading-actions",
                                        button {
                                            class: "btn btn-secondary",
                                            r#type: "button",
                                            onclick: move |_| grading_target.set(None),
                                            "Cancel"
                                        }
                                        button {
                                            class: "btn btn-primary",
                                            r#type: "submit",
                                            disabled: grading(),
                                            if grading() { "Saving..." } else { "Save grade" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use campus_core::listing::{FilterState, SortOrder, displayed};
use campus_core::model::CourseId;
use chrono::Utc;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AssignmentFilter, AssignmentRowVm, AssignmentSortKey, map_assignment_rows};

fn sort_marker(state: &FilterState<AssignmentSortKey>, key: AssignmentSortKey) -> &'static str {
    if state.sort_key != key {
        return "";
    }
    match state.sort_order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}

#[component]
pub fn AssignmentsView(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let assignments = ctx.assignments();
    let course_id = CourseId::new(course_id);

    let mut filter_state = use_signal(|| FilterState::new(AssignmentSortKey::DueDate));
    let mut deadline_filter = use_signal(AssignmentFilter::default);

    let resource = use_resource(move || {
        let assignments = assignments.clone();
        async move {
            let list = assignments
                .list_assignments(course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(map_assignment_rows(&list, Utc::now()))
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page assignments-page",
            header { class: "view-header",
                h2 { class: "view-title", "Assignments" }
                p { class: "view-subtitle", "Coursework for this course, sorted by deadline." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
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
                    let filter = deadline_filter();
                    let visible: Vec<AssignmentRowVm> =
                        displayed(&rows, &filter_state.read(), |row| filter.matches(row));
                    let empty_message = if rows.is_empty() {
                        "No assignments in this course."
                    } else {
                        "No assignments match that search."
                    };
                    let title_marker = sort_marker(&filter_state.read(), AssignmentSortKey::Title);
                    let due_marker = sort_marker(&filter_state.read(), AssignmentSortKey::DueDate);
                    let points_marker = sort_marker(&filter_state.read(), AssignmentSortKey::Points);
                    let filter_options = AssignmentFilter::ALL.iter().map(|choice| {
                        let choice = *choice;
                        rsx! {
                            option {
                                value: "{choice.value()}",
                                selected: filter == choice,
                                "{choice.label()}"
                            }
                        }
                    });
                    let assignment_rows = visible.iter().map(|row| {
                        let assignment_id = row.id.value();
                        let title = row.title.clone();
                        let due_label = row.due_label.clone();
                        let points_label = row.points_label.clone();
                        let overdue = row.overdue;
                        rsx! {
                            tr { class: if overdue { "assignment-row assignment-row--overdue" } else { "assignment-row" },
                                td { "{title}" }
                                td { "{due_label}" }
                                td { "{points_label}" }
                                td {
                                    button {
                                        class: "link-button",
                                        r#type: "button",
                                        onclick: move |_| {
                                            let _ = navigator.push(Route::Submissions { assignment_id });
                                        },
                                        "Submissions"
                                    }
                                }
                            }
                        }
                    });
                    rsx! {
                        div { class: "list-controls",
                            input {
                                class: "list-search",
                                r#type: "text",
                                placeholder: "Search assignments...",
                                value: "{filter_state.read().search_query}",
                                oninput: move |evt| filter_state.write().search_query = evt.value(),
                            }
                            select {
                                class: "list-status",
                                onchange: move |evt| {
                                    deadline_filter.set(AssignmentFilter::from_value(&evt.value()));
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
                                                onclick: move |_| filter_state.write().toggle_sort(AssignmentSortKey::Title),
                                                "Title{title_marker}"
                                            }
                                        }
                                        th {
                                            button {
                                                class: "sort-header",
                                                r#type: "button",
                                                onclick: move |_| filter_state.write().toggle_sort(AssignmentSortKey::DueDate),
                                                "Due{due_marker}"
                                            }
                                        }
                                        th {
                                            button {
                                                class: "sort-header",
                                                r#type: "button",
                                                onclick: move |_| filter_state.write().toggle_sort(AssignmentSortKey::Points),
                                                "Points{points_marker}"
                                            }
                                        }
                                        th { "" }
                                    }
                                }
                                tbody { {assignment_rows} }
                            }
                        }
                    }
                }
            }
        }
    }
}

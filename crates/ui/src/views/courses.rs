use dioxus::prelude::*;
use dioxus_router::use_navigator;

use campus_core::listing::{FilterState, SortOrder, displayed};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseRowVm, CourseSortKey, CourseStatusFilter, map_course_rows};

fn sort_marker(state: &FilterState<CourseSortKey>, key: CourseSortKey) -> &'static str {
    if state.sort_key != key {
        return "";
    }
    match state.sort_order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();

    let mut filter_state = use_signal(|| FilterState::new(CourseSortKey::Title));
    let mut status_filter = use_signal(CourseStatusFilter::default);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let courses = catalog
                .list_courses()
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(map_course_rows(&courses))
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h2 { class: "view-title", "Courses" }
                p { class: "view-subtitle", "Browse the catalog. Search by title, instructor, or category." }
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
                    let filter = status_filter();
                    let visible: Vec<CourseRowVm> =
                        displayed(&rows, &filter_state.read(), |row| filter.matches(row));
                    let title_marker = sort_marker(&filter_state.read(), CourseSortKey::Title);
                    let rating_marker = sort_marker(&filter_state.read(), CourseSortKey::Rating);
                    let created_marker = sort_marker(&filter_state.read(), CourseSortKey::Created);
                    let empty_message = if rows.is_empty() {
                        "No courses published yet."
                    } else {
                        "No courses match that search."
                    };
                    let status_options = CourseStatusFilter::ALL.iter().map(|choice| {
                        let choice = *choice;
                        rsx! {
                            option {
                                value: "{choice.value()}",
                                selected: filter == choice,
                                "{choice.label()}"
                            }
                        }
                    });
                    let course_rows = visible.iter().map(|row| {
                        let course_id = row.id.value();
                        let title = row.title.clone();
                        let instructor = row.instructor.clone();
                        let category = row.category.clone();
                        let status_label = row.status.label();
                        let rating_label = row.rating_label.clone();
                        let created_label = row.created_label.clone();
                        rsx! {
                            tr { class: "course-row",
                                td {
                                    button {
                                        class: "link-button",
                                        r#type: "button",
                                        onclick: move |_| {
                                            let _ = navigator.push(Route::CourseDetail { course_id });
                                        },
                                        "{title}"
                                    }
                                }
                                td { "{instructor}" }
                                td { "{category}" }
                                td { span { class: "status-pill", "{status_label}" } }
                                td { "{rating_label}" }
                                td { "{created_label}" }
                            }
                        }
                    });
                    rsx! {
                        div { class: "list-controls",
                            input {
                                class: "list-search",
                                r#type: "text",
                                placeholder: "Search courses...",
                                value: "{filter_state.read().search_query}",
                                oninput: move |evt| filter_state.write().search_query = evt.value(),
                            }
                            select {
                                class: "list-status",
                                onchange: move |evt| {
                                    status_filter.set(CourseStatusFilter::from_value(&evt.value()));
                                },
                                {status_options}
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
                                                onclick: move |_| filter_state.write().toggle_sort(CourseSortKey::Title),
                                                "Title{title_marker}"
                                            }
                                        }
                                        th { "Instructor" }
                                        th { "Category" }
                                        th { "Status" }
                                        th {
                                            button {
                                                class: "sort-header",
                                                r#type: "button",
                                                onclick: move |_| filter_state.write().toggle_sort(CourseSortKey::Rating),
                                                "Rating{rating_marker}"
                                            }
                                        }
                                        th {
                                            button {
                                                class: "sort-header",
                                                r#type: "button",
                                                onclick: move |_| filter_state.write().toggle_sort(CourseSortKey::Created),
                                                "Created{created_marker}"
                                            }
                                        }
                                    }
                                }
                                tbody { {course_rows} }
                            }
                        }
                    }
                }
            }
        }
    }
}

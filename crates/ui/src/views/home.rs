use dioxus::prelude::*;
use dioxus_router::use_navigator;

use campus_core::model::{Enrollment, QuizAttempt};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{format_date, score_label};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    enrollments: Vec<Enrollment>,
    attempts: Vec<QuizAttempt>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let quiz_flow = ctx.quiz_flow();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let quiz_flow = quiz_flow.clone();
        async move {
            let enrollments = catalog
                .my_enrollments()
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let mut attempts = quiz_flow
                .recent_attempts()
                .await
                .map_err(|err| match err {
                    services::QuizFlowError::Api(api) => ViewError::from_api(&api),
                    _ => ViewError::Unknown,
                })?;
            attempts.sort_by_key(|attempt| std::cmp::Reverse(attempt.completed_at()));
            attempts.truncate(5);
            Ok::<_, ViewError>(DashboardData {
                enrollments,
                attempts,
            })
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Dashboard" }
                p { class: "view-subtitle", "Your enrollments and latest quiz attempts." }
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
                ViewState::Ready(data) => {
                    let enrollment_rows = data.enrollments.iter().map(|enrollment| {
                        let course_id = enrollment.course_id.value();
                        let progress = enrollment.display_progress();
                        let since = format_date(enrollment.enrolled_at);
                        rsx! {
                            li { class: "dashboard-enrollment",
                                button {
                                    class: "link-button",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let _ = navigator.push(Route::CourseDetail { course_id });
                                    },
                                    "Course #{course_id}"
                                }
                                span { class: "dashboard-progress", "{progress:.0}% complete" }
                                span { class: "dashboard-since", "since {since}" }
                            }
                        }
                    });
                    let attempt_rows = data.attempts.iter().map(|attempt| {
                        let line = score_label(attempt);
                        let when = format_date(attempt.completed_at());
                        rsx! {
                            li { class: "dashboard-attempt",
                                span { "{line}" }
                                span { class: "dashboard-when", "{when}" }
                            }
                        }
                    });
                    rsx! {
                        section { class: "dashboard-section",
                            h3 { "Enrollments ({data.enrollments.len()})" }
                            if data.enrollments.is_empty() {
                                p { class: "empty-hint", "Not enrolled in any course yet. Browse the catalog to get started." }
                            } else {
                                ul { {enrollment_rows} }
                            }
                        }
                        section { class: "dashboard-section",
                            h3 { "Recent quiz attempts" }
                            if data.attempts.is_empty() {
                                p { class: "empty-hint", "No attempts yet." }
                            } else {
                                ul { {attempt_rows} }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use campus_core::model::{Course, CourseId, CourseReview, Lesson};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{format_date, markdown_to_html};

#[derive(Clone, Debug, PartialEq)]
struct CourseDetailData {
    course: Course,
    lessons: Vec<Lesson>,
    reviews: Vec<CourseReview>,
    enrolled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EnrollState {
    Idle,
    Enrolling,
    Error(ViewError),
}

#[component]
pub fn CourseDetailView(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let course_id = CourseId::new(course_id);

    let mut enroll_state = use_signal(|| EnrollState::Idle);

    let catalog_for_resource = catalog.clone();
    let resource = use_resource(move || {
        let catalog = catalog_for_resource.clone();
        async move {
            let course = catalog
                .get_course(course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let lessons = catalog
                .list_lessons(course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let reviews = catalog
                .list_reviews(course_id)
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let enrolled = catalog
                .my_enrollments()
                .await
                .map_err(|err| ViewError::from_api(&err))?
                .iter()
                .any(|enrollment| enrollment.course_id == course_id);
            Ok::<_, ViewError>(CourseDetailData {
                course,
                lessons,
                reviews,
                enrolled,
            })
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page course-detail-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "not-found",
                        h2 { "Course not found" }
                        p { "This course may have been removed." }
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
                ViewState::Ready(data) => {
                    let title = data.course.title().to_string();
                    let instructor = data.course.instructor().to_string();
                    let description = data.course.description().to_string();
                    let rating_label = data.course.average_rating()
                        .map_or_else(|| "No ratings yet".to_string(), |r| format!("{r:.1} / 5"));
                    let raw_course_id = course_id.value();
                    let lesson_items = data.lessons.iter().map(|lesson| {
                        let heading = lesson.title().to_string();
                        let body = markdown_to_html(lesson.body());
                        let video = lesson.video_url().map(|url| url.to_string());
                        rsx! {
                            article { class: "lesson",
                                h4 { class: "lesson-title", "{heading}" }
                                div { class: "lesson-body", dangerous_inner_html: "{body}" }
                                if let Some(video) = video {
                                    a { class: "lesson-video", href: "{video}", "Watch video" }
                                }
                            }
                        }
                    });
                    let review_items = data.reviews.iter().map(|review| {
                        let stars = "★".repeat(usize::from(review.rating()));
                        let author = review.student_name().to_string();
                        let comment = review.comment().to_string();
                        let when = format_date(review.created_at());
                        rsx! {
                            li { class: "review",
                                span { class: "review-stars", "{stars}" }
                                span { class: "review-author", "{author}" }
                                span { class: "review-when", "{when}" }
                                p { class: "review-comment", "{comment}" }
                            }
                        }
                    });
                    rsx! {
                        header { class: "view-header",
                            h2 { class: "view-title", "{title}" }
                            p { class: "view-subtitle", "by {instructor} · {rating_label}" }
                        }
                        p { class: "course-description", "{description}" }
                        div { class: "course-actions",
                            if data.enrolled {
                                span { class: "enrolled-badge", "Enrolled" }
                            } else {
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    disabled: enroll_state() == EnrollState::Enrolling,
                                    onclick: move |_| {
                                        if enroll_state() == EnrollState::Enrolling {
                                            return;
                                        }
                                        let catalog = catalog.clone();
                                        let mut enroll_state = enroll_state;
                                        let mut resource = resource;
                                        spawn(async move {
                                            enroll_state.set(EnrollState::Enrolling);
                                            match catalog.enroll(course_id).await {
                                                Ok(_) => {
                                                    enroll_state.set(EnrollState::Idle);
                                                    resource.restart();
                                                }
                                                Err(err) => {
                                                    enroll_state.set(EnrollState::Error(
                                                        ViewError::from_api(&err),
                                                    ));
                                                }
                                            }
                                        });
                                    },
                                    if enroll_state() == EnrollState::Enrolling { "Enrolling..." } else { "Enroll" }
                                }
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let _ = navigator.push(Route::Assignments { course_id: raw_course_id });
                                },
                                "Assignments"
                            }
                        }
                        if let EnrollState::Error(err) = enroll_state() {
                            p { class: "form-error", "{err.message()}" }
                        }
                        section { class: "lessons-section",
                            h3 { "Lessons" }
                            if data.lessons.is_empty() {
                                p { class: "empty-hint", "No lessons yet." }
                            } else {
                                {lesson_items}
                            }
                        }
                        section { class: "reviews-section",
                            h3 { "Reviews" }
                            if data.reviews.is_empty() {
                                p { class: "empty-hint", "No reviews yet." }
                            } else {
                                ul { {review_items} }
                            }
                        }
                    }
                }
            }
        }
    }
}

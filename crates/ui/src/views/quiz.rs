use dioxus::prelude::*;
use dioxus_router::use_navigator;
use std::time::Duration;

use campus_core::model::{OptionId, QuestionId, QuizId};
use services::{QuizFlowError, QuizSession, SubmitOutcome, Tick};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{format_timer, progress_label, score_label, verdict_label};

/// Everything the question pane needs, copied out of the session so no
/// borrow is held while rendering.
#[derive(Clone, Debug, PartialEq)]
struct QuestionPane {
    course_id: u64,
    title: String,
    progress: String,
    question_id: QuestionId,
    question_text: String,
    options: Vec<(OptionId, String, bool)>,
    answered: usize,
    total: usize,
    at_first: bool,
    at_last: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct ResultsPane {
    course_id: u64,
    verdict: &'static str,
    score_line: String,
}

fn question_pane(session: &QuizSession) -> QuestionPane {
    let question = session.current_question();
    let selected = session.selected(question.id());
    QuestionPane {
        course_id: session.quiz().course_id().value(),
        title: session.quiz().title().to_string(),
        progress: progress_label(session.current_index(), session.total_questions()),
        question_id: question.id(),
        question_text: question.text().to_string(),
        options: question
            .options()
            .iter()
            .map(|option| (option.id, option.text.clone(), selected == Some(option.id)))
            .collect(),
        answered: session.answered_count(),
        total: session.total_questions(),
        at_first: session.current_index() == 0,
        at_last: session.current_index() + 1 == session.total_questions(),
    }
}

fn results_pane(session: &QuizSession) -> Option<ResultsPane> {
    let attempt = session.attempt()?;
    Some(ResultsPane {
        course_id: session.quiz().course_id().value(),
        verdict: verdict_label(session.quiz(), attempt),
        score_line: score_label(attempt),
    })
}

#[component]
pub fn QuizView(quiz_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let flow = ctx.quiz_flow();
    let quiz_id = QuizId::new(quiz_id);

    let mut vm = use_signal(|| None::<QuizSession>);
    let mut remaining = use_signal(|| None::<u32>);
    let mut notice = use_signal(|| None::<&'static str>);
    let mut confirm_open = use_signal(|| false);
    let mut enroll_offer = use_signal(|| false);
    let mut enrolling = use_signal(|| false);
    // True while the session is checked out for the network call.
    let busy = use_signal(|| false);

    let flow_for_resource = flow.clone();
    let resource = use_resource(move || {
        let flow = flow_for_resource.clone();
        let mut vm = vm;
        let mut remaining = remaining;
        async move {
            let session = flow.start(quiz_id).await.map_err(|err| match err {
                QuizFlowError::Api(api) => ViewError::from_api(&api),
                _ => ViewError::Unknown,
            })?;
            remaining.set(session.remaining_seconds());
            vm.set(Some(session));
            Ok::<_, ViewError>(())
        }
    });

    let do_submit = {
        let flow = flow.clone();
        use_callback(move |()| {
            let flow = flow.clone();
            let mut vm = vm;
            let mut notice = notice;
            let mut enroll_offer = enroll_offer;
            let mut busy = busy;
            spawn(async move {
                let taken = vm.write().take();
                let Some(mut session) = taken else {
                    return;
                };
                busy.set(true);
                let result = flow.submit(&mut session).await;
                vm.set(Some(session));
                busy.set(false);
                match result {
                    Ok(SubmitOutcome::Completed(_)) => notice.set(None),
                    Ok(SubmitOutcome::NotEnrolled) => enroll_offer.set(true),
                    Ok(SubmitOutcome::Ignored) => {}
                    Err(_) => notice.set(Some("Couldn't submit the quiz. Please try again.")),
                }
            });
        })
    };

    // One-second countdown, torn down with the view. The automatic submit on
    // expiry skips the confirmation dialog.
    use_future(move || {
        let do_submit = do_submit;
        let mut remaining = remaining;
        let mut vm = vm;
        async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let mut expired = false;
                let mut stop = false;
                if let Some(session) = vm.write().as_mut() {
                    match session.tick() {
                        Tick::Expired => expired = true,
                        Tick::Running(left) => remaining.set(Some(left)),
                        Tick::Idle => {}
                    }
                    if session.is_finished() || session.remaining_seconds().is_none() {
                        stop = true;
                    }
                }
                if expired {
                    remaining.set(Some(0));
                    do_submit.call(());
                    break;
                }
                if stop {
                    break;
                }
            }
        }
    });

    let state = view_state_from_resource(&resource);
    let pane = vm.read().as_ref().map(question_pane);
    let results = vm.read().as_ref().and_then(results_pane);
    let timer_label = remaining().map(format_timer);

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    div { class: "not-found",
                        h2 { "Quiz not found" }
                        p { "This quiz may have been removed." }
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
                ViewState::Ready(()) => {
                    if let Some(results) = results {
                        let course_id = results.course_id;
                        rsx! {
                            div { class: "quiz-results",
                                h2 { class: "view-title", "{results.verdict}" }
                                p { class: "quiz-score", "{results.score_line}" }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let _ = navigator.push(Route::CourseDetail { course_id });
                                    },
                                    "Back to course"
                                }
                            }
                        }
                    } else if busy() {
                        rsx! {
                            p { "Submitting..." }
                        }
                    } else if let Some(pane) = pane {
                        let question_id = pane.question_id;
                        let course_id = pane.course_id;
                        let option_buttons = pane.options.iter().map(|(option_id, text, selected)| {
                            let option_id = *option_id;
                            let text = text.clone();
                            let selected = *selected;
                            let mut vm = vm;
                            rsx! {
                                button {
                                    class: if selected { "quiz-option quiz-option--selected" } else { "quiz-option" },
                                    r#type: "button",
                                    onclick: move |_| {
                                        if let Some(session) = vm.write().as_mut() {
                                            session.select_option(question_id, option_id);
                                        }
                                    },
                                    "{text}"
                                }
                            }
                        });
                        rsx! {
                            header { class: "view-header",
                                h2 { class: "view-title", "{pane.title}" }
                                p { class: "view-subtitle", "{pane.progress}" }
                                if let Some(label) = timer_label {
                                    span { class: "quiz-timer", "{label}" }
                                }
                            }
                            if let Some(message) = notice() {
                                p { class: "form-error", "{message}" }
                            }
                            section { class: "quiz-question",
                                h3 { "{pane.question_text}" }
                                div { class: "quiz-options", {option_buttons} }
                            }
                            footer { class: "quiz-footer",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: pane.at_first,
                                    onclick: move |_| {
                                        if let Some(session) = vm.write().as_mut() {
                                            session.previous();
                                        }
                                    },
                                    "Previous"
                                }
                                span { class: "quiz-answered", "{pane.answered} of {pane.total} answered" }
                                if pane.at_last {
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        onclick: move |_| confirm_open.set(true),
                                        "Submit quiz"
                                    }
                                } else {
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: move |_| {
                                            if let Some(session) = vm.write().as_mut() {
                                                session.next();
                                            }
                                        },
                                        "Next"
                                    }
                                }
                            }
                            if confirm_open() {
                                div { class: "modal-overlay",
                                    div { class: "modal",
                                        h3 { "Submit quiz?" }
                                        p { "You can't change your answers afterwards." }
                                        div { class: "modal-actions",
                                            button {
                                                class: "btn btn-secondary",
                                                r#type: "button",
                                                onclick: move |_| confirm_open.set(false),
                                                "Cancel"
                                            }
                                            button {
                                                class: "btn btn-primary",
                                                r#type: "button",
                                                onclick: move |_| {
                                                    confirm_open.set(false);
                                                    do_submit.call(());
                                                },
                                                "Submit"
                                            }
                                        }
                                    }
                                }
                            }
                            if enroll_offer() {
                                div { class: "modal-overlay",
                                    div { class: "modal",
                                        h3 { "Not enrolled" }
                                        p { "You need to be enrolled in this course to take its quizzes." }
                                        div { class: "modal-actions",
                                            button {
                                                class: "btn btn-secondary",
                                                r#type: "button",
                                                onclick: move |_| {
                                                    enroll_offer.set(false);
                                                    let _ = navigator.push(Route::CourseDetail { course_id });
                                                },
                                                "Not now"
                                            }
                                            button {
                                                class: "btn btn-primary",
                                                r#type: "button",
                                                disabled: enrolling(),
                                                onclick: move |_| {
                                                    if enrolling() {
                                                        return;
                                                    }
                                                    let flow = flow.clone();
                                                    let nav = navigator;
                                                    let do_submit = do_submit;
                                                    let mut enrolling = enrolling;
                                                    let mut enroll_offer = enroll_offer;
                                                    spawn(async move {
                                                        enrolling.set(true);
                                                        let result = flow
                                                            .enroll(campus_core::model::CourseId::new(course_id))
                                                            .await;
                                                        enrolling.set(false);
                                                        match result {
                                                            Ok(_) => {
                                                                enroll_offer.set(false);
                                                                // Enrollment restored access; resubmit.
                                                                do_submit.call(());
                                                            }
                                                            Err(_) => {
                                                                enroll_offer.set(false);
                                                                let _ = nav.push(Route::CourseDetail { course_id });
                                                            }
                                                        }
                                                    });
                                                },
                                                if enrolling() { "Enrolling..." } else { "Enroll and submit" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        rsx! {
                            p { "Loading..." }
                        }
                    }
                }
            }
        }
    }
}

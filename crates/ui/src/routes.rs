use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    AssignmentsView, CourseDetailView, CourseFormView, CoursesView, HomeView, LoginView, QuizView,
    SubmissionsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login", LoginView)] Login {},
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/new", CourseFormView)] CourseNew {},
        #[route("/courses/:course_id", CourseDetailView)] CourseDetail { course_id: u64 },
        #[route("/courses/:course_id/assignments", AssignmentsView)] Assignments { course_id: u64 },
        #[route("/assignments/:assignment_id/submissions", SubmissionsView)] Submissions { assignment_id: u64 },
        #[route("/quizzes/:quiz_id", QuizView)] Quiz { quiz_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Campus" }
            ul {
                li { Link { to: Route::Home {}, "Dashboard" } }
                li { Link { to: Route::Courses {}, "Courses" } }
                li { Link { to: Route::CourseNew {}, "New Course" } }
            }
        }
    }
}

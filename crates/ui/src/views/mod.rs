mod assignments;
mod course_detail;
mod course_form;
mod courses;
mod home;
mod login;
mod quiz;
mod state;
mod submissions;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assignments::AssignmentsView;
pub use course_detail::CourseDetailView;
pub use course_form::CourseFormView;
pub use courses::CoursesView;
pub use home::HomeView;
pub use login::LoginView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use submissions::SubmissionsView;

mod assignment_vm;
mod course_vm;
mod markdown_vm;
mod quiz_vm;
mod submission_vm;
mod time_fmt;

pub use assignment_vm::{
    AssignmentFilter, AssignmentRowVm, AssignmentSortKey, map_assignment_rows,
};
pub use course_vm::{CourseRowVm, CourseSortKey, CourseStatusFilter, map_course_rows};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{format_timer, progress_label, score_label, verdict_label};
pub use submission_vm::{
    SubmissionFilter, SubmissionRowVm, SubmissionSortKey, map_submission_row, map_submission_rows,
};
pub use time_fmt::{format_date, format_datetime};

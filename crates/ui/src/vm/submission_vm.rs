use chrono::{DateTime, Utc};

use campus_core::listing::{Searchable, SortKey, SortKeyOf, SortOrder, SortValue};
use campus_core::model::{Submission, SubmissionId, SubmissionStatus};

use super::time_fmt::format_datetime;

/// UI-ready row for the grading list.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRowVm {
    pub id: SubmissionId,
    pub student_name: String,
    pub body: String,
    pub submitted_at: DateTime<Utc>,
    pub submitted_label: String,
    pub status: SubmissionStatus,
    pub grade: Option<f64>,
    pub grade_label: String,
    pub feedback: Option<String>,
}

impl Searchable for SubmissionRowVm {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.student_name]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionSortKey {
    Student,
    SubmittedAt,
    Grade,
}

impl SortKey for SubmissionSortKey {
    fn default_order(&self) -> SortOrder {
        match self {
            SubmissionSortKey::Student => SortOrder::Asc,
            SubmissionSortKey::SubmittedAt | SubmissionSortKey::Grade => SortOrder::Desc,
        }
    }
}

impl SortKeyOf<SubmissionRowVm> for SubmissionSortKey {
    fn value<'a>(&self, item: &'a SubmissionRowVm) -> SortValue<'a> {
        match self {
            SubmissionSortKey::Student => SortValue::Text(&item.student_name),
            SubmissionSortKey::SubmittedAt => SortValue::Time(item.submitted_at),
            // Ungraded submissions sort below any real grade.
            SubmissionSortKey::Grade => SortValue::Number(item.grade.unwrap_or(-1.0)),
        }
    }
}

/// Status dropdown choices for the grading list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionFilter {
    #[default]
    All,
    Ungraded,
    Graded,
}

impl SubmissionFilter {
    pub const ALL: [SubmissionFilter; 3] = [
        SubmissionFilter::All,
        SubmissionFilter::Ungraded,
        SubmissionFilter::Graded,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubmissionFilter::All => "All",
            SubmissionFilter::Ungraded => "Needs grading",
            SubmissionFilter::Graded => "Graded",
        }
    }

    #[must_use]
    pub fn matches(self, row: &SubmissionRowVm) -> bool {
        match self {
            SubmissionFilter::All => true,
            SubmissionFilter::Ungraded => row.status == SubmissionStatus::Submitted,
            SubmissionFilter::Graded => row.status == SubmissionStatus::Graded,
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "ungraded" => SubmissionFilter::Ungraded,
            "graded" => SubmissionFilter::Graded,
            _ => SubmissionFilter::All,
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            SubmissionFilter::All => "all",
            SubmissionFilter::Ungraded => "ungraded",
            SubmissionFilter::Graded => "graded",
        }
    }
}

/// Convert domain submissions into grading rows.
#[must_use]
pub fn map_submission_rows(submissions: &[Submission]) -> Vec<SubmissionRowVm> {
    submissions.iter().map(map_submission_row).collect()
}

#[must_use]
pub fn map_submission_row(submission: &Submission) -> SubmissionRowVm {
    let grade_label = submission
        .grade()
        .map_or_else(|| "—".to_string(), |grade| format!("{grade:.0} / 100"));
    SubmissionRowVm {
        id: submission.id(),
        student_name: submission.student_name().to_string(),
        body: submission.body().to_string(),
        submitted_at: submission.submitted_at(),
        submitted_label: format_datetime(submission.submitted_at()),
        status: submission.status(),
        grade: submission.grade(),
        grade_label,
        feedback: submission.feedback().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::listing::{FilterState, displayed};
    use campus_core::model::{AssignmentId, StudentId};
    use campus_core::time::fixed_now;

    fn build(id: u64, name: &str, grade: Option<f64>) -> Submission {
        Submission::new(
            SubmissionId::new(id),
            AssignmentId::new(1),
            StudentId::new(id),
            name,
            "answer",
            fixed_now(),
            grade,
            None,
        )
    }

    #[test]
    fn ungraded_filter_finds_pending_work() {
        let rows = map_submission_rows(&[
            build(1, "Lin", Some(90.0)),
            build(2, "Sam", None),
        ]);
        let state = FilterState::new(SubmissionSortKey::Student);
        let filter = SubmissionFilter::Ungraded;
        let visible = displayed(&rows, &state, |r| filter.matches(r));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].student_name, "Sam");
    }

    #[test]
    fn grade_sort_puts_ungraded_last_by_default() {
        let rows = map_submission_rows(&[
            build(1, "Lin", Some(70.0)),
            build(2, "Sam", None),
            build(3, "Kim", Some(95.0)),
        ]);
        let state = FilterState::new(SubmissionSortKey::Grade);
        let visible = displayed(&rows, &state, |_| true);
        let names: Vec<_> = visible.iter().map(|r| r.student_name.as_str()).collect();
        assert_eq!(names, vec!["Kim", "Lin", "Sam"]);
    }

    #[test]
    fn student_search_is_case_insensitive() {
        let rows = map_submission_rows(&[build(1, "Lin Chen", None), build(2, "Sam Ortiz", None)]);
        let mut state = FilterState::new(SubmissionSortKey::Student);
        state.search_query = "LIN".to_string();
        let visible = displayed(&rows, &state, |_| true);
        assert_eq!(visible.len(), 1);
    }
}

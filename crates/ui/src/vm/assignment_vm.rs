use chrono::{DateTime, Utc};

use campus_core::listing::{Searchable, SortKey, SortKeyOf, SortOrder, SortValue};
use campus_core::model::{Assignment, AssignmentId};

use super::time_fmt::format_date;

/// UI-ready row for the assignment list.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentRowVm {
    pub id: AssignmentId,
    pub title: String,
    pub due_at: Option<DateTime<Utc>>,
    pub due_label: String,
    pub overdue: bool,
    pub points_label: String,
    pub max_points: u32,
}

impl Searchable for AssignmentRowVm {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSortKey {
    Title,
    DueDate,
    Points,
}

impl SortKey for AssignmentSortKey {
    fn default_order(&self) -> SortOrder {
        match self {
            AssignmentSortKey::Title | AssignmentSortKey::DueDate => SortOrder::Asc,
            AssignmentSortKey::Points => SortOrder::Desc,
        }
    }
}

impl SortKeyOf<AssignmentRowVm> for AssignmentSortKey {
    fn value<'a>(&self, item: &'a AssignmentRowVm) -> SortValue<'a> {
        match self {
            AssignmentSortKey::Title => SortValue::Text(&item.title),
            // Deadline-free assignments sort to the far future so upcoming
            // work lists first.
            AssignmentSortKey::DueDate => {
                SortValue::Time(item.due_at.unwrap_or(DateTime::<Utc>::MAX_UTC))
            }
            AssignmentSortKey::Points => SortValue::Number(f64::from(item.max_points)),
        }
    }
}

/// Deadline dropdown choices for the assignment list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssignmentFilter {
    #[default]
    All,
    Open,
    Overdue,
}

impl AssignmentFilter {
    pub const ALL: [AssignmentFilter; 3] = [
        AssignmentFilter::All,
        AssignmentFilter::Open,
        AssignmentFilter::Overdue,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AssignmentFilter::All => "All",
            AssignmentFilter::Open => "Open",
            AssignmentFilter::Overdue => "Overdue",
        }
    }

    #[must_use]
    pub fn matches(self, row: &AssignmentRowVm) -> bool {
        match self {
            AssignmentFilter::All => true,
            AssignmentFilter::Open => !row.overdue,
            AssignmentFilter::Overdue => row.overdue,
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "open" => AssignmentFilter::Open,
            "overdue" => AssignmentFilter::Overdue,
            _ => AssignmentFilter::All,
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            AssignmentFilter::All => "all",
            AssignmentFilter::Open => "open",
            AssignmentFilter::Overdue => "overdue",
        }
    }
}

/// Convert domain assignments into list rows.
#[must_use]
pub fn map_assignment_rows(assignments: &[Assignment], now: DateTime<Utc>) -> Vec<AssignmentRowVm> {
    assignments
        .iter()
        .map(|assignment| {
            let due_label = assignment
                .due_at()
                .map_or_else(|| "No deadline".to_string(), |due| {
                    format!("Due {}", format_date(due))
                });
            AssignmentRowVm {
                id: assignment.id(),
                title: assignment.title().to_string(),
                due_at: assignment.due_at(),
                due_label,
                overdue: assignment.is_overdue(now),
                points_label: format!("{} pts", assignment.max_points()),
                max_points: assignment.max_points(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::listing::{FilterState, displayed};
    use campus_core::model::CourseId;
    use campus_core::time::fixed_now;
    use chrono::Duration;

    fn build(id: u64, title: &str, due_days: Option<i64>) -> Assignment {
        Assignment::new(
            AssignmentId::new(id),
            CourseId::new(1),
            title,
            "",
            due_days.map(|days| fixed_now() + Duration::days(days)),
            100,
        )
        .unwrap()
    }

    #[test]
    fn math_search_scenario() {
        let assignments = vec![
            build(1, "Math HW", Some(1)),
            build(2, "Physics Lab", Some(2)),
            build(3, "Math Quiz", Some(3)),
        ];
        let rows = map_assignment_rows(&assignments, fixed_now());

        let mut state = FilterState::new(AssignmentSortKey::Title);
        state.search_query = "math".to_string();
        let visible = displayed(&rows, &state, |_| true);
        let titles: Vec<_> = visible.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Math HW", "Math Quiz"]);
    }

    #[test]
    fn due_date_sort_puts_no_deadline_last() {
        let assignments = vec![
            build(1, "No deadline", None),
            build(2, "Soon", Some(1)),
            build(3, "Later", Some(5)),
        ];
        let rows = map_assignment_rows(&assignments, fixed_now());
        let state = FilterState::new(AssignmentSortKey::DueDate);
        let visible = displayed(&rows, &state, |_| true);
        let titles: Vec<_> = visible.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Soon", "Later", "No deadline"]);
    }

    #[test]
    fn overdue_filter_selects_past_deadlines() {
        let assignments = vec![build(1, "Past", Some(-1)), build(2, "Future", Some(1))];
        let rows = map_assignment_rows(&assignments, fixed_now());
        let state = FilterState::new(AssignmentSortKey::Title);
        let filter = AssignmentFilter::Overdue;
        let visible = displayed(&rows, &state, |r| filter.matches(r));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Past");
    }
}

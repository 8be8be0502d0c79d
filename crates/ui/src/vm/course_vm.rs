use chrono::{DateTime, Utc};

use campus_core::listing::{Searchable, SortKey, SortKeyOf, SortOrder, SortValue};
use campus_core::model::{Course, CourseId, CourseStatus};

use super::time_fmt::format_date;

/// UI-ready row for the course list.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseRowVm {
    pub id: CourseId,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub status: CourseStatus,
    pub rating: Option<f32>,
    pub rating_label: String,
    pub created_at: DateTime<Utc>,
    pub created_label: String,
}

impl Searchable for CourseRowVm {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.instructor, &self.category]
    }
}

/// Sortable columns of the course list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseSortKey {
    Title,
    Rating,
    Created,
}

impl SortKey for CourseSortKey {
    fn default_order(&self) -> SortOrder {
        match self {
            CourseSortKey::Title => SortOrder::Asc,
            CourseSortKey::Rating | CourseSortKey::Created => SortOrder::Desc,
        }
    }
}

impl SortKeyOf<CourseRowVm> for CourseSortKey {
    fn value<'a>(&self, item: &'a CourseRowVm) -> SortValue<'a> {
        match self {
            CourseSortKey::Title => SortValue::Text(&item.title),
            CourseSortKey::Rating => SortValue::Number(f64::from(item.rating.unwrap_or(0.0))),
            CourseSortKey::Created => SortValue::Time(item.created_at),
        }
    }
}

/// Status dropdown choices for the course list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CourseStatusFilter {
    #[default]
    All,
    Published,
    Draft,
    Archived,
}

impl CourseStatusFilter {
    pub const ALL: [CourseStatusFilter; 4] = [
        CourseStatusFilter::All,
        CourseStatusFilter::Published,
        CourseStatusFilter::Draft,
        CourseStatusFilter::Archived,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CourseStatusFilter::All => "All",
            CourseStatusFilter::Published => "Published",
            CourseStatusFilter::Draft => "Draft",
            CourseStatusFilter::Archived => "Archived",
        }
    }

    #[must_use]
    pub fn matches(self, row: &CourseRowVm) -> bool {
        match self {
            CourseStatusFilter::All => true,
            CourseStatusFilter::Published => row.status == CourseStatus::Published,
            CourseStatusFilter::Draft => row.status == CourseStatus::Draft,
            CourseStatusFilter::Archived => row.status == CourseStatus::Archived,
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "published" => CourseStatusFilter::Published,
            "draft" => CourseStatusFilter::Draft,
            "archived" => CourseStatusFilter::Archived,
            _ => CourseStatusFilter::All,
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            CourseStatusFilter::All => "all",
            CourseStatusFilter::Published => "published",
            CourseStatusFilter::Draft => "draft",
            CourseStatusFilter::Archived => "archived",
        }
    }
}

/// Convert domain courses into list rows.
#[must_use]
pub fn map_course_rows(courses: &[Course]) -> Vec<CourseRowVm> {
    courses
        .iter()
        .map(|course| {
            let rating_label = course
                .average_rating()
                .map_or_else(|| "No ratings".to_string(), |r| format!("{r:.1} / 5"));
            CourseRowVm {
                id: course.id(),
                title: course.title().to_string(),
                instructor: course.instructor().to_string(),
                category: course.category().to_string(),
                status: course.status(),
                rating: course.average_rating(),
                rating_label,
                created_at: course.created_at(),
                created_label: format_date(course.created_at()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::listing::{FilterState, displayed};
    use campus_core::time::fixed_now;
    use chrono::Duration;

    fn row(title: &str, status: CourseStatus, rating: Option<f32>, days_ago: i64) -> CourseRowVm {
        let created_at = fixed_now() - Duration::days(days_ago);
        CourseRowVm {
            id: CourseId::new(1),
            title: title.to_string(),
            instructor: "Ada".to_string(),
            category: "Math".to_string(),
            status,
            rating,
            rating_label: String::new(),
            created_at,
            created_label: String::new(),
        }
    }

    #[test]
    fn search_hits_title_and_instructor() {
        let rows = vec![
            row("Algebra", CourseStatus::Published, None, 0),
            row("Biology", CourseStatus::Published, None, 0),
        ];
        let mut state = FilterState::new(CourseSortKey::Title);
        state.search_query = "ada".to_string();
        let filter = CourseStatusFilter::All;
        assert_eq!(displayed(&rows, &state, |r| filter.matches(r)).len(), 2);

        state.search_query = "alg".to_string();
        assert_eq!(displayed(&rows, &state, |r| filter.matches(r)).len(), 1);
    }

    #[test]
    fn status_filter_narrows() {
        let rows = vec![
            row("Algebra", CourseStatus::Published, None, 0),
            row("Biology", CourseStatus::Draft, None, 0),
        ];
        let state = FilterState::new(CourseSortKey::Title);
        let filter = CourseStatusFilter::Draft;
        let visible = displayed(&rows, &state, |r| filter.matches(r));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Biology");
    }

    #[test]
    fn rating_sorts_descending_by_default() {
        let rows = vec![
            row("Low", CourseStatus::Published, Some(2.0), 0),
            row("High", CourseStatus::Published, Some(4.5), 0),
            row("Unrated", CourseStatus::Published, None, 0),
        ];
        let state = FilterState::new(CourseSortKey::Rating);
        let visible = displayed(&rows, &state, |_| true);
        let titles: Vec<_> = visible.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["High", "Low", "Unrated"]);
    }
}

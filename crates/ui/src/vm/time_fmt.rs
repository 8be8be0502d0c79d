use chrono::{DateTime, Utc};

/// Short date for list rows ("Mar 1, 2024").
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Date plus time for detail panes.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::time::fixed_now;

    #[test]
    fn date_is_short_and_human() {
        assert_eq!(format_date(fixed_now()), "Mar 1, 2024");
    }

    #[test]
    fn datetime_includes_time() {
        assert_eq!(format_datetime(fixed_now()), "Mar 1, 2024 00:00");
    }
}

//! Time windows for headway queries.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Unix-second time window for a headway query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryWindow {
    pub from: i64,
    pub to: i64,
}

impl QueryWindow {
    /// One week of seconds, the dashboard's fixed query span.
    pub const WEEK_SECONDS: i64 = 604_800;

    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// The week-long window starting at midnight UTC on `date`.
    pub fn week_starting(date: NaiveDate) -> Self {
        let from = NaiveDateTime::new(date, NaiveTime::MIN).and_utc().timestamp();
        Self {
            from,
            to: from + Self::WEEK_SECONDS,
        }
    }
}

/// The most recent Monday on or before `today`. The dashboard defaults
/// its week picker to this date.
pub fn previous_monday(today: NaiveDate) -> NaiveDate {
    let days_since_monday = u64::from(today.weekday().num_days_from_monday());
    today
        .checked_sub_days(Days::new(days_since_monday))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    #[test]
    fn test_week_starting_spans_one_week() {
        let window = QueryWindow::week_starting(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
        assert_eq!(window.from, 1_682_899_200); // 2023-05-01T00:00:00Z
        assert_eq!(window.to - window.from, QueryWindow::WEEK_SECONDS);
    }

    #[test]
    fn test_previous_monday() {
        // 2023-05-04 is a Thursday.
        let thursday = NaiveDate::from_ymd_opt(2023, 5, 4).unwrap();
        assert_eq!(
            previous_monday(thursday),
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
        );

        // A Monday maps to itself.
        let monday = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        assert_eq!(previous_monday(monday), monday);

        // A Sunday goes back six days.
        let sunday = NaiveDate::from_ymd_opt(2023, 5, 7).unwrap();
        assert_eq!(
            previous_monday(sunday),
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
        );
        assert_eq!(previous_monday(sunday).weekday(), Weekday::Mon);
    }
}

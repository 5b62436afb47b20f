//! Human-friendly day labels for the history listing.

use crate::constants::DAY_LABEL_DATE_FORMAT;
use chrono::{Days, NaiveDate};
use std::fmt;

/// How a day is presented relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Yesterday,
    On(NaiveDate),
}

impl DayLabel {
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use moodlog::labels::DayLabel;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let yesterday = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    /// assert_eq!(DayLabel::for_day(yesterday, today), DayLabel::Yesterday);
    /// assert_eq!(DayLabel::for_day(yesterday, today).to_string(), "Yesterday");
    /// ```
    pub fn for_day(day: NaiveDate, today: NaiveDate) -> Self {
        if day == today {
            DayLabel::Today
        } else if today.checked_sub_days(Days::new(1)) == Some(day) {
            DayLabel::Yesterday
        } else {
            DayLabel::On(day)
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Today => f.write_str("Today"),
            DayLabel::Yesterday => f.write_str("Yesterday"),
            DayLabel::On(day) => write!(f, "{}", day.format(DAY_LABEL_DATE_FORMAT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_and_yesterday() {
        let today = date(2024, 1, 1);
        assert_eq!(DayLabel::for_day(today, today), DayLabel::Today);
        assert_eq!(
            DayLabel::for_day(date(2023, 12, 31), today),
            DayLabel::Yesterday
        );
    }

    #[test]
    fn test_older_and_future_days_are_dated() {
        let today = date(2024, 1, 15);
        assert_eq!(
            DayLabel::for_day(date(2024, 1, 13), today).to_string(),
            "13 January 2024"
        );
        // Entries stamped ahead of the clock are shown by date, not as "Today".
        assert_eq!(
            DayLabel::for_day(date(2024, 1, 16), today),
            DayLabel::On(date(2024, 1, 16))
        );
    }
}

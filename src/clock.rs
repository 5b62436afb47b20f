//! Time source for the entry store.
//!
//! Entries are bucketed by local calendar day. The store never calls `Local::now()`
//! directly so tests can pin "now" to any instant.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::sync::Mutex;

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// The local calendar day of `now()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that returns whatever instant it was last set to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        FixedClock {
            now: Mutex::new(now),
        }
    }

    /// A clock set to the given local wall-clock time.
    ///
    /// Returns `None` when the time does not exist in the local timezone, e.g. it
    /// falls into a DST gap.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .map(FixedClock::new)
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// The local calendar day an instant falls on.
pub fn day_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Offset, Utc};

    #[test]
    fn test_fixed_clock_returns_set_instant() {
        let clock = FixedClock::at(2024, 1, 15, 12, 0).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        clock.set(clock.now() + Duration::days(1));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }

    #[test]
    fn test_day_of_uses_local_calendar_day() {
        let local_noon = Local.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let as_utc = local_noon.with_timezone(&Utc);
        assert_eq!(day_of(&as_utc), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(day_of(&local_noon), day_of(&as_utc));
    }

    #[test]
    fn test_day_of_ignores_utc_date_near_midnight() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let offset = Local
            .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
            .unwrap()
            .offset()
            .fix()
            .local_minus_utc();
        if offset == 0 {
            // Local time is UTC here; the dates can never differ.
            return;
        }

        // East of UTC, local midnight is still the previous UTC day; west of it,
        // the last local minute is already the next UTC day.
        let local = if offset > 0 {
            Local.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        } else {
            Local.with_ymd_and_hms(2024, 1, 15, 23, 59, 0).unwrap()
        };
        let as_utc = local.with_timezone(&Utc);

        assert_ne!(as_utc.date_naive(), day);
        assert_eq!(day_of(&as_utc), day);
    }

    #[test]
    fn test_system_clock_today_matches_local_now() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}

//! Generation clock: the single "now" every sampler measures against.
//!
//! The clock is read once when a run starts and never advances, so all
//! "not in the future" checks in one run agree with each other.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Length of a calendar month in the generator's date arithmetic.
pub const DAYS_PER_MONTH: u64 = 30;
pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationClock {
    now: NaiveDate,
}

impl GenerationClock {
    /// Clock pinned to today's UTC date.
    pub fn system() -> Self {
        Self { now: Utc::now().date_naive() }
    }

    /// Clock pinned to an explicit date (tests, reproducible runs).
    pub fn fixed(now: NaiveDate) -> Self {
        Self { now }
    }

    pub fn now(&self) -> NaiveDate {
        self.now
    }

    /// Fractional years elapsed from `since` to now. Negative when
    /// `since` lies after now.
    pub fn years_since(&self, since: NaiveDate) -> f64 {
        (self.now - since).num_days() as f64 / DAYS_PER_YEAR
    }

    pub fn is_future(&self, date: NaiveDate) -> bool {
        date > self.now
    }
}

/// Add `months` generator-months (30 days each) to `date`.
pub fn add_months(date: NaiveDate, months: u64) -> NaiveDate {
    add_days(date, months * DAYS_PER_MONTH)
}

pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn years_since_uses_365_day_years() {
        let clock = GenerationClock::fixed(d(2021, 1, 1));
        let years = clock.years_since(d(2020, 1, 2));
        assert!((years - 365.0 / 365.0).abs() < 1e-9, "got {years}");
        assert!(clock.years_since(d(2022, 1, 1)) < 0.0);
    }

    #[test]
    fn months_are_thirty_days() {
        assert_eq!(add_months(d(2020, 1, 1), 2), d(2020, 3, 1));
        assert_eq!(add_months(d(2021, 1, 1), 6), d(2021, 6, 30));
    }

    #[test]
    fn today_is_not_future() {
        let clock = GenerationClock::fixed(d(2024, 5, 5));
        assert!(!clock.is_future(d(2024, 5, 5)));
        assert!(clock.is_future(d(2024, 5, 6)));
    }
}

//! Date windows and work-day arithmetic.
//!
//! Everything here is a pure function of its arguments: the reference date is
//! always passed in explicitly, so "current week" and "current month" windows
//! are reproducible in tests without touching the system clock.
//!
//! Windows are **inclusive on both ends** and carry dates only; business
//! hours and timezones live in [`crate::overlap`]. A window whose start is
//! after its end is treated as empty rather than rejected; malformed task
//! dates must degrade to zero-valued results, not errors.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EngineError, Result};

/// An inclusive date range used as the query window for utilization and
/// overlap calculations. Not persisted anywhere, purely a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// First day of the window (inclusive).
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Creates a window from two inclusive dates. `start > end` is allowed
    /// and yields an empty window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The Monday-start week containing `today`: start = `today` minus its
    /// weekday index (Monday = 0), end = start + 6 days.
    pub fn week_of(today: NaiveDate) -> Self {
        let start = add_days(today, -i64::from(today.weekday().num_days_from_monday()));
        Self::new(start, add_days(start, 6))
    }

    /// The calendar month containing `today`, first day through last day.
    /// Month length follows exact calendar rules (December rollover,
    /// 28/29-day February), not a fixed day count.
    pub fn month_of(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
        let (next_year, next_month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .unwrap_or(today);
        Self::new(start, end)
    }

    /// Parses a window from two ISO-8601 `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] if either string is not a valid
    /// calendar date.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_iso_date(start)?, parse_iso_date(end)?))
    }

    /// Whether the window contains no days (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar days in the window, both ends inclusive.
    /// Zero for an empty window.
    pub fn day_count(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (self.end - self.start).num_days() + 1
    }

    /// Number of work days (Monday through Friday) in the window.
    /// Zero for an empty window.
    pub fn work_days(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .filter(|day| day.weekday().num_days_from_monday() < 5)
            .count() as u32
    }

    /// Clamps two windows to their common days: `max(starts)..min(ends)`.
    /// `None` when they share no days.
    pub fn intersect(self, other: Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start > end {
            None
        } else {
            Some(Self::new(start, end))
        }
    }

    /// Whether two windows share at least one day. Empty windows overlap
    /// nothing.
    pub fn overlaps(&self, other: Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start <= other.end && other.start <= self.end
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parse an ISO-8601 `YYYY-MM-DD` string into a date.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] when the string is not a valid date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidDate(format!("'{s}': {e}")))
}

/// Date shifted by `days`, saturating at the calendar limits.
fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

// ── Tests ───────────────────────────────────────────────────────────────────

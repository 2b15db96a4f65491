//! Competency periods.
//!
//! A competency is the calendar year-month every financial report is scoped
//! to. All comparisons happen on the UTC year/month of an instant.

use core::str::FromStr;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Calendar year-month scoping a financial report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Competency {
    year: i32,
    month: u32,
}

impl Competency {
    /// Build a competency; `month` must be in `1..=12`.
    pub fn new(year: i32, month: u32) -> DomainResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The competency an instant falls into.
    pub fn of(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// True when the instant's UTC year/month equals this competency.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant.year() == self.year && instant.month() == self.month
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// Days of this competency already elapsed as of `today`.
    ///
    /// Clamps to the full month for past competencies and to zero for future
    /// ones; the current month counts the day-of-month of `today`. Drives the
    /// accrual revenue forecast.
    pub fn days_elapsed(&self, today: DateTime<Utc>) -> u32 {
        let current = (today.year(), today.month());
        let this = (self.year, self.month);
        if this < current {
            self.days_in_month()
        } else if this == current {
            today.day()
        } else {
            0
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl core::fmt::Display for Competency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Competency {
    type Err = DomainError;

    /// Parse the `YYYY-MM` form used by report selectors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| DomainError::invalid_id(format!("competency: expected YYYY-MM, got {s:?}")))?;
        let year: i32 = year
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("competency year: {year:?}")))?;
        let month: u32 = month
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("competency month: {month:?}")))?;
        Self::new(year, month).map_err(|_| {
            DomainError::invalid_id(format!("competency month out of range: {month}"))
        })
    }
}

//! Billing month and holiday models.
//!
//! This module contains the validated [`BillingMonth`] value and the
//! institution-wide [`Holiday`] record used to define the calculation
//! context for a billing request.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar date flagged institution-wide as non-business.
///
/// Inactive records are kept in the feed for history but excluded from
/// every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday date.
    pub date: NaiveDate,
    /// Whether the holiday currently applies.
    pub active: bool,
}

/// A validated year/month pair identifying one billed month.
///
/// # Example
///
/// ```
/// use canteen_engine::models::BillingMonth;
/// use chrono::NaiveDate;
///
/// let month = BillingMonth::new(2025, 12).unwrap();
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
/// assert!(BillingMonth::new(2025, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingMonth {
    year: i32,
    month: u32,
}

impl BillingMonth {
    /// Creates a billing month, rejecting months outside 1-12 and years
    /// chrono cannot represent.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Validated in `new`, so construction cannot fail here.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated on construction")
    }

    /// Returns the last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .expect("validated on construction")
    }

    /// Checks if a date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Iterates every calendar day of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first_day()
            .iter_days()
            .take_while(move |date| *date <= last)
    }
}

impl std::fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

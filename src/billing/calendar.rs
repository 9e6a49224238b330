//! Business-day resolution for a billing month.
//!
//! A business day is a Monday-Friday date not flagged as an active
//! holiday. Weekends never count; inactive holiday records are ignored
//! entirely.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{BillingMonth, Holiday};

/// The resolved calendar for one billed month: the ordered business days
/// plus the active holiday dates used by the enrolled-holiday
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    month: BillingMonth,
    business_days: Vec<NaiveDate>,
    holidays: BTreeSet<NaiveDate>,
}

impl MonthCalendar {
    /// Resolves the calendar for a month against the holiday feed.
    pub fn resolve(month: BillingMonth, holidays: &[Holiday]) -> Self {
        let holiday_dates = month_holidays(month, holidays);
        let business_days = month
            .days()
            .filter(|date| is_weekday(*date) && !holiday_dates.contains(date))
            .collect();
        Self {
            month,
            business_days,
            holidays: holiday_dates,
        }
    }

    /// Returns the billed month.
    pub fn month(&self) -> BillingMonth {
        self.month
    }

    /// Returns every business day of the month in ascending order.
    pub fn business_days(&self) -> &[NaiveDate] {
        &self.business_days
    }

    /// Returns the number of business days in the month.
    pub fn business_day_count(&self) -> u32 {
        self.business_days.len() as u32
    }

    /// Returns the first business day of the month, if any.
    pub fn first_business_day(&self) -> Option<NaiveDate> {
        self.business_days.first().copied()
    }

    /// Returns the active holiday dates falling inside the month.
    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }
}

/// Computes the ordered business days of a month: every Monday-Friday
/// date not flagged as an active holiday.
///
/// # Example
///
/// ```
/// use canteen_engine::billing::calendar::business_days;
/// use canteen_engine::models::BillingMonth;
///
/// // December 2025 starts on a Monday and has 23 weekdays.
/// let month = BillingMonth::new(2025, 12).unwrap();
/// let days = business_days(month, &[]);
/// assert_eq!(days.len(), 23);
/// ```
pub fn business_days(month: BillingMonth, holidays: &[Holiday]) -> Vec<NaiveDate> {
    MonthCalendar::resolve(month, holidays).business_days.clone()
}

/// Returns the active holiday dates inside the month.
pub fn month_holidays(month: BillingMonth, holidays: &[Holiday]) -> BTreeSet<NaiveDate> {
    holidays
        .iter()
        .filter(|holiday| holiday.active && month.contains(holiday.date))
        .map(|holiday| holiday.date)
        .collect()
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

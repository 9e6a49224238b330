//! Per-person day accumulation.
//!
//! Walks every business day of the billed month through the entitlement
//! matcher, collecting the billable days and the per-category tallies,
//! then reconciles enrolled holidays (holidays falling on a committed
//! weekday count toward the inscription tally without being billed).

use rust_decimal::Decimal;

use crate::models::{BillableDay, DayCategory, DayCounts};

use super::calendar::MonthCalendar;
use super::matcher::{DayMatch, PersonEntitlements};

/// The raw accumulation for one person and month, before discounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAccumulation {
    /// Every charged day, ascending by date.
    pub billable_days: Vec<BillableDay>,
    /// Per-category tallies.
    pub counts: DayCounts,
}

impl DayAccumulation {
    /// Sum of the billable day prices.
    pub fn subtotal(&self) -> Decimal {
        self.billable_days.iter().map(|day| day.price).sum()
    }
}

/// Accumulates one person's month: business-day classification plus the
/// enrolled-holiday reconciliation.
///
/// A person with zero enrollments is fine — days resolve to nothing
/// unless an extra request, cancellation, or invitation applies. The
/// function is pure: identical inputs give identical output.
pub fn accumulate(entitlements: &PersonEntitlements, calendar: &MonthCalendar) -> DayAccumulation {
    let mut billable_days = Vec::new();
    let mut counts = DayCounts::default();

    for &date in calendar.business_days() {
        match entitlements.classify(date) {
            DayMatch::Invited { also_enrolled } => {
                counts.invited += 1;
                // An invited day on a committed weekday still counts as an
                // inscription day, it just is not billed.
                if also_enrolled {
                    counts.enrolled += 1;
                }
            }
            DayMatch::Cancelled => {
                counts.cancelled += 1;
            }
            DayMatch::Extra { price } => {
                counts.extra += 1;
                billable_days.push(BillableDay {
                    date,
                    category: DayCategory::Extra,
                    price,
                    description: "Extra day".to_string(),
                });
            }
            DayMatch::Enrolled { price } => {
                counts.enrolled += 1;
                billable_days.push(BillableDay {
                    date,
                    category: DayCategory::Enrollment,
                    price,
                    description: "Enrolled day".to_string(),
                });
            }
            DayMatch::Unmatched => {}
        }
    }

    // Holidays never appear among the business days, so committed weekdays
    // lost to a holiday are tallied here: they count toward the inscription
    // days without producing a charge.
    for &holiday in calendar.holidays() {
        if entitlements.enrollment_for_day(holiday).is_some() {
            counts.enrolled_holidays += 1;
            counts.enrolled += 1;
        }
    }

    DayAccumulation {
        billable_days,
        counts,
    }
}

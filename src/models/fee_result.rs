//! Fee calculation result models.
//!
//! This module contains the derived structures produced by a billing
//! request: per-day billing lines, per-person results with the full
//! discount/exemption breakdown, household rollups, and the
//! institution-wide [`BillingSummary`]. Nothing here is persisted; every
//! value is recomputed from scratch on each request.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::person::PersonKind;

/// The category of a billable day.
///
/// Only these two categories ever produce a charge; invitation,
/// cancellation, and holiday days are tracked through counters instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// A day covered by the standing weekly enrollment.
    Enrollment,
    /// A day granted through an approved extra-day request.
    Extra,
}

/// A single charged day for one person.
///
/// # Example
///
/// ```
/// use canteen_engine::models::{BillableDay, DayCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let day = BillableDay {
///     date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
///     category: DayCategory::Enrollment,
///     price: Decimal::from_str("6.00").unwrap(),
///     description: "Enrolled day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillableDay {
    /// The charged calendar date.
    pub date: NaiveDate,
    /// How the day became billable.
    pub category: DayCategory,
    /// The price charged for the day.
    pub price: Decimal,
    /// Human-readable description for statements and exports.
    pub description: String,
}

/// Per-category day tallies for one person and month.
///
/// `enrolled` is the inscription tally: billable enrollment days plus
/// enrolled holidays plus invited days that coincide with an enrolled
/// weekday. `enrolled_holidays` and `invited` additionally count those
/// last two on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayCounts {
    /// Inscription days (billable enrollment + enrolled holidays +
    /// invited-while-enrolled).
    pub enrolled: u32,
    /// Approved extra days.
    pub extra: u32,
    /// Cancelled days.
    pub cancelled: u32,
    /// Holidays that fell on an enrolled weekday (informational).
    pub enrolled_holidays: u32,
    /// Invited days, including invited-while-enrolled.
    pub invited: u32,
}

/// Outcome of the attendance-rate discount check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDiscount {
    /// Whether the discount applies.
    pub eligible: bool,
    /// The applied percentage (zero when not eligible).
    pub rate_pct: Decimal,
    /// The person's actual attendance rate over the month's business days.
    pub attendance_rate_pct: Decimal,
    /// Billable days required to qualify.
    pub required_days: u32,
}

/// Outcome of the sibling-discount ranking for one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingDiscount {
    /// Whether the child's rank grants the discount.
    pub applied: bool,
    /// The discount percentage already embedded in the day prices.
    pub rate_pct: Decimal,
    /// The child's rank by theoretical full-price cost (1 = highest);
    /// absent when the household has no defined ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl SiblingDiscount {
    /// The no-discount outcome used for staff and for households without
    /// a defined ranking.
    pub fn none() -> Self {
        Self {
            applied: false,
            rate_pct: Decimal::ZERO,
            rank: None,
        }
    }
}

/// Outcome of the exemption check for one person and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionStatus {
    /// Whether the whole month is exempt.
    pub exempt: bool,
    /// The recorded reason, when exempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The complete monthly fee result for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFeeResult {
    /// The billed person's id.
    pub person_id: String,
    /// Whether the person is a child or staff.
    pub kind: PersonKind,
    /// Every charged day, ascending by date.
    pub billable_days: Vec<BillableDay>,
    /// Per-category tallies.
    pub counts: DayCounts,
    /// Business days in the billed month.
    pub business_day_count: u32,
    /// Sum of day prices before the attendance discount.
    pub subtotal: Decimal,
    /// Attendance-discount outcome.
    pub attendance: AttendanceDiscount,
    /// Sibling-discount outcome (never applied for staff).
    pub sibling: SiblingDiscount,
    /// Exemption outcome.
    pub exemption: ExemptionStatus,
    /// Amount after the attendance discount, before any exemption;
    /// retained for audit even when the exemption zeroes the total.
    pub amount_before_exemption: Decimal,
    /// Final payable amount.
    pub total_amount: Decimal,
}

impl PersonFeeResult {
    /// Number of charged days (enrollment + extra).
    pub fn billable_day_count(&self) -> u32 {
        self.billable_days.len() as u32
    }
}

/// The monthly fee result for one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdFeeResult {
    /// The household id.
    pub household_id: String,
    /// Per-person results: all children, then the staff guardian if any.
    pub members: Vec<PersonFeeResult>,
    /// Sum of the members' final amounts.
    pub total_amount: Decimal,
    /// Sum of the members' charged days.
    pub total_billable_days: u32,
}

/// Institution-wide totals across all billed households.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionTotals {
    /// Sum of all household totals.
    pub total_amount: Decimal,
    /// Sum of all charged days.
    pub total_billable_days: u32,
    /// Number of billed households.
    pub household_count: u32,
    /// Number of billed persons.
    pub person_count: u32,
}

/// The complete result of a billing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The billed year.
    pub year: i32,
    /// The billed month (1-12).
    pub month: u32,
    /// Business days in the billed month.
    pub business_day_count: u32,
    /// Per-household results.
    pub households: Vec<HouseholdFeeResult>,
    /// Institution-wide totals.
    pub totals: InstitutionTotals,
    /// Total calculation duration in microseconds.
    pub duration_us: u64,
}

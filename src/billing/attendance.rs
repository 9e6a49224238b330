//! Attendance-rate discount.
//!
//! A person who attends at least a configured percentage of the month's
//! business days earns a percentage discount on the subtotal. This is a
//! hard cliff, not a sliding scale: one day short of the threshold means
//! no discount at all.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{AttendanceDiscount, PricingConfig};

/// Computes the attendance-discount outcome for one person.
///
/// Required days = `ceil(business_days × threshold_pct / 100)`. The base
/// is the month's total business days, not the person's enrolled
/// weekdays: measured against enrolled days, a two-day-a-week enrollment
/// qualified with a handful of attendances, so that variant was dropped.
///
/// # Example
///
/// ```
/// use canteen_engine::billing::attendance::attendance_discount;
/// use canteen_engine::models::PricingConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = PricingConfig {
///     active: true,
///     days_min: 1,
///     days_max: 5,
///     base_price: Decimal::from_str("6.00").unwrap(),
///     staff_price: Decimal::from_str("4.50").unwrap(),
///     staff_child_price: Decimal::from_str("3.00").unwrap(),
///     sibling_discount_pct: Decimal::from_str("20").unwrap(),
///     attendance_discount_pct: Decimal::from_str("10").unwrap(),
///     attendance_threshold_pct: Decimal::from_str("80").unwrap(),
/// };
///
/// // ceil(23 * 0.8) = 19 required days
/// let outcome = attendance_discount(19, 23, &config);
/// assert!(outcome.eligible);
/// assert_eq!(outcome.required_days, 19);
/// ```
pub fn attendance_discount(
    billable_days: u32,
    business_days: u32,
    config: &PricingConfig,
) -> AttendanceDiscount {
    let required = (Decimal::from(business_days) * config.attendance_threshold_pct
        / Decimal::ONE_HUNDRED)
        .ceil();
    let required_days = required.to_u32().unwrap_or(u32::MAX);

    let attendance_rate_pct = if business_days == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(billable_days) * Decimal::ONE_HUNDRED / Decimal::from(business_days)
    };

    let eligible = billable_days > 0 && billable_days >= required_days;

    AttendanceDiscount {
        eligible,
        rate_pct: if eligible {
            config.attendance_discount_pct
        } else {
            Decimal::ZERO
        },
        attendance_rate_pct,
        required_days,
    }
}

/// Applies the attendance discount to a subtotal.
pub fn apply_discount(subtotal: Decimal, outcome: &AttendanceDiscount) -> Decimal {
    if outcome.eligible {
        subtotal * (Decimal::ONE - outcome.rate_pct / Decimal::ONE_HUNDRED)
    } else {
        subtotal
    }
}

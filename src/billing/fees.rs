//! Per-person fee orchestration.
//!
//! Chains the day accumulation with the discount and exemption rules in
//! their fixed compounding order: the sibling discount is already embedded
//! in per-day prices, the attendance discount applies multiplicatively to
//! the subtotal, and the exemption zeroes the result last — after both
//! discounts are computed, so the pre-exemption amount stays visible for
//! audit.

use rust_decimal::Decimal;

use crate::models::{Person, PersonFeeResult, PricingConfig, SiblingDiscount};

use super::accumulator::accumulate;
use super::attendance::{apply_discount, attendance_discount};
use super::calendar::MonthCalendar;
use super::exemption::exemption_status;
use super::matcher::PersonEntitlements;

/// Computes the complete monthly fee result for one person.
///
/// `sibling` carries the outcome of the household ranking (always
/// [`SiblingDiscount::none`] for staff — staff never receive it).
pub fn person_fee(
    person: &Person,
    entitlements: &PersonEntitlements,
    calendar: &MonthCalendar,
    config: &PricingConfig,
    sibling: SiblingDiscount,
) -> PersonFeeResult {
    let accumulation = accumulate(entitlements, calendar);
    let subtotal = accumulation.subtotal();
    let billable_day_count = accumulation.billable_days.len() as u32;

    let attendance = attendance_discount(billable_day_count, calendar.business_day_count(), config);
    let amount_before_exemption = apply_discount(subtotal, &attendance);

    let exemption = exemption_status(person.exemption(), calendar.first_business_day());
    let total_amount = if exemption.exempt {
        Decimal::ZERO
    } else {
        amount_before_exemption
    };

    PersonFeeResult {
        person_id: person.id().to_string(),
        kind: person.kind(),
        billable_days: accumulation.billable_days,
        counts: accumulation.counts,
        business_day_count: calendar.business_day_count(),
        subtotal,
        attendance,
        sibling,
        exemption,
        amount_before_exemption,
        total_amount,
    }
}

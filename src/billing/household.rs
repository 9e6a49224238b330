//! Household and institution aggregation.
//!
//! Sums per-person results into household totals and reduces all
//! households into the institution-wide [`BillingSummary`]. Aggregation
//! has no partial-failure tolerance: any failure while assembling the
//! inputs aborts the whole request, because silently omitting a person
//! would understate billing.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::feed::{BillingSnapshot, SnapshotSource};
use crate::models::{
    BillingMonth, BillingSummary, Household, HouseholdFeeResult, InstitutionTotals, PricingConfig,
    SiblingDiscount,
};

use super::calendar::MonthCalendar;
use super::fees::person_fee;
use super::matcher::PersonEntitlements;
use super::sibling::rank_household;

/// Which households a billing request covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingScope {
    /// Bill every household in the snapshot.
    AllHouseholds,
    /// Bill a single household by id.
    Household(String),
}

/// Computes the monthly fee result for one household: all of its children
/// plus, when the guardian is staff with their own entitlement, that
/// entitlement under the same rules (staff are eligible for the attendance
/// discount and the exemption, never for the sibling discount).
pub fn bill_household(
    household: &Household,
    snapshot: &BillingSnapshot,
    calendar: &MonthCalendar,
    config: &PricingConfig,
) -> HouseholdFeeResult {
    let sibling_outcomes = rank_household(&household.children, &snapshot.enrollments, config);

    let mut members = Vec::with_capacity(household.children.len() + 1);
    for child in &household.children {
        let entitlements = PersonEntitlements::collect(
            child,
            &snapshot.enrollments,
            &snapshot.cancellations,
            &snapshot.extra_requests,
            &snapshot.invitations,
        );
        let sibling = sibling_outcomes
            .get(child.id())
            .cloned()
            .unwrap_or_else(SiblingDiscount::none);
        members.push(person_fee(child, &entitlements, calendar, config, sibling));
    }

    if let Some(staff) = &household.staff {
        let entitlements = PersonEntitlements::collect(
            staff,
            &snapshot.enrollments,
            &snapshot.cancellations,
            &snapshot.extra_requests,
            &snapshot.invitations,
        );
        members.push(person_fee(
            staff,
            &entitlements,
            calendar,
            config,
            SiblingDiscount::none(),
        ));
    }

    let total_amount: Decimal = members.iter().map(|m| m.total_amount).sum();
    let total_billable_days: u32 = members.iter().map(|m| m.billable_day_count()).sum();

    HouseholdFeeResult {
        household_id: household.id.clone(),
        members,
        total_amount,
        total_billable_days,
    }
}

/// Runs a complete billing request: fetches the snapshot, selects the
/// pricing configuration, resolves the calendar once, bills every
/// household in scope, and reduces to institution totals.
///
/// Configuration and fetch errors abort the whole request — callers can
/// always tell a valid zero apart from a failed computation.
pub fn bill_month(
    source: &dyn SnapshotSource,
    month: BillingMonth,
    scope: &BillingScope,
) -> EngineResult<BillingSummary> {
    let started = Instant::now();

    let snapshot = source.fetch(month)?;
    let config = PricingConfig::select_active(&snapshot.pricing_configs)?;
    let calendar = MonthCalendar::resolve(month, &snapshot.holidays);

    let in_scope: Vec<&Household> = match scope {
        BillingScope::AllHouseholds => snapshot.households.iter().collect(),
        BillingScope::Household(id) => {
            let household = snapshot
                .households
                .iter()
                .find(|h| &h.id == id)
                .ok_or_else(|| EngineError::HouseholdNotFound { id: id.clone() })?;
            vec![household]
        }
    };

    let households: Vec<HouseholdFeeResult> = in_scope
        .iter()
        .map(|household| bill_household(household, &snapshot, &calendar, config))
        .collect();

    let totals = InstitutionTotals {
        total_amount: households.iter().map(|h| h.total_amount).sum(),
        total_billable_days: households.iter().map(|h| h.total_billable_days).sum(),
        household_count: households.len() as u32,
        person_count: households.iter().map(|h| h.members.len() as u32).sum(),
    };

    Ok(BillingSummary {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year: month.year(),
        month: month.month(),
        business_day_count: calendar.business_day_count(),
        households,
        totals,
        duration_us: started.elapsed().as_micros() as u64,
    })
}

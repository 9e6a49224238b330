//! Full-month fee exemption.
//!
//! A person is exempt for the entire month when their exemption window
//! covers the month's **first business day**. Mid-month windows that miss
//! that single day grant nothing — this is the documented policy of the
//! administration, kept as-is pending product review, not widened to a
//! full-month overlap check.

use chrono::NaiveDate;

use crate::models::{Exemption, ExemptionStatus};

/// Decides the exemption outcome for one person and month.
///
/// With no business day in the month there is nothing to bill and nothing
/// to exempt.
pub fn exemption_status(
    exemption: &Exemption,
    first_business_day: Option<NaiveDate>,
) -> ExemptionStatus {
    let exempt = first_business_day.is_some_and(|day| exemption.covers(day));
    ExemptionStatus {
        exempt,
        reason: if exempt { exemption.reason.clone() } else { None },
    }
}

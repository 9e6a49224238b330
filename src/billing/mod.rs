//! Billing logic for the canteen fee engine.
//!
//! This module contains the calculation pipeline: business-day resolution,
//! per-day entitlement classification, per-person accumulation, the
//! sibling/attendance/exemption rules, and the household and institution
//! aggregation that produces the final [`crate::models::BillingSummary`].

pub mod accumulator;
pub mod attendance;
pub mod calendar;
pub mod exemption;
pub mod fees;
pub mod household;
pub mod matcher;
pub mod sibling;

pub use accumulator::{DayAccumulation, accumulate};
pub use attendance::{apply_discount, attendance_discount};
pub use calendar::{MonthCalendar, business_days, month_holidays};
pub use exemption::exemption_status;
pub use fees::person_fee;
pub use household::{BillingScope, bill_household, bill_month};
pub use matcher::{DayMatch, PersonEntitlements};
pub use sibling::rank_household;

//! Core data models for the canteen billing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod entitlement;
mod fee_result;
mod month;
mod person;
mod pricing;

pub use entitlement::{Cancellation, Enrollment, ExtraRequest, Invitation, Invitee, RequestStatus};
pub use fee_result::{
    AttendanceDiscount, BillableDay, BillingSummary, DayCategory, DayCounts, ExemptionStatus,
    HouseholdFeeResult, InstitutionTotals, PersonFeeResult, SiblingDiscount,
};
pub use month::{BillingMonth, Holiday};
pub use person::{Exemption, Household, Person, PersonKind};
pub use pricing::PricingConfig;

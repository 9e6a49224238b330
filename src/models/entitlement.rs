//! Entitlement records: the four sources that decide what a day costs.
//!
//! An enrollment is a standing weekly commitment; cancellations, approved
//! extra-day requests, and invitations override it day by day. All four are
//! read-only feeds owned by the administrative roster — the engine only
//! matches them against calendar dates.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::person::{Person, PersonKind};

/// A standing weekly canteen commitment.
///
/// `weekdays` uses 0 = Monday … 6 = Sunday. The stored `daily_price` is
/// already net of the sibling discount when one applies; `discount_percent`
/// records how much was baked in so the full price can be reconstructed
/// for sibling ranking.
///
/// Several enrollments may exist for one person across time (e.g. a record
/// deactivated mid-month when a new one starts). Day matching considers
/// every record whose date range covers the day, regardless of `active`;
/// the flag participates only in sibling ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique identifier for the enrollment record.
    pub id: String,
    /// The person this enrollment belongs to.
    pub person_id: String,
    /// Committed weekdays, 0 = Monday … 6 = Sunday.
    pub weekdays: BTreeSet<u8>,
    /// Price charged per committed day, net of any sibling discount.
    pub daily_price: Decimal,
    /// Sibling discount percentage already embedded in `daily_price`.
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Whether the record is currently active in the roster.
    pub active: bool,
    /// First day the enrollment applies (inclusive).
    pub start_date: NaiveDate,
    /// Last day the enrollment applies (inclusive; open-ended when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// When the record was created; tie-breaker for deterministic matching.
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Returns true if the date falls inside the enrollment's validity
    /// range. Both endpoints are inclusive; a missing end date is open.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.end_date.is_none_or(|end| date <= end)
    }

    /// Returns true if the date's weekday is one of the committed days.
    /// Out-of-range weekday values in the set never match.
    pub fn includes_weekday(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday().num_days_from_monday() as u8;
        self.weekdays.contains(&weekday)
    }

    /// Returns true if this enrollment makes the date a committed day:
    /// weekday membership and date-range containment together.
    pub fn matches_day(&self, date: NaiveDate) -> bool {
        self.includes_weekday(date) && self.covers_date(date)
    }

    /// Reconstructs the pre-discount per-day price.
    ///
    /// Stored prices are net of the sibling discount; dividing by
    /// `1 - discount/100` recovers the full price. Discounts outside
    /// (0, 100) leave the stored price untouched.
    pub fn full_price_per_day(&self) -> Decimal {
        if self.discount_percent > Decimal::ZERO && self.discount_percent < Decimal::ONE_HUNDRED {
            self.daily_price / (Decimal::ONE - self.discount_percent / Decimal::ONE_HUNDRED)
        } else {
            self.daily_price
        }
    }

    /// The theoretical full-price monthly cost used for sibling ranking:
    /// pre-discount per-day price times the number of committed weekdays.
    pub fn theoretical_monthly_cost(&self) -> Decimal {
        self.full_price_per_day() * Decimal::from(self.weekdays.len() as u64)
    }
}

/// A withdrawal of service for specific calendar days.
///
/// One record may cover many days. An empty day-set contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    /// The person the cancellation belongs to.
    pub person_id: String,
    /// The cancelled dates.
    pub dates: BTreeSet<NaiveDate>,
}

impl Cancellation {
    /// Returns true if the date is one of the cancelled days.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Review status of an extra-day request. Only approved requests count;
/// anything unrecognized degrades to [`RequestStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// The request was approved and the day is billable.
    Approved,
    /// The request awaits review.
    Pending,
    /// The request was rejected.
    Rejected,
    /// Any other status value found in the feed.
    #[serde(other)]
    Unknown,
}

/// A one-off request for a specific day outside the standing enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRequest {
    /// The person the request belongs to.
    pub person_id: String,
    /// The requested calendar day.
    pub date: NaiveDate,
    /// Review status; only [`RequestStatus::Approved`] is billable.
    pub status: RequestStatus,
}

impl ExtraRequest {
    /// Returns true if the request was approved.
    pub fn is_approved(&self) -> bool {
        self.status == RequestStatus::Approved
    }
}

/// The identity an invitation is attributed to.
///
/// A child id and a staff id live in different namespaces; an invitation
/// must never match across kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "person_kind", content = "person_id", rename_all = "snake_case")]
pub enum Invitee {
    /// Invitation for a child.
    Child(String),
    /// Invitation for a staff member.
    Staff(String),
}

/// A complimentary, non-billable day for one person on one date.
/// Highest precedence of all entitlement sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    /// Who is invited.
    #[serde(flatten)]
    pub invitee: Invitee,
    /// The invited calendar day.
    pub date: NaiveDate,
}

impl Invitation {
    /// Returns true if this invitation is addressed to the given person,
    /// matching on kind and id together.
    pub fn is_for(&self, person: &Person) -> bool {
        match (&self.invitee, person.kind()) {
            (Invitee::Child(id), PersonKind::Child) => id == person.id(),
            (Invitee::Staff(id), PersonKind::Staff) => id == person.id(),
            _ => false,
        }
    }
}

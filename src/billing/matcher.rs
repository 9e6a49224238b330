//! Per-day entitlement classification.
//!
//! For one person and one calendar day, exactly one category applies. The
//! precedence ladder is a correctness contract — the categories are
//! mutually exclusive per day and the first match wins:
//!
//! 1. invitation (complimentary, never billed)
//! 2. cancellation (no charge)
//! 3. approved extra-day request (billed)
//! 4. standing enrollment (billed)
//! 5. nothing

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Cancellation, Enrollment, ExtraRequest, Invitation, Person};

/// The classification of one calendar day for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayMatch {
    /// A complimentary day. `also_enrolled` reports whether an enrollment
    /// covers the date too, in which case the day still counts toward the
    /// inscription tally (but is never billed).
    Invited {
        /// Whether an enrollment also covers this date.
        also_enrolled: bool,
    },
    /// A cancelled day; no charge.
    Cancelled,
    /// An approved extra day at the given price.
    Extra {
        /// Price charged for the extra day.
        price: Decimal,
    },
    /// An enrolled day at the enrollment's stored price.
    Enrolled {
        /// Price charged for the enrolled day.
        price: Decimal,
    },
    /// No entitlement source covers the date.
    Unmatched,
}

/// One person's entitlement records, filtered from the month's feed and
/// ready for day-by-day classification.
///
/// Enrollments are sorted by ascending `(start_date, created_at, id)` on
/// construction. Upstream does not enforce non-overlapping enrollments,
/// so the first match in that order is the deterministic winner.
#[derive(Debug, Clone)]
pub struct PersonEntitlements {
    enrollments: Vec<Enrollment>,
    cancellations: Vec<Cancellation>,
    extra_requests: Vec<ExtraRequest>,
    invitations: Vec<Invitation>,
}

impl PersonEntitlements {
    /// Gathers the records belonging to `person` from the month's feed.
    pub fn collect(
        person: &Person,
        enrollments: &[Enrollment],
        cancellations: &[Cancellation],
        extra_requests: &[ExtraRequest],
        invitations: &[Invitation],
    ) -> Self {
        let mut own_enrollments: Vec<Enrollment> = enrollments
            .iter()
            .filter(|e| e.person_id == person.id())
            .cloned()
            .collect();
        own_enrollments.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        Self {
            enrollments: own_enrollments,
            cancellations: cancellations
                .iter()
                .filter(|c| c.person_id == person.id())
                .cloned()
                .collect(),
            extra_requests: extra_requests
                .iter()
                .filter(|r| r.person_id == person.id())
                .cloned()
                .collect(),
            invitations: invitations
                .iter()
                .filter(|i| i.is_for(person))
                .cloned()
                .collect(),
        }
    }

    /// Returns the person's enrollments in deterministic matching order.
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// The first enrollment whose weekday set and date range both cover
    /// the date.
    pub fn enrollment_for_day(&self, date: NaiveDate) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.matches_day(date))
    }

    /// The first enrollment whose date range covers the date, regardless
    /// of weekday membership. Used to price extra days.
    pub fn enrollment_covering(&self, date: NaiveDate) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.covers_date(date))
    }

    fn is_invited(&self, date: NaiveDate) -> bool {
        self.invitations.iter().any(|i| i.date == date)
    }

    fn is_cancelled(&self, date: NaiveDate) -> bool {
        self.cancellations.iter().any(|c| c.contains(date))
    }

    fn has_approved_extra(&self, date: NaiveDate) -> bool {
        self.extra_requests
            .iter()
            .any(|r| r.date == date && r.is_approved())
    }

    /// Classifies one calendar day by the precedence ladder.
    ///
    /// The extra-day price falls back to whichever enrollment covers the
    /// date; a person with no enrollment at all gets the extra day at
    /// zero — never a generic default price.
    pub fn classify(&self, date: NaiveDate) -> DayMatch {
        if self.is_invited(date) {
            return DayMatch::Invited {
                also_enrolled: self.enrollment_for_day(date).is_some(),
            };
        }
        if self.is_cancelled(date) {
            return DayMatch::Cancelled;
        }
        if self.has_approved_extra(date) {
            let price = self
                .enrollment_covering(date)
                .map(|e| e.daily_price)
                .unwrap_or(Decimal::ZERO);
            return DayMatch::Extra { price };
        }
        if let Some(enrollment) = self.enrollment_for_day(date) {
            return DayMatch::Enrolled {
                price: enrollment.daily_price,
            };
        }
        DayMatch::Unmatched
    }
}

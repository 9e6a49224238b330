//! Person model and related types.
//!
//! This module defines the [`Person`] variants and the [`Exemption`] window
//! for representing children and staff members in the billing system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distinguishes the two kinds of people the canteen serves.
///
/// Invitations are attributed to a child id or a staff id and must never
/// match across kinds, so the kind travels with every identity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonKind {
    /// A child enrolled at the school, billed through a household.
    Child,
    /// A staff member with their own canteen entitlement.
    Staff,
}

/// A full-month fee exemption window attached to a person.
///
/// The window applies when the `exempt` flag is set; either bound may be
/// open-ended. Whether a month is exempt is decided against the month's
/// first business day only (see [`crate::billing::exemption`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Exemption {
    /// Whether the person holds an exemption at all.
    pub exempt: bool,
    /// Free-text reason recorded by the administration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// First day the exemption applies (open-ended when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    /// Last day the exemption applies (open-ended when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl Exemption {
    /// Returns true if the exemption is flagged and its window contains
    /// the given date. Bounds are inclusive; a missing bound is open.
    pub fn covers(&self, date: NaiveDate) -> bool {
        if !self.exempt {
            return false;
        }
        let after_start = self.from.is_none_or(|from| date >= from);
        let before_end = self.to.is_none_or(|to| date <= to);
        after_start && before_end
    }
}

/// A person with day-level canteen activity: a child or a staff member.
///
/// Billing treats both uniformly; the variant matters only for invitation
/// attribution and for the sibling discount (children only).
///
/// # Example
///
/// ```
/// use canteen_engine::models::{Person, PersonKind, Exemption};
///
/// let child = Person::Child {
///     id: "child_001".to_string(),
///     household_id: "fam_001".to_string(),
///     exemption: Exemption::default(),
/// };
/// assert_eq!(child.kind(), PersonKind::Child);
/// assert_eq!(child.id(), "child_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Person {
    /// A child belonging to a household.
    Child {
        /// Unique identifier for the child.
        id: String,
        /// The household the child belongs to.
        household_id: String,
        /// The child's exemption record.
        #[serde(default)]
        exemption: Exemption,
    },
    /// A staff member with their own entitlement.
    Staff {
        /// Unique identifier for the staff member.
        id: String,
        /// The staff member's exemption record.
        #[serde(default)]
        exemption: Exemption,
    },
}

impl Person {
    /// Returns the person's identifier.
    pub fn id(&self) -> &str {
        match self {
            Person::Child { id, .. } | Person::Staff { id, .. } => id,
        }
    }

    /// Returns which kind of person this is.
    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Child { .. } => PersonKind::Child,
            Person::Staff { .. } => PersonKind::Staff,
        }
    }

    /// Returns the person's exemption record.
    pub fn exemption(&self) -> &Exemption {
        match self {
            Person::Child { exemption, .. } | Person::Staff { exemption, .. } => exemption,
        }
    }

    /// Returns true for staff members.
    pub fn is_staff(&self) -> bool {
        self.kind() == PersonKind::Staff
    }
}

/// A family unit: the billed children plus, optionally, a guardian who is
/// staff and holds their own canteen entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    /// Unique identifier for the household.
    pub id: String,
    /// The household's children (each a [`Person::Child`]).
    pub children: Vec<Person>,
    /// The guardian's own entitlement holder, when the guardian is staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<Person>,
}

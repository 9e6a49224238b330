//! Request types for the billing API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint: the billed month, an optional household scope, and the
//! month's input collections as fetched from storage by the caller.
//!
//! Most collections reuse the domain types directly; households and
//! cancellations get their own wire forms. Person records arrive with the
//! flat exemption fields the roster stores, and cancellation day lists
//! are parsed leniently — a malformed date is dropped with a warning, it
//! never fails the request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineResult;
use crate::feed::BillingSnapshot;
use crate::models::{
    BillingMonth, Cancellation, Enrollment, Exemption, ExtraRequest, Holiday, Household,
    Invitation, Person, PricingConfig,
};

use crate::billing::BillingScope;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingRequest {
    /// The billed year.
    pub year: i32,
    /// The billed month (1-12).
    pub month: u32,
    /// Restrict the computation to one household; absent bills everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<String>,
    /// Pricing records; exactly one must be active and applicable.
    pub pricing_configs: Vec<PricingConfig>,
    /// Institution-wide holiday records.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// The billed households.
    #[serde(default)]
    pub households: Vec<HouseholdRequest>,
    /// All enrollments relevant to the month.
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    /// All cancellations relevant to the month.
    #[serde(default)]
    pub cancellations: Vec<CancellationRequest>,
    /// All extra-day requests relevant to the month.
    #[serde(default)]
    pub extra_requests: Vec<ExtraRequest>,
    /// All invitations relevant to the month.
    #[serde(default)]
    pub invitations: Vec<Invitation>,
}

/// A household in a billing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdRequest {
    /// Unique identifier for the household.
    pub id: String,
    /// The household's children.
    #[serde(default)]
    pub children: Vec<PersonRequest>,
    /// The guardian's own entitlement holder, when the guardian is staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<PersonRequest>,
}

/// A person (child or staff) in a billing request, carrying the flat
/// exemption fields as stored by the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRequest {
    /// Unique identifier for the person.
    pub id: String,
    /// Whether the person holds a fee exemption.
    #[serde(default)]
    pub exempt: bool,
    /// Free-text exemption reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// First day the exemption applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempt_from: Option<NaiveDate>,
    /// Last day the exemption applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempt_to: Option<NaiveDate>,
}

/// A cancellation in a billing request. Dates travel as strings and are
/// parsed leniently: unparseable entries contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRequest {
    /// The person the cancellation belongs to.
    pub person_id: String,
    /// The cancelled dates as `YYYY-MM-DD` strings.
    #[serde(default)]
    pub dates: Vec<String>,
}

impl PersonRequest {
    fn exemption(&self) -> Exemption {
        Exemption {
            exempt: self.exempt,
            reason: self.reason.clone(),
            from: self.exempt_from,
            to: self.exempt_to,
        }
    }

    fn into_child(self, household_id: &str) -> Person {
        let exemption = self.exemption();
        Person::Child {
            id: self.id,
            household_id: household_id.to_string(),
            exemption,
        }
    }

    fn into_staff(self) -> Person {
        let exemption = self.exemption();
        Person::Staff {
            id: self.id,
            exemption,
        }
    }
}

impl From<HouseholdRequest> for Household {
    fn from(req: HouseholdRequest) -> Self {
        let household_id = req.id;
        Household {
            children: req
                .children
                .into_iter()
                .map(|child| child.into_child(&household_id))
                .collect(),
            staff: req.staff.map(PersonRequest::into_staff),
            id: household_id,
        }
    }
}

impl From<CancellationRequest> for Cancellation {
    fn from(req: CancellationRequest) -> Self {
        let dates = req
            .dates
            .iter()
            .filter_map(|raw| match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    warn!(
                        person_id = %req.person_id,
                        date = %raw,
                        "Dropping unparseable cancellation date"
                    );
                    None
                }
            })
            .collect();
        Cancellation {
            person_id: req.person_id,
            dates,
        }
    }
}

impl BillingRequest {
    /// Validates the requested month.
    pub fn billing_month(&self) -> EngineResult<BillingMonth> {
        BillingMonth::new(self.year, self.month)
    }

    /// Returns the household scope of the request.
    pub fn scope(&self) -> BillingScope {
        match &self.household_id {
            Some(id) => BillingScope::Household(id.clone()),
            None => BillingScope::AllHouseholds,
        }
    }

    /// Converts the request collections into an engine snapshot.
    pub fn into_snapshot(self) -> BillingSnapshot {
        BillingSnapshot {
            pricing_configs: self.pricing_configs,
            holidays: self.holidays,
            households: self.households.into_iter().map(Into::into).collect(),
            enrollments: self.enrollments,
            cancellations: self.cancellations.into_iter().map(Into::into).collect(),
            extra_requests: self.extra_requests,
            invitations: self.invitations,
        }
    }
}

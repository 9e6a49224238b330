//! The read-only boundary to external storage.
//!
//! The engine never owns persistence: every billing request consumes a
//! complete snapshot of the month's input collections and produces a
//! derived result. [`SnapshotSource`] is the seam where those collections
//! come from; implementations may gather them however they like (and may
//! fetch the independent collections concurrently), but a snapshot is
//! returned whole — matching never starts on partial data.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BillingMonth, Cancellation, Enrollment, ExtraRequest, Holiday, Household, Invitation,
    PricingConfig,
};

/// Every input collection the engine reads for one billed month.
#[derive(Debug, Clone, Default)]
pub struct BillingSnapshot {
    /// Pricing records; exactly one must be active and applicable.
    pub pricing_configs: Vec<PricingConfig>,
    /// Institution-wide holiday records.
    pub holidays: Vec<Holiday>,
    /// The billed households with their children and staff guardians.
    pub households: Vec<Household>,
    /// All enrollments relevant to the month.
    pub enrollments: Vec<Enrollment>,
    /// All cancellations relevant to the month.
    pub cancellations: Vec<Cancellation>,
    /// All extra-day requests relevant to the month.
    pub extra_requests: Vec<ExtraRequest>,
    /// All invitations relevant to the month.
    pub invitations: Vec<Invitation>,
}

/// Where a billing request's input collections come from.
///
/// A failed fetch aborts the whole computation ([`EngineError::DataFetch`])
/// rather than letting an affected household silently total zero. No
/// retries happen here; callers surface the failure and let the user
/// re-trigger the request.
pub trait SnapshotSource {
    /// Fetches the complete snapshot for the month.
    fn fetch(&self, month: BillingMonth) -> EngineResult<BillingSnapshot>;
}

/// A [`SnapshotSource`] over collections already materialized in memory,
/// as handed over by the HTTP layer or assembled in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshot {
    snapshot: BillingSnapshot,
}

impl InMemorySnapshot {
    /// Wraps an already-materialized snapshot.
    pub fn new(snapshot: BillingSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for InMemorySnapshot {
    fn fetch(&self, _month: BillingMonth) -> EngineResult<BillingSnapshot> {
        Ok(self.snapshot.clone())
    }
}

/// A [`SnapshotSource`] that always fails; models an unavailable store.
///
/// Exists so callers can exercise the abort-on-fetch-failure path without
/// a real storage backend.
#[derive(Debug, Clone)]
pub struct FailingSnapshot {
    message: String,
}

impl FailingSnapshot {
    /// Creates a source that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl SnapshotSource for FailingSnapshot {
    fn fetch(&self, _month: BillingMonth) -> EngineResult<BillingSnapshot> {
        Err(EngineError::DataFetch {
            message: self.message.clone(),
        })
    }
}

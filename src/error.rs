//! Error types for the canteen billing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during fee calculation.
//!
//! Two classes of failure exist and are deliberately kept apart: blocking
//! errors (this enum — bad month, missing pricing configuration, unknown
//! household, storage failure) abort the whole computation, while data
//! quality problems in individual entitlement records never surface here;
//! a malformed record simply contributes nothing to the result.

use thiserror::Error;

/// The main error type for the canteen billing engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use canteen_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { year: 2025, month: 13 };
/// assert_eq!(error.to_string(), "Invalid billing month: 2025-13");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested billing month is out of range.
    #[error("Invalid billing month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (must be 1-12).
        month: u32,
    },

    /// No active pricing configuration applicable to the 1-5 days/week
    /// range was found. Fatal: without it every amount would be wrong.
    #[error("No active pricing configuration covering 1-5 weekdays")]
    MissingPricingConfig,

    /// More than one active applicable pricing configuration was found,
    /// so the effective prices are ambiguous.
    #[error("{count} active pricing configurations cover 1-5 weekdays, expected exactly one")]
    AmbiguousPricingConfig {
        /// How many applicable records were active.
        count: usize,
    },

    /// A billing request was scoped to a household that does not exist.
    #[error("Household not found: {id}")]
    HouseholdNotFound {
        /// The household id that was not found.
        id: String,
    },

    /// The underlying storage failed while fetching an input collection.
    /// The computation aborts; a household must never silently total zero.
    #[error("Data fetch failed: {message}")]
    DataFetch {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! HTTP API module for the canteen billing engine.
//!
//! This module provides the REST endpoint for computing monthly canteen
//! fees from a snapshot of the institution's billing data.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{BillingRequest, CancellationRequest, HouseholdRequest, PersonRequest};
pub use response::ApiError;

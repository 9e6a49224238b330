//! Pricing configuration for fee calculation.
//!
//! The administration maintains pricing records over time; exactly one
//! active record applicable to the full 1-5 days/week range governs a
//! billing request. The selected record is threaded by reference into
//! every computation — there is no global configuration state and nothing
//! is mutated during a request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The active pricing record: base prices plus discount policy knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Whether this record is the one currently in force.
    pub active: bool,
    /// Smallest days-per-week count the record covers.
    pub days_min: u32,
    /// Largest days-per-week count the record covers.
    pub days_max: u32,
    /// Daily price for a regular child.
    pub base_price: Decimal,
    /// Daily price for a staff member.
    pub staff_price: Decimal,
    /// Daily price for a staff member's child.
    pub staff_child_price: Decimal,
    /// Percentage discount for sibling-discount-eligible children.
    pub sibling_discount_pct: Decimal,
    /// Percentage discount granted when the attendance threshold is met.
    pub attendance_discount_pct: Decimal,
    /// Percentage of the month's business days required for the
    /// attendance discount.
    pub attendance_threshold_pct: Decimal,
}

impl PricingConfig {
    /// Returns true if this record is active and covers the whole
    /// 1-5 days/week range.
    pub fn is_applicable(&self) -> bool {
        self.active && self.days_min <= 1 && self.days_max >= 5
    }

    /// Selects the single applicable record from the feed.
    ///
    /// Absence is a fatal configuration error; so is more than one match,
    /// since the effective prices would depend on record order.
    pub fn select_active(configs: &[PricingConfig]) -> EngineResult<&PricingConfig> {
        let mut applicable = configs.iter().filter(|config| config.is_applicable());
        let selected = applicable.next().ok_or(EngineError::MissingPricingConfig)?;
        let surplus = applicable.count();
        if surplus > 0 {
            return Err(EngineError::AmbiguousPricingConfig { count: surplus + 1 });
        }
        Ok(selected)
    }
}

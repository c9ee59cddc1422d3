//! Assessment parameters.

use serde::{Deserialize, Serialize};

use crate::{InputError, Result};

/// Parameters for an inventory assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Fraction of the sales price attributable to cost of goods,
    /// as a percentage in `[0, 100]`.
    pub cost_ratio: f64,
    /// Current inventory value at cost basis.
    pub current_inventory: f64,
    /// Replenishment lead time in months, fractional allowed.
    pub lead_time: f64,
    /// Dimensionless safety stock multiplier.
    pub safety_factor: f64,
}

impl Parameters {
    /// Creates a new parameter set.
    #[must_use]
    pub const fn new(
        cost_ratio: f64,
        current_inventory: f64,
        lead_time: f64,
        safety_factor: f64,
    ) -> Self {
        Self {
            cost_ratio,
            current_inventory,
            lead_time,
            safety_factor,
        }
    }

    /// Validates all fields, returning the first offending one.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if any field is non-finite, negative, or
    /// (for the cost ratio) outside the percentage range.
    pub fn validate(&self) -> Result<()> {
        if !self.cost_ratio.is_finite() || !(0.0..=100.0).contains(&self.cost_ratio) {
            return Err(InputError::CostRatio(self.cost_ratio));
        }
        if !self.current_inventory.is_finite() || self.current_inventory < 0.0 {
            return Err(InputError::CurrentInventory(self.current_inventory));
        }
        if !self.lead_time.is_finite() || self.lead_time < 0.0 {
            return Err(InputError::LeadTime(self.lead_time));
        }
        if !self.safety_factor.is_finite() || self.safety_factor < 0.0 {
            return Err(InputError::SafetyFactor(self.safety_factor));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            cost_ratio: 70.0,
            current_inventory: 1_500_000.0,
            lead_time: 0.5,
            safety_factor: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn test_cost_ratio_range() {
        let mut params = Parameters::default();
        params.cost_ratio = 100.0;
        assert!(params.validate().is_ok());

        params.cost_ratio = 100.5;
        assert_eq!(params.validate(), Err(InputError::CostRatio(100.5)));

        params.cost_ratio = -1.0;
        assert_eq!(params.validate(), Err(InputError::CostRatio(-1.0)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut params = Parameters::default();
        params.lead_time = f64::NAN;
        assert!(matches!(params.validate(), Err(InputError::LeadTime(_))));

        params.lead_time = 0.5;
        params.safety_factor = f64::INFINITY;
        assert!(matches!(params.validate(), Err(InputError::SafetyFactor(_))));
    }

    #[test]
    fn test_negative_lead_time_rejected() {
        let mut params = Parameters::default();
        params.lead_time = -0.5;
        assert_eq!(params.validate(), Err(InputError::LeadTime(-0.5)));
    }

    #[test]
    fn test_negative_inventory_rejected() {
        let mut params = Parameters::default();
        params.current_inventory = -1.0;
        assert_eq!(params.validate(), Err(InputError::CurrentInventory(-1.0)));
    }

    #[test]
    fn test_zero_lead_time_allowed() {
        let mut params = Parameters::default();
        params.lead_time = 0.0;
        assert!(params.validate().is_ok());
    }
}

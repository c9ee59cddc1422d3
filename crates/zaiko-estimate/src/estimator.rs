//! Inventory level estimation logic.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use zaiko_types::{Evaluation, InputError, Parameters, Result};

use crate::stats;

/// One-tailed 95% service level z-score.
pub const SERVICE_LEVEL_Z: f64 = 1.645;

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// A completed inventory assessment.
///
/// Either fully populated or never produced: validation rejects the
/// assessment request before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAssessment {
    /// Mean monthly cost of goods over the sales history.
    pub average_monthly_cost: f64,
    /// Population standard deviation of the monthly costs.
    pub cost_std_dev: f64,
    /// Base stock covering mean demand over the lead time.
    pub base_stock: f64,
    /// Safety stock sized from demand volatility.
    pub safety_stock: f64,
    /// Optimal inventory value (base stock + safety stock).
    pub optimal_inventory: f64,
    /// Verdict on the current inventory level.
    pub evaluation: Evaluation,
}

/// Safe inventory level estimator.
#[derive(Debug, Clone)]
pub struct Estimator {
    /// Service level z-score applied to the safety stock term.
    z_score: f64,
}

impl Estimator {
    /// Creates a new estimator with the given service level z-score.
    #[must_use]
    pub const fn new(z_score: f64) -> Self {
        Self { z_score }
    }

    /// Returns the global estimator instance with the default service level.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(SERVICE_LEVEL_Z))
    }

    /// Returns the service level z-score.
    #[must_use]
    pub const fn z_score(&self) -> f64 {
        self.z_score
    }

    /// Computes an inventory assessment from monthly sales and parameters.
    ///
    /// Sales figures are converted to cost figures via the cost ratio, then
    /// the optimal level is mean cost over the lead time plus a safety stock
    /// term of `std * z * sqrt(lead_time) * safety_factor`. The current
    /// inventory is classified against the optimal level.
    ///
    /// Pure: the estimator holds no mutable state and the inputs are not
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the sales history is empty, any sales
    /// amount is non-finite or negative, or any parameter fails validation.
    pub fn assess(&self, sales: &[f64], params: &Parameters) -> Result<InventoryAssessment> {
        params.validate()?;
        validate_sales(sales)?;

        let costs: Vec<f64> = sales
            .iter()
            .map(|amount| amount * (params.cost_ratio / 100.0))
            .collect();

        let average_monthly_cost = stats::mean(&costs);
        let cost_std_dev = stats::population_std_dev(&costs, average_monthly_cost);

        let base_stock = average_monthly_cost * params.lead_time;
        let safety_stock =
            cost_std_dev * self.z_score * params.lead_time.sqrt() * params.safety_factor;
        let optimal_inventory = base_stock + safety_stock;

        let evaluation = Evaluation::classify(params.current_inventory, optimal_inventory);

        Ok(InventoryAssessment {
            average_monthly_cost,
            cost_std_dev,
            base_stock,
            safety_stock,
            optimal_inventory,
            evaluation,
        })
    }

    /// Formats a currency amount for display, rounded to whole yen with
    /// thousands separators (e.g. `¥1,234,567`).
    #[must_use]
    pub fn format_currency(value: f64) -> String {
        let rounded = value.round() as i64;
        let digits = rounded.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if rounded < 0 {
            format!("-¥{grouped}")
        } else {
            format!("¥{grouped}")
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(SERVICE_LEVEL_Z)
    }
}

/// Validates the sales history.
fn validate_sales(sales: &[f64]) -> Result<()> {
    if sales.is_empty() {
        return Err(InputError::EmptySales);
    }
    for (index, &value) in sales.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(InputError::SalesAmount { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const SALES: [f64; 6] = [
        1_000_000.0,
        1_200_000.0,
        950_000.0,
        1_100_000.0,
        1_300_000.0,
        1_150_000.0,
    ];

    fn default_params() -> Parameters {
        Parameters::new(70.0, 1_500_000.0, 0.5, 1.0)
    }

    #[test]
    fn test_worked_example() {
        let estimator = Estimator::default();
        let assessment = estimator.assess(&SALES, &default_params()).unwrap();

        assert_abs_diff_eq!(assessment.average_monthly_cost, 781_666.67, epsilon = 0.01);
        assert_abs_diff_eq!(assessment.cost_std_dev, 82_495.79, epsilon = 0.01);
        assert_abs_diff_eq!(assessment.base_stock, 390_833.33, epsilon = 0.01);
        assert_abs_diff_eq!(assessment.safety_stock, 95_958.33, epsilon = 0.01);
        assert_abs_diff_eq!(assessment.optimal_inventory, 486_791.67, epsilon = 0.01);
        // 1,500,000 is well above 1.2x the optimal level.
        assert_eq!(assessment.evaluation, Evaluation::Overstock);
    }

    #[test]
    fn test_constant_sales_have_no_safety_term() {
        let estimator = Estimator::default();
        let sales = [900_000.0; 6];
        let params = Parameters::new(100.0, 0.0, 2.0, 1.0);
        let assessment = estimator.assess(&sales, &params).unwrap();

        assert_relative_eq!(assessment.cost_std_dev, 0.0);
        assert_relative_eq!(assessment.safety_stock, 0.0);
        assert_relative_eq!(assessment.optimal_inventory, 900_000.0 * 2.0);
    }

    #[test]
    fn test_order_invariance() {
        let estimator = Estimator::default();
        let params = default_params();
        let mut shuffled = SALES;
        shuffled.reverse();
        shuffled.swap(1, 3);

        let a = estimator.assess(&SALES, &params).unwrap();
        let b = estimator.assess(&shuffled, &params).unwrap();

        assert_relative_eq!(a.average_monthly_cost, b.average_monthly_cost, max_relative = 1e-12);
        assert_relative_eq!(a.cost_std_dev, b.cost_std_dev, max_relative = 1e-12);
        assert_relative_eq!(a.optimal_inventory, b.optimal_inventory, max_relative = 1e-12);
        assert_eq!(a.evaluation, b.evaluation);
    }

    #[test]
    fn test_scale_invariance() {
        let estimator = Estimator::default();
        let k = 3.5;
        let params = default_params();
        let scaled_sales: Vec<f64> = SALES.iter().map(|s| s * k).collect();
        let scaled_params = Parameters::new(
            params.cost_ratio,
            params.current_inventory * k,
            params.lead_time,
            params.safety_factor,
        );

        let a = estimator.assess(&SALES, &params).unwrap();
        let b = estimator.assess(&scaled_sales, &scaled_params).unwrap();

        assert_relative_eq!(b.average_monthly_cost, a.average_monthly_cost * k, max_relative = 1e-12);
        assert_relative_eq!(b.optimal_inventory, a.optimal_inventory * k, max_relative = 1e-12);
        assert_eq!(a.evaluation, b.evaluation);
    }

    #[test]
    fn test_zero_lead_time() {
        let estimator = Estimator::default();
        let params = Parameters::new(70.0, 0.0, 0.0, 1.0);
        let assessment = estimator.assess(&SALES, &params).unwrap();

        assert_relative_eq!(assessment.optimal_inventory, 0.0);
        assert_eq!(assessment.evaluation, Evaluation::Normal);
    }

    #[test]
    fn test_empty_sales_rejected() {
        let estimator = Estimator::default();
        let result = estimator.assess(&[], &default_params());
        assert_eq!(result, Err(InputError::EmptySales));
    }

    #[test]
    fn test_nan_sales_rejected() {
        let estimator = Estimator::default();
        let sales = [1_000_000.0, f64::NAN, 950_000.0];
        let result = estimator.assess(&sales, &default_params());
        assert!(matches!(result, Err(InputError::SalesAmount { index: 1, .. })));
    }

    #[test]
    fn test_negative_sales_rejected() {
        let estimator = Estimator::default();
        let sales = [1_000_000.0, -5.0];
        let result = estimator.assess(&sales, &default_params());
        assert!(matches!(result, Err(InputError::SalesAmount { index: 1, .. })));
    }

    #[test]
    fn test_invalid_params_rejected_before_compute() {
        let estimator = Estimator::default();
        let params = Parameters::new(70.0, 1_500_000.0, -0.5, 1.0);
        assert_eq!(
            estimator.assess(&SALES, &params),
            Err(InputError::LeadTime(-0.5))
        );
    }

    #[test]
    fn test_global_estimator() {
        assert_eq!(Estimator::global().z_score(), SERVICE_LEVEL_Z);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(Estimator::format_currency(0.0), "¥0");
        assert_eq!(Estimator::format_currency(999.0), "¥999");
        assert_eq!(Estimator::format_currency(1_000.0), "¥1,000");
        assert_eq!(Estimator::format_currency(1_234_567.4), "¥1,234,567");
        assert_eq!(Estimator::format_currency(1_234_567.5), "¥1,234,568");
        assert_eq!(Estimator::format_currency(-42_000.0), "-¥42,000");
    }
}

//! Error types for zaiko.

use thiserror::Error;

/// Result type alias for zaiko operations.
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors raised when an assessment request carries invalid input.
///
/// Validation happens before any arithmetic runs, so a rejected request
/// never produces a partially populated result or a NaN-valued one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The sales history contains no entries.
    #[error("sales history is empty")]
    EmptySales,

    /// A sales amount is non-finite or negative.
    #[error("sales amount at index {index} must be a finite non-negative number, got {value}")]
    SalesAmount {
        /// Position of the offending entry in the sales history.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// The cost ratio is non-finite or outside the percentage range.
    #[error("cost ratio must be a percentage in [0, 100], got {0}")]
    CostRatio(f64),

    /// The lead time is non-finite or negative.
    #[error("lead time must be a finite non-negative number of months, got {0}")]
    LeadTime(f64),

    /// The safety factor is non-finite or negative.
    #[error("safety factor must be a finite non-negative number, got {0}")]
    SafetyFactor(f64),

    /// The current inventory value is non-finite or negative.
    #[error("current inventory value must be a finite non-negative number, got {0}")]
    CurrentInventory(f64),
}

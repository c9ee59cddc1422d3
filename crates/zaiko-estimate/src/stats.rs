//! Descriptive statistics helpers.
//!
//! These operate on slices the estimator has already validated as
//! non-empty and finite.

/// Arithmetic mean of the values.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of the values around a precomputed mean.
///
/// Divides by `n`, not `n - 1`: this treats the series as the whole
/// population rather than a sample.
#[must_use]
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

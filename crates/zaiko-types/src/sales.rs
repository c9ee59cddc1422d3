//! Monthly sales records and period labels.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single month of sales.
///
/// Records are kept oldest first. The order is chronological but carries
/// no computational weight beyond labelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Period label, e.g. `2026-07`.
    pub period: String,
    /// Sales amount for the period, as a plain decimal quantity.
    pub amount: f64,
}

impl SalesRecord {
    /// Creates a new sales record.
    #[must_use]
    pub fn new(period: impl Into<String>, amount: f64) -> Self {
        Self {
            period: period.into(),
            amount,
        }
    }
}

/// Returns `n` calendar-month labels (`YYYY-MM`) ending with the month
/// before `latest`, oldest first.
///
/// The month containing `latest` is excluded since it is still incomplete.
#[must_use]
pub fn trailing_periods(n: usize, latest: NaiveDate) -> Vec<String> {
    let mut year = latest.year();
    let mut month = latest.month();

    let mut labels = Vec::with_capacity(n);
    for _ in 0..n {
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
        labels.push(format!("{year:04}-{month:02}"));
    }
    labels.reverse();
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_periods_oldest_first() {
        let latest = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let labels = trailing_periods(6, latest);

        assert_eq!(
            labels,
            vec!["2026-02", "2026-03", "2026-04", "2026-05", "2026-06", "2026-07"]
        );
    }

    #[test]
    fn test_trailing_periods_year_rollover() {
        let latest = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let labels = trailing_periods(4, latest);

        assert_eq!(labels, vec!["2025-10", "2025-11", "2025-12", "2026-01"]);
    }

    #[test]
    fn test_trailing_periods_empty() {
        let latest = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        assert!(trailing_periods(0, latest).is_empty());
    }

    #[test]
    fn test_sales_record_new() {
        let record = SalesRecord::new("2026-07", 1_150_000.0);
        assert_eq!(record.period, "2026-07");
        assert_eq!(record.amount, 1_150_000.0);
    }
}

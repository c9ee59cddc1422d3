//! Human-readable text report.

use std::io::Write;

use zaiko_estimate::{Estimator, InventoryAssessment};
use zaiko_types::SalesRecord;

use crate::{FormatError, Formatter};

/// Text report formatter.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a new text formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn write_assessment<W: Write + Send>(
        &self,
        assessment: &InventoryAssessment,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "{}", assessment.evaluation.message())?;
        writeln!(writer)?;
        writeln!(
            writer,
            "Average monthly cost:       {}",
            Estimator::format_currency(assessment.average_monthly_cost)
        )?;
        writeln!(
            writer,
            "Optimal inventory (cost):   {}",
            Estimator::format_currency(assessment.optimal_inventory)
        )?;
        writeln!(
            writer,
            "  Base stock:               {}",
            Estimator::format_currency(assessment.base_stock)
        )?;
        writeln!(
            writer,
            "  Safety stock:             {}",
            Estimator::format_currency(assessment.safety_stock)
        )?;
        writeln!(
            writer,
            "Monthly cost volatility:    {}",
            Estimator::format_currency(assessment.cost_std_dev)
        )?;
        Ok(())
    }

    fn write_sales<W: Write + Send>(
        &self,
        sales: &[SalesRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for record in sales {
            writeln!(
                writer,
                "{}  {}",
                record.period,
                Estimator::format_currency(record.amount)
            )?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zaiko_types::Evaluation;

    #[test]
    fn test_report_leads_with_verdict() {
        let assessment = InventoryAssessment {
            average_monthly_cost: 781_666.67,
            cost_std_dev: 82_495.79,
            base_stock: 390_833.33,
            safety_stock: 95_958.33,
            optimal_inventory: 486_791.67,
            evaluation: Evaluation::Overstock,
        };

        let mut out = Vec::new();
        TextFormatter::new().write_assessment(&assessment, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Inventory may be excessive."));
        assert!(text.contains("¥781,667"));
        assert!(text.contains("¥486,792"));
    }

    #[test]
    fn test_write_sales() {
        let sales = vec![SalesRecord::new("2026-07", 1_150_000.0)];
        let mut out = Vec::new();
        TextFormatter::new().write_sales(&sales, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "2026-07  ¥1,150,000\n");
    }
}

//! JSON output format.

use std::io::Write;

use zaiko_estimate::InventoryAssessment;
use zaiko_types::SalesRecord;

use crate::{FormatError, Formatter};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with compact output.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_assessment<W: Write + Send>(
        &self,
        assessment: &InventoryAssessment,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, assessment)?;
        } else {
            serde_json::to_writer(&mut writer, assessment)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_sales<W: Write + Send>(
        &self,
        sales: &[SalesRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, sales)?;
        } else {
            serde_json::to_writer(&mut writer, sales)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zaiko_types::Evaluation;

    #[test]
    fn test_write_assessment_roundtrip() {
        let assessment = InventoryAssessment {
            average_monthly_cost: 781_666.67,
            cost_std_dev: 82_495.79,
            base_stock: 390_833.33,
            safety_stock: 95_958.33,
            optimal_inventory: 486_791.67,
            evaluation: Evaluation::Overstock,
        };

        let mut out = Vec::new();
        JsonFormatter::new().write_assessment(&assessment, &mut out).unwrap();

        let parsed: InventoryAssessment = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, assessment);
    }

    #[test]
    fn test_evaluation_serializes_lowercase() {
        let assessment = InventoryAssessment {
            average_monthly_cost: 0.0,
            cost_std_dev: 0.0,
            base_stock: 0.0,
            safety_stock: 0.0,
            optimal_inventory: 0.0,
            evaluation: Evaluation::Normal,
        };

        let mut out = Vec::new();
        JsonFormatter::new().write_assessment(&assessment, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"evaluation\":\"normal\""));
    }

    #[test]
    fn test_write_sales() {
        let sales = vec![SalesRecord::new("2026-07", 1_150_000.0)];
        let mut out = Vec::new();
        JsonFormatter::new().with_pretty(true).write_sales(&sales, &mut out).unwrap();

        let parsed: Vec<SalesRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, sales);
    }
}

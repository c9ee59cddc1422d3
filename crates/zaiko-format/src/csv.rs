//! CSV output format.

use std::io::Write;

use zaiko_estimate::InventoryAssessment;
use zaiko_types::SalesRecord;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_assessment<W: Write + Send>(
        &self,
        assessment: &InventoryAssessment,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "average_monthly_cost{d}cost_std_dev{d}base_stock{d}safety_stock{d}optimal_inventory{d}evaluation"
            )?;
        }

        writeln!(
            writer,
            "{:.2}{d}{:.2}{d}{:.2}{d}{:.2}{d}{:.2}{d}{}",
            assessment.average_monthly_cost,
            assessment.cost_std_dev,
            assessment.base_stock,
            assessment.safety_stock,
            assessment.optimal_inventory,
            assessment.evaluation
        )?;

        Ok(())
    }

    fn write_sales<W: Write + Send>(
        &self,
        sales: &[SalesRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "period{d}amount")?;
        }

        for record in sales {
            writeln!(writer, "{}{d}{}", record.period, record.amount)?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

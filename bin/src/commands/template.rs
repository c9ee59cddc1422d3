//! Template command implementation.
//!
//! Writes a blank sales history CSV for the assess command's --input flag.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use zaiko_format::{CsvFormatter, Formatter};
use zaiko_types::{SalesRecord, trailing_periods};

/// Write a sales CSV template with zeroed amounts for the trailing months.
pub(crate) fn template(months: usize, output: &Path) -> Result<()> {
    let sales: Vec<SalesRecord> = trailing_periods(months, Utc::now().date_naive())
        .into_iter()
        .map(|period| SalesRecord::new(period, 0.0))
        .collect();

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    CsvFormatter::new().write_sales(&sales, BufWriter::new(file))?;

    println!("Wrote {} month template to {}", months, output.display());
    Ok(())
}

//! Display utilities and output dispatch for the zaiko CLI.

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use zaiko_estimate::InventoryAssessment;
use zaiko_format::{CsvFormatter, Formatter, JsonFormatter, TextFormatter};
use zaiko_types::SalesRecord;

/// Output format for assessment results.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Csv,
    Json,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write an assessment to a file, or stdout when no path is given.
pub(crate) fn write_assessment(
    assessment: &InventoryAssessment,
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            dispatch_assessment(assessment, BufWriter::new(file), format)
        }
        None => dispatch_assessment(assessment, stdout(), format),
    }
}

fn dispatch_assessment<W: Write + Send>(
    assessment: &InventoryAssessment,
    writer: W,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => TextFormatter::new().write_assessment(assessment, writer)?,
        Format::Csv => CsvFormatter::new().write_assessment(assessment, writer)?,
        Format::Json => JsonFormatter::new().with_pretty(true).write_assessment(assessment, writer)?,
    }
    Ok(())
}

/// Read a sales history from a CSV file with `period,amount` columns.
pub(crate) fn read_sales_csv(path: &Path) -> Result<Vec<SalesRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let records: Vec<SalesRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .with_context(|| format!("Invalid sales CSV in {}", path.display()))?;

    Ok(records)
}

//! Assess command implementation.
//!
//! One-shot assessment from command line flags or a sales CSV file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use zaiko_estimate::Estimator;
use zaiko_types::Parameters;

use crate::display::{Format, read_sales_csv, write_assessment};

/// Compute and print an inventory assessment.
#[allow(clippy::too_many_arguments)]
pub(crate) fn assess(
    sales_str: Option<&str>,
    input: Option<&Path>,
    cost_ratio: f64,
    current_inventory: f64,
    lead_time: f64,
    safety_factor: f64,
    format: Format,
    output: Option<PathBuf>,
) -> Result<()> {
    let sales = match (sales_str, input) {
        (Some(s), _) => parse_sales_list(s)?,
        (None, Some(path)) => read_sales_csv(path)?
            .into_iter()
            .map(|record| record.amount)
            .collect(),
        (None, None) => bail!("Provide sales amounts with --sales or a CSV file with --input"),
    };

    let params = Parameters::new(cost_ratio, current_inventory, lead_time, safety_factor);
    let assessment = Estimator::global()
        .assess(&sales, &params)
        .context("Assessment rejected")?;

    write_assessment(&assessment, output.as_deref(), format)
}

/// Parse a comma-separated list of sales amounts.
fn parse_sales_list(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .with_context(|| format!("Invalid sales amount: {part}"))
        })
        .collect()
}

//! Interactive assessment form.
//!
//! Mirrors a single form: edit parameters and monthly sales freely, then
//! compute on demand. Edits never recompute on their own, and a rejected
//! compute leaves the inputs untouched for correction.

use anyhow::{Context, Result};
use chrono::Utc;
use inquire::{CustomType, Select};
use zaiko_estimate::Estimator;
use zaiko_types::{Parameters, SalesRecord, trailing_periods};

use crate::display::{Format, write_assessment};

/// Number of trailing months on the form.
const FORM_MONTHS: usize = 6;

/// Menu actions offered between edits.
const ACTIONS: [&str; 4] = ["Compute", "Edit parameters", "Edit sales", "Quit"];

/// Run the interactive form session.
pub(crate) fn run() -> Result<()> {
    println!("zaiko - safe inventory level estimator\n");

    let mut params = prompt_parameters(&Parameters::default())?;
    let mut sales = prompt_sales(initial_sales())?;

    loop {
        println!();
        let action = Select::new("Action:", ACTIONS.to_vec())
            .prompt()
            .context("Form session cancelled")?;

        match action {
            "Compute" => {
                let amounts: Vec<f64> = sales.iter().map(|record| record.amount).collect();
                match Estimator::global().assess(&amounts, &params) {
                    Ok(assessment) => {
                        println!();
                        write_assessment(&assessment, None, Format::Text)?;
                    }
                    Err(err) => eprintln!("Input rejected: {err}"),
                }
            }
            "Edit parameters" => params = prompt_parameters(&params)?,
            "Edit sales" => sales = prompt_sales(sales)?,
            _ => return Ok(()),
        }
    }
}

/// Prompt for all four parameters, defaulting to the current values.
fn prompt_parameters(current: &Parameters) -> Result<Parameters> {
    let cost_ratio = CustomType::<f64>::new("Cost ratio (%):")
        .with_default(current.cost_ratio)
        .with_help_message("Fraction of sales price attributable to cost of goods, 0-100")
        .prompt()
        .context("Form session cancelled")?;

    let current_inventory = CustomType::<f64>::new("Current inventory value (cost basis):")
        .with_default(current.current_inventory)
        .prompt()
        .context("Form session cancelled")?;

    let lead_time = CustomType::<f64>::new("Lead time (months):")
        .with_default(current.lead_time)
        .with_help_message("Replenishment delay, fractional allowed")
        .prompt()
        .context("Form session cancelled")?;

    let safety_factor = CustomType::<f64>::new("Safety stock factor:")
        .with_default(current.safety_factor)
        .prompt()
        .context("Form session cancelled")?;

    Ok(Parameters::new(
        cost_ratio,
        current_inventory,
        lead_time,
        safety_factor,
    ))
}

/// Prompt for each monthly sales amount, defaulting to the current values.
fn prompt_sales(current: Vec<SalesRecord>) -> Result<Vec<SalesRecord>> {
    let mut updated = Vec::with_capacity(current.len());
    for record in current {
        let amount = CustomType::<f64>::new(&format!("Sales for {}:", record.period))
            .with_default(record.amount)
            .prompt()
            .context("Form session cancelled")?;
        updated.push(SalesRecord::new(record.period, amount));
    }
    Ok(updated)
}

/// Six trailing months with the original form's sample sales figures.
fn initial_sales() -> Vec<SalesRecord> {
    const SAMPLE_AMOUNTS: [f64; FORM_MONTHS] = [
        1_000_000.0,
        1_200_000.0,
        950_000.0,
        1_100_000.0,
        1_300_000.0,
        1_150_000.0,
    ];

    trailing_periods(FORM_MONTHS, Utc::now().date_naive())
        .into_iter()
        .zip(SAMPLE_AMOUNTS)
        .map(|(period, amount)| SalesRecord::new(period, amount))
        .collect()
}

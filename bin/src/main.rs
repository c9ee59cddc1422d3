//! zaiko CLI - Safe inventory level estimator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "zaiko")]
#[command(about = "Estimate a safe inventory level from monthly sales", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive assessment form (default)
    Form,

    /// Compute an assessment from flags or a sales CSV file
    Assess {
        /// Comma-separated monthly sales amounts, oldest first (e.g. 1000000,1200000,...)
        #[arg(short, long, conflicts_with = "input")]
        sales: Option<String>,

        /// Sales history CSV file with period,amount columns
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Cost ratio as a percentage of sales price
        #[arg(long, default_value = "70")]
        cost_ratio: f64,

        /// Current inventory value at cost basis
        #[arg(long, default_value = "1500000")]
        current_inventory: f64,

        /// Replenishment lead time in months (fractional allowed)
        #[arg(long, default_value = "0.5")]
        lead_time: f64,

        /// Safety stock factor
        #[arg(long, default_value = "1.0")]
        safety_factor: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a sales history CSV template to fill in
    Template {
        /// Number of trailing months to include
        #[arg(short, long, default_value = "6")]
        months: usize,

        /// Output file path
        #[arg(short, long, default_value = "sales.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The tool is the form: no subcommand launches the interactive session.
    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => commands::form::run(),
        Commands::Assess {
            sales,
            input,
            cost_ratio,
            current_inventory,
            lead_time,
            safety_factor,
            format,
            output,
        } => commands::assess::assess(
            sales.as_deref(),
            input.as_deref(),
            cost_ratio,
            current_inventory,
            lead_time,
            safety_factor,
            format,
            output,
        ),
        Commands::Template { months, output } => commands::template::template(months, &output),
    }
}

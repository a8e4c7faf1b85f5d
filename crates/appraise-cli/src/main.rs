//! Appraise CLI - command-line interface for capital budgeting metrics.
//!
//! # Usage
//!
//! ```bash
//! # Appraise an investment scenario (12% discount, 7% inflation, 5 periods)
//! appraise evaluate --investment 1000 --cashflow 500
//!
//! # NPV of an explicit series at a 10% rate
//! appraise npv --rate 10 --cashflows="-1000,500,500,500"
//!
//! # IRR of an explicit series
//! appraise irr --cashflows="-1000,400,400,400,400"
//!
//! # Payback period of an explicit series
//! appraise payback --cashflows="-1000,400,400,400,400"
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;

    match cli.command {
        Commands::Evaluate(args) => commands::evaluate::execute(args, format)?,
        Commands::Npv(args) => commands::npv::execute(args, format)?,
        Commands::Irr(args) => commands::irr::execute(args, format)?,
        Commands::Payback(args) => commands::payback::execute(args, format)?,
    }

    Ok(())
}

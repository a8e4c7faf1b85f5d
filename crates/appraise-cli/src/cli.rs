//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{EvaluateArgs, IrrArgs, NpvArgs, PaybackArgs};

/// Appraise - capital budgeting metrics from the command line
#[derive(Parser)]
#[command(name = "appraise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Appraise an investment scenario (NPV, IRR, and payback period)
    Evaluate(EvaluateArgs),

    /// Net present value of an explicit cash-flow series
    Npv(NpvArgs),

    /// Internal rate of return of an explicit cash-flow series
    Irr(IrrArgs),

    /// Payback period of an explicit cash-flow series
    Payback(PaybackArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

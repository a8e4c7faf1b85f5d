//! Payback command implementation.

use clap::Args;

use appraise_analytics::payback;

use crate::cli::OutputFormat;
use crate::commands::parse_series;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the payback command.
#[derive(Args, Debug)]
pub struct PaybackArgs {
    /// Comma-separated cash flows, period 0 first (e.g. "-1000,400,400,400,400")
    #[arg(short, long, allow_hyphen_values = true)]
    pub cashflows: String,
}

/// Execute the payback command.
pub fn execute(args: PaybackArgs, format: OutputFormat) -> CliResult<()> {
    let series = parse_series(&args.cashflows)?;

    let result = payback(&series);

    match format {
        OutputFormat::Minimal => {
            println!("{result}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::Serialization(e.to_string()))?;
            println!("{json}");
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Cash Flows", series.to_string()),
                KeyValue::new("Payback Period", result.to_string()),
            ];
            if format == OutputFormat::Table {
                print_header("Payback Period");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

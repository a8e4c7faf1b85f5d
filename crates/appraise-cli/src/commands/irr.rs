//! IRR command implementation.

use clap::Args;

use appraise_analytics::irr;

use crate::cli::OutputFormat;
use crate::commands::parse_series;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    /// Comma-separated cash flows, period 0 first (e.g. "-1000,400,400,400,400")
    #[arg(short, long, allow_hyphen_values = true)]
    pub cashflows: String,
}

/// Execute the irr command.
pub fn execute(args: IrrArgs, format: OutputFormat) -> CliResult<()> {
    let series = parse_series(&args.cashflows)?;

    let result = irr(&series);

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
                KeyValue::new("Internal Rate of Return (IRR)", result.to_string()),
            ];
            if format == OutputFormat::Table {
                print_header("Internal Rate of Return");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

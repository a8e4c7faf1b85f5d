//! NPV command implementation.

use clap::Args;

use appraise_analytics::npv;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, parse_series};
use crate::error::CliResult;
use crate::output::{format_currency, print_header, print_output, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    /// Discount rate (as percentage, e.g. 10 for 10%)
    #[arg(short, long)]
    pub rate: f64,

    /// Comma-separated cash flows, period 0 first (e.g. "-1000,500,500,500")
    #[arg(short, long, allow_hyphen_values = true)]
    pub cashflows: String,

    /// Currency label attached to the result
    #[arg(long, default_value = "BDT")]
    pub currency_label: String,
}

/// Execute the npv command.
pub fn execute(args: NpvArgs, format: OutputFormat) -> CliResult<()> {
    let rate = parse_rate(args.rate)?;
    let series = parse_series(&args.cashflows)?;

    let value = npv(rate, &series)?;

    if format == OutputFormat::Minimal {
        println!("{value:.2}");
        return Ok(());
    }

    let rows = vec![
        KeyValue::new("Cash Flows", series.to_string()),
        KeyValue::new("Discount Rate", rate.to_string()),
        KeyValue::new(
            "Net Present Value (NPV)",
            format_currency(&args.currency_label, value),
        ),
    ];

    if format == OutputFormat::Table {
        print_header("Net Present Value");
    }
    print_output(&rows, format)
}

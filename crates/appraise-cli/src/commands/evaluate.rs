//! Evaluate command implementation.
//!
//! Builds a full investment scenario from two scalars and reports all
//! three appraisal metrics.

use clap::Args;

use appraise_analytics::{appraise, CashFlowScenario, ScenarioAssumptions};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{format_currency, print_header, print_output, KeyValue};

/// Arguments for the evaluate command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Upfront capital investment (non-negative)
    #[arg(short, long)]
    pub investment: f64,

    /// Cash flow for the first forecast period (non-negative)
    #[arg(short, long)]
    pub cashflow: f64,

    /// Discount rate (as percentage, e.g. 12 for 12%)
    #[arg(long, default_value = "12")]
    pub discount_rate: f64,

    /// Inflation rate applied to the forecast (as percentage)
    #[arg(long, default_value = "7")]
    pub inflation_rate: f64,

    /// Forecast horizon in periods
    #[arg(long, default_value = "5")]
    pub horizon: usize,

    /// Currency label attached to the NPV
    #[arg(long, default_value = "BDT")]
    pub currency_label: String,
}

/// Execute the evaluate command.
pub fn execute(args: EvaluateArgs, format: OutputFormat) -> CliResult<()> {
    let assumptions = ScenarioAssumptions::new(
        args.discount_rate / 100.0,
        args.inflation_rate / 100.0,
        args.horizon,
    );
    let scenario = CashFlowScenario::new(args.investment, args.cashflow)?
        .with_assumptions(assumptions);

    let report = appraise(&scenario)?;

    match format {
        OutputFormat::Minimal => {
            println!("{:.2}", report.npv);
            println!("{}", report.irr);
            println!("{}", report.payback);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Serialization(e.to_string()))?;
            println!("{json}");
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Capital Investment", format!("{:.2}", args.investment)),
                KeyValue::new("Base Year Cash Flow", format!("{:.2}", args.cashflow)),
                KeyValue::new("Discount Rate", format!("{:.2}%", args.discount_rate)),
                KeyValue::new("Inflation Rate", format!("{:.2}%", args.inflation_rate)),
                KeyValue::new("Forecast Horizon", format!("{} periods", args.horizon)),
                KeyValue::new("Cash Flows", report.series.to_string()),
                KeyValue::new(
                    "Net Present Value (NPV)",
                    format_currency(&args.currency_label, report.npv),
                ),
                KeyValue::new("Internal Rate of Return (IRR)", report.irr.to_string()),
                KeyValue::new("Payback Period", report.payback.to_string()),
            ];
            if format == OutputFormat::Table {
                print_header("Investment Appraisal");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

//! Integrate command implementation.
//!
//! Estimates the accumulation function `F(x) = integral from 0 to x`.

use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::commands::parse_polynomial;
use crate::config::Settings;
use crate::output::{print_report, KeyValue};

/// Arguments for the integrate command.
#[derive(Args, Debug)]
pub struct IntegrateArgs {
    /// Coefficients, highest degree first (e.g. 4,1,2,1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub coefficients: String,
}

/// Execute the integrate command.
pub fn execute(args: IntegrateArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let poly = parse_polynomial(&args.coefficients)?;

    debug!(
        "Sampling integrals with {} Simpson panels",
        settings.accumulation.panels
    );
    let accumulation = settings.accumulation_estimator().accumulation_polynomial(&poly)?;
    info!("Accumulation estimate: {}", accumulation);

    let results = vec![
        KeyValue::new("Input", poly.to_string()),
        KeyValue::new("Accumulation", accumulation.to_string()),
        KeyValue::from_polynomial("Coefficients", &accumulation),
        KeyValue::new("Panels", settings.accumulation.panels.to_string()),
    ];

    print_report("Accumulation Estimate", &results, format, "Coefficients")
}

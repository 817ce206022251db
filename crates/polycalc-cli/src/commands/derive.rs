//! Derive command implementation.
//!
//! Estimates the derivative polynomial by sampling slopes and re-fitting.

use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::commands::parse_polynomial;
use crate::config::Settings;
use crate::output::{print_report, KeyValue};

/// Arguments for the derive command.
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Coefficients, highest degree first (e.g. 1,0,0,0,0,0,1 for x^6 + 1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub coefficients: String,

    /// Also report the slope at this point
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<f64>,
}

/// Execute the derive command.
pub fn execute(args: DeriveArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let poly = parse_polynomial(&args.coefficients)?;
    let estimator = settings.derivative_estimator();

    debug!("Estimating derivative of degree {} polynomial", poly.degree());
    let derivative = estimator.derivative_polynomial(&poly)?;
    info!("Derivative estimate: {}", derivative);

    let mut results = vec![
        KeyValue::new("Input", poly.to_string()),
        KeyValue::new("Derivative", derivative.to_string()),
        KeyValue::from_polynomial("Coefficients", &derivative),
    ];

    let minimal_key = match args.at {
        Some(x) => {
            let slope = estimator.slope_at_point(&poly, x)?;
            results.push(KeyValue::from_f64(format!("Slope at {}", x), slope));
            format!("Slope at {}", x)
        }
        None => "Coefficients".to_string(),
    };

    print_report("Derivative Estimate", &results, format, &minimal_key)
}

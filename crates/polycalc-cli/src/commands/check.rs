//! Check command implementation.
//!
//! Reports a polynomial next to its derivative and accumulation estimates
//! and both round trips, so the fundamental theorem of calculus can be
//! checked by eye.

use anyhow::Result;
use clap::Args;
use tracing::info;

use polycalc_math::Polynomial;

use crate::cli::OutputFormat;
use crate::commands::parse_polynomial;
use crate::config::Settings;
use crate::output::{print_report, print_warning, KeyValue};

/// Largest coefficient deviation still reported as a match.
const MATCH_TOLERANCE: f64 = 1e-4;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Coefficients, highest degree first (e.g. 4,1,2,1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub coefficients: String,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let poly = parse_polynomial(&args.coefficients)?;
    let derivatives = settings.derivative_estimator();
    let accumulations = settings.accumulation_estimator();

    let derivative = derivatives.derivative_polynomial(&poly)?;
    let accumulation = accumulations.accumulation_polynomial(&poly)?;
    let accumulated_derivative = accumulations.accumulation_polynomial(&derivative)?;
    let derived_accumulation = derivatives.derivative_polynomial(&accumulation)?;

    // The constant term is lost by differentiating first.
    let lower = max_deviation(&accumulated_derivative, &poly, 1);
    let upper = max_deviation(&derived_accumulation, &poly, 0);
    info!("Round trip deviations {:e} and {:e}", lower, upper);

    let results = vec![
        KeyValue::new("P", poly.to_string()),
        KeyValue::new("P'", derivative.to_string()),
        KeyValue::new("∫P", accumulation.to_string()),
        KeyValue::new("∫(P')", accumulated_derivative.to_string()),
        KeyValue::new("(∫P)'", derived_accumulation.to_string()),
        KeyValue::new("max |∫(P') - P| above constant", format!("{:e}", lower)),
        KeyValue::new("max |(∫P)' - P|", format!("{:e}", upper)),
        KeyValue::new("Status", status(lower.max(upper))),
    ];

    if lower.max(upper) > MATCH_TOLERANCE {
        print_warning("Round trips diverge; high degrees make the Vandermonde systems ill-conditioned");
    }

    print_report("Fundamental Theorem Check", &results, format, "Status")
}

/// Largest coefficient difference over powers `from..`.
fn max_deviation(actual: &Polynomial, expected: &Polynomial, from: usize) -> f64 {
    let top = actual.degree().max(expected.degree());
    (from..=top)
        .map(|power| (actual.coefficient(power) - expected.coefficient(power)).abs())
        .fold(0.0, f64::max)
}

fn status(deviation: f64) -> &'static str {
    if deviation <= MATCH_TOLERANCE {
        "match"
    } else {
        "diverged"
    }
}

//! Fit command implementation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use polycalc_math::interpolation::PolynomialFit;

use crate::cli::OutputFormat;
use crate::commands::parse_values;
use crate::config::Settings;
use crate::output::{print_report, print_warning, KeyValue};

/// Arguments for the fit command.
#[derive(Args, Debug)]
pub struct FitArgs {
    /// Sample abscissas (comma-separated, distinct)
    #[arg(long, allow_hyphen_values = true)]
    pub xs: String,

    /// Sample ordinates (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub ys: String,

    /// Polynomial degree. Defaults to one less than the number of points.
    #[arg(short, long)]
    pub degree: Option<usize>,
}

/// Execute the fit command.
pub fn execute(args: FitArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let xs = parse_values(&args.xs, "xs")?;
    let ys = parse_values(&args.ys, "ys")?;
    let degree = args.degree.unwrap_or(xs.len().saturating_sub(1));

    if degree < xs.len().saturating_sub(1) {
        print_warning(&format!(
            "Using the first {} of {} points for a degree {} fit",
            degree + 1,
            xs.len(),
            degree
        ));
    }

    let points = xs.len();
    let fit = PolynomialFit::with_config(xs, ys, degree, &settings.fit_config())?;
    info!("Fitted {} through {} points", fit.polynomial(), points);

    let results = vec![
        KeyValue::new("Polynomial", fit.polynomial().to_string()),
        KeyValue::from_polynomial("Coefficients", fit.polynomial()),
        KeyValue::new("Points", points.to_string()),
        KeyValue::from_f64("R²", fit.r_squared()?),
    ];

    print_report("Polynomial Fit", &results, format, "Coefficients")
}

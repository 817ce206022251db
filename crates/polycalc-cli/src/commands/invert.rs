//! Invert command implementation.
//!
//! Inverts a square matrix and reports how far `M * M^-1` is from the
//! identity.

use anyhow::Result;
use clap::Args;
use tracing::info;

use polycalc_math::Matrix;

use crate::cli::OutputFormat;
use crate::commands::parse_matrix;
use crate::config::Settings;
use crate::output::{format_matrix, format_values, print_report, KeyValue};

/// Arguments for the invert command.
#[derive(Args, Debug)]
pub struct InvertArgs {
    /// Matrix rows separated by ';', entries by ',' (e.g. "1,2;3,4")
    #[arg(short, long, allow_hyphen_values = true)]
    pub matrix: String,
}

/// Execute the invert command.
pub fn execute(args: InvertArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let m = parse_matrix(&args.matrix)?;
    let inverse = m.invert_with(&settings.reduction)?;

    let identity = Matrix::identity(m.rows())?;
    let residual = m.times(&inverse)?.max_abs_diff(&identity)?;
    info!("Inverted {}x{} matrix, residual {:e}", m.rows(), m.cols(), residual);

    let mut results = vec![KeyValue::new("Size", format!("{}x{}", m.rows(), m.cols()))];
    for i in 0..inverse.rows() {
        results.push(KeyValue::new(format!("Row {}", i + 1), format_values(inverse.row(i)?)));
    }
    results.push(KeyValue::new("Inverse", format_matrix(&inverse)));
    results.push(KeyValue::new("max |M·M⁻¹ - I|", format!("{:e}", residual)));

    print_report("Matrix Inverse", &results, format, "Inverse")
}

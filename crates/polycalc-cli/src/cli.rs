//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CheckArgs, DeriveArgs, FitArgs, IntegrateArgs, InvertArgs};

/// Polycalc - Matrix engine and polynomial calculus by interpolation
#[derive(Parser)]
#[command(name = "polycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// TOML file with [reduction], [fit] and [accumulation] sections
    #[arg(long, env = "POLYCALC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log reduction and fitting details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the derivative polynomial (and optionally a slope)
    Derive(DeriveArgs),

    /// Estimate the accumulation polynomial
    Integrate(IntegrateArgs),

    /// Fit a polynomial through sample points
    Fit(FitArgs),

    /// Invert a square matrix
    Invert(InvertArgs),

    /// Compare a polynomial with its derivative and accumulation round trips
    Check(CheckArgs),
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

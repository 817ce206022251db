//! Polycalc CLI - Command-line interface for the polynomial calculus engine.
//!
//! # Usage
//!
//! ```bash
//! # Derivative of x^6 + 1, with the slope at x = 2
//! polycalc derive -c 1,0,0,0,0,0,1 --at 2
//!
//! # Accumulation function of 4x^3 + x^2 + 2x + 1
//! polycalc integrate -c 4,1,2,1
//!
//! # Fit a quadratic through sample points
//! polycalc fit --xs 1,2,3 --ys 2,5,10 --degree 2
//!
//! # Invert a matrix
//! polycalc invert -m "1,2,3;4,5,6;7,8,10"
//!
//! # Fundamental theorem report
//! polycalc check -c 4,1,2,1
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; library warnings arrive through the log bridge
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match cli.config.as_deref() {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            Settings::from_file(path)?
        }
        None => Settings::default(),
    };

    let format = cli.format;

    match cli.command {
        Commands::Derive(args) => commands::derive::execute(args, &settings, format)?,
        Commands::Integrate(args) => commands::integrate::execute(args, &settings, format)?,
        Commands::Fit(args) => commands::fit::execute(args, &settings, format)?,
        Commands::Invert(args) => commands::invert::execute(args, &settings, format)?,
        Commands::Check(args) => commands::check::execute(args, &settings, format)?,
    }

    Ok(())
}

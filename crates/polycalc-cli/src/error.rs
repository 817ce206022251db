//! CLI error types.

use polycalc_math::MathError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A list entry is not a finite number.
    #[error("Invalid number '{0}' in list. Use comma-separated values, e.g. 1,0,-2.5")]
    InvalidNumber(String),

    /// An empty value list.
    #[error("Missing values for {0}")]
    EmptyList(String),

    /// Matrix rows of different lengths.
    #[error("Invalid matrix: {0}. Separate rows with ';' and entries with ','")]
    InvalidMatrix(String),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] MathError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

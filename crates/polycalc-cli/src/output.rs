//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use polycalc_math::{Matrix, Polynomial};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a titled metric report.
///
/// JSON output is a single object keyed by metric; minimal output prints
/// only the value of `minimal_key`.
pub fn print_report(
    title: &str,
    results: &[KeyValue],
    format: OutputFormat,
    minimal_key: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_output(results, format)?;
        }
        OutputFormat::Json => {
            let output: serde_json::Map<String, serde_json::Value> = results
                .iter()
                .map(|r| (r.key.clone(), serde_json::Value::String(r.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => print_output(results, format)?,
        OutputFormat::Minimal => {
            if let Some(r) = results.iter().find(|r| r.key == minimal_key) {
                println!("{}", r.value);
            }
        }
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Coefficients highest degree first, comma separated.
pub fn format_coefficients(poly: &Polynomial) -> String {
    format_values(&poly.descending())
}

/// Matrix rows separated by `;`, entries by `,`.
pub fn format_matrix(m: &Matrix) -> String {
    (0..m.rows())
        .filter_map(|i| m.row(i).ok().map(format_values))
        .collect::<Vec<_>>()
        .join(";")
}

/// Values rounded for display, comma separated.
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{}", round_for_display(*v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Rounds to 6 decimal places, dropping negative zero.
pub fn round_for_display(value: f64) -> f64 {
    (value * 1e6).round() / 1e6 + 0.0
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a number rounded for display.
    pub fn from_f64(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format!("{}", round_for_display(value)))
    }

    /// Creates a key-value pair holding a polynomial's coefficients.
    pub fn from_polynomial(key: impl Into<String>, poly: &Polynomial) -> Self {
        Self::new(key, format_coefficients(poly))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

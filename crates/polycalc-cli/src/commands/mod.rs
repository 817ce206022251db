//! CLI command implementations.

pub mod check;
pub mod derive;
pub mod fit;
pub mod integrate;
pub mod invert;

// Re-export submodules for convenience
pub use check::CheckArgs;
pub use derive::DeriveArgs;
pub use fit::FitArgs;
pub use integrate::IntegrateArgs;
pub use invert::InvertArgs;

use polycalc_math::{Matrix, Polynomial};

use crate::error::{CliError, CliResult};

/// Parses a comma-separated list of finite numbers.
pub fn parse_values(s: &str, what: &str) -> CliResult<Vec<f64>> {
    let values = s
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CliError::InvalidNumber(t.to_string()))
        })
        .collect::<CliResult<Vec<_>>>()?;

    if values.is_empty() {
        return Err(CliError::EmptyList(what.to_string()));
    }
    Ok(values)
}

/// Parses coefficients given highest degree first.
pub fn parse_polynomial(s: &str) -> CliResult<Polynomial> {
    let coefficients = parse_values(s, "coefficients")?;
    Ok(Polynomial::from_descending(&coefficients))
}

/// Parses a matrix written as `1,2;3,4`.
pub fn parse_matrix(s: &str) -> CliResult<Matrix> {
    let rows = s
        .split(';')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| parse_values(r, "matrix row"))
        .collect::<CliResult<Vec<_>>>()?;

    if rows.is_empty() {
        return Err(CliError::EmptyList("matrix".to_string()));
    }
    Matrix::from_rows(rows).map_err(|e| CliError::InvalidMatrix(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("1, -2.5,3", "xs").unwrap(), vec![1.0, -2.5, 3.0]);
        assert_eq!(parse_values("4,", "xs").unwrap(), vec![4.0]);
        assert!(matches!(
            parse_values("1,x", "xs"),
            Err(CliError::InvalidNumber(t)) if t == "x"
        ));
        assert!(matches!(parse_values(" , ", "xs"), Err(CliError::EmptyList(_))));
        assert!(parse_values("1,inf", "xs").is_err());
    }

    #[test]
    fn test_parse_polynomial_highest_first() {
        let p = parse_polynomial("1,0,0,0,0,0,1").unwrap();
        assert_eq!(p.degree(), 6);
        assert_eq!(p.coefficient(6), 1.0);
        assert_eq!(p.coefficient(0), 1.0);
    }

    #[test]
    fn test_parse_matrix() {
        let m = parse_matrix("1,2,3;4,5,6;7,8,10").unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m[(2, 2)], 10.0);

        assert!(matches!(parse_matrix("1,2;3"), Err(CliError::InvalidMatrix(_))));
        assert!(parse_matrix(";").is_err());
    }
}

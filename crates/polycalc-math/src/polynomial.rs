//! Dense real polynomials.

use std::fmt;

use crate::error::{MathError, MathResult};

/// A polynomial with real coefficients.
///
/// Coefficients are stored in ascending order of power, so
/// `coefficients()[k]` multiplies `x^k`. The degree is the number of stored
/// coefficients minus one; a fitted polynomial keeps its fitted degree even
/// when its leading coefficient rounds to zero.
///
/// # Example
///
/// ```rust
/// use polycalc_math::Polynomial;
///
/// // 2x^6 + 1
/// let p = Polynomial::from_descending(&[2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// assert_eq!(p.degree(), 6);
/// assert_eq!(p.evaluate(1.0), 3.0);
/// assert_eq!(p.to_string(), "P(x) = 2x^6 + 1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered highest degree first.
    ///
    /// An empty slice gives the zero polynomial.
    pub fn from_descending(coefficients: &[f64]) -> Self {
        let mut ascending = coefficients.to_vec();
        ascending.reverse();
        Self::from_ascending_vec(ascending)
    }

    /// Creates a polynomial from coefficients ordered constant term first.
    ///
    /// An empty slice gives the zero polynomial.
    pub fn from_ascending(coefficients: &[f64]) -> Self {
        Self::from_ascending_vec(coefficients.to_vec())
    }

    /// The zero polynomial (degree 0).
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0.0],
        }
    }

    fn from_ascending_vec(coefficients: Vec<f64>) -> Self {
        if coefficients.is_empty() {
            return Self::zero();
        }
        Self { coefficients }
    }

    /// Degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficient of `x^power`; zero beyond the degree.
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefficients.get(power).copied().unwrap_or(0.0)
    }

    /// Coefficients in ascending order of power.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficients ordered highest degree first.
    pub fn descending(&self) -> Vec<f64> {
        self.coefficients.iter().rev().copied().collect()
    }

    /// Evaluates the polynomial at `x` (Horner's scheme).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Coefficient of determination of this polynomial against `(xs, ys)`.
    ///
    /// Returns 1.0 for a perfect fit. When the data has no variance the
    /// result is 1.0 for an exact fit and negative infinity otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length or are empty.
    pub fn r_squared(&self, xs: &[f64], ys: &[f64]) -> MathResult<f64> {
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }

        let mean = ys.iter().sum::<f64>() / ys.len() as f64;
        let (ss_res, ss_tot) = xs
            .iter()
            .zip(ys)
            .fold((0.0, 0.0), |(res, tot), (&x, &y)| {
                (
                    res + (y - self.evaluate(x)).powi(2),
                    tot + (y - mean).powi(2),
                )
            });

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { f64::NEG_INFINITY });
        }
        Ok(1.0 - ss_res / ss_tot)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(x) = ")?;

        let mut wrote_term = false;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }

            let magnitude = c.abs();
            if wrote_term {
                write!(f, " {} ", if c < 0.0 { '-' } else { '+' })?;
            } else if c < 0.0 {
                write!(f, "-")?;
            }

            if magnitude != 1.0 || power == 0 {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
            wrote_term = true;
        }

        if !wrote_term {
            write!(f, "0")?;
        }
        Ok(())
    }
}

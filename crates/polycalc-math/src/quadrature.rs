//! Fixed-panel numerical integration.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::polynomial::Polynomial;

/// Default number of subintervals.
pub const DEFAULT_PANELS: usize = 100;

/// A definite-integral rule for polynomials.
pub trait Quadrature {
    /// Approximates the integral of `poly` over `[lower, upper]`.
    fn integrate(&self, poly: &Polynomial, lower: f64, upper: f64) -> MathResult<f64>;
}

/// Composite Simpson's rule with a fixed panel count.
///
/// Exact for polynomials up to degree three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpsonsRule {
    /// Number of subintervals; odd counts are rounded up to even.
    pub panels: usize,
}

impl Default for SimpsonsRule {
    fn default() -> Self {
        Self {
            panels: DEFAULT_PANELS,
        }
    }
}

impl SimpsonsRule {
    /// Creates a rule with the given panel count.
    pub fn new(panels: usize) -> Self {
        Self { panels }
    }
}

impl Quadrature for SimpsonsRule {
    fn integrate(&self, poly: &Polynomial, lower: f64, upper: f64) -> MathResult<f64> {
        simpson(|x| poly.evaluate(x), lower, upper, self.panels)
    }
}

/// Integrates `f` over `[a, b]` with composite Simpson's rule.
///
/// # Errors
///
/// Returns an error if `panels` is zero or a bound is not finite.
pub fn simpson<F>(f: F, a: f64, b: f64, panels: usize) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    if panels == 0 {
        return Err(MathError::invalid_input("panel count must be positive"));
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(MathError::invalid_input(format!(
            "integration bounds must be finite: [{a}, {b}]"
        )));
    }

    let n = if panels % 2 == 1 { panels + 1 } else { panels };
    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(a + h * i as f64);
    }

    Ok(sum * h / 3.0)
}

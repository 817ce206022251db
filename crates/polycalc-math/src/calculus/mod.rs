//! Numerical derivatives and accumulation functions of polynomials.
//!
//! Both estimators work by sampling and re-fitting rather than by symbolic
//! manipulation of coefficients:
//!
//! - [`DerivativeEstimator`] solves a small linear system for the slope at
//!   each point `x = 1..=n` and fits a degree `n - 1` polynomial through the
//!   slopes.
//! - [`AccumulationEstimator`] integrates from 0 to each `x = 1..=n + 2` with
//!   a [`Quadrature`](crate::quadrature::Quadrature) rule and fits a degree
//!   `n + 1` polynomial through the areas.
//!
//! For low degrees the two are inverse up to the constant term, which is
//! the fundamental theorem of calculus:
//!
//! ```rust
//! use polycalc_math::calculus::{accumulation_polynomial, derivative_polynomial};
//! use polycalc_math::Polynomial;
//!
//! // 4x^3 + x^2 + 2x + 1
//! let p = Polynomial::from_descending(&[4.0, 1.0, 2.0, 1.0]);
//!
//! let roundtrip = derivative_polynomial(&accumulation_polynomial(&p).unwrap()).unwrap();
//! for power in 0..=3 {
//!     assert!((roundtrip.coefficient(power) - p.coefficient(power)).abs() < 1e-4);
//! }
//! ```
//!
//! Accuracy degrades quickly past degree 8 as the Vandermonde systems
//! become ill-conditioned.

mod accumulation;
mod derivative;

pub use accumulation::{AccumulationConfig, AccumulationEstimator};
pub use derivative::DerivativeEstimator;

use crate::error::MathResult;
use crate::polynomial::Polynomial;
use crate::quadrature::DEFAULT_PANELS;

/// Slope of `poly` at `x` with default thresholds.
pub fn slope_at_point(poly: &Polynomial, x: f64) -> MathResult<f64> {
    DerivativeEstimator::new().slope_at_point(poly, x)
}

/// Derivative polynomial of `poly` with default configuration.
pub fn derivative_polynomial(poly: &Polynomial) -> MathResult<Polynomial> {
    DerivativeEstimator::new().derivative_polynomial(poly)
}

/// Accumulation polynomial of `poly` with Simpson's rule over 100 panels.
pub fn accumulation_polynomial(poly: &Polynomial) -> MathResult<Polynomial> {
    AccumulationEstimator::simpson(DEFAULT_PANELS).accumulation_polynomial(poly)
}

//! Interpolating polynomial over a sample.

use crate::calculus;
use crate::error::{MathError, MathResult};
use crate::interpolation::{fit_with, FitConfig, Interpolator};
use crate::polynomial::Polynomial;

/// A polynomial fitted through sample points.
///
/// Evaluation is restricted to the span of the points that defined the
/// fit unless extrapolation is enabled. Derivatives come from the
/// Vandermonde slope estimator rather than symbolic differentiation.
///
/// # Example
///
/// ```rust
/// use polycalc_math::interpolation::{Interpolator, PolynomialFit};
///
/// let xs = vec![0.0, 1.0, 2.0];
/// let ys = vec![1.0, 2.0, 5.0]; // x^2 + 1
///
/// let fit = PolynomialFit::new(xs, ys, 2).unwrap();
/// assert_eq!(fit.interpolate(1.5).unwrap(), 3.25);
/// assert!(fit.interpolate(3.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PolynomialFit {
    xs: Vec<f64>,
    ys: Vec<f64>,
    polynomial: Polynomial,
    min_x: f64,
    max_x: f64,
    allow_extrapolation: bool,
}

impl PolynomialFit {
    /// Fits a polynomial of `degree` through the points.
    ///
    /// # Errors
    ///
    /// Same as [`fit`](crate::interpolation::fit).
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, degree: usize) -> MathResult<Self> {
        Self::with_config(xs, ys, degree, &FitConfig::default())
    }

    /// Fits with explicit configuration.
    pub fn with_config(
        xs: Vec<f64>,
        ys: Vec<f64>,
        degree: usize,
        config: &FitConfig,
    ) -> MathResult<Self> {
        let polynomial = fit_with(&xs, &ys, degree, config)?;

        // Only the first degree + 1 points define the fit.
        let used = &xs[..=degree];
        let min_x = used.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = used.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            xs,
            ys,
            polynomial,
            min_x,
            max_x,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// The fitted polynomial.
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Consumes the fit, returning the polynomial.
    pub fn into_polynomial(self) -> Polynomial {
        self.polynomial
    }

    /// Coefficient of determination over the full sample.
    pub fn r_squared(&self) -> MathResult<f64> {
        self.polynomial.r_squared(&self.xs, &self.ys)
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x,
                max: self.max_x,
            });
        }
        Ok(())
    }
}

impl Interpolator for PolynomialFit {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        Ok(self.polynomial.evaluate(x))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        calculus::slope_at_point(&self.polynomial, x)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.min_x
    }

    fn max_x(&self) -> f64 {
        self.max_x
    }
}

//! Polynomial interpolation through sample points.
//!
//! [`fit`] passes a polynomial of a chosen degree through sample points by
//! solving a generalized Vandermonde system (see [`vandermonde`]).
//! [`PolynomialFit`] keeps the fitted polynomial together with its sample
//! range and implements [`Interpolator`].
//!
//! # Solving strategies
//!
//! | Method | Route | Default |
//! |--------|-------|---------|
//! | [`FitMethod::Inversion`] | invert the design matrix, multiply by the ordinates | yes |
//! | [`FitMethod::RowReduction`] | reduce the augmented system `[design \| ys]` | no |
//!
//! Both raise [`MathError::SingularSystem`] for repeated abscissas.
//!
//! # Example
//!
//! ```rust
//! use polycalc_math::interpolation::fit;
//!
//! // Points on 3x^2 - 2x + 1
//! let xs = [1.0, 2.0, 3.0, 4.0];
//! let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x * x - 2.0 * x + 1.0).collect();
//!
//! let p = fit(&xs, &ys, 2).unwrap();
//! assert_eq!(p.descending(), vec![3.0, -2.0, 1.0]);
//! ```

mod polynomial_fit;
pub mod vandermonde;

pub use polynomial_fit::PolynomialFit;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::linear_algebra::LinearSystem;
use crate::matrix::{Matrix, ReductionConfig};
use crate::polynomial::Polynomial;

/// Default number of decimal places fitted coefficients are rounded to.
pub const DEFAULT_ROUNDING_DECIMALS: u32 = 6;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// How the Vandermonde system is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMethod {
    /// Invert the square design matrix and multiply by the ordinates.
    #[default]
    Inversion,
    /// Row-reduce the augmented system directly.
    RowReduction,
}

/// Configuration for polynomial fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Decimal places each coefficient is rounded to.
    pub rounding_decimals: u32,
    /// Solving strategy.
    pub method: FitMethod,
    /// Row reduction thresholds.
    pub reduction: ReductionConfig,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            rounding_decimals: DEFAULT_ROUNDING_DECIMALS,
            method: FitMethod::default(),
            reduction: ReductionConfig::default(),
        }
    }
}

impl FitConfig {
    /// Sets the rounding precision.
    #[must_use]
    pub fn with_rounding_decimals(mut self, decimals: u32) -> Self {
        self.rounding_decimals = decimals;
        self
    }

    /// Sets the solving strategy.
    #[must_use]
    pub fn with_method(mut self, method: FitMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the row reduction thresholds.
    #[must_use]
    pub fn with_reduction(mut self, reduction: ReductionConfig) -> Self {
        self.reduction = reduction;
        self
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.rounding_decimals as i32);
        (value * scale).round() / scale + 0.0
    }
}

/// Fits a polynomial of `degree` through the sample points using the
/// default [`FitConfig`].
///
/// The first `degree + 1` points form the system; any further points are
/// ignored. Coefficients are rounded to 6 decimal places.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `xs` and `ys` differ in length or hold
///   non-finite values.
/// - [`MathError::InsufficientData`] if there are fewer than `degree + 1`
///   points.
/// - [`MathError::SingularSystem`] if the abscissas are not distinct.
pub fn fit(xs: &[f64], ys: &[f64], degree: usize) -> MathResult<Polynomial> {
    fit_with(xs, ys, degree, &FitConfig::default())
}

/// Fits a polynomial with explicit configuration.
pub fn fit_with(
    xs: &[f64],
    ys: &[f64],
    degree: usize,
    config: &FitConfig,
) -> MathResult<Polynomial> {
    let (xs, ys) = fitting_points(xs, ys, degree)?;

    let solution = match config.method {
        FitMethod::Inversion => {
            let inverse = vandermonde::design_matrix(xs, degree)?.invert_with(&config.reduction)?;
            inverse.times(&Matrix::column_vector(ys)?)?.column(0)?
        }
        FitMethod::RowReduction => {
            let system = vandermonde::augmented_system(xs, ys, degree)?;
            LinearSystem::from_augmented(system)?.solve_with(&config.reduction)?
        }
    };

    let coefficients: Vec<f64> = solution.into_iter().map(|c| config.round(c)).collect();
    Ok(Polynomial::from_descending(&coefficients))
}

/// Number of points a degree `degree` fit is solved on.
pub(crate) fn point_count(degree: usize) -> MathResult<usize> {
    degree
        .checked_add(1)
        .ok_or_else(|| MathError::invalid_input(format!("degree {degree} is too large")))
}

/// Validates the sample and returns the `degree + 1` points that are used.
fn fitting_points<'a>(
    xs: &'a [f64],
    ys: &'a [f64],
    degree: usize,
) -> MathResult<(&'a [f64], &'a [f64])> {
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }

    let required = point_count(degree)?;
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("sample values must be finite"));
    }

    if xs.len() > required {
        log::debug!(
            "Degree {} fit uses the first {} of {} points",
            degree,
            required,
            xs.len()
        );
    }
    Ok((&xs[..required], &ys[..required]))
}

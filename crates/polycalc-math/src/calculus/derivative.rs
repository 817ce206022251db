//! Slope estimation by division against `(t - x)^2`.
//!
//! Any polynomial can be written as
//!
//! ```text
//! P(t) = (t - x)^2 * Q(t) + m*t + b
//! ```
//!
//! with `deg Q = deg P - 2`. The first term and its derivative vanish at
//! `t = x`, so `P'(x) = m`. Matching coefficients degree by degree gives a
//! square system in the unknowns `(b, m, q_0, ..., q_{n-2})`:
//!
//! ```text
//! columns:  b   m   q_0   q_1  ...  | rhs
//! degree 0: 1   0   x^2   0    ...  | p_0
//! degree 1: 0   1   -2x   x^2  ...  | p_1
//! degree 2: 0   0   1     -2x  ...  | p_2
//! ...
//! ```

use crate::error::MathResult;
use crate::interpolation::{fit_with, FitConfig};
use crate::linear_algebra::LinearSystem;
use crate::matrix::{Matrix, ReductionConfig};
use crate::polynomial::Polynomial;

const B_COLUMN: usize = 0;
const M_COLUMN: usize = 1;
const QUOTIENT_OFFSET: usize = 2;

/// Estimates derivatives by solving the quadratic-division system.
///
/// # Example
///
/// ```rust
/// use polycalc_math::calculus::DerivativeEstimator;
/// use polycalc_math::Polynomial;
///
/// // x^6 + 1
/// let p = Polynomial::from_descending(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// let slope = DerivativeEstimator::default().slope_at_point(&p, 2.0).unwrap();
/// assert!((slope - 192.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivativeEstimator {
    reduction: ReductionConfig,
    fit: FitConfig,
}

impl DerivativeEstimator {
    /// Creates an estimator with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thresholds used for the slope system.
    #[must_use]
    pub fn with_reduction(mut self, reduction: ReductionConfig) -> Self {
        self.reduction = reduction;
        self
    }

    /// Sets the configuration used to fit the derivative polynomial.
    #[must_use]
    pub fn with_fit(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    /// Slope of `poly` at `x`.
    ///
    /// A constant polynomial has slope 0.
    ///
    /// # Errors
    ///
    /// - [`MathError::SingularSystem`](crate::MathError::SingularSystem) if
    ///   the reduction thresholds prevent the system from reaching a unit
    ///   pivot in every column.
    /// - [`MathError::InvalidInput`](crate::MathError::InvalidInput) if `x`
    ///   is so large that `x^2` overflows.
    pub fn slope_at_point(&self, poly: &Polynomial, x: f64) -> MathResult<f64> {
        if poly.degree() == 0 {
            return Ok(0.0);
        }

        let system = slope_system(poly, x)?;
        let solution = LinearSystem::from_augmented(system)?.solve_with(&self.reduction)?;
        Ok(solution[M_COLUMN])
    }

    /// Approximates `P'` by sampling slopes at `x = 1..=deg(P)` and fitting
    /// a polynomial of degree `deg(P) - 1` through them.
    ///
    /// The sample holds exactly as many points as the fit needs. The
    /// derivative of a constant is the zero polynomial.
    pub fn derivative_polynomial(&self, poly: &Polynomial) -> MathResult<Polynomial> {
        let degree = poly.degree();
        if degree == 0 {
            return Ok(Polynomial::zero());
        }

        let xs: Vec<f64> = (1..=degree).map(|x| x as f64).collect();
        let slopes = xs
            .iter()
            .map(|&x| self.slope_at_point(poly, x))
            .collect::<MathResult<Vec<_>>>()?;

        log::debug!("Fitting degree {} derivative through {} slopes", degree - 1, slopes.len());
        fit_with(&xs, &slopes, degree - 1, &self.fit)
    }
}

/// Builds the `(n + 1) x (n + 2)` augmented system for `deg P = n >= 1`.
fn slope_system(poly: &Polynomial, x: f64) -> MathResult<Matrix> {
    let n = poly.degree();
    let divisor = [x * x, -2.0 * x, 1.0];

    let mut system = Matrix::new(n + 1, n + 2)?;
    system.set_entry(0, B_COLUMN, 1.0)?;
    system.set_entry(1, M_COLUMN, 1.0)?;

    for degree in 0..=n {
        // q_k * t^k * divisor[j] * t^j lands in degree k + j.
        for (j, &d) in divisor.iter().enumerate() {
            if let Some(k) = degree.checked_sub(j).filter(|&k| k + 1 < n) {
                system.set_entry(degree, QUOTIENT_OFFSET + k, d)?;
            }
        }
        system.set_entry(degree, n + 1, poly.coefficient(degree))?;
    }
    Ok(system)
}

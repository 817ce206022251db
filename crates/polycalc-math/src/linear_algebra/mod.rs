//! Square linear systems solved by Gauss-Jordan reduction.
//!
//! A [`LinearSystem`] of `R` equations in `R` unknowns is stored as an
//! `R x (R + 1)` augmented matrix whose last column is the right-hand side:
//!
//! ```text
//! | a[0][0]  ...  a[0][R-1]  | b[0]   |
//! |  ...     ...    ...      | ...    |
//! | a[R-1][0] ... a[R-1][R-1] | b[R-1] |
//! ```
//!
//! A solution exists iff every row ends up with a unit pivot in its own
//! column after reduction (rank `R`).

use crate::error::{MathError, MathResult};
use crate::matrix::{Matrix, ReductionConfig};

/// An augmented `R x (R + 1)` linear system.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    augmented: Matrix,
}

impl LinearSystem {
    /// Assembles `[coefficients | rhs]`.
    ///
    /// # Errors
    ///
    /// - [`MathError::NotSquare`] if `coefficients` is not square.
    /// - [`MathError::ShapeMismatch`] if `rhs` does not have one entry per row.
    pub fn new(coefficients: &Matrix, rhs: &[f64]) -> MathResult<Self> {
        let (n, cols) = coefficients.shape();
        if n != cols {
            return Err(MathError::NotSquare { rows: n, cols });
        }
        if rhs.len() != n {
            return Err(MathError::ShapeMismatch {
                rows1: n,
                cols1: cols,
                rows2: rhs.len(),
                cols2: 1,
            });
        }

        let mut augmented = Matrix::new(n, n + 1)?;
        for (i, &b) in rhs.iter().enumerate() {
            for (j, &a) in coefficients.row(i)?.iter().enumerate() {
                augmented.set_entry(i, j, a)?;
            }
            augmented.set_entry(i, n, b)?;
        }

        Ok(Self { augmented })
    }

    /// Wraps a ready-made augmented matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] unless the matrix has exactly
    /// one more column than rows.
    pub fn from_augmented(augmented: Matrix) -> MathResult<Self> {
        if augmented.cols() != augmented.rows() + 1 {
            return Err(MathError::invalid_input(format!(
                "augmented system must be R x (R + 1), got {}x{}",
                augmented.rows(),
                augmented.cols()
            )));
        }
        Ok(Self { augmented })
    }

    /// Number of equations (and unknowns).
    pub fn size(&self) -> usize {
        self.augmented.rows()
    }

    /// The augmented matrix.
    pub fn augmented(&self) -> &Matrix {
        &self.augmented
    }

    /// Solves the system with the default [`ReductionConfig`].
    ///
    /// # Errors
    ///
    /// - [`MathError::InvalidInput`] if an entry is NaN or infinite, or the
    ///   solution overflows.
    /// - [`MathError::SingularSystem`] if some row has no unit pivot.
    pub fn solve(&self) -> MathResult<Vec<f64>> {
        self.solve_with(&ReductionConfig::default())
    }

    /// Solves the system with explicit thresholds.
    pub fn solve_with(&self, config: &ReductionConfig) -> MathResult<Vec<f64>> {
        let n = self.size();
        if !self.augmented.is_finite() {
            return Err(MathError::invalid_input("system entries must be finite"));
        }
        let reduced = self.augmented.rowreduce_with(config);

        if let Some(column) = reduced.first_non_unit_pivot(n, config.unit_pivot_tolerance) {
            log::debug!("{}x{} system is rank deficient at column {}", n, n + 1, column);
            return Err(MathError::singular(column));
        }

        let solution = reduced.column(n)?;
        if solution.iter().any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("solution overflowed"));
        }
        Ok(solution)
    }
}

/// Solves `a x = b` for square `a`.
pub fn solve_linear_system(a: &Matrix, b: &[f64]) -> MathResult<Vec<f64>> {
    LinearSystem::new(a, b)?.solve()
}

//! Gauss-Jordan row reduction and inversion.
//!
//! # Numerical stability
//!
//! Reduction is thresholded rather than exact. Before each pivot column is
//! processed, entries smaller than [`NOISE_FLOOR`] are snapped to zero.
//! A column is only eliminated when a pivot of magnitude at least
//! [`ELIMINATION_FLOOR`] is available, and a pivot row is only normalised
//! when the reciprocal of the pivot lies strictly between
//! [`MIN_PIVOT_SCALE`] and [`MAX_PIVOT_SCALE`].
//!
//! When a step falls outside those bands it is skipped, not reported: a
//! near-singular matrix reduces to an approximate result instead of failing.
//! Each skip is logged at `warn` level. True rank deficiency is detected
//! afterwards by [`Matrix::invert`] and [`LinearSystem::solve`], which
//! require a unit pivot on every diagonal position.
//!
//! [`LinearSystem::solve`]: crate::linear_algebra::LinearSystem::solve

use serde::{Deserialize, Serialize};

use super::Matrix;
use crate::error::{MathError, MathResult};

/// Magnitude below which an entry is treated as floating-point noise.
pub const NOISE_FLOOR: f64 = 1e-15;

/// Smallest pivot magnitude used to eliminate a column.
pub const ELIMINATION_FLOOR: f64 = 1e-8;

/// Lower bound (exclusive) on the magnitude of a normalising factor.
pub const MIN_PIVOT_SCALE: f64 = 1e-10;

/// Upper bound (exclusive) on the magnitude of a normalising factor.
///
/// Scaling a row by more than this would amplify rounding noise from an
/// ill-conditioned pivot.
pub const MAX_PIVOT_SCALE: f64 = 1e10;

/// Allowed distance from 1.0 for a diagonal entry to count as a unit pivot.
pub const UNIT_PIVOT_TOLERANCE: f64 = 1e-8;

/// Thresholds controlling row reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Entries below this magnitude are snapped to zero.
    pub noise_floor: f64,
    /// Minimum pivot magnitude for elimination.
    pub elimination_floor: f64,
    /// Exclusive lower bound on the normalising factor.
    pub min_scale: f64,
    /// Exclusive upper bound on the normalising factor.
    pub max_scale: f64,
    /// Tolerance of the unit-pivot check.
    pub unit_pivot_tolerance: f64,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            noise_floor: NOISE_FLOOR,
            elimination_floor: ELIMINATION_FLOOR,
            min_scale: MIN_PIVOT_SCALE,
            max_scale: MAX_PIVOT_SCALE,
            unit_pivot_tolerance: UNIT_PIVOT_TOLERANCE,
        }
    }
}

impl ReductionConfig {
    /// Sets the noise floor.
    #[must_use]
    pub fn with_noise_floor(mut self, noise_floor: f64) -> Self {
        self.noise_floor = noise_floor;
        self
    }

    /// Sets the elimination floor.
    #[must_use]
    pub fn with_elimination_floor(mut self, elimination_floor: f64) -> Self {
        self.elimination_floor = elimination_floor;
        self
    }

    /// Sets the band the normalising factor must fall in.
    #[must_use]
    pub fn with_scale_band(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the unit-pivot tolerance.
    #[must_use]
    pub fn with_unit_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.unit_pivot_tolerance = tolerance;
        self
    }

    fn accepts_scale(&self, scale: f64) -> bool {
        let magnitude = scale.abs();
        magnitude > self.min_scale && magnitude < self.max_scale
    }
}

/// A pivot candidate: its row and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    /// Row holding the pivot.
    pub row: usize,
    /// Pivot value.
    pub value: f64,
}

impl Matrix {
    /// Finds the pivot of a column.
    ///
    /// The diagonal entry `(col, col)` is preferred when it is nonzero;
    /// otherwise the first nonzero entry of the column is returned.
    /// `Ok(None)` means the whole column is zero.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfBounds`] if `col` is not a column.
    pub fn find_pivot(&self, col: usize) -> MathResult<Option<Pivot>> {
        self.check_index(0, col)?;

        if col < self.rows {
            let diagonal = self[(col, col)];
            if diagonal != 0.0 {
                return Ok(Some(Pivot {
                    row: col,
                    value: diagonal,
                }));
            }
        }

        Ok((0..self.rows)
            .map(|row| Pivot {
                row,
                value: self[(row, col)],
            })
            .find(|pivot| pivot.value != 0.0))
    }

    /// Returns `[self | I]`, flagged as augmented-with-identity.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NotSquare`] if the matrix is not square.
    pub fn with_identity(&self) -> MathResult<Matrix> {
        if !self.is_square() {
            return Err(MathError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let mut augmented = Matrix::new(n, 2 * n)?;
        for i in 0..n {
            augmented.data[i * 2 * n..i * 2 * n + n].copy_from_slice(self.row_slice(i));
            augmented.data[i * 2 * n + n + i] = 1.0;
        }
        augmented.augmented = true;
        Ok(augmented)
    }

    /// Reduces the matrix to reduced row-echelon form using the default
    /// [`ReductionConfig`].
    ///
    /// Pivot columns run from 0 to `min(rows, usable) - 1`, where `usable`
    /// is `cols / 2` for a matrix augmented with an identity block and
    /// `min(rows, cols)` otherwise. Steps outside the stability band are
    /// skipped (see the [module docs](self)); the result is then an
    /// approximation rather than an error.
    pub fn rowreduce(&self) -> Matrix {
        self.rowreduce_with(&ReductionConfig::default())
    }

    /// Reduces the matrix with explicit thresholds.
    pub fn rowreduce_with(&self, config: &ReductionConfig) -> Matrix {
        let usable = if self.augmented {
            self.cols / 2
        } else {
            self.rows.min(self.cols)
        };
        let pivot_columns = self.rows.min(usable);

        let mut reduced = self.clone();
        for col in 0..pivot_columns {
            reduced.snap_noise(config.noise_floor);
            reduced.eliminate_column(col, config);
            reduced.normalize_pivot(col, config);
        }
        reduced
    }

    /// Inverts a square matrix using the default [`ReductionConfig`].
    ///
    /// # Errors
    ///
    /// - [`MathError::NotSquare`] if the matrix is not square.
    /// - [`MathError::InvalidInput`] if an entry is NaN or infinite.
    /// - [`MathError::SingularSystem`] if reduction leaves a diagonal
    ///   position without a unit pivot.
    pub fn invert(&self) -> MathResult<Matrix> {
        self.invert_with(&ReductionConfig::default())
    }

    /// Inverts a square matrix with explicit thresholds.
    pub fn invert_with(&self, config: &ReductionConfig) -> MathResult<Matrix> {
        let n = self.rows;
        let augmented = self.with_identity()?;
        if !self.is_finite() {
            return Err(MathError::invalid_input("matrix entries must be finite"));
        }
        let reduced = augmented.rowreduce_with(config);

        if let Some(column) = reduced.first_non_unit_pivot(n, config.unit_pivot_tolerance) {
            return Err(MathError::singular(column));
        }

        let mut inverse = Matrix::new(n, n)?;
        for i in 0..n {
            inverse.data[i * n..(i + 1) * n].copy_from_slice(&reduced.row_slice(i)[n..2 * n]);
        }
        if !inverse.is_finite() {
            return Err(MathError::invalid_input("inverse overflowed"));
        }
        Ok(inverse)
    }

    /// First diagonal position in `0..count` whose entry is not 1 within
    /// `tolerance`. NaN never counts as a unit pivot.
    pub(crate) fn first_non_unit_pivot(&self, count: usize, tolerance: f64) -> Option<usize> {
        (0..count).find(|&col| {
            self.get(col, col)
                .map_or(true, |diagonal| !is_unit(diagonal, tolerance))
        })
    }

    fn snap_noise(&mut self, floor: f64) {
        for value in &mut self.data {
            if value.abs() < floor {
                *value = 0.0;
            }
        }
    }

    /// Brings a pivot into row `col` and clears the rest of the column.
    fn eliminate_column(&mut self, col: usize, config: &ReductionConfig) {
        let Some(pivot_row) = self.pivot_row_from(col, config.elimination_floor) else {
            if self.column_has_entries(col) {
                log::warn!(
                    "No pivot of magnitude >= {:e} in column {}; elimination skipped",
                    config.elimination_floor,
                    col
                );
            }
            return;
        };

        log::trace!("Column {}: pivot row {}", col, pivot_row);
        self.swap_rows(pivot_row, col);

        let pivot = self[(col, col)];
        for row in 0..self.rows {
            if row == col {
                continue;
            }
            let entry = self[(row, col)];
            if entry != 0.0 {
                self.add_scaled_row(-entry / pivot, col, row);
            }
        }
    }

    /// Row to use as pivot for `col`, searching rows `col..`.
    ///
    /// Rows above `col` already hold earlier pivots and are never moved.
    fn pivot_row_from(&self, col: usize, floor: f64) -> Option<usize> {
        if self[(col, col)].abs() >= floor {
            return Some(col);
        }
        (col + 1..self.rows).find(|&row| self[(row, col)].abs() >= floor)
    }

    fn column_has_entries(&self, col: usize) -> bool {
        (0..self.rows).any(|row| self[(row, col)] != 0.0)
    }

    fn normalize_pivot(&mut self, col: usize, config: &ReductionConfig) {
        let pivot = self[(col, col)];
        if pivot == 1.0 {
            return;
        }

        let scale = 1.0 / pivot;
        if config.accepts_scale(scale) {
            self.scale_row(scale, col);
        } else if pivot != 0.0 {
            log::warn!(
                "Pivot {:e} in column {} outside the stability band; normalisation skipped",
                pivot,
                col
            );
        }
    }
}

fn is_unit(value: f64, tolerance: f64) -> bool {
    (value - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_identity(m: &Matrix, tolerance: f64) {
        let id = Matrix::identity(m.rows()).unwrap();
        let diff = m.max_abs_diff(&id).unwrap();
        assert!(diff < tolerance, "not identity (max diff {diff}):\n{m}");
    }

    #[test]
    fn test_find_pivot_prefers_diagonal() {
        let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.find_pivot(0).unwrap(), Some(Pivot { row: 0, value: 2.0 }));
        assert_eq!(m.find_pivot(1).unwrap(), Some(Pivot { row: 1, value: 4.0 }));
    }

    #[test]
    fn test_find_pivot_first_nonzero() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![0.0, 0.0], vec![5.0, 0.0]]).unwrap();
        assert_eq!(m.find_pivot(0).unwrap(), Some(Pivot { row: 2, value: 5.0 }));
        assert_eq!(m.find_pivot(1).unwrap(), Some(Pivot { row: 0, value: 1.0 }));
    }

    #[test]
    fn test_find_pivot_zero_column() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![0.0, 2.0]]).unwrap();
        assert_eq!(m.find_pivot(0).unwrap(), None);
        assert!(m.find_pivot(2).is_err());
    }

    #[test]
    fn test_with_identity() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let aug = m.with_identity().unwrap();
        assert!(aug.is_augmented());
        assert!(!m.is_augmented());
        assert_eq!(aug.shape(), (2, 4));
        assert_eq!(aug.row(0).unwrap(), &[1.0, 2.0, 1.0, 0.0]);
        assert_eq!(aug.row(1).unwrap(), &[3.0, 4.0, 0.0, 1.0]);
    }

    #[test]
    fn test_with_identity_not_square() {
        let m = Matrix::new(2, 3).unwrap();
        assert_eq!(
            m.with_identity(),
            Err(MathError::NotSquare { rows: 2, cols: 3 })
        );
        assert!(matches!(m.invert(), Err(MathError::NotSquare { .. })));
    }

    #[test]
    fn test_rowreduce_solves_system() {
        // x + y = 3, 2x - y = 0  =>  x = 1, y = 2
        let m = Matrix::from_rows(vec![vec![1.0, 1.0, 3.0], vec![2.0, -1.0, 0.0]]).unwrap();
        let r = m.rowreduce();
        assert_abs_diff_eq!(r[(0, 0)], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[(0, 1)], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[(1, 0)], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[(1, 1)], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[(0, 2)], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[(1, 2)], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rowreduce_swaps_zero_diagonal() {
        let m = Matrix::from_rows(vec![vec![0.0, 2.0, 4.0], vec![3.0, 0.0, 6.0]]).unwrap();
        let r = m.rowreduce();
        assert_abs_diff_eq!(r[(0, 2)], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[(1, 2)], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rowreduce_is_idempotent() {
        let m = Matrix::from_rows(vec![
            vec![2.0, 1.0, -1.0, 8.0],
            vec![-3.0, -1.0, 2.0, -11.0],
            vec![-2.0, 1.0, 2.0, -3.0],
        ])
        .unwrap();
        let once = m.rowreduce();
        let twice = once.rowreduce();
        assert!(once.max_abs_diff(&twice).unwrap() < 1e-12);
        // x = 2, y = 3, z = -1
        assert_abs_diff_eq!(once[(0, 3)], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(once[(1, 3)], 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(once[(2, 3)], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rowreduce_leaves_receiver_untouched() {
        let m = Matrix::from_rows(vec![vec![2.0, 4.0], vec![1.0, 3.0]]).unwrap();
        let copy = m.clone();
        let _ = m.rowreduce();
        assert_eq!(m, copy);
    }

    #[test]
    fn test_rowreduce_snaps_noise() {
        let m = Matrix::from_rows(vec![vec![1.0, 1e-16], vec![1e-17, 1.0]]).unwrap();
        let r = m.rowreduce();
        assert_eq!(r[(0, 1)], 0.0);
        assert_eq!(r[(1, 0)], 0.0);
    }

    #[test]
    fn test_tiny_pivot_is_skipped_not_failed() {
        // The reciprocal 1e12 is outside the band, so the row is left as is.
        let m = Matrix::from_rows(vec![vec![1e-12, 0.0], vec![0.0, 1.0]]).unwrap();
        let r = m.rowreduce();
        assert_eq!(r[(0, 0)], 1e-12);
        assert_eq!(r[(1, 1)], 1.0);
    }

    #[test]
    fn test_invert_known_matrix() {
        let m = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 10.0],
        ])
        .unwrap();
        let inv = m.invert().unwrap();

        // det = -3
        assert_abs_diff_eq!(inv[(0, 0)], -2.0 / 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(inv[(0, 1)], -4.0 / 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(inv[(0, 2)], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(inv[(1, 1)], 11.0 / 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(inv[(2, 2)], 1.0, epsilon = 1e-10);

        assert_identity(&m.times(&inv).unwrap(), 1e-4);
        assert_identity(&inv.times(&m).unwrap(), 1e-4);
    }

    #[test]
    fn test_invert_requires_row_swap() {
        // Anti-diagonal block plus a trailing entry: column 0 has no
        // diagonal pivot.
        let mut m = Matrix::new(4, 4).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                if i + j == 2 {
                    m.set_entry(i, j, (i + 1) as f64).unwrap();
                }
            }
        }
        m.set_entry(3, 3, 4.0).unwrap();

        let inv = m.invert().unwrap();
        assert_identity(&m.times(&inv).unwrap(), 1e-4);
        assert_abs_diff_eq!(inv[(3, 3)], 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_invert_zero_row_is_singular() {
        let m = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0, 0.0],
            vec![7.0, 8.0, 10.0],
        ])
        .unwrap();
        assert!(m.invert().unwrap_err().is_singular());
    }

    #[test]
    fn test_invert_dependent_rows_is_singular() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(m.invert(), Err(MathError::SingularSystem { column: 1 }));
    }

    #[test]
    fn test_nan_diagonal_is_not_a_unit_pivot() {
        let m = Matrix::from_rows(vec![vec![f64::NAN, 0.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(m.first_non_unit_pivot(2, 1e-8), Some(0));

        let unit = Matrix::identity(2).unwrap();
        assert_eq!(unit.first_non_unit_pivot(2, 1e-8), None);
    }

    #[test]
    fn test_invert_rejects_non_finite_entries() {
        let nan = Matrix::from_rows(vec![vec![f64::NAN]]).unwrap();
        assert!(matches!(nan.invert(), Err(MathError::InvalidInput { .. })));

        let inf = Matrix::from_rows(vec![vec![f64::INFINITY, 1.0], vec![1.0, 1.0]]).unwrap();
        assert!(matches!(inf.invert(), Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_invert_one_by_one() {
        let m = Matrix::from_rows(vec![vec![4.0]]).unwrap();
        assert_abs_diff_eq!(m.invert().unwrap()[(0, 0)], 0.25);
    }

    #[test]
    fn test_config_builders() {
        let config = ReductionConfig::default()
            .with_noise_floor(1e-12)
            .with_elimination_floor(1e-6)
            .with_scale_band(1e-8, 1e8)
            .with_unit_pivot_tolerance(1e-6);
        assert_eq!(config.noise_floor, 1e-12);
        assert_eq!(config.elimination_floor, 1e-6);
        assert!(config.accepts_scale(1.0));
        assert!(!config.accepts_scale(1e9));
        assert!(!config.accepts_scale(f64::INFINITY));
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: ReductionConfig = toml::from_str("noise_floor = 1e-12").unwrap();
        assert_eq!(config.noise_floor, 1e-12);
        assert_eq!(config.max_scale, MAX_PIVOT_SCALE);
    }
}

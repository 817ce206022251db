//! Dense real matrices.
//!
//! [`Matrix`] is a row-major grid of `f64` with a shape fixed at
//! construction. Every algorithmic method (row operations, products,
//! row reduction, inversion) returns a fresh matrix; the only way to
//! change an existing matrix is the bounds-checked [`Matrix::set_entry`].
//!
//! # Example
//!
//! ```rust
//! use polycalc_math::matrix::Matrix;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 10.0],
//! ]).unwrap();
//!
//! let inv = m.invert().unwrap();
//! let product = m.times(&inv).unwrap();
//! let identity = Matrix::identity(3).unwrap();
//! assert!(product.max_abs_diff(&identity).unwrap() < 1e-4);
//! ```

mod convert;
mod random;
mod reduction;

use std::fmt;
use std::ops::Index;

use crate::error::{MathError, MathResult};

pub use random::RandomFill;
pub use reduction::{
    Pivot, ReductionConfig, ELIMINATION_FLOOR, MAX_PIVOT_SCALE, MIN_PIVOT_SCALE, NOISE_FLOOR,
    UNIT_PIVOT_TOLERANCE,
};

/// Decimal places used by the [`Display`](fmt::Display) rendering.
const DISPLAY_PRECISION: f64 = 1e4;

/// A dense rectangular matrix of real numbers.
///
/// The shape is fixed at construction (`rows >= 1`, `cols >= 1`). The
/// `augmented` flag is set by [`Matrix::with_identity`] and bounds row
/// reduction to the left half of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
    augmented: bool,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::EmptyMatrix`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> MathResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MathError::EmptyMatrix);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
            augmented: false,
        })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> MathResult<Self> {
        let mut id = Self::new(n, n)?;
        for i in 0..n {
            id.data[i * n + i] = 1.0;
        }
        Ok(id)
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, no columns, or the rows have
    /// different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MathResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MathError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MathError::invalid_input(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
            augmented: false,
        })
    }

    /// Creates a matrix from row-major data.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> MathResult<Self> {
        let mut matrix = Self::new(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MathError::invalid_input(format!(
                "expected {} entries for a {}x{} matrix, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )));
        }
        matrix.data.copy_from_slice(data);
        Ok(matrix)
    }

    /// Creates a single-column matrix.
    pub fn column_vector(values: &[f64]) -> MathResult<Self> {
        Self::from_row_slice(values.len(), 1, values)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Returns true if an identity block has been appended.
    pub fn is_augmented(&self) -> bool {
        self.augmented
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> MathResult<f64> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// This is the only in-place mutation a matrix supports.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfBounds`] if the position is outside
    /// the matrix.
    pub fn set_entry(&mut self, row: usize, col: usize, value: f64) -> MathResult<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> MathResult<&[f64]> {
        self.check_row(row)?;
        Ok(self.row_slice(row))
    }

    /// Returns a copy of a column.
    pub fn column(&self, col: usize) -> MathResult<Vec<f64>> {
        self.check_index(0, col)?;
        Ok((0..self.rows).map(|i| self.data[i * self.cols + col]).collect())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ShapeMismatch`] unless both matrices have the
    /// same shape.
    pub fn plus(&self, other: &Matrix) -> MathResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(self.shape_mismatch(other));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
            augmented: false,
        })
    }

    /// Row-by-column product, shape `rows(self) x cols(other)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ShapeMismatch`] unless `cols(self) == rows(other)`.
    pub fn times(&self, other: &Matrix) -> MathResult<Matrix> {
        if self.cols != other.rows {
            return Err(self.shape_mismatch(other));
        }

        let mut product = Matrix::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..other.cols {
                    product.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }

        Ok(product)
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }

        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
            augmented: false,
        }
    }

    /// Returns a copy with `row` multiplied by `scalar`.
    pub fn scalar_times_row(&self, scalar: f64, row: usize) -> MathResult<Matrix> {
        self.check_row(row)?;
        let mut scaled = self.clone();
        scaled.scale_row(scalar, row);
        Ok(scaled)
    }

    /// Returns a copy with `scalar * src` added to `dst`.
    ///
    /// The receiver is left untouched.
    pub fn linear_comb_rows(&self, scalar: f64, src: usize, dst: usize) -> MathResult<Matrix> {
        self.check_row(src)?;
        self.check_row(dst)?;
        let mut combined = self.clone();
        combined.add_scaled_row(scalar, src, dst);
        Ok(combined)
    }

    /// Returns a copy with rows `a` and `b` exchanged.
    pub fn switch_rows(&self, a: usize, b: usize) -> MathResult<Matrix> {
        self.check_row(a)?;
        self.check_row(b)?;
        let mut switched = self.clone();
        switched.swap_rows(a, b);
        Ok(switched)
    }

    /// Largest absolute elementwise difference between two matrices.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ShapeMismatch`] if the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> MathResult<f64> {
        if self.shape() != other.shape() {
            return Err(self.shape_mismatch(other));
        }

        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }

    fn check_row(&self, row: usize) -> MathResult<()> {
        self.check_index(row, 0)
    }

    fn check_index(&self, row: usize, col: usize) -> MathResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MathError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn shape_mismatch(&self, other: &Matrix) -> MathError {
        MathError::ShapeMismatch {
            rows1: self.rows,
            cols1: self.cols,
            rows2: other.rows,
            cols2: other.cols,
        }
    }

    fn row_slice(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    // In-place row primitives, applied to fresh clones only.

    fn scale_row(&mut self, scalar: f64, row: usize) {
        let cols = self.cols;
        for value in &mut self.data[row * cols..(row + 1) * cols] {
            *value *= scalar;
        }
    }

    fn add_scaled_row(&mut self, scalar: f64, src: usize, dst: usize) {
        for j in 0..self.cols {
            let source = self.data[src * self.cols + j];
            self.data[dst * self.cols + j] += scalar * source;
        }
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Panics if the position is outside the matrix; use [`Matrix::get`]
    /// for a checked read.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    /// Renders one `| a | b | ... |` line per row, entries rounded to four
    /// decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "|")?;
            for value in self.row_slice(i) {
                // + 0.0 turns a rounded -0.0 into 0.0
                let rounded = (value * DISPLAY_PRECISION).round() / DISPLAY_PRECISION + 0.0;
                write!(f, " {:.4} |", rounded)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 10.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_is_zero_filled() {
        let m = Matrix::new(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_empty_dimensions_rejected() {
        assert_eq!(Matrix::new(0, 3), Err(MathError::EmptyMatrix));
        assert_eq!(Matrix::new(3, 0), Err(MathError::EmptyMatrix));
        assert_eq!(Matrix::from_rows(vec![]), Err(MathError::EmptyMatrix));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_set_entry_bounds() {
        let mut m = Matrix::new(2, 2).unwrap();
        m.set_entry(1, 1, 5.0).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 5.0);

        let err = m.set_entry(2, 0, 1.0).unwrap_err();
        assert_eq!(
            err,
            MathError::IndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
        assert!(m.set_entry(0, 2, 1.0).is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        copy.set_entry(0, 0, 99.0).unwrap();
        assert_eq!(original[(0, 0)], 1.0);
        assert_eq!(copy[(0, 0)], 99.0);
    }

    #[test]
    fn test_plus() {
        let a = sample();
        let sum = a.plus(&a).unwrap();
        assert_eq!(sum[(2, 2)], 20.0);
        assert_eq!(sum[(0, 1)], 4.0);
    }

    #[test]
    fn test_plus_shape_mismatch() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(3, 2).unwrap();
        assert_eq!(
            a.plus(&b),
            Err(MathError::ShapeMismatch {
                rows1: 2,
                cols1: 3,
                rows2: 3,
                cols2: 2
            })
        );
    }

    #[test]
    fn test_times() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();

        let product = a.times(&b).unwrap();
        assert_eq!(product.shape(), (2, 2));
        assert_relative_eq!(product[(0, 0)], 58.0);
        assert_relative_eq!(product[(0, 1)], 64.0);
        assert_relative_eq!(product[(1, 0)], 139.0);
        assert_relative_eq!(product[(1, 1)], 154.0);

        assert!(matches!(a.times(&a), Err(MathError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_times_identity() {
        let a = sample();
        let id = Matrix::identity(3).unwrap();
        assert_eq!(a.times(&id).unwrap(), a);
        assert_eq!(id.times(&a).unwrap(), a);
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_row_operations_return_new_matrices() {
        let a = sample();

        let scaled = a.scalar_times_row(2.0, 1).unwrap();
        assert_eq!(scaled.row(1).unwrap(), &[8.0, 10.0, 12.0]);
        assert_eq!(a.row(1).unwrap(), &[4.0, 5.0, 6.0]);

        let combined = a.linear_comb_rows(-4.0, 0, 1).unwrap();
        assert_eq!(combined.row(1).unwrap(), &[0.0, -3.0, -6.0]);
        assert_eq!(a.row(1).unwrap(), &[4.0, 5.0, 6.0]);

        let switched = a.switch_rows(0, 2).unwrap();
        assert_eq!(switched.row(0).unwrap(), &[7.0, 8.0, 10.0]);
        assert_eq!(switched.row(2).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(a.row(0).unwrap(), &[1.0, 2.0, 3.0]);

        assert!(a.switch_rows(0, 3).is_err());
        assert!(a.scalar_times_row(1.0, 5).is_err());
    }

    #[test]
    fn test_column() {
        let a = sample();
        assert_eq!(a.column(2).unwrap(), vec![3.0, 6.0, 10.0]);
        assert!(a.column(3).is_err());
    }

    #[test]
    fn test_display_rounds_to_four_places() {
        let m = Matrix::from_rows(vec![vec![1.0, -0.000_01], vec![1.0 / 3.0, 2.5]]).unwrap();
        let rendered = m.to_string();
        assert_eq!(rendered, "| 1.0000 | 0.0000 |\n| 0.3333 | 2.5000 |\n");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_out_of_bounds() {
        let m = Matrix::new(2, 2).unwrap();
        let _ = m[(2, 0)];
    }
}

//! Error types for matrix and interpolation operations.

use thiserror::Error;

/// A specialized Result type for polycalc operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during matrix and interpolation operations.
///
/// Graceful degradation inside row reduction (a pivot scale or elimination
/// step skipped because it fell outside the stability band) is *not* an
/// error; see [`Matrix::rowreduce`](crate::matrix::Matrix::rowreduce).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Operand dimensions are incompatible for the requested operation.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    ShapeMismatch {
        /// Rows in first matrix.
        rows1: usize,
        /// Columns in first matrix.
        cols1: usize,
        /// Rows in second matrix.
        rows2: usize,
        /// Columns in second matrix.
        cols2: usize,
    },

    /// A square matrix was required.
    #[error("Matrix is not square ({rows}x{cols}): not invertible")]
    NotSquare {
        /// Rows in the matrix.
        rows: usize,
        /// Columns in the matrix.
        cols: usize,
    },

    /// Elimination left a pivot column without a unit pivot.
    #[error("Singular system: no unit pivot in column {column}")]
    SingularSystem {
        /// First column that failed to reach a unit pivot.
        column: usize,
    },

    /// Entry access outside the matrix.
    #[error("Index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Rows in the matrix.
        rows: usize,
        /// Columns in the matrix.
        cols: usize,
    },

    /// A matrix needs at least one row and one column.
    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    /// Interpolation point is outside the valid range.
    #[error("Extrapolation not allowed: {x} is outside [{min}, {max}]")]
    ExtrapolationNotAllowed {
        /// The query point.
        x: f64,
        /// Minimum valid value.
        min: f64,
        /// Maximum valid value.
        max: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a singular system error for the given pivot column.
    #[must_use]
    pub fn singular(column: usize) -> Self {
        Self::SingularSystem { column }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Returns true for the rank-deficiency failure.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularSystem { .. })
    }
}

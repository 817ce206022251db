//! Conversions to and from `nalgebra` matrices.

use nalgebra::DMatrix;

use super::Matrix;
use crate::error::MathError;

impl From<&Matrix> for DMatrix<f64> {
    fn from(matrix: &Matrix) -> Self {
        DMatrix::from_row_slice(matrix.rows, matrix.cols, &matrix.data)
    }
}

impl TryFrom<&DMatrix<f64>> for Matrix {
    type Error = MathError;

    fn try_from(matrix: &DMatrix<f64>) -> Result<Self, Self::Error> {
        let (rows, cols) = matrix.shape();
        let data: Vec<f64> = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| matrix[(i, j)]))
            .collect();
        Matrix::from_row_slice(rows, cols, &data)
    }
}

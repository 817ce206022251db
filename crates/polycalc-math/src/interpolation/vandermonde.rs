//! Generalized Vandermonde systems.
//!
//! For abscissas `x[0..=d]` and a target degree `d`, row `i` of the design
//! matrix is `[x[i]^d, x[i]^(d-1), ..., x[i], 1]`, so the unknowns come out
//! highest degree first.

use super::point_count;
use crate::error::{MathError, MathResult};
use crate::matrix::Matrix;

/// Square `(degree + 1) x (degree + 1)` design matrix.
///
/// # Errors
///
/// Returns an error unless `xs` holds exactly `degree + 1` values.
pub fn design_matrix(xs: &[f64], degree: usize) -> MathResult<Matrix> {
    let n = point_count(degree)?;
    if xs.len() != n {
        return Err(MathError::invalid_input(format!(
            "degree {} design matrix needs {} abscissas, got {}",
            degree,
            n,
            xs.len()
        )));
    }

    let mut design = Matrix::new(n, n)?;
    for (i, &x) in xs.iter().enumerate() {
        for (j, value) in powers_descending(x, degree).enumerate() {
            design.set_entry(i, j, value)?;
        }
    }
    Ok(design)
}

/// Augmented `(degree + 1) x (degree + 2)` system `[design | ys]`.
pub fn augmented_system(xs: &[f64], ys: &[f64], degree: usize) -> MathResult<Matrix> {
    let n = point_count(degree)?;
    if ys.len() != n {
        return Err(MathError::invalid_input(format!(
            "degree {} system needs {} ordinates, got {}",
            degree,
            n,
            ys.len()
        )));
    }

    let design = design_matrix(xs, degree)?;
    let mut system = Matrix::new(n, n + 1)?;
    for (i, &y) in ys.iter().enumerate() {
        for (j, &value) in design.row(i)?.iter().enumerate() {
            system.set_entry(i, j, value)?;
        }
        system.set_entry(i, n, y)?;
    }
    Ok(system)
}

/// `x^degree, x^(degree - 1), ..., x, 1`.
fn powers_descending(x: f64, degree: usize) -> impl Iterator<Item = f64> {
    (0..=degree).rev().map(move |power| x.powi(power as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_matrix() {
        let m = design_matrix(&[1.0, 2.0, 3.0], 2).unwrap();
        assert_eq!(m.row(0).unwrap(), &[1.0, 1.0, 1.0]);
        assert_eq!(m.row(1).unwrap(), &[4.0, 2.0, 1.0]);
        assert_eq!(m.row(2).unwrap(), &[9.0, 3.0, 1.0]);
    }

    #[test]
    fn test_degree_zero() {
        let m = design_matrix(&[5.0], 0).unwrap();
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn test_augmented_system() {
        let m = augmented_system(&[1.0, 2.0], &[3.0, 5.0], 1).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(1).unwrap(), &[2.0, 1.0, 5.0]);
    }

    #[test]
    fn test_length_checks() {
        assert!(design_matrix(&[1.0, 2.0], 2).is_err());
        assert!(augmented_system(&[1.0, 2.0], &[1.0], 1).is_err());
    }
}

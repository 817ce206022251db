//! # Polycalc Math
//!
//! A dense matrix engine and the polynomial calculus built on top of it.
//!
//! This crate provides:
//!
//! - **Matrix**: Dense matrices with Gauss-Jordan reduction and inversion
//! - **Linear Algebra**: Square linear systems over augmented matrices
//! - **Interpolation**: Polynomial fits through sample points
//! - **Quadrature**: Fixed-panel Simpson integration
//! - **Calculus**: Derivative and accumulation polynomials by sampling
//!
//! ## Design Philosophy
//!
//! - **Fresh Results**: Matrix operations return new matrices
//! - **Graceful Degradation**: Unstable reduction steps are skipped and
//!   logged, true rank deficiency is an error
//! - **Configurable Thresholds**: Every tolerance lives in a serde config

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::needless_range_loop)]

pub mod calculus;
pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod matrix;
pub mod polynomial;
pub mod quadrature;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculus::{
        accumulation_polynomial, derivative_polynomial, slope_at_point, AccumulationConfig,
        AccumulationEstimator, DerivativeEstimator,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{fit, fit_with, FitConfig, FitMethod, Interpolator, PolynomialFit};
    pub use crate::linear_algebra::{solve_linear_system, LinearSystem};
    pub use crate::matrix::{Matrix, RandomFill, ReductionConfig};
    pub use crate::polynomial::Polynomial;
    pub use crate::quadrature::{simpson, Quadrature, SimpsonsRule};
}

pub use error::{MathError, MathResult};
pub use matrix::Matrix;
pub use polynomial::Polynomial;

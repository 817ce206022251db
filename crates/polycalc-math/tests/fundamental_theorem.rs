//! Integration tests for the derivative and accumulation estimators.
//!
//! Differentiating an accumulation function gives back the integrand, and
//! accumulating a derivative gives back the polynomial up to its constant
//! term.

use approx::assert_abs_diff_eq;

use polycalc_math::calculus::{
    accumulation_polynomial, derivative_polynomial, slope_at_point, AccumulationEstimator,
    DerivativeEstimator,
};
use polycalc_math::interpolation::{FitConfig, FitMethod};
use polycalc_math::quadrature::SimpsonsRule;
use polycalc_math::Polynomial;

// =============================================================================
// TEST DATA
// =============================================================================

fn polynomials() -> Vec<Polynomial> {
    vec![
        Polynomial::from_descending(&[4.0, 1.0, 2.0, 1.0]),
        Polynomial::from_descending(&[0.5, 2.0, 0.0, -1.0, 3.0]),
        Polynomial::from_descending(&[2.0, 0.5, 1.0, -1.0, -2.0]),
        Polynomial::from_descending(&[-3.0, 7.0]),
        Polynomial::from_descending(&[1.0, 0.0, 0.0]),
    ]
}

fn assert_same_above_constant(actual: &Polynomial, expected: &Polynomial, epsilon: f64) {
    assert_eq!(actual.degree(), expected.degree(), "{} vs {}", actual, expected);
    for power in 1..=expected.degree() {
        assert_abs_diff_eq!(
            actual.coefficient(power),
            expected.coefficient(power),
            epsilon = epsilon
        );
    }
}

// =============================================================================
// ROUND TRIPS
// =============================================================================

#[test]
fn derivative_of_accumulation_is_identity() {
    for p in polynomials() {
        let roundtrip = derivative_polynomial(&accumulation_polynomial(&p).unwrap()).unwrap();

        assert_same_above_constant(&roundtrip, &p, 1e-5);
        assert_abs_diff_eq!(roundtrip.coefficient(0), p.coefficient(0), epsilon = 1e-5);
    }
}

#[test]
fn accumulation_of_derivative_drops_constant() {
    for p in polynomials() {
        let roundtrip = accumulation_polynomial(&derivative_polynomial(&p).unwrap()).unwrap();

        assert_same_above_constant(&roundtrip, &p, 1e-5);
        assert_abs_diff_eq!(roundtrip.coefficient(0), 0.0, epsilon = 1e-5);
    }
}

#[test]
fn sixth_degree_round_trip() {
    // x^6 + 1
    let p = Polynomial::from_descending(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    let derivative = derivative_polynomial(&p).unwrap();
    assert_eq!(derivative.degree(), 5);
    assert_abs_diff_eq!(derivative.coefficient(5), 6.0, epsilon = 1e-6);

    let accumulation = accumulation_polynomial(&p).unwrap();
    assert_eq!(accumulation.degree(), 7);
    assert_abs_diff_eq!(accumulation.coefficient(7), 1.0 / 7.0, epsilon = 1e-5);

    let roundtrip = derivative_polynomial(&accumulation).unwrap();
    assert_same_above_constant(&roundtrip, &p, 1e-4);
}

// =============================================================================
// POINT SLOPES
// =============================================================================

#[test]
fn slope_matches_analytic_derivative() {
    let p = Polynomial::from_descending(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_abs_diff_eq!(slope_at_point(&p, 2.0).unwrap(), 192.0, epsilon = 1e-3);

    // 0.5x^4 + 2x^3 - x + 3 -> 2x^3 + 6x^2 - 1
    let q = Polynomial::from_descending(&[0.5, 2.0, 0.0, -1.0, 3.0]);
    for x in [-2.0, -0.5, 0.0, 1.0, 3.5] {
        let expected = 2.0 * x * x * x + 6.0 * x * x - 1.0;
        assert_abs_diff_eq!(slope_at_point(&q, x).unwrap(), expected, epsilon = 1e-6);
    }
}

// =============================================================================
// CONFIGURED ESTIMATORS
// =============================================================================

#[test]
fn row_reduction_fit_gives_same_derivative() {
    let p = Polynomial::from_descending(&[2.0, 0.5, 1.0, -1.0, -2.0]);
    let fit = FitConfig::default().with_method(FitMethod::RowReduction);

    let by_reduction = DerivativeEstimator::new()
        .with_fit(fit)
        .derivative_polynomial(&p)
        .unwrap();
    let by_inversion = derivative_polynomial(&p).unwrap();

    assert_same_above_constant(&by_reduction, &by_inversion, 1e-6);
    assert_abs_diff_eq!(
        by_reduction.coefficient(0),
        by_inversion.coefficient(0),
        epsilon = 1e-6
    );
}

#[test]
fn coarse_quadrature_is_still_exact_for_cubics() {
    // Simpson is exact through degree three, even with two panels.
    let p = Polynomial::from_descending(&[4.0, 1.0, 2.0, 1.0]);
    let coarse = AccumulationEstimator::new(SimpsonsRule::new(2))
        .accumulation_polynomial(&p)
        .unwrap();
    let fine = accumulation_polynomial(&p).unwrap();

    for power in 0..=4 {
        assert_abs_diff_eq!(coarse.coefficient(power), fine.coefficient(power), epsilon = 1e-6);
    }
}

// =============================================================================
// CONDITIONING
// =============================================================================

fn ones(degree: usize) -> Polynomial {
    Polynomial::from_descending(&vec![1.0; degree + 1])
}

fn derivative_error(degree: usize) -> f64 {
    let estimate = derivative_polynomial(&ones(degree)).unwrap();
    (1..=degree)
        .map(|power| (estimate.coefficient(power - 1) - power as f64).abs())
        .fold(0.0, f64::max)
}

#[test]
fn derivative_is_exact_through_degree_eight() {
    for degree in 1..=8 {
        assert!(derivative_error(degree) < 1e-6, "degree {degree}");
    }
}

#[test]
fn derivative_drifts_above_degree_eight() {
    assert!(derivative_error(9) > 1e-6);
    assert!(derivative_error(10) > 1e-4);
}

//! Accumulation functions from sampled definite integrals.

use serde::{Deserialize, Serialize};

use crate::error::MathResult;
use crate::interpolation::{fit_with, FitConfig};
use crate::polynomial::Polynomial;
use crate::quadrature::{Quadrature, SimpsonsRule, DEFAULT_PANELS};

/// Configuration for [`AccumulationEstimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulationConfig {
    /// Simpson panels per sampled integral.
    pub panels: usize,
}

impl Default for AccumulationConfig {
    fn default() -> Self {
        Self {
            panels: DEFAULT_PANELS,
        }
    }
}

/// Approximates `F(x) = integral of P from 0 to x`.
///
/// `F` is sampled at `x = 1..=deg(P) + 2` with the quadrature rule `Q` and a
/// polynomial of degree `deg(P) + 1` is fitted through the samples. The
/// constant of integration is anchored by `F(0) = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccumulationEstimator<Q: Quadrature = SimpsonsRule> {
    quadrature: Q,
    fit: FitConfig,
}

impl Default for AccumulationEstimator {
    fn default() -> Self {
        Self::new(SimpsonsRule::default())
    }
}

impl AccumulationEstimator {
    /// Simpson-based estimator with the given panel count.
    pub fn simpson(panels: usize) -> Self {
        Self::new(SimpsonsRule::new(panels))
    }

    /// Simpson-based estimator from configuration.
    pub fn from_config(config: &AccumulationConfig) -> Self {
        Self::simpson(config.panels)
    }
}

impl<Q: Quadrature> AccumulationEstimator<Q> {
    /// Creates an estimator over the given quadrature rule.
    pub fn new(quadrature: Q) -> Self {
        Self {
            quadrature,
            fit: FitConfig::default(),
        }
    }

    /// Sets the configuration used to fit the accumulation polynomial.
    #[must_use]
    pub fn with_fit(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    /// The quadrature rule.
    pub fn quadrature(&self) -> &Q {
        &self.quadrature
    }

    /// Fits the accumulation polynomial of `poly`.
    pub fn accumulation_polynomial(&self, poly: &Polynomial) -> MathResult<Polynomial> {
        let degree = poly.degree() + 1;

        let xs: Vec<f64> = (1..=degree + 1).map(|k| k as f64).collect();
        let areas = xs
            .iter()
            .map(|&k| self.quadrature.integrate(poly, 0.0, k))
            .collect::<MathResult<Vec<_>>>()?;

        log::debug!("Fitting degree {} accumulation through {} integrals", degree, areas.len());
        fit_with(&xs, &areas, degree, &self.fit)
    }
}

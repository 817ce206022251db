//! Settings loaded from a TOML file.
//!
//! ```toml
//! [reduction]
//! elimination_floor = 1e-8
//! min_scale = 1e-10
//! max_scale = 1e10
//!
//! [fit]
//! rounding_decimals = 6
//! method = "row_reduction"
//!
//! [accumulation]
//! panels = 200
//! ```
//!
//! Missing sections and keys keep their defaults. The `[reduction]`
//! thresholds apply to every solve, including the fits.

use std::path::Path;

use serde::{Deserialize, Serialize};

use polycalc_math::calculus::{AccumulationConfig, AccumulationEstimator, DerivativeEstimator};
use polycalc_math::interpolation::FitConfig;
use polycalc_math::matrix::ReductionConfig;

use crate::error::{CliError, CliResult};

/// Engine settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Row reduction thresholds.
    pub reduction: ReductionConfig,
    /// Fitting options.
    pub fit: FitConfig,
    /// Quadrature options.
    pub accumulation: AccumulationConfig,
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Fit options with the shared reduction thresholds.
    pub fn fit_config(&self) -> FitConfig {
        self.fit.with_reduction(self.reduction)
    }

    /// Derivative estimator for these settings.
    pub fn derivative_estimator(&self) -> DerivativeEstimator {
        DerivativeEstimator::new()
            .with_reduction(self.reduction)
            .with_fit(self.fit_config())
    }

    /// Accumulation estimator for these settings.
    pub fn accumulation_estimator(&self) -> AccumulationEstimator {
        AccumulationEstimator::from_config(&self.accumulation).with_fit(self.fit_config())
    }
}

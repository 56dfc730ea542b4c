//! Linear sleep regression model.
//!
//! Formula: `actual_sleep = intercept + wake * w_wake + estimated_sleep * w_sleep + coffee * w_coffee`
//!
//! Coefficients ship with the crate and can be replaced by a TOML model file
//! exported from a training run.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Predictor;
use crate::error::PredictionError;

/// Unit the model's raw output is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnit {
    #[default]
    Hours,
    Seconds,
}

/// Per-feature coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Per second since midnight
    #[serde(default)]
    pub wake: f64,
    /// Per desired hour of sleep
    #[serde(default = "default_sleep_weight")]
    pub estimated_sleep: f64,
    /// Per cup of coffee
    #[serde(default = "default_coffee_weight")]
    pub coffee: f64,
}

fn default_intercept() -> f64 {
    0.25
}
fn default_sleep_weight() -> f64 {
    1.0
}
fn default_coffee_weight() -> f64 {
    0.1
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            wake: 0.0,
            estimated_sleep: default_sleep_weight(),
            coffee: default_coffee_weight(),
        }
    }
}

/// Immutable linear regression over the three predictor features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default = "default_intercept")]
    pub intercept: f64,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub output_unit: OutputUnit,
}

impl Default for LinearModel {
    fn default() -> Self {
        Self {
            intercept: default_intercept(),
            weights: Weights::default(),
            output_unit: OutputUnit::default(),
        }
    }
}

impl LinearModel {
    /// Load and validate a model file.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::ModelUnavailable`] if the file cannot be
    /// read or parsed, and [`PredictionError::InvalidConfiguration`] if a
    /// coefficient is not finite.
    pub fn load(path: &Path) -> Result<Self, PredictionError> {
        let unavailable = |message: String| PredictionError::ModelUnavailable {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        let model: LinearModel = toml::from_str(&content).map_err(|e| unavailable(e.to_string()))?;
        model.validate()?;

        tracing::debug!("Loaded linear sleep model from {}", path.display());
        Ok(model)
    }

    /// Check that every coefficient is usable.
    pub fn validate(&self) -> Result<(), PredictionError> {
        let coefficients = [
            ("intercept", self.intercept),
            ("weights.wake", self.weights.wake),
            ("weights.estimated_sleep", self.weights.estimated_sleep),
            ("weights.coffee", self.weights.coffee),
        ];

        match coefficients.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(PredictionError::InvalidConfiguration(format!(
                "coefficient '{name}' is not finite ({value})"
            ))),
            None => Ok(()),
        }
    }
}

impl Predictor for LinearModel {
    fn predict(&self, wake: f64, estimated_sleep: f64, coffee: f64) -> Result<f64, PredictionError> {
        self.validate()?;
        for (feature, value) in [("wake", wake), ("estimated_sleep", estimated_sleep), ("coffee", coffee)] {
            if !value.is_finite() {
                return Err(PredictionError::unsupported(feature, value));
            }
        }

        let raw = self.intercept
            + wake * self.weights.wake
            + estimated_sleep * self.weights.estimated_sleep
            + coffee * self.weights.coffee;

        let hours = match self.output_unit {
            OutputUnit::Hours => raw,
            OutputUnit::Seconds => raw / 3600.0,
        };

        if !hours.is_finite() {
            return Err(PredictionError::NumericalFailure(hours));
        }
        Ok(hours)
    }
}

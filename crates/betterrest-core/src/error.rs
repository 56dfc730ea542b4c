//! Core error types for betterrest-core.
//!
//! Errors are split by concern using thiserror. [`PredictionError`] is the
//! only failure the estimator itself can produce; the rest belong to
//! configuration and input parsing around it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for betterrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Prediction failures
    #[error("Prediction failed ({kind}): {0}", kind = .0.kind())]
    Prediction(#[from] PredictionError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The predictor could not produce a sleep duration.
///
/// The estimator surfaces this untouched; callers usually show a generic
/// message and keep [`PredictionError::kind`] for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// Model artifact is missing or unreadable
    #[error("Model unavailable at {path}: {message}")]
    ModelUnavailable { path: PathBuf, message: String },

    /// Model loaded but its parameters are unusable
    #[error("Invalid model configuration: {0}")]
    InvalidConfiguration(String),

    /// An input the model cannot accept
    #[error("Unsupported input for '{feature}': {value}")]
    UnsupportedInput { feature: String, value: f64 },

    /// The model produced NaN or infinity
    #[error("Numerical failure: predictor returned {0}")]
    NumericalFailure(f64),

    /// Any other predictor-specific failure
    #[error("Prediction failed: {0}")]
    Failed(String),
}

impl PredictionError {
    /// Stable, machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::ModelUnavailable { .. } => "model_unavailable",
            PredictionError::InvalidConfiguration(_) => "invalid_configuration",
            PredictionError::UnsupportedInput { .. } => "unsupported_input",
            PredictionError::NumericalFailure(_) => "numerical_failure",
            PredictionError::Failed(_) => "failed",
        }
    }

    pub(crate) fn unsupported(feature: &str, value: f64) -> Self {
        PredictionError::UnsupportedInput {
            feature: feature.to_string(),
            value,
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not locate the configuration directory
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Hour or minute outside the clock
    #[error("Invalid wake time {hour}:{minute:02}: hour must be 0-23 and minute 0-59")]
    InvalidWakeTime { hour: u32, minute: u32 },

    /// Text could not be parsed
    #[error("Cannot parse '{input}' as {expected}")]
    Unparsable { input: String, expected: &'static str },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

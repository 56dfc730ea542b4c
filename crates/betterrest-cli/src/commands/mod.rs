pub mod config;
pub mod estimate;
pub mod respond;

use std::path::Path;

use betterrest_core::{Config, LinearModel, PredictionError};

/// Model from `--model`, falling back to the configured one.
pub fn load_model(config: &Config, model: Option<&Path>) -> Result<LinearModel, PredictionError> {
    match model {
        Some(path) => LinearModel::load(path),
        None => config.model.load_model(),
    }
}

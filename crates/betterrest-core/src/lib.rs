//! # BetterRest Core Library
//!
//! Estimates an ideal bedtime from a wake-up time, a sleep goal and daily
//! coffee intake. All screens and commands are thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Estimator**: encodes the wake time as seconds since midnight, calls an
//!   injected predictor, and subtracts the predicted sleep from the wake time
//! - **Predictor**: trait for the regression model, with a shipped linear
//!   model loadable from TOML
//! - **Display**: stepper limits, labels and the result alert
//! - **Wire**: JSON request/response contract
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: the estimation entry point
//! - [`Predictor`]: capability the estimator depends on
//! - [`WakeTime`] / [`BedtimeEstimate`]: clock values
//! - [`Config`]: application configuration management

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod estimator;
pub mod predictor;
pub mod wire;

pub use clock::{BedtimeEstimate, ClockStyle, WakeTime};
pub use config::{config_dir, data_dir, Config};
pub use display::{Alert, CoffeeIntake, SleepGoal};
pub use error::{ConfigError, CoreError, PredictionError, ValidationError};
pub use estimator::{estimate_bedtime, BedtimeEstimator};
pub use predictor::{from_fn, LinearModel, Predictor};
pub use wire::{respond, respond_json, EstimateRequest, EstimateResponse};

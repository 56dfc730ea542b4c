//! The predictor capability behind the estimator.
//!
//! A predictor maps `(wake seconds, desired sleep hours, coffee cups)` to the
//! number of hours the person is predicted to actually sleep. The estimator
//! treats that number as an opaque duration to subtract from the wake time.
//!
//! Implementations must be safe to call repeatedly with unrelated inputs and
//! must not carry state from one call to the next.

mod linear;

pub use linear::{LinearModel, OutputUnit, Weights};

use std::sync::Arc;

use crate::error::PredictionError;

/// A regression function producing a predicted sleep duration in hours.
pub trait Predictor {
    /// Predict hours of actual sleep.
    ///
    /// `wake` is seconds since midnight, `estimated_sleep` the desired hours
    /// of sleep and `coffee` the daily cups of coffee.
    fn predict(&self, wake: f64, estimated_sleep: f64, coffee: f64) -> Result<f64, PredictionError>;
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn predict(&self, wake: f64, estimated_sleep: f64, coffee: f64) -> Result<f64, PredictionError> {
        (**self).predict(wake, estimated_sleep, coffee)
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, wake: f64, estimated_sleep: f64, coffee: f64) -> Result<f64, PredictionError> {
        (**self).predict(wake, estimated_sleep, coffee)
    }
}

impl<P: Predictor + ?Sized> Predictor for Arc<P> {
    fn predict(&self, wake: f64, estimated_sleep: f64, coffee: f64) -> Result<f64, PredictionError> {
        (**self).predict(wake, estimated_sleep, coffee)
    }
}

/// Adapter turning a closure into a [`Predictor`]. Built by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnPredictor<F>(F);

impl<F> std::fmt::Debug for FnPredictor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnPredictor")
    }
}

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(f64, f64, f64) -> Result<f64, PredictionError>,
{
    fn predict(&self, wake: f64, estimated_sleep: f64, coffee: f64) -> Result<f64, PredictionError> {
        (self.0)(wake, estimated_sleep, coffee)
    }
}

/// Wrap a closure as a predictor, e.g. a fixed stub in tests or a
/// hand-coded heuristic.
///
/// ```
/// use betterrest_core::predictor::{from_fn, Predictor};
///
/// let stub = from_fn(|_, _, _| Ok(7.0));
/// assert_eq!(stub.predict(25_200.0, 8.0, 1.0), Ok(7.0));
/// ```
pub fn from_fn<F>(f: F) -> FnPredictor<F>
where
    F: Fn(f64, f64, f64) -> Result<f64, PredictionError>,
{
    FnPredictor(f)
}

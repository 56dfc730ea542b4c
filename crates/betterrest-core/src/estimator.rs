//! Bedtime estimation.
//!
//! Converts the wake time to seconds since midnight, asks the injected
//! [`Predictor`] how long the person will actually sleep, and steps back from
//! the wake time by that duration. A predictor failure ends the call; nothing
//! is retried.

use crate::clock::{BedtimeEstimate, WakeTime};
use crate::error::PredictionError;
use crate::predictor::Predictor;

/// Estimates bedtimes with an injected predictor.
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<P> {
    predictor: P,
}

impl<P: Predictor> BedtimeEstimator<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    /// Estimate the bedtime for a wake time, sleep goal and coffee intake.
    ///
    /// Inputs outside the screen's stepper ranges are passed through to the
    /// predictor unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError`] if the sleep goal is not finite, if the
    /// predictor fails, or if it returns a non-finite duration.
    pub fn estimate(
        &self,
        wake: WakeTime,
        sleep_hours: f64,
        coffee_cups: u32,
    ) -> Result<BedtimeEstimate, PredictionError> {
        estimate_bedtime(&self.predictor, wake, sleep_hours, coffee_cups)
    }
}

/// One-shot form of [`BedtimeEstimator::estimate`].
pub fn estimate_bedtime<P: Predictor + ?Sized>(
    predictor: &P,
    wake: WakeTime,
    sleep_hours: f64,
    coffee_cups: u32,
) -> Result<BedtimeEstimate, PredictionError> {
    let result = predict_bedtime(predictor, wake, sleep_hours, coffee_cups);
    match &result {
        Ok(bedtime) => tracing::debug!(
            "Estimated bedtime {} for wake {} (goal {}h, {} cups)",
            bedtime.time(),
            wake,
            sleep_hours,
            coffee_cups
        ),
        Err(e) => tracing::warn!(
            kind = e.kind(),
            "Bedtime estimation failed for wake {}: {}",
            wake,
            e
        ),
    }
    result
}

fn predict_bedtime<P: Predictor + ?Sized>(
    predictor: &P,
    wake: WakeTime,
    sleep_hours: f64,
    coffee_cups: u32,
) -> Result<BedtimeEstimate, PredictionError> {
    if !sleep_hours.is_finite() {
        return Err(PredictionError::unsupported("estimated_sleep", sleep_hours));
    }

    let actual_sleep = predictor.predict(
        f64::from(wake.seconds_since_midnight()),
        sleep_hours,
        f64::from(coffee_cups),
    )?;

    wake.rewind(actual_sleep)
        .ok_or(PredictionError::NumericalFailure(actual_sleep))
}

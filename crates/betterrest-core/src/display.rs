//! Input limits, labels and the result alert.
//!
//! These mirror the single BetterRest screen: two steppers and an alert that
//! reports either the bedtime or a generic failure.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::clock::{BedtimeEstimate, ClockStyle};
use crate::error::PredictionError;

/// Desired hours of sleep as chosen on the sleep stepper.
pub struct SleepGoal;

impl SleepGoal {
    pub const RANGE: RangeInclusive<f64> = 4.0..=12.0;
    pub const STEP: f64 = 0.5;
    pub const DEFAULT: f64 = 8.0;

    pub fn is_within_widget_range(hours: f64) -> bool {
        Self::RANGE.contains(&hours) && (hours / Self::STEP).fract() == 0.0
    }

    /// Snap to the nearest stepper position.
    pub fn snap(hours: f64) -> f64 {
        if !hours.is_finite() {
            return Self::DEFAULT;
        }
        let stepped = (hours / Self::STEP).round() * Self::STEP;
        stepped.clamp(*Self::RANGE.start(), *Self::RANGE.end())
    }

    /// `"8 hours"`, `"7.5 hours"`.
    pub fn label(hours: f64) -> String {
        format!("{hours} hours")
    }
}

/// Daily cups of coffee as chosen on the coffee stepper.
pub struct CoffeeIntake;

impl CoffeeIntake {
    pub const RANGE: RangeInclusive<u32> = 1..=20;
    pub const DEFAULT: u32 = 1;

    pub fn is_within_widget_range(cups: u32) -> bool {
        Self::RANGE.contains(&cups)
    }

    /// `"1 cup"`, `"3 cups"`.
    pub fn label(cups: u32) -> String {
        if cups == 1 {
            "1 cup".to_string()
        } else {
            format!("{cups} cups")
        }
    }
}

/// Title and message shown after a calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Failure kind, kept for diagnostics only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<&'static str>,
}

impl Alert {
    pub fn from_result(result: &Result<BedtimeEstimate, PredictionError>, style: ClockStyle) -> Self {
        match result {
            Ok(bedtime) => Self::bedtime(bedtime, style),
            Err(e) => Self::failure(e),
        }
    }

    pub fn bedtime(bedtime: &BedtimeEstimate, style: ClockStyle) -> Self {
        Self {
            title: "Bedtime".to_string(),
            message: format!("Your ideal bedtime is {}", bedtime.format(style)),
            cause: None,
        }
    }

    pub fn failure(error: &PredictionError) -> Self {
        Self {
            title: "Error".to_string(),
            message: "Something went wrong".to_string(),
            cause: Some(error.kind()),
        }
    }
}

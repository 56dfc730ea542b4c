//! Time-of-day values used by the estimator.
//!
//! Both the wake time and the resulting bedtime are clock values with no
//! calendar date attached. Arithmetic between them wraps around midnight.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Target time-of-day to wake up (hour 0-23, minute 0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime {
    hour: u32,
    minute: u32,
}

impl WakeTime {
    /// Create a wake time, rejecting values outside the clock.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::InvalidWakeTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds elapsed since midnight. This is the encoding the predictor
    /// was trained on.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60
    }

    /// Inverse of [`seconds_since_midnight`](Self::seconds_since_midnight).
    ///
    /// Values of a day or more wrap; leftover seconds below a minute are dropped.
    pub fn from_seconds_since_midnight(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hour: secs / 3600,
            minute: (secs % 3600) / 60,
        }
    }

    /// Parse `"7:05"`, `"07:05"`, `"7:05 AM"` or `"7:05pm"`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized: String = input
            .split_whitespace()
            .collect::<String>()
            .to_ascii_uppercase();

        ["%H:%M", "%I:%M%p"]
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
            .map(Self::from)
            .ok_or_else(|| ValidationError::Unparsable {
                input: input.to_string(),
                expected: "a wake time (HH:MM)",
            })
    }

    /// Step back from this wake time by `hours`, wrapping past midnight.
    ///
    /// The duration is rounded to the nearest second. Returns `None` when
    /// `hours` is not finite; any finite magnitude, including negative
    /// values and multi-day spans, produces a clock value.
    pub fn rewind(&self, hours: f64) -> Option<BedtimeEstimate> {
        let secs = (hours * 3600.0).round();
        if !secs.is_finite() {
            return None;
        }

        let day = f64::from(SECONDS_PER_DAY);
        let offset = (secs.rem_euclid(day) as u32) % SECONDS_PER_DAY;
        let bedtime = (self.seconds_since_midnight() + SECONDS_PER_DAY - offset) % SECONDS_PER_DAY;

        NaiveTime::from_num_seconds_from_midnight_opt(bedtime, 0).map(BedtimeEstimate)
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self { hour: 7, minute: 0 }
    }
}

impl From<NaiveTime> for WakeTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl FromStr for WakeTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WakeTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WakeTime> for String {
    fn from(value: WakeTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// How a clock value is rendered for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockStyle {
    /// `10:15 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `22:15`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl FromStr for ClockStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12" | "12h" => Ok(ClockStyle::TwelveHour),
            "24" | "24h" => Ok(ClockStyle::TwentyFourHour),
            _ => Err(ValidationError::Unparsable {
                input: s.to_string(),
                expected: "a clock style (12h or 24h)",
            }),
        }
    }
}

impl fmt::Display for ClockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockStyle::TwelveHour => write!(f, "12h"),
            ClockStyle::TwentyFourHour => write!(f, "24h"),
        }
    }
}

/// Wake time minus the predicted sleep duration, as a time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeEstimate(NaiveTime);

impl BedtimeEstimate {
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Short time string, e.g. `"10:15 PM"` or `"22:15"`.
    pub fn format(&self, style: ClockStyle) -> String {
        match style {
            ClockStyle::TwelveHour => self.0.format("%-I:%M %p").to_string(),
            ClockStyle::TwentyFourHour => self.0.format("%H:%M").to_string(),
        }
    }
}

impl fmt::Display for BedtimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ClockStyle::default()))
    }
}

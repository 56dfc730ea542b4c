//! JSON request/response contract for exposing the estimator as a service.
//!
//! Request: `{"wakeHour": 7, "wakeMinute": 0, "sleepHours": 8.0, "coffeeCups": 1}`
//! Response: `{"bedtimeHour": 22, "bedtimeMinute": 39}` or `{"error": "prediction_failed"}`

use serde::{Deserialize, Serialize};

use crate::clock::{BedtimeEstimate, WakeTime};
use crate::error::PredictionError;
use crate::estimator::BedtimeEstimator;
use crate::predictor::Predictor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub wake_hour: u32,
    pub wake_minute: u32,
    pub sleep_hours: f64,
    pub coffee_cups: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    PredictionFailed,
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EstimateResponse {
    #[serde(rename_all = "camelCase")]
    Bedtime { bedtime_hour: u32, bedtime_minute: u32 },
    Failure { error: ErrorCode },
}

impl EstimateResponse {
    /// Wire form of an estimate. The failure cause is not exposed.
    pub fn from_result(result: &Result<BedtimeEstimate, PredictionError>) -> Self {
        match result {
            Ok(bedtime) => EstimateResponse::Bedtime {
                bedtime_hour: bedtime.hour(),
                bedtime_minute: bedtime.minute(),
            },
            Err(_) => EstimateResponse::Failure {
                error: ErrorCode::PredictionFailed,
            },
        }
    }
}

/// Answer one request. The response is built from this request alone.
pub fn respond<P: Predictor>(estimator: &BedtimeEstimator<P>, request: &EstimateRequest) -> EstimateResponse {
    let wake = match WakeTime::new(request.wake_hour, request.wake_minute) {
        Ok(wake) => wake,
        Err(e) => {
            tracing::debug!("Rejected request: {}", e);
            return EstimateResponse::Failure {
                error: ErrorCode::InvalidInput,
            };
        }
    };

    EstimateResponse::from_result(&estimator.estimate(wake, request.sleep_hours, request.coffee_cups))
}

/// Answer one JSON-encoded request with a JSON-encoded response.
///
/// Malformed requests yield `{"error": "invalid_input"}`.
pub fn respond_json<P: Predictor>(estimator: &BedtimeEstimator<P>, request: &str) -> String {
    let response = match serde_json::from_str::<EstimateRequest>(request) {
        Ok(request) => respond(estimator, &request),
        Err(e) => {
            tracing::debug!("Malformed request: {}", e);
            EstimateResponse::Failure {
                error: ErrorCode::InvalidInput,
            }
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|_| r#"{"error":"prediction_failed"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::from_fn;

    #[test]
    fn request_uses_camel_case() {
        let request: EstimateRequest = serde_json::from_str(
            r#"{"wakeHour": 6, "wakeMinute": 45, "sleepHours": 7.5, "coffeeCups": 2}"#,
        )
        .unwrap();
        assert_eq!(request.wake_minute, 45);
        assert_eq!(request.coffee_cups, 2);
    }

    #[test]
    fn successful_response_shape() {
        let estimator = BedtimeEstimator::new(from_fn(|_, _, _| Ok(7.0)));
        let json = respond_json(
            &estimator,
            r#"{"wakeHour": 7, "wakeMinute": 0, "sleepHours": 8, "coffeeCups": 1}"#,
        );
        assert_eq!(json, r#"{"bedtimeHour":0,"bedtimeMinute":0}"#);
    }

    #[test]
    fn failure_response_shape() {
        let estimator = BedtimeEstimator::new(from_fn(|_, _, _| {
            Err(PredictionError::Failed("no model".into()))
        }));
        let json = respond_json(
            &estimator,
            r#"{"wakeHour": 7, "wakeMinute": 0, "sleepHours": 8, "coffeeCups": 1}"#,
        );
        assert_eq!(json, r#"{"error":"prediction_failed"}"#);
    }

    #[test]
    fn invalid_wake_time_is_rejected_before_prediction() {
        let estimator = BedtimeEstimator::new(from_fn(|_, _, _| -> Result<f64, PredictionError> {
            panic!("predictor must not be called")
        }));
        let request = EstimateRequest {
            wake_hour: 24,
            wake_minute: 0,
            sleep_hours: 8.0,
            coffee_cups: 1,
        };
        assert_eq!(
            respond(&estimator, &request),
            EstimateResponse::Failure {
                error: ErrorCode::InvalidInput
            }
        );
        assert_eq!(respond_json(&estimator, "not json"), r#"{"error":"invalid_input"}"#);
    }

    #[test]
    fn response_from_result_hides_cause() {
        let bedtime = WakeTime::default().rewind(8.5).unwrap();
        assert_eq!(
            EstimateResponse::from_result(&Ok(bedtime)),
            EstimateResponse::Bedtime {
                bedtime_hour: 22,
                bedtime_minute: 30
            }
        );
        assert_eq!(
            EstimateResponse::from_result(&Err(PredictionError::NumericalFailure(f64::NAN))),
            EstimateResponse::Failure {
                error: ErrorCode::PredictionFailed
            }
        );
    }

    #[test]
    fn responses_deserialize_back() {
        let ok: EstimateResponse = serde_json::from_str(r#"{"bedtimeHour":22,"bedtimeMinute":30}"#).unwrap();
        assert_eq!(
            ok,
            EstimateResponse::Bedtime {
                bedtime_hour: 22,
                bedtime_minute: 30
            }
        );
        let err: EstimateResponse = serde_json::from_str(r#"{"error":"prediction_failed"}"#).unwrap();
        assert!(matches!(err, EstimateResponse::Failure { .. }));
    }
}

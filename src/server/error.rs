use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::estimator::EstimatorError;

/// Errors surfaced to API clients as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload is missing, malformed or has the wrong shape.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] EstimatorError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::InvalidInput(message) => debug!("Rejecting request: {}", message),
            ApiError::Prediction(err) => error!("Prediction failed: {}", err),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_input_is_a_bad_request_with_error_body() {
        let response = ApiError::InvalidInput("genres must be a list".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "genres must be a list");
    }

    #[test]
    fn estimator_failures_are_server_errors() {
        let err: ApiError = EstimatorError::DimensionMismatch {
            expected: 21,
            actual: 3,
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Prediction failed: Feature dimension mismatch: expected 21, got 3"
        );
    }
}

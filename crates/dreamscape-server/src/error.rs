use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dreamscape_core::error::{CoreError, INVALID_INPUT_MESSAGE};

use crate::service::ServiceError;

pub const INTERNAL_MESSAGE: &str = "Error generating reports";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    InvalidInput,
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: INVALID_INPUT_MESSAGE,
                    error: None,
                },
            ),
            ApiError::Internal(detail) => {
                tracing::error!("report generation failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: INTERNAL_MESSAGE,
                        error: Some(detail),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidInput => ApiError::InvalidInput,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        tracing::debug!(rejection = %e.body_text(), "rejected request body");
        ApiError::InvalidInput
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Invalid(invalid) => invalid.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use custhub_domain::error::CustHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    error: String,
}

/// Maps [`CustHubError`] to an HTTP response with appropriate status code.
///
/// Constraint violations (duplicate phone number, unknown customer) answer
/// 500 like any other store failure, but carry the store's explanation.
/// Requests axum cannot extract (unparseable body or path) answer 400 in the
/// same envelope.
#[derive(Debug)]
pub enum ApiError {
    Domain(CustHubError),
    BadRequest(String),
}

impl From<CustHubError> for ApiError {
    fn from(err: CustHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::BadRequest(error) => {
                tracing::debug!(%error, "rejected malformed request");
                let body = ErrorBody {
                    message: "Invalid request".to_string(),
                    error,
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
        };

        let (status, message, error) = match &err {
            CustHubError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "All fields are required".to_string(),
                err.to_string(),
            ),
            CustHubError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                format!("{} not found", err.entity),
                err.to_string(),
            ),
            CustHubError::Conflict(err) => {
                tracing::warn!(error = %err, "constraint violation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    err.to_string(),
                )
            }
            CustHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    err.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message, error })).into_response()
    }
}

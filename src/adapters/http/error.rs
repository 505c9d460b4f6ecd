//! HTTP error mapping.
//!
//! Every failure leaves the API as `{ "message": string }` with one of five
//! status codes. Infrastructure details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{AccessDenied, DomainError, ErrorCode};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Response body for every error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unauthorized(String),
    Forbidden(String),
    InvalidArgument(String),
    NotFound(String),
    /// Detail for the log; the client only sees a generic message.
    Upstream(String),
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthorized => ApiError::Unauthorized(err.message),
            ErrorCode::Forbidden => ApiError::Forbidden(err.message),
            code if code.is_not_found() => ApiError::NotFound(err.message),
            code if code.is_infrastructure() => ApiError::Upstream(err.to_string()),
            _ => ApiError::InvalidArgument(err.message),
        }
    }
}

impl From<AccessDenied> for ApiError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Unauthorized(m) => ApiError::Unauthorized(m),
            AccessDenied::Forbidden(m) => ApiError::Forbidden(m),
            AccessDenied::Upstream(m) => ApiError::Upstream(m),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Upstream(detail) => {
                tracing::error!(error = %detail, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            ApiError::Unauthorized(m)
            | ApiError::Forbidden(m)
            | ApiError::InvalidArgument(m)
            | ApiError::NotFound(m) => m,
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn domain_codes_map_to_statuses() {
        let cases = [
            (ErrorCode::AlreadyRegistered, StatusCode::BAD_REQUEST),
            (ErrorCode::PaymentIncomplete, StatusCode::BAD_REQUEST),
            (ErrorCode::InvalidStateTransition, StatusCode::BAD_REQUEST),
            (ErrorCode::ClubNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::Forbidden, StatusCode::FORBIDDEN),
            (ErrorCode::Unauthorized, StatusCode::UNAUTHORIZED),
            (ErrorCode::DatabaseError, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCode::PaymentGatewayError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            assert_eq!(ApiError::from(DomainError::new(code, "x")).status(), status, "{code}");
        }
    }

    #[tokio::test]
    async fn upstream_detail_is_hidden() {
        let response = ApiError::from(DomainError::database("connection refused to 10.0.0.3")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, serde_json::json!({ "message": INTERNAL_ERROR_MESSAGE }));
    }

    #[tokio::test]
    async fn denial_keeps_its_message() {
        let response = ApiError::from(AccessDenied::forbidden("Forbidden access")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["message"], "Forbidden access");
    }
}

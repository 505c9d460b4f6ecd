//! Request extractors shared by every route.

use std::str::FromStr;

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::domain::foundation::DomainError;

use super::error::ApiError;

pub const INVALID_ID_MESSAGE: &str = "Invalid id";

/// `Json<T>` whose rejection is a 400 `{message}` instead of axum's
/// plain-text body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "Rejected request body");
    ApiError::invalid_argument(rejection.body_text())
}

/// Parses a path segment into a typed id before any store access.
pub fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_argument(INVALID_ID_MESSAGE))
}

/// Parses a body or query value, keeping the domain's validation message.
pub fn parse_value<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: Into<DomainError>,
{
    raw.parse().map_err(|e: T::Err| ApiError::from(e.into()))
}

/// Required, non-blank string field from a request body.
pub fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ApiError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::invalid_argument(format!("{} is required", field)))
}

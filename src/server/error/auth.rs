use axum::{
    http::{header::RETRY_AFTER, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

pub const UNAUTHORISED_MESSAGE: &str = "Unauthorised";
pub const INVALID_AUTHORIZATION_MESSAGE: &str = "Invalid \"Authorization\" Header";
pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too Many Requests";

/// Terminal rejections produced by the authorization gate.
#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request carried no Authorization header")]
    MissingToken,

    /// The presented token does not belong to any account.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Authorization header did not match any account")]
    InvalidToken,

    /// The token is valid but belongs to a different bot than the one being written.
    ///
    /// Results in the same 403 Forbidden response as `InvalidToken`.
    #[error("Account {account_bot_id} attempted to modify bot {target_bot_id}")]
    NotOwner {
        /// Bot that owns the presented token
        account_bot_id: String,
        /// Bot the request tried to modify
        target_bot_id: String,
    },

    /// The account exhausted its quota and is blocked.
    ///
    /// Results in a 429 Too Many Requests response with a `retry` body field and a
    /// `Retry-After` header, both in whole seconds.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the next consumption can succeed (at least 1)
        retry_after_secs: u64,
    },
}

/// Converts gate rejections into HTTP responses.
///
/// Every rejection is logged at debug level and rendered as the standard
/// `{error, status, message}` body:
/// - `MissingToken` → 401 Unauthorized
/// - `InvalidToken` / `NotOwner` → 403 Forbidden
/// - `RateLimited` → 429 Too Many Requests with `retry`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Request rejected: {}", self);

        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(401, UNAUTHORISED_MESSAGE)),
            )
                .into_response(),
            Self::InvalidToken | Self::NotOwner { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(403, INVALID_AUTHORIZATION_MESSAGE)),
            )
                .into_response(),
            Self::RateLimited { retry_after_secs } => {
                let body = ErrorDto {
                    retry: Some(retry_after_secs),
                    ..ErrorDto::new(429, TOO_MANY_REQUESTS_MESSAGE)
                };
                let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
                response
                    .headers_mut()
                    .insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
                response
            }
        }
    }
}

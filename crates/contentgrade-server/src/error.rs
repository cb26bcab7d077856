//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for the grading endpoint. It
//! implements `axum::response::IntoResponse` to produce `{error, details?}`
//! JSON bodies with the matching HTTP status code. The `error` strings are
//! part of the public contract and never change with the underlying cause.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::fetch::FetchError;
use crate::llm_provider::ProviderError;
use crate::schema::grade::ErrorBody;

/// API errors with HTTP status code mapping.
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Any method other than POST on the grading route (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Body is not a JSON object of the expected shape (400).
    #[error("Invalid request body")]
    InvalidBody(String),

    /// The URL could not be fetched (400). The cause is logged, not returned.
    #[error("Failed to fetch content from URL")]
    FetchFailed(#[source] FetchError),

    /// Neither `content` nor the fetched page produced text (400).
    #[error("No content provided")]
    NoContent,

    /// No completion API secret is configured (500).
    #[error("Missing OpenAI API key in environment")]
    MissingApiKey,

    /// The completion call or its response failed (500).
    #[error("AI request failed")]
    AiRequestFailed(#[source] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody(_) | ApiError::FetchFailed(_) | ApiError::NoContent => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MissingApiKey | ApiError::AiRequestFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The JSON body sent to the caller.
    pub fn body(&self) -> ErrorBody {
        let details = match self {
            ApiError::InvalidBody(reason) => Some(reason.clone()),
            ApiError::AiRequestFailed(err) => Some(err.to_string()),
            _ => None,
        };
        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), axum::Json(self.body())).into_response()
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError::FetchFailed(err)
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::AiRequestFailed(err)
    }
}

impl From<contentgrade_core::CoreError> for ApiError {
    fn from(err: contentgrade_core::CoreError) -> Self {
        match err {
            contentgrade_core::CoreError::EmptyInput => ApiError::NoContent,
        }
    }
}

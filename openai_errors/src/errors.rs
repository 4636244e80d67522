//! Error types returned for failed API responses.

use crate::types::ApiError;

/// Boxed cause carried by a [`RequestError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed request that did not produce a structured [`ApiError`].
///
/// Covers transport faults and failure responses whose body could not be
/// decoded as an error envelope. The original cause is kept as `source()`.
#[derive(thiserror::Error, Debug)]
#[error("error, status code: {http_status_code}, message: {cause}")]
pub struct RequestError {
    pub http_status_code: u16,
    pub http_retry_after: String,
    #[source]
    pub cause: BoxError,
}

impl RequestError {
    pub fn new(
        http_status_code: u16,
        http_retry_after: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            http_status_code,
            http_retry_after: http_retry_after.into(),
            cause: cause.into(),
        }
    }
}

/// Why a failure response could not be turned into an [`ApiError`].
#[derive(thiserror::Error, Debug)]
pub enum ResponseError {
    #[error("error, reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),
    #[error("failed to decode error response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response body has no error object: {body}")]
    MissingError { body: String },
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

/// A failed API call: either the server described the failure, or it didn't.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Request(#[from] RequestError),
}

impl Error {
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            Self::Request(_) => None,
        }
    }

    pub fn as_request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request(e) => Some(e),
            Self::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let status = e.status().map_or(0, |s| s.as_u16());
        Self::Request(RequestError::new(status, "", ResponseError::Transport(e)))
    }
}

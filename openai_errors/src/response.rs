//! Turns failed HTTP responses into [`Error`] values.
//!
//! Nothing here sends requests. Callers hand over a response (or its status,
//! `Retry-After` header and body) once the transport has finished with it.

use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::errors::{Error, RequestError, ResponseError};
use crate::types::ErrorResponse;

/// Longest body excerpt kept in a [`ResponseError::MissingError`].
pub const MAX_BODY_SNIPPET: usize = 2000;

/// Whether a status code denotes a failed request.
pub fn is_failure_status(status: u16) -> bool {
    !(200..400).contains(&status)
}

/// Classifies a failure response.
///
/// A body holding an error envelope yields [`Error::Api`] with the status and
/// retry hint attached. Anything else yields [`Error::Request`] whose cause
/// says why the body was unusable.
pub fn error_from_response(status: u16, retry_after: &str, body: &[u8]) -> Error {
    match ErrorResponse::from_slice(body) {
        Ok(ErrorResponse {
            error: Some(api_error),
        }) => api_error.with_http_status(status, retry_after).into(),
        Ok(ErrorResponse { error: None }) => {
            let snippet = truncate_body(&String::from_utf8_lossy(body));
            tracing::warn!("Response with status {} has no error object: {}", status, snippet);
            RequestError::new(
                status,
                retry_after,
                ResponseError::MissingError { body: snippet },
            )
            .into()
        }
        Err(e) => {
            tracing::warn!("Failed to decode error response with status {}: {}", status, e);
            RequestError::new(status, retry_after, ResponseError::Decode(e)).into()
        }
    }
}

/// Reads a failed [`reqwest::Response`] to the end and classifies it.
pub async fn from_reqwest(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let retry_after = retry_after_header(response.headers());

    match response.bytes().await {
        Ok(body) => error_from_response(status, &retry_after, &body),
        Err(e) => {
            tracing::error!("Failed to read response body: {}", e);
            RequestError::new(status, retry_after, ResponseError::ReadBody(e)).into()
        }
    }
}

/// Passes successful responses through and classifies failed ones.
pub async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    if is_failure_status(response.status().as_u16()) {
        Err(from_reqwest(response).await)
    } else {
        Ok(response)
    }
}

/// The `Retry-After` value as sent, empty if absent. Non-ASCII bytes are kept
/// (lossily decoded) rather than dropped.
fn retry_after_header(headers: &HeaderMap) -> String {
    headers
        .get(RETRY_AFTER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

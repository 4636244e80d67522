//! Variant-agnostic queries over API errors.
//!
//! The queries accept any error and walk its `source()` chain, so an
//! [`ApiError`] or [`RequestError`] wrapped by caller-defined errors is still
//! found. When both variants are in the chain the [`ApiError`] wins.

use std::error::Error as StdError;

use crate::errors::{Error, RequestError};
use crate::types::ApiError;

/// HTTP 429 Too Many Requests.
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// An error that came out of an HTTP response.
pub trait HttpFailure {
    /// Status code of the response, 0 if none was received.
    fn http_status_code(&self) -> u16;

    /// Verbatim `Retry-After` header value, empty if absent.
    fn http_retry_after(&self) -> &str;
}

impl HttpFailure for ApiError {
    fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    fn http_retry_after(&self) -> &str {
        &self.http_retry_after
    }
}

impl HttpFailure for RequestError {
    fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    fn http_retry_after(&self) -> &str {
        &self.http_retry_after
    }
}

impl HttpFailure for Error {
    fn http_status_code(&self) -> u16 {
        match self {
            Self::Api(e) => e.http_status_code(),
            Self::Request(e) => e.http_status_code(),
        }
    }

    fn http_retry_after(&self) -> &str {
        match self {
            Self::Api(e) => e.http_retry_after(),
            Self::Request(e) => e.http_retry_after(),
        }
    }
}

fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |e| (*e).source())
}

fn find<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    chain(err).find_map(|e| e.downcast_ref::<T>())
}

/// HTTP failures found in the chain, [`ApiError`] first.
fn failures<'a>(err: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a dyn HttpFailure> {
    let api = find::<ApiError>(err).map(|e| e as &dyn HttpFailure);
    let request = find::<RequestError>(err).map(|e| e as &dyn HttpFailure);
    api.into_iter().chain(request)
}

/// Returns the HTTP status code that caused `err`, or 0 if it did not come
/// from an HTTP response.
pub fn http_status(err: &(dyn StdError + 'static)) -> u16 {
    failures(err).next().map_or(0, |f| f.http_status_code())
}

/// Reports whether `err` is a 429 response, along with its `Retry-After`
/// value. Returns `(false, "")` otherwise.
pub fn is_too_many_requests<'a>(err: &'a (dyn StdError + 'static)) -> (bool, &'a str) {
    failures(err)
        .find(|f| f.http_status_code() == STATUS_TOO_MANY_REQUESTS)
        .map_or((false, ""), |f| (true, f.http_retry_after()))
}

/// The `Retry-After` value of a 429 response, if the server sent one.
pub fn retry_after<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a str> {
    match is_too_many_requests(err) {
        (true, hint) if !hint.is_empty() => Some(hint),
        _ => None,
    }
}

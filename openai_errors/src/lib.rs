//! Decoding and classification of OpenAI-style API error responses.
//!
//! Error bodies are decoded leniently into [`ApiError`]; failures that never
//! produced one become [`RequestError`]. [`http_status`] and
//! [`is_too_many_requests`] answer the questions a retry loop needs without
//! caring which of the two a caller ended up with.

mod classify;
mod decode;
mod errors;
mod response;
pub mod types;
pub use self::classify::{
    http_status, is_too_many_requests, retry_after, HttpFailure, STATUS_TOO_MANY_REQUESTS,
};
pub use self::errors::{BoxError, Error, RequestError, ResponseError};
pub use self::response::{
    error_for_status, error_from_response, from_reqwest, is_failure_status, MAX_BODY_SNIPPET,
};
pub use self::types::{ApiError, ErrorCode, ErrorResponse, InnerError};

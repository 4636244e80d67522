use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ErrorCode, InnerError};

/// Error information returned inside an API error response body.
///
/// `http_status_code` and `http_retry_after` are not part of the wire payload;
/// they are filled in from the transport response by whoever decoded the body.
/// Decoding is lenient, see the `Deserialize` impl for the rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(skip)]
    pub http_status_code: u16,
    #[serde(skip)]
    pub http_retry_after: String,
    /// Only sent by the enterprise-hosted variant.
    #[serde(rename = "innererror", skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<InnerError>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<ErrorCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = error_type.into();
        self
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn with_inner_error(mut self, inner_error: InnerError) -> Self {
        self.inner_error = Some(inner_error);
        self
    }

    /// Attaches the transport status and `Retry-After` value.
    pub fn with_http_status(mut self, status: u16, retry_after: impl Into<String>) -> Self {
        self.http_status_code = status;
        self.http_retry_after = retry_after.into();
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Errors decoded outside of an HTTP round trip have no status.
        if self.http_status_code > 0 {
            write!(
                f,
                "error, status code: {}, message: {}",
                self.http_status_code, self.message
            )
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ApiError {}

/// The error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

mod api_error;
pub use self::api_error::{ApiError, ErrorResponse};

mod code;
pub use self::code::ErrorCode;

mod content_filter;
pub use self::content_filter::{ContentFilterResults, DetectionResult, InnerError, SeverityResult};

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Provider-assigned error code.
///
/// The wire type is not fixed: the primary service sends strings such as
/// `"rate_limit_exceeded"`, some gateways send bare integers. Whole numbers
/// are always kept as [`ErrorCode::Int`] so `500` never turns into `500.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Int(i64),
    Text(String),
    /// Any other non-null JSON shape, kept verbatim.
    Other(Value),
}

impl ErrorCode {
    /// Classifies a raw JSON value, trying the integer form first.
    ///
    /// Returns `None` for JSON `null`: a null code is treated as absent, not
    /// as the integer `0`.
    pub fn from_value(raw: Value) -> Option<Self> {
        if let Some(n) = raw.as_i64() {
            return Some(Self::Int(n));
        }
        match raw {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            other => {
                tracing::debug!(code = %other, "keeping non-integer, non-string error code as-is");
                Some(Self::Other(other))
            }
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ErrorCode {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_numbers_stay_integers() {
        assert_eq!(ErrorCode::from_value(json!(500)), Some(ErrorCode::Int(500)));
        assert_eq!(ErrorCode::from_value(json!(-1)), Some(ErrorCode::Int(-1)));
    }

    #[test]
    fn strings_are_text() {
        let code = ErrorCode::from_value(json!("invalid_api_key")).unwrap();
        assert_eq!(code.as_str(), Some("invalid_api_key"));
        assert_eq!(code.as_int(), None);
    }

    #[test]
    fn fractional_numbers_are_kept_verbatim() {
        assert_eq!(
            ErrorCode::from_value(json!(1.5)),
            Some(ErrorCode::Other(json!(1.5)))
        );
    }

    #[test]
    fn null_is_absent() {
        assert_eq!(ErrorCode::from_value(Value::Null), None);
    }

    #[test]
    fn serializes_in_wire_shape() {
        assert_eq!(serde_json::to_value(ErrorCode::Int(429)).unwrap(), json!(429));
        assert_eq!(
            serde_json::to_value(ErrorCode::from("context_length_exceeded")).unwrap(),
            json!("context_length_exceeded")
        );
    }

    #[test]
    fn display() {
        assert_eq!(ErrorCode::Int(404).to_string(), "404");
        assert_eq!(ErrorCode::from("quota").to_string(), "quota");
    }
}

//! Lenient decoding of the API error object.
//!
//! Providers have drifted on the shape of this object over time: `message`
//! is sometimes a list of validation messages, `code` is an integer or a
//! string, and the enterprise-hosted variant adds `innererror`. An absent
//! optional key decodes to its empty value. A key that is present but
//! malformed fails the whole decode.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{ApiError, ErrorCode, ErrorResponse};

impl<'de> Deserialize<'de> for ApiError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        decode_fields(fields).map_err(de::Error::custom)
    }
}

impl ApiError {
    /// Decodes a bare error object (the value of the envelope's `error` key).
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

impl ErrorResponse {
    /// Decodes a full error envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

fn decode_fields(mut fields: Map<String, Value>) -> Result<ApiError, serde_json::Error> {
    let message = decode_message(fields.remove("message"))?;
    let error_type = decode_optional::<String>(&mut fields, "type")?.unwrap_or_default();
    let inner_error = decode_optional(&mut fields, "innererror")?;
    let param = decode_optional(&mut fields, "param")?;
    let code = fields.remove("code").and_then(ErrorCode::from_value);

    Ok(ApiError {
        code,
        message,
        param,
        error_type,
        inner_error,
        ..ApiError::default()
    })
}

fn decode_message(raw: Option<Value>) -> Result<String, serde_json::Error> {
    match raw {
        None => Err(<serde_json::Error as de::Error>::missing_field("message")),
        Some(Value::Null) => Ok(String::new()),
        Some(Value::String(message)) => Ok(message),
        // Function-call schema validation reports one message per violation.
        Some(other) => {
            let messages: Vec<String> = serde_json::from_value(other)?;
            tracing::debug!(count = messages.len(), "joining list-shaped error message");
            Ok(messages.join(", "))
        }
    }
}

fn decode_optional<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => serde_json::from_value(raw).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<ApiError, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn string_message() {
        let err = decode(json!({"message": "bad request"})).unwrap();
        assert_eq!(err.message, "bad request");
        assert!(err.code.is_none());
        assert!(err.param.is_none());
        assert!(err.inner_error.is_none());
        assert_eq!(err.error_type, "");
    }

    #[test]
    fn list_message_is_joined() {
        let err = decode(json!({"message": ["a is required", "b is required", "c"]})).unwrap();
        assert_eq!(err.message, "a is required, b is required, c");
    }

    #[test]
    fn empty_list_message() {
        let err = decode(json!({"message": []})).unwrap();
        assert_eq!(err.message, "");
    }

    #[test]
    fn null_message_is_empty() {
        let err = decode(json!({"message": null, "type": "server_error"})).unwrap();
        assert_eq!(err.message, "");
        assert_eq!(err.error_type, "server_error");
    }

    #[test]
    fn missing_message_fails() {
        let err = decode(json!({"type": "server_error"})).unwrap_err();
        assert!(err.to_string().contains("message"));
    }

    #[test]
    fn malformed_message_fails() {
        assert!(decode(json!({"message": 42})).is_err());
        assert!(decode(json!({"message": {"text": "nope"}})).is_err());
        assert!(decode(json!({"message": ["ok", 1]})).is_err());
    }

    #[test]
    fn integer_code() {
        let err = decode(json!({"message": "x", "code": 500})).unwrap();
        assert_eq!(err.code, Some(ErrorCode::Int(500)));
        assert_eq!(serde_json::to_value(&err).unwrap()["code"], json!(500));
    }

    #[test]
    fn string_code() {
        let err = decode(json!({"message": "x", "code": "abc"})).unwrap();
        assert_eq!(err.code, Some(ErrorCode::Text("abc".to_string())));
    }

    #[test]
    fn null_fields_are_absent() {
        let err = decode(json!({
            "message": "x",
            "type": null,
            "param": null,
            "code": null,
            "innererror": null
        }))
        .unwrap();
        assert_eq!(err.error_type, "");
        assert!(err.param.is_none());
        assert!(err.code.is_none());
        assert!(err.inner_error.is_none());
    }

    #[test]
    fn malformed_optional_field_fails() {
        assert!(decode(json!({"message": "x", "type": 3})).is_err());
        assert!(decode(json!({"message": "x", "param": ["a"]})).is_err());
        assert!(decode(json!({"message": "x", "innererror": "filtered"})).is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let err = decode(json!({"message": "x", "request_id": "req_123"})).unwrap();
        assert_eq!(err.message, "x");
    }

    #[test]
    fn non_object_fails() {
        assert!(decode(json!("oops")).is_err());
        assert!(decode(json!(["message"])).is_err());
    }

    #[test]
    fn http_fields_are_zero_after_decode() {
        let err = ApiError::from_slice(br#"{"message":"x"}"#).unwrap();
        assert_eq!(err.http_status_code, 0);
        assert_eq!(err.http_retry_after, "");
    }

    #[test]
    fn envelope_without_error_key() {
        let resp = ErrorResponse::from_slice(b"{}").unwrap();
        assert!(resp.error.is_none());
        let resp = ErrorResponse::from_slice(br#"{"error": null}"#).unwrap();
        assert!(resp.error.is_none());
    }
}

//! Normalization of non-2xx response bodies.
//!
//! The API reports errors in several JSON shapes:
//!
//! - `{"error": "Not Found"}`
//! - `{"errors": "[API] Invalid API key or access token"}`
//! - `{"errors": ["not", "very good"]}`
//! - `{"errors": {"title": ["can't be blank"]}}`
//!
//! All of them collapse into one [`ResponseError`].

use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::{ClientError, RateLimitError, ResponseDecodingError, ResponseError};

/// Message used for every 406 response.
pub const NOT_ACCEPTABLE: &str = "Not acceptable";

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<Value>,
}

/// The shape of the `errors` field.
#[derive(Debug, PartialEq, Eq)]
enum ErrorsField {
    Absent,
    Message(String),
    List(Vec<String>),
    Fields(Vec<(String, Vec<String>)>),
}

impl ErrorsField {
    fn classify(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null | Value::Bool(_) | Value::Number(_)) => Self::Absent,
            Some(Value::String(message)) => Self::Message(message),
            Some(Value::Array(items)) => Self::List(items.iter().map(stringify).collect()),
            // serde_json maps iterate in key order
            Some(Value::Object(map)) => Self::Fields(
                map.into_iter()
                    .filter_map(|(key, value)| match value {
                        Value::Array(items) => Some((key, items.iter().map(stringify).collect())),
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn build_response_error(status: u16, flat: Option<String>, field: ErrorsField) -> ResponseError {
    let mut message = flat.filter(|m| !m.is_empty());
    let mut errors = Vec::new();

    match field {
        ErrorsField::Absent => {}
        ErrorsField::Message(text) => message = Some(text).filter(|m| !m.is_empty()),
        ErrorsField::List(items) => {
            if message.is_none() && !items.is_empty() {
                message = Some(items.join(", "));
            }
            errors = items;
        }
        ErrorsField::Fields(fields) => {
            for (key, items) in fields {
                for item in items {
                    if message.is_none() {
                        message = Some(item.clone());
                    }
                    errors.push(format!("{key}: {item}"));
                }
            }
        }
    }

    ResponseError {
        status,
        message,
        errors,
    }
}

/// Parses a `Retry-After` value as fractional seconds, truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_retry_after(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map_or(0, |secs| secs as u64)
}

/// Turns a non-2xx status and its body into the matching [`ClientError`].
///
/// An empty body yields an error carrying only the status. A body that is
/// not JSON, or whose `error` field is not a string, yields a
/// [`ResponseDecodingError`] regardless of status.
pub(crate) fn normalize_error_response(
    status: u16,
    retry_after: Option<&str>,
    body: &[u8],
) -> ClientError {
    let parsed = if body.is_empty() {
        ErrorBody::default()
    } else {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => parsed,
            Err(e) => return ResponseDecodingError::from_json(&e, body, status).into(),
        }
    };

    let mut error =
        build_response_error(status, parsed.error, ErrorsField::classify(parsed.errors));

    match status {
        429 => RateLimitError {
            response: error,
            retry_after: parse_retry_after(retry_after),
        }
        .into(),
        406 => {
            error.message = Some(NOT_ACCEPTABLE.to_string());
            error.into()
        }
        _ => error.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::DecodingErrorKind;

    fn response_error(status: u16, body: &str) -> ResponseError {
        match normalize_error_response(status, None, body.as_bytes()) {
            ClientError::Response(e) => e,
            other => panic!("expected response error, got {other:?}"),
        }
    }

    #[test]
    fn test_flat_error_message() {
        let error = response_error(404, r#"{"error":"does not exist"}"#);
        assert_eq!(error.status, 404);
        assert_eq!(error.message.as_deref(), Some("does not exist"));
        assert!(error.errors.is_empty());
    }

    #[test]
    fn test_errors_string_overrides_flat_error() {
        let error = response_error(
            403,
            r#"{"error":"ignored","errors":"The api_client does not have the required permission(s)."}"#,
        );
        assert_eq!(
            error.message.as_deref(),
            Some("The api_client does not have the required permission(s).")
        );
        assert!(error.errors.is_empty());
    }

    #[test]
    fn test_errors_array() {
        let error = response_error(500, r#"{"errors":["not","very good"]}"#);
        assert_eq!(error.message.as_deref(), Some("not, very good"));
        assert_eq!(error.errors, vec!["not", "very good"]);
    }

    #[test]
    fn test_errors_array_keeps_flat_message() {
        let error = response_error(400, r#"{"error":"bad request","errors":["a","b"]}"#);
        assert_eq!(error.message.as_deref(), Some("bad request"));
        assert_eq!(error.errors, vec!["a", "b"]);
    }

    #[test]
    fn test_errors_array_stringifies_non_strings() {
        let error = response_error(422, r#"{"errors":["text",5,{"a":true}]}"#);
        assert_eq!(error.errors, vec!["text", "5", r#"{"a":true}"#]);
    }

    #[test]
    fn test_field_errors() {
        let error = response_error(400, r#"{"errors":{"title":["wrong"]}}"#);
        assert_eq!(error.message.as_deref(), Some("wrong"));
        assert_eq!(error.errors, vec!["title: wrong"]);
    }

    #[test]
    fn test_field_errors_in_key_order() {
        let error = response_error(
            422,
            r#"{"errors":{"title":["can't be blank"],"body":["is too long","is invalid"],"count":3}}"#,
        );
        assert_eq!(error.message.as_deref(), Some("is too long"));
        assert_eq!(
            error.errors,
            vec![
                "body: is too long",
                "body: is invalid",
                "title: can't be blank"
            ]
        );
    }

    #[test]
    fn test_empty_body_carries_only_status() {
        let error = response_error(500, "");
        assert_eq!(error, ResponseError::new(500));
        assert_eq!(error.to_string(), "Unknown Error");
    }

    #[test]
    fn test_empty_flat_error_is_unset() {
        let error = response_error(400, r#"{"error":""}"#);
        assert!(error.message.is_none());
    }

    #[test]
    fn test_rate_limit_reads_retry_after() {
        let body = br#"{"errors":"Exceeded 2 calls per second for api client. Reduce request rates to resume uninterrupted service."}"#;
        match normalize_error_response(429, Some("2.0"), body) {
            ClientError::RateLimit(e) => {
                assert_eq!(e.retry_after, 2);
                assert_eq!(e.response.status, 429);
                assert!(e.response.message.unwrap().starts_with("Exceeded 2 calls"));
            }
            other => panic!("expected rate limit error, got {other:?}"),
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(parse_retry_after(Some("2.7")), 2);
        assert_eq!(parse_retry_after(Some(" 10 ")), 10);
        assert_eq!(parse_retry_after(Some("soon")), 0);
        assert_eq!(parse_retry_after(Some("-3")), 0);
        assert_eq!(parse_retry_after(None), 0);
    }

    #[test]
    fn test_not_acceptable_overrides_message() {
        let error = response_error(406, r#"{"error":"something else"}"#);
        assert_eq!(error.message.as_deref(), Some(NOT_ACCEPTABLE));

        let error = response_error(406, "");
        assert_eq!(error.to_string(), "Not acceptable");
    }

    #[test]
    fn test_unparsable_body_is_decoding_error() {
        for status in [400, 406, 429] {
            match normalize_error_response(status, Some("1"), b"{error:bad request}") {
                ClientError::Decoding(e) => {
                    assert_eq!(e.kind, DecodingErrorKind::Syntax);
                    assert_eq!(e.status, status);
                    assert_eq!(e.body, b"{error:bad request}");
                }
                other => panic!("expected decoding error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rate_limit_with_html_body_is_decoding_error() {
        let error = normalize_error_response(429, Some("5"), b"<html>Too Many Requests</html>");
        assert!(matches!(error, ClientError::Decoding(_)), "got {error:?}");
        assert_eq!(error.status(), Some(429));
    }

    #[test]
    fn test_non_string_flat_error_is_shape_error() {
        match normalize_error_response(400, None, br#"{"error":{"nested":true}}"#) {
            ClientError::Decoding(e) => assert_eq!(e.kind, DecodingErrorKind::Shape),
            other => panic!("expected decoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_ignores_scalars() {
        assert_eq!(
            ErrorsField::classify(Some(Value::Bool(true))),
            ErrorsField::Absent
        );
        assert_eq!(ErrorsField::classify(None), ErrorsField::Absent);
    }
}

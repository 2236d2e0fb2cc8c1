//! Successful response type.
//!
//! [`RawResponse`] holds a 2xx response with its body fully read, plus
//! accessors for the Shopify-specific headers.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::clients::errors::{ClientError, ResponseDecodingError};

/// Header carrying the deprecation notice for a request.
pub const DEPRECATED_REASON_HEADER: &str = "x-shopify-api-deprecated-reason";

/// Header carrying the leaky-bucket call limit.
pub const API_CALL_LIMIT_HEADER: &str = "x-shopify-shop-api-call-limit";

/// Rate limit information parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the current request count and Y is
/// the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently counted against the bucket.
    pub request_count: u32,
    /// The bucket size.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses an `X/Y` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Returns how many requests remain before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// A 2xx response with its body fully read.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// The raw body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decoding`] if the body is not valid JSON or
    /// does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ResponseDecodingError::from_json(&e, &self.body, self.status).into())
    }

    /// Decodes the value under `key` in a JSON object body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decoding`] if the body is not a JSON object,
    /// lacks `key`, or the value does not match `T`.
    pub fn json_field<T: DeserializeOwned>(&self, key: &str) -> Result<T, ClientError> {
        let mut object: serde_json::Map<String, serde_json::Value> = self.json()?;
        let value = object.remove(key).ok_or_else(|| {
            ResponseDecodingError::missing_field(key, &self.body, self.status)
        })?;
        serde_json::from_value(value)
            .map_err(|e| ResponseDecodingError::from_json(&e, &self.body, self.status).into())
    }

    /// Returns a header value as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the call limit reported by the shop, if present.
    #[must_use]
    pub fn api_call_limit(&self) -> Option<ApiCallLimit> {
        self.header(API_CALL_LIMIT_HEADER).and_then(ApiCallLimit::parse)
    }

    /// Returns the deprecation notice for this request, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header(DEPRECATED_REASON_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::DecodingErrorKind;
    use reqwest::header::HeaderValue;

    fn response(body: &str) -> RawResponse {
        let mut headers = HeaderMap::new();
        headers.insert(API_CALL_LIMIT_HEADER, HeaderValue::from_static("39/40"));
        RawResponse {
            status: 200,
            headers,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_api_call_limit_parse() {
        assert_eq!(
            ApiCallLimit::parse("40/80"),
            Some(ApiCallLimit {
                request_count: 40,
                bucket_size: 80
            })
        );
        assert_eq!(ApiCallLimit::parse("40"), None);
        assert_eq!(ApiCallLimit::parse("a/b"), None);
        assert_eq!(ApiCallLimit::parse("50/40").unwrap().remaining(), 0);
    }

    #[test]
    fn test_header_accessors() {
        let raw = response("{}");
        assert_eq!(raw.api_call_limit().unwrap().remaining(), 1);
        assert!(raw.deprecation_reason().is_none());
    }

    #[test]
    fn test_json_field_unwraps_envelope() {
        let raw = response(r#"{"count":5}"#);
        let count: u64 = raw.json_field("count").unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_json_field_missing_key_is_shape_error() {
        let raw = response(r#"{"other":1}"#);
        match raw.json_field::<u64>("count") {
            Err(ClientError::Decoding(e)) => {
                assert_eq!(e.kind, DecodingErrorKind::Shape);
                assert_eq!(e.body, br#"{"other":1}"#);
            }
            other => panic!("expected decoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_invalid_json() {
        let raw = response("{foo:bar}");
        match raw.json::<serde_json::Value>() {
            Err(ClientError::Decoding(e)) => assert_eq!(e.kind, DecodingErrorKind::Syntax),
            other => panic!("expected decoding error, got {other:?}"),
        }
    }
}

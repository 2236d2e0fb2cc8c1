//! Request types for the transport.
//!
//! This module provides [`HttpRequest`], a request that is ready to send,
//! and [`HttpRequestBuilder`], which collects the method, path, query options
//! and JSON body before [`Client::new_request`](crate::Client::new_request)
//! resolves it against the shop's base URL.

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::Url;
use serde::Serialize;
use url::ParseError;

use crate::clients::errors::InvalidRequestError;
use crate::clients::query::serialize_to_query;

/// HTTP methods used by the REST admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the matching [`reqwest::Method`].
    #[must_use]
    pub const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A fully resolved request, ready to send.
///
/// Built by [`Client::new_request`](crate::Client::new_request), which
/// resolves the path, encodes the options and attaches the standard and
/// authentication headers.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL, including query parameters.
    pub url: Url,
    /// Headers to send.
    pub headers: HeaderMap,
    /// The JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new builder for a request.
    ///
    /// The path is either relative to the shop's base URL
    /// (`admin/products.json`, a leading `/` is ignored) or an absolute URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{HttpMethod, HttpRequest};
    ///
    /// #[derive(serde::Serialize)]
    /// struct Options {
    ///     limit: u32,
    /// }
    ///
    /// let builder = HttpRequest::builder(HttpMethod::Get, "admin/products.json")
    ///     .options(&Options { limit: 10 });
    /// ```
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the request body as text, if it has one.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

/// Builder for [`HttpRequest`].
///
/// Options and body are serialized as they are set; the first failure is
/// kept and reported when the request is built, so nothing invalid reaches
/// the network.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    error: Option<InvalidRequestError>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            error: None,
        }
    }

    /// Appends options as query parameters.
    ///
    /// Options must serialize to a struct or map; `()` and `None` add
    /// nothing.
    #[must_use]
    pub fn options<O: Serialize + ?Sized>(mut self, options: &O) -> Self {
        match serialize_to_query(options) {
            Ok(pairs) => self.query.extend(pairs),
            Err(e) => self.record(e),
        }
        self
    }

    /// Sets the JSON body.
    ///
    /// A value that serializes to `null` sends no body.
    #[must_use]
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        let encoded = serde_json::to_value(body).and_then(|value| {
            if value.is_null() {
                Ok(None)
            } else {
                serde_json::to_vec(&value).map(Some)
            }
        });
        match encoded {
            Ok(bytes) => self.body = bytes,
            Err(e) => self.record(InvalidRequestError::InvalidBody {
                reason: e.to_string(),
            }),
        }
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path as given.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    fn record(&mut self, error: InvalidRequestError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Resolves the request against `base` and attaches `headers`.
    ///
    /// A path that parses as an absolute URL is used as is. A relative
    /// path has its leading `/` stripped and is joined to `base`. Options
    /// are appended after any query parameters already in the path.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidRequestError`] recorded while building,
    /// or [`InvalidRequestError::InvalidPath`] if the URL cannot be formed.
    pub fn build(self, base: &Url, headers: HeaderMap) -> Result<HttpRequest, InvalidRequestError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut url = resolve_url(base, &self.path)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(HttpRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}

fn resolve_url(base: &Url, path: &str) -> Result<Url, InvalidRequestError> {
    let resolved = match Url::parse(path) {
        Err(ParseError::RelativeUrlWithoutBase) => base.join(path.trim_start_matches('/')),
        other => other,
    };
    resolved.map_err(|e| InvalidRequestError::InvalidPath {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://fooshop.myshopify.com/").unwrap()
    }

    #[derive(Serialize)]
    struct Limit {
        limit: u32,
    }

    #[test]
    fn test_relative_path_resolves_against_base() {
        let request = HttpRequest::builder(HttpMethod::Get, "foo/1")
            .build(&base(), HeaderMap::new())
            .unwrap();
        assert_eq!(request.url.as_str(), "https://fooshop.myshopify.com/foo/1");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_leading_slash_is_stripped() {
        let request = HttpRequest::builder(HttpMethod::Get, "//admin/shop.json")
            .build(&base(), HeaderMap::new())
            .unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://fooshop.myshopify.com/admin/shop.json"
        );
    }

    #[test]
    fn test_absolute_url_is_used_as_is() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://other.example.com/x.json")
            .build(&base(), HeaderMap::new())
            .unwrap();
        assert_eq!(request.url.as_str(), "https://other.example.com/x.json");
    }

    #[test]
    fn test_relative_path_with_url_in_query_resolves_against_base() {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            "admin/redirects.json?target=http://example.com/x",
        )
        .build(&base(), HeaderMap::new())
        .unwrap();
        assert_eq!(request.url.host_str(), Some("fooshop.myshopify.com"));
        assert_eq!(request.url.path(), "/admin/redirects.json");
        assert_eq!(
            request.url.query_pairs().next(),
            Some(("target".into(), "http://example.com/x".into()))
        );
    }

    #[test]
    fn test_unparsable_absolute_url_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "http://[::1")
            .build(&base(), HeaderMap::new());
        assert!(matches!(
            result,
            Err(InvalidRequestError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_options_follow_existing_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "foo?page=1")
            .options(&Limit { limit: 10 })
            .build(&base(), HeaderMap::new())
            .unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://fooshop.myshopify.com/foo?page=1&limit=10"
        );
    }

    #[test]
    fn test_duplicate_query_keys_are_kept() {
        let request = HttpRequest::builder(HttpMethod::Get, "foo?limit=5")
            .options(&Limit { limit: 10 })
            .build(&base(), HeaderMap::new())
            .unwrap();
        let limits: Vec<_> = request
            .url
            .query_pairs()
            .filter(|(k, _)| k == "limit")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(limits, vec!["5", "10"]);
    }

    #[test]
    fn test_empty_options_add_no_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "foo")
            .options(&())
            .build(&base(), HeaderMap::new())
            .unwrap();
        assert_eq!(request.url.query(), None);
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "foo")
            .options(&123)
            .build(&base(), HeaderMap::new());
        assert!(matches!(
            result,
            Err(InvalidRequestError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn test_body_is_encoded_as_json() {
        let request = HttpRequest::builder(HttpMethod::Post, "foo")
            .json_body(&serde_json::json!({"foo": "bar"}))
            .build(&base(), HeaderMap::new())
            .unwrap();
        assert_eq!(request.body_text(), Some(r#"{"foo":"bar"}"#));
    }

    #[test]
    fn test_null_body_sends_nothing() {
        let request = HttpRequest::builder(HttpMethod::Post, "foo")
            .json_body(&())
            .build(&base(), HeaderMap::new())
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_unserializable_body_is_rejected() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], "non-string key");
        let result = HttpRequest::builder(HttpMethod::Post, "foo")
            .json_body(&map)
            .build(&base(), HeaderMap::new());
        assert!(matches!(result, Err(InvalidRequestError::InvalidBody { .. })));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.as_reqwest(), reqwest::Method::DELETE);
    }
}

//! Error types for the request/response transport.
//!
//! # Error Handling
//!
//! Every client operation returns [`ClientError`]:
//!
//! - [`ResponseError`]: a non-2xx response, normalized from whichever error
//!   shape the API returned
//! - [`RateLimitError`]: a 429 response, carrying the `Retry-After` delay
//! - [`ResponseDecodingError`]: a body that could not be read or decoded
//! - [`InvalidRequestError`]: a request rejected before it was sent
//! - [`ConfigError`]: the client could not be constructed
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::ClientError;
//!
//! match client.products().get(632910392, &()).await {
//!     Ok(product) => println!("{:?}", product.title),
//!     Err(ClientError::RateLimit(e)) => {
//!         println!("Slow down, retry in {}s", e.retry_after);
//!     }
//!     Err(ClientError::Response(e)) => {
//!         println!("API error {}: {}", e.status, e);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::error::ConfigError;

/// A non-successful response, normalized into a single error model.
///
/// # Rendering
///
/// `Display` shows the message when one is set. Otherwise the sub-errors
/// are sorted and joined with `", "`, and when there are none the error
/// renders as `Unknown Error`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ResponseError;
///
/// let error = ResponseError {
///     status: 422,
///     message: None,
///     errors: vec!["b".to_string(), "a".to_string()],
/// };
/// assert_eq!(error.to_string(), "a, b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The human-readable message, if the body carried one.
    pub message: Option<String>,
    /// Sub-errors in the order the body listed them. Field errors are
    /// prefixed with the field name (`title: can't be blank`).
    pub errors: Vec<String>,
}

impl ResponseError {
    /// Creates an error with only a status code.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            message: None,
            errors: Vec::new(),
        }
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            return f.write_str(message);
        }
        if self.errors.is_empty() {
            return f.write_str("Unknown Error");
        }
        let mut sorted: Vec<&str> = self.errors.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        f.write_str(&sorted.join(", "))
    }
}

impl std::error::Error for ResponseError {}

/// A 429 response.
///
/// Rendered exactly like the wrapped [`ResponseError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitError {
    /// The normalized error body.
    pub response: ResponseError,
    /// Whole seconds to wait before retrying, from the `Retry-After` header.
    /// Zero when the header was missing or unparsable.
    pub retry_after: u64,
}

impl RateLimitError {
    /// Returns the retry delay as a [`Duration`].
    #[must_use]
    pub const fn retry_after_duration(&self) -> Duration {
        Duration::from_secs(self.retry_after)
    }
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.response, f)
    }
}

impl std::error::Error for RateLimitError {}

/// What went wrong while decoding a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodingErrorKind {
    /// The body could not be read from the connection.
    BodyRead,
    /// The body was not valid JSON.
    Syntax,
    /// The body was valid JSON but did not have the expected shape.
    Shape,
}

/// A response body that could not be decoded.
///
/// Carries the raw body so callers can inspect what the server sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to decode response body (status {status}): {message}")]
pub struct ResponseDecodingError {
    /// Which stage failed.
    pub kind: DecodingErrorKind,
    /// The raw response body (empty for [`DecodingErrorKind::BodyRead`]).
    pub body: Vec<u8>,
    /// The parser or transport message.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: u16,
}

impl ResponseDecodingError {
    /// Builds a decoding error from a `serde_json` failure.
    ///
    /// Syntax and EOF errors map to [`DecodingErrorKind::Syntax`]; data
    /// errors map to [`DecodingErrorKind::Shape`].
    #[must_use]
    pub fn from_json(error: &serde_json::Error, body: &[u8], status: u16) -> Self {
        let kind = match error.classify() {
            serde_json::error::Category::Data => DecodingErrorKind::Shape,
            serde_json::error::Category::Io
            | serde_json::error::Category::Syntax
            | serde_json::error::Category::Eof => DecodingErrorKind::Syntax,
        };
        Self {
            kind,
            body: body.to_vec(),
            message: error.to_string(),
            status,
        }
    }

    /// Builds a shape error for a body that lacks an expected field.
    #[must_use]
    pub fn missing_field(field: &str, body: &[u8], status: u16) -> Self {
        Self {
            kind: DecodingErrorKind::Shape,
            body: body.to_vec(),
            message: format!("missing field `{field}`"),
            status,
        }
    }

    /// Builds an error for a body that could not be read.
    #[must_use]
    pub fn body_read(error: &reqwest::Error, status: u16) -> Self {
        Self {
            kind: DecodingErrorKind::BodyRead,
            body: Vec::new(),
            message: error.to_string(),
            status,
        }
    }
}

/// A request that was rejected before it reached the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The path could not be turned into a URL.
    #[error("Invalid request path '{path}': {reason}")]
    InvalidPath {
        /// The path that was provided.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// The options could not be encoded as query parameters.
    #[error("Invalid request options: {reason}")]
    InvalidOptions {
        /// Why the options were rejected.
        reason: String,
    },

    /// The body could not be serialized to JSON.
    #[error("Invalid request body: {reason}")]
    InvalidBody {
        /// Why the body was rejected.
        reason: String,
    },

    /// An operation that addresses a resource by id got a resource without one.
    #[error("Cannot {operation} a {resource} without an id.")]
    MissingId {
        /// The envelope name of the resource.
        resource: &'static str,
        /// The operation that needed the id.
        operation: &'static str,
    },
}

/// Unified error type for every client operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// A 429 response.
    ///
    /// A 429 whose body is not JSON (a proxy's HTML page, say) is reported
    /// as [`ClientError::Decoding`] with status 429 instead, and its
    /// `Retry-After` is not kept.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// A body that could not be read or decoded.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// A request rejected before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// The client could not be constructed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::RateLimit(e) => Some(e.response.status),
            Self::Decoding(e) => Some(e.status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Config(_) => None,
        }
    }
}

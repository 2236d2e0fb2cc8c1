//! The request/response transport.
//!
//! # Overview
//!
//! - [`Client`]: sends requests for one shop and decodes the responses
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: request construction
//! - [`RawResponse`]: a successful response with its body read
//! - [`ClientError`]: every way a call can fail
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{Client, HttpMethod, HttpRequest};
//!
//! #[derive(serde::Serialize)]
//! struct Options {
//!     limit: u32,
//! }
//!
//! let builder = HttpRequest::builder(HttpMethod::Get, "admin/products.json")
//!     .options(&Options { limit: 10 });
//! let request = client.new_request(builder)?;
//! let body: serde_json::Value = client.execute(request).await?;
//! ```
//!
//! # Errors
//!
//! Non-2xx bodies are normalized into [`ResponseError`] whatever shape the
//! API used. A 429 becomes a [`RateLimitError`] carrying the `Retry-After`
//! delay; the client never retries on its own.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod normalize;
mod query;

pub use errors::{
    ClientError, DecodingErrorKind, InvalidRequestError, RateLimitError, ResponseDecodingError,
    ResponseError,
};
pub use http_client::{Client, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, RawResponse};
pub use normalize::NOT_ACCEPTABLE;
pub use query::serialize_to_query;

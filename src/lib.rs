//! # Shopify REST Admin API client
//!
//! A typed client for the Shopify REST admin API: configuration, a shared
//! async transport that normalizes every error shape the API returns, and
//! CRUD services for the admin resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for credentials and the shop domain
//! - An async [`Client`] that builds requests, attaches auth headers and
//!   decodes responses
//! - Typed errors for HTTP failures, rate limiting and undecodable bodies
//! - Resource services reached through accessors such as
//!   [`Client::products`] and [`Client::orders`]
//! - OAuth helpers in [`auth::oauth`] and webhook verification in [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{ApiKey, ApiSecretKey, Client, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let shop = ShopDomain::new("my-store").unwrap();
//! let client = Client::new(&config, &shop, Some("shpat_access_token")).unwrap();
//! assert_eq!(client.base_url().as_str(), "https://my-store.myshopify.com/");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use shopify_rest::rest::ListOptions;
//! use shopify_rest::rest::resources::Product;
//!
//! let products = client
//!     .products()
//!     .list(&ListOptions { limit: Some(10), ..Default::default() })
//!     .await?;
//!
//! let draft = Product {
//!     title: Some("Burton Custom Freestyle 151".to_string()),
//!     ..Default::default()
//! };
//! let created = client.products().create(&draft).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`ClientError`]. Non-2xx responses become
//! [`ResponseError`], or [`RateLimitError`] for 429 with the parsed
//! `Retry-After`:
//!
//! ```rust,ignore
//! use shopify_rest::ClientError;
//!
//! match client.orders().get(450789469, &()).await {
//!     Ok(order) => println!("{:?}", order.name),
//!     Err(ClientError::RateLimit(e)) => tokio::time::sleep(e.retry_after_duration()).await,
//!     Err(ClientError::Response(e)) if e.status == 404 => println!("no such order"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! The library never retries and never logs errors; it emits `tracing`
//! debug events for each request and a warning when Shopify marks a call
//! as deprecated.
//!
//! ## Thread Safety
//!
//! [`Client`] and the configuration types are `Send + Sync`. One client can
//! serve concurrent calls from many tasks.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

pub use config::{
    ApiKey, ApiSecretKey, AppPassword, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    serialize_to_query, ApiCallLimit, Client, ClientError, DecodingErrorKind, HttpMethod,
    HttpRequest, HttpRequestBuilder, InvalidRequestError, RateLimitError, RawResponse,
    ResponseDecodingError, ResponseError,
};

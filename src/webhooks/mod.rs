//! Verification of incoming webhook requests.
//!
//! Shopify signs each webhook body with the app's secret key. Verify the
//! raw body before trusting its contents:
//!
//! ```rust,ignore
//! use shopify_rest::webhooks::verify_webhook;
//!
//! if !verify_webhook(&config, &body_bytes, request.headers()) {
//!     return StatusCode::UNAUTHORIZED;
//! }
//! ```
//!
//! Webhook subscriptions themselves are managed through
//! [`Client::webhooks`](crate::Client::webhooks).

mod verification;

pub use verification::{
    verify_hmac, verify_webhook, HEADER_HMAC, HEADER_SHOP_DOMAIN, HEADER_TOPIC,
};

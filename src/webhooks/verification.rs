//! Webhook signature verification.

use reqwest::header::HeaderMap;

use crate::auth::oauth::hmac::{compute_signature_base64, constant_time_compare};
use crate::config::ShopifyConfig;

/// Header carrying the base64 HMAC-SHA256 of the webhook body.
pub const HEADER_HMAC: &str = "X-Shopify-Hmac-Sha256";

/// Header naming the webhook topic (`orders/create`, ...).
pub const HEADER_TOPIC: &str = "X-Shopify-Topic";

/// Header carrying the sending shop's domain.
pub const HEADER_SHOP_DOMAIN: &str = "X-Shopify-Shop-Domain";

/// Checks `hmac` against the base64 HMAC-SHA256 of `body` under `secret`.
///
/// `body` must be the raw request bytes, before any JSON parsing.
///
/// ```rust
/// use shopify_rest::auth::oauth::hmac::compute_signature_base64;
/// use shopify_rest::webhooks::verify_hmac;
///
/// let body = br#"{"id":450789469}"#;
/// let hmac = compute_signature_base64(body, "hush");
/// assert!(verify_hmac(body, &hmac, "hush"));
/// assert!(!verify_hmac(body, &hmac, "other"));
/// ```
#[must_use]
pub fn verify_hmac(body: &[u8], hmac: &str, secret: &str) -> bool {
    let computed = compute_signature_base64(body, secret);
    constant_time_compare(&computed, hmac.trim())
}

/// Verifies a webhook request using the app's secret key.
///
/// Returns `false` when the [`HEADER_HMAC`] header is missing or not text.
#[must_use]
pub fn verify_webhook(config: &ShopifyConfig, body: &[u8], headers: &HeaderMap) -> bool {
    headers
        .get(HEADER_HMAC)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|hmac| verify_hmac(body, hmac, config.api_secret_key().as_ref()))
}

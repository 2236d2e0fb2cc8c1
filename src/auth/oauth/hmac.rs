//! HMAC-SHA256 signatures for OAuth callbacks and webhooks.
//!
//! OAuth callbacks carry a lowercase hex signature; webhooks carry a
//! base64 signature of the raw request body. Comparisons are constant time.
//!
//! ```rust
//! use shopify_rest::auth::oauth::hmac::{compute_signature, compute_signature_base64};
//!
//! let hex = compute_signature("code=abc&shop=fooshop.myshopify.com", "hush");
//! assert_eq!(hex.len(), 64);
//!
//! let b64 = compute_signature_base64(b"{\"id\":1}", "hush");
//! assert_eq!(b64.len(), 44);
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use reqwest::Url;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::ShopifyConfig;

type HmacSha256 = Hmac<Sha256>;

/// Query parameters excluded from the signed message.
const UNSIGNED_PARAMS: [&str; 2] = ["hmac", "signature"];

fn digest(message: &[u8], secret: &str) -> impl AsRef<[u8]> {
    #[allow(clippy::expect_used)] // HMAC accepts keys of any length
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes()
}

/// Returns the lowercase hex HMAC-SHA256 of `message`.
#[must_use]
pub fn compute_signature(message: &str, secret: &str) -> String {
    hex::encode(digest(message.as_bytes(), secret))
}

/// Returns the base64 HMAC-SHA256 of `message`, as sent in webhook headers.
#[must_use]
pub fn compute_signature_base64(message: &[u8], secret: &str) -> String {
    STANDARD.encode(digest(message, secret))
}

/// Compares two strings in constant time.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Checks a hex signature of `message` against the app's secret key.
///
/// Hex digits are accepted in either case.
#[must_use]
pub fn verify_message(config: &ShopifyConfig, message: &str, hex_mac: &str) -> bool {
    let computed = compute_signature(message, config.api_secret_key().as_ref());
    constant_time_compare(&computed, &hex_mac.to_ascii_lowercase())
}

/// Verifies the signature on an OAuth callback URL.
///
/// The signed message is every query parameter except `hmac` and
/// `signature`, decoded, sorted by key and joined as `k=v` pairs with `&`.
/// Returns `false` for an unparsable URL or a missing `hmac`.
///
/// ```rust
/// use shopify_rest::{ApiKey, ApiSecretKey, ShopifyConfig};
/// use shopify_rest::auth::oauth::hmac::{compute_signature, verify_authorization_url};
///
/// let config = ShopifyConfig::builder()
///     .api_key(ApiKey::new("apikey").unwrap())
///     .api_secret_key(ApiSecretKey::new("hush").unwrap())
///     .build()
///     .unwrap();
///
/// let mac = compute_signature("code=abc&shop=fooshop.myshopify.com", "hush");
/// let url = format!("https://app.example.com/callback?shop=fooshop.myshopify.com&code=abc&hmac={mac}");
/// assert!(verify_authorization_url(&config, &url));
/// ```
#[must_use]
pub fn verify_authorization_url(config: &ShopifyConfig, url: &str) -> bool {
    let Ok(url) = Url::parse(url) else {
        return false;
    };

    let mut hmac = None;
    let mut signed: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        if key == "hmac" {
            hmac = Some(value.into_owned());
        } else if !UNSIGNED_PARAMS.contains(&key.as_ref()) {
            signed.push((key.into_owned(), value.into_owned()));
        }
    }

    let Some(hmac) = hmac else {
        return false;
    };

    signed.sort_by(|a, b| a.0.cmp(&b.0));
    let message = signed
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    verify_message(config, &message, &hmac)
}

mod hex {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut out = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            out.push(char::from(DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(DIGITS[usize::from(byte & 0x0f)]));
        }
        out
    }
}

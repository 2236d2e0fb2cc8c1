//! The first leg of the OAuth authorization code flow.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::{ShopDomain, ShopifyConfig};

const NONCE_LENGTH: usize = 15;

/// Returns the URL to send the merchant to for app installation.
///
/// `https://{shop}/admin/oauth/authorize?client_id=..&redirect_uri=..&scope=..&state=..`,
/// with the redirect URL and scope taken from `config`. Parameters missing
/// from the configuration are sent empty.
///
/// ```rust
/// use shopify_rest::{ApiKey, ApiSecretKey, ShopDomain, ShopifyConfig};
/// use shopify_rest::auth::oauth::authorize_url;
///
/// let config = ShopifyConfig::builder()
///     .api_key(ApiKey::new("apikey").unwrap())
///     .api_secret_key(ApiSecretKey::new("hush").unwrap())
///     .redirect_url("https://example.com/callback")
///     .scope("read_products")
///     .build()
///     .unwrap();
/// let shop = ShopDomain::new("fooshop").unwrap();
///
/// assert_eq!(
///     authorize_url(&config, &shop, "thenonce"),
///     "https://fooshop.myshopify.com/admin/oauth/authorize?client_id=apikey&redirect_uri=https%3A%2F%2Fexample.com%2Fcallback&scope=read_products&state=thenonce"
/// );
/// ```
#[must_use]
pub fn authorize_url(config: &ShopifyConfig, shop: &ShopDomain, state: &str) -> String {
    let params = [
        ("client_id", config.api_key().as_ref()),
        ("redirect_uri", config.redirect_url().unwrap_or_default()),
        ("scope", config.scope().unwrap_or_default()),
        ("state", state),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}/admin/oauth/authorize?{query}", shop.base_url())
}

/// Returns a random alphanumeric nonce for the OAuth `state` parameter.
#[must_use]
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

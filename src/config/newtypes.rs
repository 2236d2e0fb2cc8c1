//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a value that
//! exists is a value the client can use.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopify API key.
///
/// Doubles as the basic-auth username for private apps.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Shopify API secret key.
///
/// The secret signs OAuth callbacks and webhook payloads. `Debug` output is
/// masked so the value never lands in logs.
///
/// ```rust
/// use shopify_rest::ApiSecretKey;
///
/// let secret = ApiSecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecretKey(String);

impl ApiSecretKey {
    /// Creates a new validated API secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiSecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiSecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecretKey(*****)")
    }
}

/// A private app password, sent as the basic-auth password.
///
/// Masked in `Debug` output like [`ApiSecretKey`].
#[derive(Clone, PartialEq, Eq)]
pub struct AppPassword(String);

impl AppPassword {
    /// Creates a new validated app password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for AppPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppPassword(*****)")
    }
}

/// A normalized Shopify shop domain.
///
/// Surrounding whitespace and stray periods are trimmed and the name is
/// lowercased. The `.myshopify.com` suffix is appended unless the name
/// already contains `myshopify.com`. Normalizing an already normalized
/// domain yields the same domain.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let domain = ShopDomain::new(" my-store. ").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// assert_eq!(domain.base_url(), "https://my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const MARKER: &'static str = "myshopify.com";
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a normalized shop domain from a shop name or full domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if nothing is left after
    /// trimming, if the name holds characters other than ASCII letters,
    /// digits, `-` and `.`, or if no shop name precedes the suffix.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let original = domain.into();
        let trimmed = original.trim().trim_matches('.').to_lowercase();

        if trimmed.is_empty() || !Self::is_valid_host_text(&trimmed) {
            return Err(ConfigError::InvalidShopDomain { domain: original });
        }

        let full_domain = if trimmed.contains(Self::MARKER) {
            trimmed
        } else {
            format!("{trimmed}{}", Self::SUFFIX)
        };

        match full_domain.find(Self::SUFFIX) {
            Some(end) if end > 0 => Ok(Self {
                full_domain,
                shop_name_end: end,
            }),
            _ => Err(ConfigError::InvalidShopDomain { domain: original }),
        }
    }

    /// Returns the shop name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    /// Returns the HTTPS base URL of the shop's admin API.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.full_domain)
    }

    fn is_valid_host_text(name: &str) -> bool {
        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated host URL that replaces the shop's base URL.
///
/// Used to route requests through a proxy or at a local test server.
///
/// # Example
///
/// ```rust
/// use shopify_rest::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(Url);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL does not parse or
    /// has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let parsed = Url::parse(raw.trim())
            .map_err(|_| ConfigError::InvalidHostUrl { url: raw.clone() })?;

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::InvalidHostUrl { url: raw });
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

//! Configuration types for the REST client.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: app credentials and client settings
//! - [`ShopifyConfigBuilder`]: a builder for [`ShopifyConfig`]
//! - [`ApiKey`], [`ApiSecretKey`], [`AppPassword`]: validated credentials
//! - [`ShopDomain`]: a normalized shop domain
//! - [`HostUrl`]: an optional base URL override
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ShopifyConfig, ApiKey, ApiSecretKey, AppPassword};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
//!     .password(AppPassword::new("private-app-password").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.password().is_some());
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecretKey, AppPassword, HostUrl, ShopDomain};

use crate::error::ConfigError;

/// Application credentials and client settings.
///
/// One configuration can be shared by clients for many shops; it is
/// immutable once built.
///
/// # Thread Safety
///
/// `ShopifyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
    password: Option<AppPassword>,
    redirect_url: Option<String>,
    scope: Option<String>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret key.
    #[must_use]
    pub const fn api_secret_key(&self) -> &ApiSecretKey {
        &self.api_secret_key
    }

    /// Returns the private app password, if configured.
    ///
    /// When set and no access token is given to the client, requests use
    /// HTTP Basic authentication.
    #[must_use]
    pub const fn password(&self) -> Option<&AppPassword> {
        self.password.as_ref()
    }

    /// Returns the OAuth redirect URL, if configured.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    /// Returns the OAuth scope string, if configured.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    password: Option<AppPassword>,
    redirect_url: Option<String>,
    scope: Option<String>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key (required).
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the private app password used for basic authentication.
    #[must_use]
    pub fn password(mut self, password: AppPassword) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the OAuth redirect URL.
    #[must_use]
    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Sets the OAuth scope string (e.g., `read_products,write_orders`).
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Routes every request to this URL instead of the shop's domain.
    ///
    /// The shop domain is still sent in the `Host` header.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret_key` are not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret_key = self
            .api_secret_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret_key",
            })?;

        Ok(ShopifyConfig {
            api_key,
            api_secret_key,
            password: self.password,
            redirect_url: self.redirect_url,
            scope: self.scope,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

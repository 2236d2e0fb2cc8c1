//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or shop names are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Shopify API key.")]
    EmptyApiKey,

    /// API secret key cannot be empty.
    #[error("API secret key cannot be empty. Please provide a valid Shopify API secret key.")]
    EmptyApiSecretKey,

    /// App password cannot be empty.
    #[error("App password cannot be empty. Omit it to disable basic authentication.")]
    EmptyPassword,

    /// Shop name is empty or contains characters a host name cannot hold.
    #[error("Invalid shop name '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The shop name that was provided.
        domain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The URL that was provided.
        url: String,
    },

    /// A credential or prefix cannot be sent as an HTTP header value.
    #[error("Value for header '{header}' contains characters that are not allowed in HTTP headers.")]
    InvalidHeaderValue {
        /// The header that could not be built.
        header: &'static str,
    },
}

//! OAuth helpers for public apps.
//!
//! The flow:
//!
//! 1. Redirect the merchant to [`authorize_url`] with a nonce from
//!    [`generate_nonce`] as `state`.
//! 2. On the callback, check the signature with
//!    [`verify_authorization_url`] and compare `state` with the nonce.
//! 3. Trade the callback `code` for a token with [`get_access_token`].
//!
//! ```rust,ignore
//! use shopify_rest::auth::oauth::{authorize_url, generate_nonce, get_access_token, verify_authorization_url};
//!
//! let nonce = generate_nonce();
//! let redirect_to = authorize_url(&config, &shop, &nonce);
//!
//! // ... later, in the callback handler
//! if verify_authorization_url(&config, &callback_url) {
//!     let token = get_access_token(&config, &shop, &code).await?;
//!     let client = Client::new(&config, &shop, Some(&token))?;
//! }
//! ```

mod authorize;
pub mod hmac;
mod token;

pub use authorize::{authorize_url, generate_nonce};
pub use hmac::{verify_authorization_url, verify_message};
pub use token::{get_access_token, request_access_token};

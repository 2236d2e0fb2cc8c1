//! Authentication helpers.
//!
//! Apps authenticate either with an OAuth access token obtained through
//! [`oauth`], or, for private apps, with the app password set on
//! [`ShopifyConfig`](crate::ShopifyConfig). Both end up as headers on
//! [`Client`](crate::Client).

pub mod oauth;

//! Path building for REST resources.
//!
//! Every resource lives under a prefix such as `admin/products` or
//! `admin/orders/450789469/fulfillments`. Operations append a fixed
//! suffix to it:
//!
//! | Operation | Path |
//! |---|---|
//! | list, create | `{prefix}.json` |
//! | count | `{prefix}/count.json` |
//! | get, update, delete | `{prefix}/{id}.json` |
//! | actions | `{prefix}/{id}/{action}.json` |
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::path;
//!
//! let prefix = path::nested_prefix("orders", 450789469, "fulfillments");
//! assert_eq!(prefix, "admin/orders/450789469/fulfillments");
//! assert_eq!(path::member(&prefix, 255858046), "admin/orders/450789469/fulfillments/255858046.json");
//! assert_eq!(path::action(&prefix, 255858046, "complete"), "admin/orders/450789469/fulfillments/255858046/complete.json");
//! ```

use std::fmt::Display;

/// Root of every admin path.
pub const ADMIN: &str = "admin";

/// Returns `admin/{resource}`.
#[must_use]
pub fn prefix(resource: &str) -> String {
    format!("{ADMIN}/{resource}")
}

/// Returns `admin/{parent}/{parent_id}/{child}`.
#[must_use]
pub fn nested_prefix(parent: &str, parent_id: impl Display, child: &str) -> String {
    format!("{ADMIN}/{parent}/{parent_id}/{child}")
}

/// Returns `{prefix}.json`.
#[must_use]
pub fn collection(prefix: &str) -> String {
    format!("{prefix}.json")
}

/// Returns `{prefix}/count.json`.
#[must_use]
pub fn count(prefix: &str) -> String {
    format!("{prefix}/count.json")
}

/// Returns `{prefix}/{id}.json`.
#[must_use]
pub fn member(prefix: &str, id: impl Display) -> String {
    format!("{prefix}/{id}.json")
}

/// Returns `{prefix}/{id}/{action}.json`.
#[must_use]
pub fn action(prefix: &str, id: impl Display, action: &str) -> String {
    format!("{prefix}/{id}/{action}.json")
}

//! Typed access to the REST admin API.
//!
//! Every resource is reached through an accessor on [`Client`]:
//!
//! ```rust,ignore
//! use shopify_rest::rest::ListOptions;
//!
//! let products = client.products().list(&ListOptions::default()).await?;
//! let transactions = client.transactions(450789469).list(&()).await?;
//! let shop = client.shop().get(&()).await?;
//! ```
//!
//! Options may be any `Serialize` value that encodes to a flat object:
//! the option structs in this module and in [`resources`], a
//! `HashMap<&str, &str>`, or `&()` for none.

mod envelope;
mod options;
pub mod path;
mod resource;

pub mod resources;

pub use envelope::Envelope;
pub use options::{CountOptions, ListOptions};
pub use resource::{ResourceService, RestResource};

use crate::clients::Client;
use resources::{
    ApplicationCharge, AssetService, Blog, CheckoutService, CustomCollection, Customer,
    Fulfillment, Image, Metafield, Order, Page, Product, RecurringApplicationCharge, Redirect,
    ScriptTag, ShopService, SmartCollection, Theme, Transaction, VariantService, Webhook,
};

impl Client {
    /// `admin/products`
    #[must_use]
    pub fn products(&self) -> ResourceService<'_, Product> {
        ResourceService::new(self, path::prefix("products"))
    }

    /// Variants, under their product or by id.
    #[must_use]
    pub fn variants(&self) -> VariantService<'_> {
        VariantService::new(self)
    }

    /// `admin/products/{product_id}/images`
    #[must_use]
    pub fn images(&self, product_id: u64) -> ResourceService<'_, Image> {
        ResourceService::new(self, path::nested_prefix("products", product_id, "images"))
    }

    /// `admin/custom_collections`
    #[must_use]
    pub fn custom_collections(&self) -> ResourceService<'_, CustomCollection> {
        ResourceService::new(self, path::prefix("custom_collections"))
    }

    /// `admin/smart_collections`
    #[must_use]
    pub fn smart_collections(&self) -> ResourceService<'_, SmartCollection> {
        ResourceService::new(self, path::prefix("smart_collections"))
    }

    /// `admin/customers`
    #[must_use]
    pub fn customers(&self) -> ResourceService<'_, Customer> {
        ResourceService::new(self, path::prefix("customers"))
    }

    /// `admin/orders`
    #[must_use]
    pub fn orders(&self) -> ResourceService<'_, Order> {
        ResourceService::new(self, path::prefix("orders"))
    }

    /// `admin/orders/{order_id}/transactions`
    #[must_use]
    pub fn transactions(&self, order_id: u64) -> ResourceService<'_, Transaction> {
        ResourceService::new(self, path::nested_prefix("orders", order_id, "transactions"))
    }

    /// `admin/orders/{order_id}/fulfillments`
    #[must_use]
    pub fn fulfillments(&self, order_id: u64) -> ResourceService<'_, Fulfillment> {
        ResourceService::new(self, path::nested_prefix("orders", order_id, "fulfillments"))
    }

    /// The shop singleton.
    #[must_use]
    pub const fn shop(&self) -> ShopService<'_> {
        ShopService::new(self)
    }

    /// `admin/webhooks`
    #[must_use]
    pub fn webhooks(&self) -> ResourceService<'_, Webhook> {
        ResourceService::new(self, path::prefix("webhooks"))
    }

    /// Shop-level metafields, `admin/metafields`.
    #[must_use]
    pub fn metafields(&self) -> ResourceService<'_, Metafield> {
        ResourceService::new(self, path::prefix("metafields"))
    }

    /// Metafields of any owning resource, `admin/{owner}/{owner_id}/metafields`.
    ///
    /// `owner` is the plural path segment: `products`, `customers`,
    /// `blogs`, ...
    #[must_use]
    pub fn metafields_for(&self, owner: &str, owner_id: u64) -> ResourceService<'_, Metafield> {
        ResourceService::new(self, path::nested_prefix(owner, owner_id, "metafields"))
    }

    /// `admin/themes`
    #[must_use]
    pub fn themes(&self) -> ResourceService<'_, Theme> {
        ResourceService::new(self, path::prefix("themes"))
    }

    /// Theme assets, keyed by theme id and asset key.
    #[must_use]
    pub const fn assets(&self) -> AssetService<'_> {
        AssetService::new(self)
    }

    /// `admin/script_tags`
    #[must_use]
    pub fn script_tags(&self) -> ResourceService<'_, ScriptTag> {
        ResourceService::new(self, path::prefix("script_tags"))
    }

    /// `admin/pages`
    #[must_use]
    pub fn pages(&self) -> ResourceService<'_, Page> {
        ResourceService::new(self, path::prefix("pages"))
    }

    /// `admin/blogs`
    #[must_use]
    pub fn blogs(&self) -> ResourceService<'_, Blog> {
        ResourceService::new(self, path::prefix("blogs"))
    }

    /// `admin/redirects`
    #[must_use]
    pub fn redirects(&self) -> ResourceService<'_, Redirect> {
        ResourceService::new(self, path::prefix("redirects"))
    }

    /// `admin/application_charges`
    #[must_use]
    pub fn application_charges(&self) -> ResourceService<'_, ApplicationCharge> {
        ResourceService::new(self, path::prefix("application_charges"))
    }

    /// `admin/recurring_application_charges`
    #[must_use]
    pub fn recurring_application_charges(
        &self,
    ) -> ResourceService<'_, RecurringApplicationCharge> {
        ResourceService::new(self, path::prefix("recurring_application_charges"))
    }

    /// Checkouts, keyed by token.
    #[must_use]
    pub const fn checkouts(&self) -> CheckoutService<'_> {
        CheckoutService::new(self)
    }
}

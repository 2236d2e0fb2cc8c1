//! REST admin resources.
//!
//! Most resources go through the generic [`ResourceService`](crate::rest::ResourceService)
//! and add their own operations as inherent methods on it:
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Fulfillment;
//!
//! let fulfillments = client.fulfillments(450789469);
//! let shipped = fulfillments.complete(255858046).await?;
//! ```
//!
//! Resources whose paths do not fit `{prefix}/{id}.json` have their own
//! services: [`VariantService`], [`ShopService`], [`AssetService`] and
//! [`CheckoutService`].

pub mod common;

mod application_charge;
mod asset;
mod blog;
mod checkout;
mod custom_collection;
mod customer;
mod fulfillment;
mod image;
mod metafield;
mod order;
mod page;
mod product;
mod recurring_application_charge;
mod redirect;
mod script_tag;
mod shop;
mod smart_collection;
mod theme;
mod transaction;
mod variant;
mod webhook;

pub use application_charge::ApplicationCharge;
pub use asset::{Asset, AssetService};
pub use blog::Blog;
pub use checkout::{Checkout, CheckoutLineItem, CheckoutService};
pub use common::{
    Address, CustomerAddress, DiscountCode, LineItem, LineItemProperty, NoteAttribute,
    ShippingLine, TaxLine,
};
pub use custom_collection::CustomCollection;
pub use customer::{Customer, CustomerSearchOptions};
pub use fulfillment::{Fulfillment, Receipt};
pub use image::Image;
pub use metafield::Metafield;
pub use order::{Order, OrderListOptions};
pub use page::Page;
pub use product::{Product, ProductOption};
pub use recurring_application_charge::RecurringApplicationCharge;
pub use redirect::Redirect;
pub use script_tag::{ScriptTag, ScriptTagOptions};
pub use shop::{Shop, ShopService};
pub use smart_collection::{SmartCollection, SmartCollectionRule};
pub use theme::{Theme, ThemeListOptions};
pub use transaction::{PaymentDetails, Transaction};
pub use variant::{Variant, VariantService};
pub use webhook::{Webhook, WebhookOptions};

//! Types embedded in several resources.
//!
//! These are not resources themselves; they appear nested inside orders,
//! customers, checkouts and fulfillments.

mod address;
pub mod fields;
mod line_item;

pub use address::{Address, CustomerAddress};
pub use line_item::{DiscountCode, LineItem, LineItemProperty, NoteAttribute, ShippingLine, TaxLine};

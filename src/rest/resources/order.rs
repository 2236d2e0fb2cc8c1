//! Order resource, `admin/orders`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::OrderListOptions;
//!
//! let open_paid = client
//!     .orders()
//!     .list(&OrderListOptions {
//!         status: Some("open".to_string()),
//!         financial_status: Some("paid".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::fields::decimal_string;
use super::common::{Address, DiscountCode, LineItem, NoteAttribute, ShippingLine, TaxLine};
use super::customer::Customer;
use super::fulfillment::Fulfillment;
use super::transaction::Transaction;
use crate::rest::RestResource;

/// A customer's completed purchase.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `created_at`, `updated_at`, `closed_at`, `cancelled_at`
/// - `number`, `order_number`, `token`, `cart_token`, `app_id`
/// - `fulfillments`
///
/// Money fields are decimal strings (`"409.94"`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name such as `#1001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<String>,

    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub subtotal_price: Option<String>,

    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_discounts: Option<String>,

    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_line_items_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_tax: Option<String>,

    /// Total weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    #[serde(skip_serializing)]
    pub token: Option<String>,

    #[serde(skip_serializing)]
    pub cart_token: Option<String>,

    #[serde(skip_serializing)]
    pub number: Option<u64>,

    #[serde(skip_serializing)]
    pub order_number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,

    /// `customer`, `fraud`, `inventory`, `declined` or `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,

    #[serde(skip_serializing)]
    pub app_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_site: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing)]
    pub fulfillments: Option<Vec<Fulfillment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    /// Only honoured on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
}

impl RestResource for Order {
    const NAME: &'static str = "order";
    const PLURAL: &'static str = "orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting orders.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OrderListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    /// `open`, `closed`, `cancelled` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

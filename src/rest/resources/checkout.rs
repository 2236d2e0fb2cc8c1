//! Checkout resource, `admin/checkouts`.
//!
//! Checkouts are identified by a string token instead of a numeric id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::fields::decimal_string;
use super::common::{Address, DiscountCode, LineItemProperty, TaxLine};
use super::order::Order;
use crate::clients::{Client, ClientError, HttpMethod, HttpRequest};
use crate::rest::{path, Envelope};

/// A cart on its way to becoming an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Checkout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,
    #[serde(skip_serializing)]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing)]
    pub reservation_time: Option<u64>,
    #[serde(skip_serializing)]
    pub reservation_time_left: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing)]
    pub taxes_included: Option<bool>,
    #[serde(default, deserialize_with = "decimal_string::deserialize", skip_serializing)]
    pub payment_due: Option<String>,
    #[serde(skip_serializing)]
    pub payment_url: Option<String>,
    #[serde(default, deserialize_with = "decimal_string::deserialize", skip_serializing)]
    pub subtotal_price: Option<String>,
    #[serde(default, deserialize_with = "decimal_string::deserialize", skip_serializing)]
    pub total_price: Option<String>,
    #[serde(default, deserialize_with = "decimal_string::deserialize", skip_serializing)]
    pub total_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The order created when the checkout completed.
    #[serde(skip_serializing)]
    pub order: Option<Order>,
    #[serde(skip_serializing)]
    pub privacy_policy_url: Option<String>,
    #[serde(skip_serializing)]
    pub refund_policy_url: Option<String>,
    #[serde(skip_serializing)]
    pub terms_of_service_url: Option<String>,
    #[serde(skip_serializing)]
    pub user_id: Option<u64>,
    #[serde(skip_serializing)]
    pub web_url: Option<String>,
    #[serde(skip_serializing)]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<CheckoutLineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_cards: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_rate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountCode>,
}

/// A line in a checkout. Its `id` is an opaque string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CheckoutLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_at_price: Option<String>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<LineItemProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discounts: Option<Vec<Value>>,
}

/// Checkout operations, keyed by token.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutService<'c> {
    client: &'c Client,
}

impl<'c> CheckoutService<'c> {
    const NAME: &'static str = "checkout";

    /// Creates a checkout service.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Fetches a checkout. `GET admin/checkouts/{token}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the `checkout` envelope.
    pub async fn get<O: Serialize + ?Sized>(
        &self,
        token: &str,
        options: &O,
    ) -> Result<Checkout, ClientError> {
        let builder = HttpRequest::builder(
            HttpMethod::Get,
            path::member(&path::prefix("checkouts"), token),
        )
        .options(options);
        self.client.send(builder).await?.json_field(Self::NAME)
    }

    /// Creates a checkout. `POST admin/checkouts.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the `checkout` envelope.
    pub async fn create(&self, checkout: &Checkout) -> Result<Checkout, ClientError> {
        let builder =
            HttpRequest::builder(HttpMethod::Post, path::collection(&path::prefix("checkouts")))
                .json_body(&Envelope::new(Self::NAME, checkout));
        self.client.send(builder).await?.json_field(Self::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_totals_are_read_only() {
        let checkout: Checkout = serde_json::from_str(
            r#"{
                "token": "b490a9220cd14d7344024f4874f640a6",
                "email": "me@example.com",
                "total_price": "398.00",
                "payment_due": 398.0,
                "line_items": [{"id": "39072856", "variant_id": 39072856, "quantity": 2, "price": "199.00"}]
            }"#,
        )
        .unwrap();
        assert_eq!(checkout.payment_due.as_deref(), Some("398.0"));
        assert_eq!(
            checkout.line_items.as_ref().unwrap()[0].id.as_deref(),
            Some("39072856")
        );

        let json = serde_json::to_value(&checkout).unwrap();
        assert!(json.get("total_price").is_none());
        assert!(json.get("payment_due").is_none());
        assert_eq!(json["token"], "b490a9220cd14d7344024f4874f640a6");
    }
}

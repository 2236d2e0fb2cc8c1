//! Shop resource, a singleton at `admin/shop.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, ClientError, HttpMethod, HttpRequest};
use crate::rest::path;

/// The shop's settings. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shop {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub shop_owner: Option<String>,
    pub email: Option<String>,
    pub customer_email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub currency: Option<String>,
    pub domain: Option<String>,
    pub myshopify_domain: Option<String>,
    pub money_format: Option<String>,
    pub money_with_currency_format: Option<String>,
    pub money_in_emails_format: Option<String>,
    pub money_with_currency_in_emails_format: Option<String>,
    pub weight_unit: Option<String>,
    pub plan_name: Option<String>,
    pub plan_display_name: Option<String>,
    pub password_enabled: Option<bool>,
    pub primary_locale: Option<String>,
    pub timezone: Option<String>,
    pub iana_timezone: Option<String>,
    pub force_ssl: Option<bool>,
    pub tax_shipping: Option<bool>,
    pub taxes_included: Option<bool>,
    pub has_storefront: Option<bool>,
    pub has_discounts: Option<bool>,
    pub has_gift_cards: Option<bool>,
    pub setup_required: Option<bool>,
    pub county_taxes: Option<bool>,
    pub checkout_api_supported: Option<bool>,
}

/// Access to the shop singleton.
#[derive(Debug, Clone, Copy)]
pub struct ShopService<'c> {
    client: &'c Client,
}

impl<'c> ShopService<'c> {
    /// Creates a shop service.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Fetches the shop. `GET admin/shop.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the `shop` envelope.
    pub async fn get<O: Serialize + ?Sized>(&self, options: &O) -> Result<Shop, ClientError> {
        let builder = HttpRequest::builder(HttpMethod::Get, path::collection(&path::prefix("shop")))
            .options(options);
        self.client.send(builder).await?.json_field("shop")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_deserializes_sparse_payload() {
        let shop: Shop = serde_json::from_str(
            r#"{"id":690933842,"name":"Apple Computers","myshopify_domain":"apple.myshopify.com","latitude":45.45,"has_storefront":true,"unknown_field":1}"#,
        )
        .unwrap();
        assert_eq!(shop.id, Some(690933842));
        assert_eq!(shop.myshopify_domain.as_deref(), Some("apple.myshopify.com"));
        assert_eq!(shop.has_storefront, Some(true));
        assert!(shop.plan_name.is_none());
    }
}

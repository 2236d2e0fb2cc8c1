//! Customer resource, `admin/customers`.
//!
//! Besides the generic CRUD operations, customers can be searched with a
//! free-text query:
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::CustomerSearchOptions;
//!
//! let matches = client
//!     .customers()
//!     .search(&CustomerSearchOptions {
//!         query: Some("country:Canada".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::fields::decimal_string;
use super::common::CustomerAddress;
use super::metafield::Metafield;
use crate::clients::{ClientError, HttpMethod, HttpRequest};
use crate::rest::{path, ResourceService, RestResource};

/// A shop customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `disabled`, `invited`, `enabled` or `declined`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipass_identifier: Option<String>,
    #[serde(skip_serializing)]
    pub orders_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(default, deserialize_with = "decimal_string::deserialize", skip_serializing)]
    pub total_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing)]
    pub last_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CustomerAddress>>,
    #[serde(skip_serializing)]
    pub default_address: Option<CustomerAddress>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Customer {
    const NAME: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for [`search`](ResourceService::search).
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CustomerSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Comma-separated field names to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Sort order, e.g. `last_order_date DESC`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Search query, e.g. `email:bob@example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl<'c> ResourceService<'c, Customer> {
    /// Searches customers. `GET admin/customers/search.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the `customers` envelope.
    pub async fn search<O: Serialize + ?Sized>(
        &self,
        options: &O,
    ) -> Result<Vec<Customer>, ClientError> {
        let search = format!("{}/search", self.prefix());
        let builder =
            HttpRequest::builder(HttpMethod::Get, path::collection(&search)).options(options);
        self.client()
            .send(builder)
            .await?
            .json_field(Customer::PLURAL)
    }

    /// Metafields attached to a customer.
    #[must_use]
    pub fn metafields(&self, customer_id: u64) -> ResourceService<'c, Metafield> {
        self.nested(customer_id, "metafields")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_computed_fields_not_serialized() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": 207119551,
                "email": "bob.norman@mail.example.com",
                "orders_count": 1,
                "total_spent": "199.65",
                "last_order_id": 450789469,
                "default_address": {"id": 207119551, "default": true}
            }"#,
        )
        .unwrap();
        assert_eq!(customer.total_spent.as_deref(), Some("199.65"));
        assert_eq!(customer.default_address.as_ref().unwrap().default, Some(true));

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 207119551, "email": "bob.norman@mail.example.com"})
        );
    }

    #[test]
    fn test_search_options_serialize_query() {
        let options = CustomerSearchOptions {
            query: Some("Bob country:United States".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["query"], "Bob country:United States");
        assert_eq!(json["limit"], 10);
        assert!(json.get("page").is_none());
    }
}

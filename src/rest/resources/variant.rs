//! Product variant resource.
//!
//! Variants are listed, counted, created and deleted under their product,
//! but fetched and updated directly by id:
//!
//! | Operation | Path |
//! |---|---|
//! | `list`, `count`, `create` | `admin/products/{product_id}/variants...` |
//! | `get`, `update` | `admin/variants/{id}.json` |
//! | `delete` | `admin/products/{product_id}/variants/{id}.json` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::fields::decimal_string;
use crate::clients::{Client, ClientError};
use crate::rest::{path, ResourceService, RestResource};

/// A purchasable version of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    /// `deny` or `continue`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(skip_serializing)]
    pub old_inventory_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
}

impl RestResource for Variant {
    const NAME: &'static str = "variant";
    const PLURAL: &'static str = "variants";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Variant operations, split between the product-scoped and the
/// top-level variant paths.
#[derive(Debug, Clone)]
pub struct VariantService<'c> {
    client: &'c Client,
    direct: ResourceService<'c, Variant>,
}

impl<'c> VariantService<'c> {
    /// Creates a variant service.
    #[must_use]
    pub fn new(client: &'c Client) -> Self {
        Self {
            client,
            direct: ResourceService::new(client, path::prefix("variants")),
        }
    }

    fn for_product(&self, product_id: u64) -> ResourceService<'c, Variant> {
        ResourceService::new(
            self.client,
            path::nested_prefix("products", product_id, "variants"),
        )
    }

    /// Lists the variants of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn list<O: Serialize + ?Sized>(
        &self,
        product_id: u64,
        options: &O,
    ) -> Result<Vec<Variant>, ClientError> {
        self.for_product(product_id).list(options).await
    }

    /// Counts the variants of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn count<O: Serialize + ?Sized>(
        &self,
        product_id: u64,
        options: &O,
    ) -> Result<u64, ClientError> {
        self.for_product(product_id).count(options).await
    }

    /// Fetches a variant by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn get<O: Serialize + ?Sized>(
        &self,
        variant_id: u64,
        options: &O,
    ) -> Result<Variant, ClientError> {
        self.direct.get(variant_id, options).await
    }

    /// Creates a variant on a product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn create(&self, product_id: u64, variant: &Variant) -> Result<Variant, ClientError> {
        self.for_product(product_id).create(variant).await
    }

    /// Updates a variant.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the variant has no id or the request fails.
    pub async fn update(&self, variant: &Variant) -> Result<Variant, ClientError> {
        self.direct.update(variant).await
    }

    /// Deletes a variant from a product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn delete(&self, product_id: u64, variant_id: u64) -> Result<(), ClientError> {
        self.for_product(product_id).delete(variant_id).await
    }
}

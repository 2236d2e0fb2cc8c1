//! Product resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Product;
//!
//! let product = Product {
//!     title: Some("Burton Custom Freestyle 151".to_string()),
//!     vendor: Some("Burton".to_string()),
//!     product_type: Some("Snowboard".to_string()),
//!     ..Default::default()
//! };
//! let created = client.products().create(&product).await?;
//!
//! let metafields = client.products().metafields(created.id.unwrap()).list(&()).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::Image;
use super::metafield::Metafield;
use super::variant::Variant;
use crate::rest::{ResourceService, RestResource};

/// A product in the shop's catalogue.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `created_at`, `updated_at`
///
/// All other fields are writable. `id` is sent on update so the body
/// matches the path.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description, as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// URL-friendly name, unique per shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// `web` or `global`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,

    /// The featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

impl RestResource for Product {
    const NAME: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// A product option such as size or colour.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl<'c> ResourceService<'c, Product> {
    /// Metafields attached to a product.
    /// `admin/products/{product_id}/metafields`.
    #[must_use]
    pub fn metafields(&self, product_id: u64) -> ResourceService<'c, Metafield> {
        self.nested(product_id, "metafields")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_read_only_fields_not_serialized() {
        let product = Product {
            id: Some(632910392),
            title: Some("IPod Nano - 8GB".to_string()),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            ..Default::default()
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 632910392);
        assert_eq!(json["title"], "IPod Nano - 8GB");
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
        assert!(json.get("vendor").is_none());
    }

    #[test]
    fn test_product_deserializes_nested_collections() {
        let json = r#"{
            "id": 632910392,
            "title": "IPod Nano - 8GB",
            "created_at": "2017-10-11T09:50:11-04:00",
            "options": [{"id": 594680422, "name": "Color", "position": 1, "values": ["Pink", "Red"]}],
            "variants": [{"id": 808950810, "product_id": 632910392, "price": "199.00"}],
            "images": [{"id": 850703190, "src": "https://cdn.shopify.com/ipod-nano.png"}]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id(), Some(632910392));
        assert!(product.created_at.is_some());
        assert_eq!(product.options.unwrap()[0].values.as_ref().unwrap().len(), 2);
        assert_eq!(
            product.variants.unwrap()[0].price.as_deref(),
            Some("199.00")
        );
        assert_eq!(product.images.unwrap()[0].id, Some(850703190));
    }
}

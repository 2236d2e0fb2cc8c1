//! Product image resource, nested under `admin/products/{product_id}/images`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Display order, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub width: Option<u32>,
    #[serde(skip_serializing)]
    pub height: Option<u32>,
    /// Source URL. Shopify downloads the image from here on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Base64 image data, an alternative to `src` on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<u64>>,
}

impl RestResource for Image {
    const NAME: &'static str = "image";
    const PLURAL: &'static str = "images";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_dimensions_are_read_only() {
        let image: Image = serde_json::from_str(
            r#"{"id":850703190,"product_id":632910392,"width":123,"height":456,"src":"https://cdn.shopify.com/a.png","variant_ids":[808950810]}"#,
        )
        .unwrap();
        assert_eq!(image.width, Some(123));

        let json = serde_json::to_value(&image).unwrap();
        assert!(json.get("width").is_none());
        assert!(json.get("height").is_none());
        assert_eq!(json["variant_ids"][0], 808950810);
    }
}

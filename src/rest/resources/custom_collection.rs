//! Custom collection resource, `admin/custom_collections`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::Image;
use super::metafield::Metafield;
use crate::rest::{ResourceService, RestResource};

/// A hand-picked group of products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// `alpha-asc`, `best-selling`, `manual`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
}

impl RestResource for CustomCollection {
    const NAME: &'static str = "custom_collection";
    const PLURAL: &'static str = "custom_collections";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl<'c> ResourceService<'c, CustomCollection> {
    /// Metafields attached to a custom collection.
    #[must_use]
    pub fn metafields(&self, collection_id: u64) -> ResourceService<'c, Metafield> {
        self.nested(collection_id, "metafields")
    }
}

//! Online store page resource, `admin/pages`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metafield::Metafield;
use crate::rest::{ResourceService, RestResource};

/// A static storefront page such as "About us".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub shop_id: Option<u64>,
}

impl RestResource for Page {
    const NAME: &'static str = "page";
    const PLURAL: &'static str = "pages";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl<'c> ResourceService<'c, Page> {
    /// Metafields attached to a page.
    #[must_use]
    pub fn metafields(&self, page_id: u64) -> ResourceService<'c, Metafield> {
        self.nested(page_id, "metafields")
    }
}

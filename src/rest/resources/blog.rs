//! Blog resource, `admin/blogs`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metafield::Metafield;
use crate::rest::RestResource;

/// A storefront blog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Blog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `no`, `moderate` or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Write-only; set on create to attach a metafield in one request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafield: Option<Metafield>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Blog {
    const NAME: &'static str = "blog";
    const PLURAL: &'static str = "blogs";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

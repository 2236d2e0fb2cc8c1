//! Script tag resource, `admin/script_tags`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A remote script loaded into the storefront or order status page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScriptTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Always `onload`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// `online_store`, `order_status` or `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_scope: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for ScriptTag {
    const NAME: &'static str = "script_tag";
    const PLURAL: &'static str = "script_tags";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting script tags.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ScriptTagOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Only tags loading this URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

//! Theme resource, `admin/themes`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A storefront theme.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub previewable: Option<bool>,
    #[serde(skip_serializing)]
    pub processing: Option<bool>,
    /// `main`, `unpublished` or `demo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing)]
    pub theme_store_id: Option<u64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Theme {
    const NAME: &'static str = "theme";
    const PLURAL: &'static str = "themes";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing themes.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ThemeListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

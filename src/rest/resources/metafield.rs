//! Metafield resource.
//!
//! Metafields live either at the shop level (`admin/metafields`) or under an
//! owning resource (`admin/products/{id}/metafields`, ...). The owning
//! resource's service exposes the nested form through `metafields(id)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::RestResource;

/// A namespaced key/value pair attached to a shop or resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// String, integer or JSON document depending on `value_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// `string`, `integer` or `json_string`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub owner_id: Option<u64>,
    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Metafield {
    const NAME: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

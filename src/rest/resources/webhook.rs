//! Webhook subscription resource, `admin/webhooks`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A subscription delivering `topic` events to `address`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Destination URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Event topic, e.g. `orders/create`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// `json` or `xml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Webhook {
    const NAME: &'static str = "webhook";
    const PLURAL: &'static str = "webhooks";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting webhooks.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct WebhookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

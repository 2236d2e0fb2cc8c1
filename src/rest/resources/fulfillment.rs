//! Fulfillment resource, `admin/orders/{order_id}/fulfillments`.
//!
//! Fulfillments move through `pending`, `open`, `success` and `cancelled`.
//! The state transitions are bodiless posts:
//!
//! | Method | Path |
//! |---|---|
//! | `complete(id)` | `{prefix}/{id}/complete.json` |
//! | `transition(id)` | `{prefix}/{id}/open.json` |
//! | `cancel(id)` | `{prefix}/{id}/cancel.json` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::LineItem;
use crate::clients::{ClientError, HttpMethod};
use crate::rest::{ResourceService, RestResource};

/// A shipment of some or all of an order's line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,
    #[serde(skip_serializing)]
    pub receipt: Option<Receipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    /// Whether to email the customer. Only honoured on create and update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,
}

/// Gateway receipt for a fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Receipt {
    pub testcase: Option<bool>,
    pub authorization: Option<String>,
}

impl RestResource for Fulfillment {
    const NAME: &'static str = "fulfillment";
    const PLURAL: &'static str = "fulfillments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl ResourceService<'_, Fulfillment> {
    /// Marks a fulfillment as complete.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn complete(&self, fulfillment_id: u64) -> Result<Fulfillment, ClientError> {
        self.bare_action(HttpMethod::Post, fulfillment_id, "complete", &())
            .await
    }

    /// Moves a fulfillment to `open`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn transition(&self, fulfillment_id: u64) -> Result<Fulfillment, ClientError> {
        self.bare_action(HttpMethod::Post, fulfillment_id, "open", &())
            .await
    }

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn cancel(&self, fulfillment_id: u64) -> Result<Fulfillment, ClientError> {
        self.bare_action(HttpMethod::Post, fulfillment_id, "cancel", &())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fulfillment_status_is_read_only() {
        let fulfillment = Fulfillment {
            id: Some(255858046),
            status: Some("success".to_string()),
            tracking_number: Some("1Z2345".to_string()),
            notify_customer: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&fulfillment).unwrap();
        assert!(json.get("status").is_none());
        assert_eq!(json["tracking_number"], "1Z2345");
        assert_eq!(json["notify_customer"], true);
    }
}

//! Order transaction resource, `admin/orders/{order_id}/transactions`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::fields::decimal_string;
use crate::rest::RestResource;

/// A money movement on an order: authorization, capture, sale, void or
/// refund.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,
    /// `authorization`, `capture`, `sale`, `void` or `refund`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub message: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// The transaction this one captures, voids or refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,
    #[serde(skip_serializing)]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing)]
    pub payment_details: Option<PaymentDetails>,
}

/// Card details reported by the gateway. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub avs_result_code: Option<String>,
    pub credit_card_bin: Option<String>,
    pub cvv_result_code: Option<String>,
    pub credit_card_number: Option<String>,
    pub credit_card_company: Option<String>,
}

impl RestResource for Transaction {
    const NAME: &'static str = "transaction";
    const PLURAL: &'static str = "transactions";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_body_has_only_writable_fields() {
        let capture = Transaction {
            kind: Some("capture".to_string()),
            amount: Some("10.00".to_string()),
            parent_id: Some(389404469),
            message: Some("ignored".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&capture).unwrap(),
            serde_json::json!({"amount": "10.00", "kind": "capture", "parent_id": 389404469})
        );
    }

    #[test]
    fn test_payment_details_deserialize() {
        let transaction: Transaction = serde_json::from_str(
            r#"{"id":389404469,"amount":409.94,"payment_details":{"credit_card_bin":"1","credit_card_company":"Visa"}}"#,
        )
        .unwrap();
        assert_eq!(transaction.amount.as_deref(), Some("409.94"));
        assert_eq!(
            transaction.payment_details.unwrap().credit_card_company.as_deref(),
            Some("Visa")
        );
    }
}

//! Line items and the pricing lines attached to orders.

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::fields::decimal_string;

/// A tax applied to an order, line item or shipping line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaxLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Tax amount in the shop currency.
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,

    /// Tax rate as a decimal fraction (`0.13`).
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<String>,
}

/// A custom property on a line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineItemProperty {
    pub name: String,
    pub value: String,
}

/// A product variant purchased in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_inventory_management: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<LineItemProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_location: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_location: Option<Address>,
}

/// A shipping method chosen for an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_fulfillment_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
}

/// A discount code applied at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,
    /// `fixed_amount`, `percentage` or `shipping`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
}

/// Extra information attached to an order at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NoteAttribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_line_accepts_numeric_rate() {
        let tax: TaxLine =
            serde_json::from_str(r#"{"title":"HST","price":"13.50","rate":0.13}"#).unwrap();
        assert_eq!(tax.price.as_deref(), Some("13.50"));
        assert_eq!(tax.rate.as_deref(), Some("0.13"));
    }

    #[test]
    fn test_discount_code_type_rename() {
        let code: DiscountCode =
            serde_json::from_str(r#"{"code":"TENOFF","amount":"10.00","type":"percentage"}"#)
                .unwrap();
        assert_eq!(code.discount_type.as_deref(), Some("percentage"));

        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["type"], "percentage");
        assert!(json.get("discount_type").is_none());
    }

    #[test]
    fn test_line_item_omits_unset_fields() {
        let item = LineItem {
            variant_id: Some(447654529),
            quantity: Some(1),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"variant_id": 447654529, "quantity": 1})
        );
    }
}

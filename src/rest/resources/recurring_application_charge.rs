//! Recurring application charge resource,
//! `admin/recurring_application_charges`.
//!
//! Billing dates such as `billing_on` arrive either as full timestamps or
//! as bare `YYYY-MM-DD` dates; both are read as [`DateTime<Utc>`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::fields::{decimal_string, flexible_date};
use crate::clients::{ClientError, HttpMethod};
use crate::rest::{ResourceService, RestResource};

/// A subscription charge billed every 30 days.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RecurringApplicationCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing)]
    pub api_client_id: Option<u64>,
    #[serde(default, deserialize_with = "flexible_date::deserialize", skip_serializing)]
    pub activated_on: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "decimal_string::deserialize", skip_serializing)]
    pub balance_remaining: Option<String>,
    #[serde(default, deserialize_with = "decimal_string::deserialize", skip_serializing)]
    pub balance_used: Option<String>,
    #[serde(default, deserialize_with = "flexible_date::deserialize", skip_serializing)]
    pub billing_on: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_date::deserialize", skip_serializing)]
    pub cancelled_on: Option<DateTime<Utc>>,
    /// Usage charges may not exceed this amount per billing period.
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub capped_amount: Option<String>,
    #[serde(skip_serializing)]
    pub confirmation_url: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub decorated_return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing)]
    pub risk_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Terms shown to the merchant for usage charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
    #[serde(default, deserialize_with = "flexible_date::deserialize", skip_serializing)]
    pub trial_ends_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub update_capped_amount_url: Option<String>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for RecurringApplicationCharge {
    const NAME: &'static str = "recurring_application_charge";
    const PLURAL: &'static str = "recurring_application_charges";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Serialize)]
struct CappedAmount {
    #[serde(rename = "recurring_application_charge[capped_amount]")]
    capped_amount: u64,
}

impl ResourceService<'_, RecurringApplicationCharge> {
    /// Activates an accepted charge.
    ///
    /// # Errors
    ///
    /// Returns [`crate::clients::InvalidRequestError::MissingId`] if the
    /// charge has no id, or [`ClientError`] if the request fails.
    pub async fn activate(
        &self,
        charge: &RecurringApplicationCharge,
    ) -> Result<RecurringApplicationCharge, ClientError> {
        self.post_action(charge, "activate").await
    }

    /// Raises the capped amount of a usage charge.
    /// `PUT {prefix}/{id}/customize.json?recurring_application_charge[capped_amount]={amount}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn customize(
        &self,
        charge_id: u64,
        capped_amount: u64,
    ) -> Result<RecurringApplicationCharge, ClientError> {
        self.bare_action(
            HttpMethod::Put,
            charge_id,
            "customize",
            &CappedAmount { capped_amount },
        )
        .await
    }
}

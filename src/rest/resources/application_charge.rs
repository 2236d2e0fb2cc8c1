//! One-time application charge resource, `admin/application_charges`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::fields::decimal_string;
use crate::clients::ClientError;
use crate::rest::{ResourceService, RestResource};

/// A one-time charge the merchant approves through `confirmation_url`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApplicationCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub api_client_id: Option<u64>,
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    /// `pending`, `accepted`, `active`, `declined` or `expired`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub charge_type: Option<String>,
    #[serde(skip_serializing)]
    pub decorated_return_url: Option<String>,
    #[serde(skip_serializing)]
    pub confirmation_url: Option<String>,
}

impl RestResource for ApplicationCharge {
    const NAME: &'static str = "application_charge";
    const PLURAL: &'static str = "application_charges";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl ResourceService<'_, ApplicationCharge> {
    /// Activates an accepted charge.
    /// `POST admin/application_charges/{id}/activate.json`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::clients::InvalidRequestError::MissingId`] if the
    /// charge has no id, or [`ClientError`] if the request fails.
    pub async fn activate(
        &self,
        charge: &ApplicationCharge,
    ) -> Result<ApplicationCharge, ClientError> {
        self.post_action(charge, "activate").await
    }
}

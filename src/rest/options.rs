//! Query options shared by most collection endpoints.
//!
//! Any `Serialize` value can be passed as options; these structs cover the
//! common cases. Resource-specific options live beside their resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options for listing most collections.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::ListOptions;
///
/// let options = ListOptions {
///     limit: Some(50),
///     fields: Some("id,title".to_string()),
///     ..Default::default()
/// };
/// let query = shopify_rest::serialize_to_query(&options).unwrap();
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page number to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Maximum number of results (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only return results after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Show results created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show results created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show results last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show results last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Sort order (e.g. `created_at desc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for most count endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Count results created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Count results created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Count results last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Count results last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::serialize_to_query;
    use chrono::TimeZone;

    #[test]
    fn test_default_list_options_are_empty() {
        assert!(serialize_to_query(&ListOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_count_options_encode_rfc3339() {
        let options = CountOptions {
            created_at_min: Some(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            serialize_to_query(&options).unwrap(),
            vec![(
                "created_at_min".to_string(),
                "2016-01-01T00:00:00Z".to_string()
            )]
        );
    }
}

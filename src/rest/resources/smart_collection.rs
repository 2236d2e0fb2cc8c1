//! Smart collection resource, `admin/smart_collections`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::Image;
use super::metafield::Metafield;
use crate::rest::{ResourceService, RestResource};

/// A collection whose products are selected by rules.
///
/// Products match when all rules hold, or any rule holds if `disjunctive`
/// is set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<SmartCollectionRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,
}

/// A selection rule such as `tag equals sale`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollectionRule {
    pub column: String,
    pub relation: String,
    pub condition: String,
}

impl RestResource for SmartCollection {
    const NAME: &'static str = "smart_collection";
    const PLURAL: &'static str = "smart_collections";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl<'c> ResourceService<'c, SmartCollection> {
    /// Metafields attached to a smart collection.
    #[must_use]
    pub fn metafields(&self, collection_id: u64) -> ResourceService<'c, Metafield> {
        self.nested(collection_id, "metafields")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_collection_rules_serialize() {
        let collection = SmartCollection {
            title: Some("Macbooks".to_string()),
            rules: Some(vec![SmartCollectionRule {
                column: "vendor".to_string(),
                relation: "equals".to_string(),
                condition: "Apple".to_string(),
            }]),
            ..Default::default()
        };

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Macbooks",
                "rules": [{"column": "vendor", "relation": "equals", "condition": "Apple"}]
            })
        );
    }
}

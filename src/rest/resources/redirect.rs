//! URL redirect resource, `admin/redirects`.

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A storefront redirect from `path` to `target`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Redirect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl RestResource for Redirect {
    const NAME: &'static str = "redirect";
    const PLURAL: &'static str = "redirects";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

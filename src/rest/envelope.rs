//! The named JSON envelope around resources.
//!
//! Requests wrap a resource as `{"product": {...}}`; responses carry it the
//! same way, or as `{"products": [...]}` for collections. Unwrapping is
//! [`RawResponse::json_field`](crate::RawResponse::json_field).

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Serializes `value` as a one-entry object under `key`.
///
/// ```rust
/// use shopify_rest::rest::Envelope;
///
/// let json = serde_json::to_string(&Envelope::new("redirect", &"/a")).unwrap();
/// assert_eq!(json, r#"{"redirect":"/a"}"#);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a, T: ?Sized> {
    key: &'a str,
    value: &'a T,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    /// Wraps `value` under `key`.
    #[must_use]
    pub const fn new(key: &'a str, value: &'a T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize + ?Sized> Serialize for Envelope<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Thing {
        id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    }

    #[test]
    fn test_wraps_struct() {
        let thing = Thing { id: 1, title: None };
        let value = serde_json::to_value(Envelope::new("thing", &thing)).unwrap();
        assert_eq!(value, serde_json::json!({"thing": {"id": 1}}));
    }
}

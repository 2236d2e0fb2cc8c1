//! Encoding of request options as query parameters.
//!
//! Options are any `Serialize` value. Field names come from serde, `None`
//! fields are omitted, arrays are joined with `,`, nested objects are
//! rendered as JSON text, and `chrono` timestamps come out as RFC3339.

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidRequestError;

/// Serializes an options value into ordered query pairs.
///
/// Unit and `None` produce no pairs.
///
/// # Errors
///
/// Returns [`InvalidRequestError::InvalidOptions`] if the value fails to
/// serialize or serializes to anything other than an object.
pub fn serialize_to_query<T: Serialize + ?Sized>(
    options: &T,
) -> Result<Vec<(String, String)>, InvalidRequestError> {
    let value = serde_json::to_value(options).map_err(|e| InvalidRequestError::InvalidOptions {
        reason: e.to_string(),
    })?;

    let map = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(InvalidRequestError::InvalidOptions {
                reason: format!("expected a struct or map of options, got `{other}`"),
            })
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => pairs.push((key, s)),
            Value::Number(n) => pairs.push((key, n.to_string())),
            Value::Bool(b) => pairs.push((key, b.to_string())),
            Value::Array(arr) => {
                let values: Vec<String> = arr
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    pairs.push((key, values.join(",")));
                }
            }
            Value::Object(_) => pairs.push((key, val.to_string())),
        }
    }

    Ok(pairs)
}

//! Serde adapters for field encodings the API is inconsistent about.

/// Money amounts: always serialized as a decimal string, accepted as a
/// string or a JSON number.
pub mod decimal_string {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
    }

    /// Serializes the amount as a string.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(amount) => serializer.serialize_str(amount),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes a string, number or null.
    ///
    /// # Errors
    ///
    /// Fails for any other JSON type.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<Amount>::deserialize(deserializer)?.map(|amount| match amount {
                Amount::Text(text) => text,
                Amount::Number(number) => number.to_string(),
            }),
        )
    }
}

/// Timestamps that are sometimes sent as a bare `YYYY-MM-DD` date.
///
/// Dates are read as midnight UTC. Fields using this adapter are
/// read-only and never serialized.
pub mod flexible_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer};

    /// Deserializes an RFC3339 timestamp, a `YYYY-MM-DD` date or null.
    ///
    /// # Errors
    ///
    /// Fails if the text is neither format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&text).map(Some).map_err(de::Error::custom)
    }

    fn parse(text: &str) -> Result<DateTime<Utc>, String> {
        if text.len() == 10 {
            return NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
                .ok_or_else(|| format!("invalid date `{text}`"));
        }
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| format!("invalid timestamp `{text}`: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, Default)]
    struct Charge {
        #[serde(
            default,
            with = "super::decimal_string",
            skip_serializing_if = "Option::is_none"
        )]
        price: Option<String>,
        #[serde(
            default,
            deserialize_with = "super::flexible_date::deserialize",
            skip_serializing
        )]
        billing_on: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_decimal_accepts_string_and_number() {
        let charge: Charge = serde_json::from_str(r#"{"price":"10.00"}"#).unwrap();
        assert_eq!(charge.price.as_deref(), Some("10.00"));

        let charge: Charge = serde_json::from_str(r#"{"price":10.5}"#).unwrap();
        assert_eq!(charge.price.as_deref(), Some("10.5"));

        let charge: Charge = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert!(charge.price.is_none());
    }

    #[test]
    fn test_decimal_serializes_as_string() {
        let charge = Charge {
            price: Some("10.00".to_string()),
            billing_on: None,
        };
        assert_eq!(serde_json::to_string(&charge).unwrap(), r#"{"price":"10.00"}"#);
    }

    #[test]
    fn test_flexible_date_formats() {
        let charge: Charge = serde_json::from_str(r#"{"billing_on":"2018-06-05"}"#).unwrap();
        assert_eq!(
            charge.billing_on,
            Some(Utc.with_ymd_and_hms(2018, 6, 5, 0, 0, 0).unwrap())
        );

        let charge: Charge =
            serde_json::from_str(r#"{"billing_on":"2018-05-07T15:47:10-04:00"}"#).unwrap();
        assert_eq!(
            charge.billing_on,
            Some(Utc.with_ymd_and_hms(2018, 5, 7, 19, 47, 10).unwrap())
        );

        let charge: Charge = serde_json::from_str("{}").unwrap();
        assert!(charge.billing_on.is_none());
    }

    #[test]
    fn test_flexible_date_rejects_garbage() {
        assert!(serde_json::from_str::<Charge>(r#"{"billing_on":"yesterday"}"#).is_err());
    }
}

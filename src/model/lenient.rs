//! Tolerant decoding of persisted records.
//!
//! A snapshot written by an older or foreign client may hold fields of the wrong
//! type, empty dates or enum values this build does not know. Those fields fall
//! back to their defaults so the rest of the snapshot still loads. Only JSON that
//! does not parse at all makes the store reseed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use snapshot_framework::{Collection, Record};
use tracing::warn;

/// `#[serde(deserialize_with)]` helper: the field's value, or `T::default()` if it
/// does not fit `T`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Calendar date from `YYYY-MM-DD` or a full RFC 3339 timestamp. Anything else is
/// `1970-01-01`.
pub fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<NaiveDate>().ok().or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|at| at.date_naive())
            })
        }
        _ => None,
    };
    Ok(parsed.unwrap_or_default())
}

/// Timestamp from an RFC 3339 string or epoch milliseconds. Anything else is the epoch.
pub fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|at| at.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };
    Ok(parsed.unwrap_or_default())
}

/// A collection that keeps every entry it can read and drops (with a warning)
/// the ones that are not records at all, e.g. `null` or a bare string.
pub fn lenient_records<'de, D, T>(deserializer: D) -> Result<Collection<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Record + DeserializeOwned,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        warn!(
            record_type = std::any::type_name::<T>(),
            "Collection is not an array, starting empty"
        );
        return Ok(Collection::new());
    };

    let records = entries
        .into_iter()
        .filter_map(|entry| match T::deserialize(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(record_type = std::any::type_name::<T>(), error = %e, "Dropping unreadable record");
                None
            }
        })
        .collect();
    Ok(Collection::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    enum Shade {
        #[default]
        Plain,
        Dark,
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "or_default")]
        label: String,
        #[serde(default, deserialize_with = "or_default")]
        shade: Shade,
        #[serde(default, deserialize_with = "lenient_date")]
        day: NaiveDate,
        #[serde(default, deserialize_with = "lenient_timestamp")]
        at: DateTime<Utc>,
    }

    #[test]
    fn wrong_types_fall_back_to_defaults() {
        let row: Row =
            serde_json::from_str(r#"{"label":42,"shade":"Neon","day":"","at":"yesterday"}"#)
                .unwrap();
        assert_eq!(row.label, "");
        assert_eq!(row.shade, Shade::Plain);
        assert_eq!(row.day, NaiveDate::default());
        assert_eq!(row.at, DateTime::<Utc>::default());

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.shade, Shade::Plain);
    }

    #[test]
    fn well_formed_values_are_kept() {
        let row: Row = serde_json::from_str(
            r#"{"label":"ok","shade":"Dark","day":"2024-05-01T10:00:00Z","at":1714557600000}"#,
        )
        .unwrap();
        assert_eq!(row.label, "ok");
        assert_eq!(row.shade, Shade::Dark);
        assert_eq!(row.day, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(row.at.timestamp(), 1_714_557_600);
    }
}

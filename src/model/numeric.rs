//! Lenient numeric coercion for stock and price fields.
//!
//! Persisted snapshots and CSV cells may hold numbers as strings, negative values
//! or garbage. All of those read as `0` instead of failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses a quantity cell. Decimals are truncated; anything unusable is `0`.
pub fn parse_quantity(raw: &str) -> u32 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return clamp_quantity(n as f64);
    }
    raw.parse::<f64>().map(clamp_quantity).unwrap_or(0)
}

/// Parses a price cell. Negative, non-finite or unparsable input is `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(clamp_price).unwrap_or(0.0)
}

fn clamp_quantity(n: f64) -> u32 {
    if n.is_finite() && n > 0.0 {
        n.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

fn clamp_price(n: f64) -> f64 {
    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// `#[serde(deserialize_with)]` helper for quantities.
pub fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).map(clamp_quantity).unwrap_or(0))
}

/// `#[serde(deserialize_with)]` helper for prices.
pub fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).map(clamp_price).unwrap_or(0.0))
}

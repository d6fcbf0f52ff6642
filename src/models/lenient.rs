//! Lenient input parsing
//!
//! Form data arrives as a mix of JSON numbers and free-text strings. Anything
//! that does not parse cleanly is treated as missing, never as zero or NaN.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a positive measurement such as `"80"`, `"80,5"` or `"175 cm"`.
pub fn parse_measure(raw: &str) -> Option<f64> {
    let trimmed = raw
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic() || c == '%')
        .trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

/// Parse a non-negative whole count such as `"4"` or `"4x"`.
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic())
        .trim();
    trimmed.parse::<u32>().ok()
}

fn measure_from_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Null => return None,
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite() && *v > 0.0),
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => parse_measure(s),
        _ => None,
    };

    if parsed.is_none() {
        tracing::warn!("Ignoring invalid numeric input: {}", value);
    }
    parsed
}

fn count_from_value(value: &Value) -> Option<u32> {
    let parsed = match value {
        Value::Null => return None,
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|v| v.is_finite() && *v >= 0.0).map(|v| v.round() as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => parse_count(s),
        _ => None,
    };

    if parsed.is_none() {
        tracing::warn!("Ignoring invalid count input: {}", value);
    }
    parsed
}

/// Deserialize an optional positive measurement from a number or string
pub fn de_measure<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(measure_from_value))
}

/// Deserialize an optional count from a number or string
pub fn de_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

/// Deserialize display text that may arrive as a number (e.g. reps: 12)
pub fn de_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Deserialize an optional flag from a bool or a yes/no style string
pub fn de_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "sim" | "1" => Some(true),
            "false" | "no" | "n" | "nao" | "não" | "0" => Some(false),
            _ => None,
        },
        Some(Value::Number(n)) => n.as_i64().map(|v| v != 0),
        _ => None,
    })
}

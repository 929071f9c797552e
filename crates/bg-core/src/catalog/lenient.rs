//! Tolerant field decoders for rows coming from a schema we do not own.
//!
//! Each decoder accepts the expected JSON type, the obvious neighbouring one
//! (numbers for strings, numeric strings for numbers) and maps anything else
//! to `None` instead of rejecting the whole row.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::entry::EntryId;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn scalar<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer)
}

pub(crate) fn id<'de, D>(deserializer: D) -> Result<Option<EntryId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match scalar(deserializer)? {
        Some(Scalar::Int(v)) => Some(EntryId::Int(v)),
        Some(Scalar::Float(v)) => Some(EntryId::Text(v.to_string())),
        Some(Scalar::Text(v)) => Some(EntryId::Text(v)),
        Some(Scalar::Other(_)) | None => None,
    })
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match scalar(deserializer)? {
        Some(Scalar::Text(v)) => Some(v),
        Some(Scalar::Int(v)) => Some(v.to_string()),
        Some(Scalar::Float(v)) => Some(v.to_string()),
        Some(Scalar::Other(_)) | None => None,
    })
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match scalar(deserializer)? {
        Some(Scalar::Int(v)) => Some(v),
        Some(Scalar::Float(v)) => float_to_count(v),
        Some(Scalar::Text(v)) => {
            let v = v.trim();
            v.parse::<i64>()
                .ok()
                .or_else(|| v.parse::<f64>().ok().and_then(float_to_count))
        }
        Some(Scalar::Other(_)) | None => None,
    })
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match scalar(deserializer)? {
        Some(Scalar::Int(v)) => Some(v as f64),
        Some(Scalar::Float(v)) => Some(v),
        Some(Scalar::Text(v)) => v.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        Some(Scalar::Other(_)) | None => None,
    })
}

// A fractional count still says whether any copy is on the shelf
fn float_to_count(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    Some(if v > 0.0 && v < 1.0 { 1 } else { v as i64 })
}

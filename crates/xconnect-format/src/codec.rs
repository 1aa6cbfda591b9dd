//! Canonical JSON text form of records, record collections and profiles.
//!
//! Decoding is two-phase: the text is parsed into a JSON value (failures are
//! `invalid-json`), then the value's structure is checked against the expected
//! shape (failures are `invalid-shape`). A single-record decode rejects arrays and
//! a collection decode rejects objects.

use serde::de::DeserializeOwned;
use serde_json::Value;

use xconnect_core::error::{DecodeError, Error, Result};
use xconnect_core::types::{ColleagueRecord, ProfileSnapshot};

/// Compact JSON for one record.
pub fn encode_one(record: &ColleagueRecord) -> Result<String> {
    serde_json::to_string(record).map_err(|e| Error::Encode(e.to_string()))
}

pub fn decode_one(text: &str) -> std::result::Result<ColleagueRecord, DecodeError> {
    let value = parse_value(text)?;
    if !value.is_object() {
        return Err(DecodeError::invalid_shape(format!(
            "expected a record object, found {}",
            kind_of(&value)
        )));
    }
    from_value(value, "record")
}

/// Pretty-printed JSON array; fields keep declaration order so snapshots diff cleanly.
pub fn encode_many(records: &[ColleagueRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| Error::Encode(e.to_string()))
}

/// Single-line JSON array, used for the persisted collection key.
pub fn encode_many_compact(records: &[ColleagueRecord]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| Error::Encode(e.to_string()))
}

pub fn decode_many(text: &str) -> std::result::Result<Vec<ColleagueRecord>, DecodeError> {
    let value = parse_value(text)?;
    let Value::Array(items) = value else {
        return Err(DecodeError::invalid_shape(format!(
            "expected an array of records, found {}",
            kind_of(&value)
        )));
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(DecodeError::invalid_shape(format!(
                "element {i}: expected a record object, found {}",
                kind_of(&item)
            )));
        }
        out.push(from_value(item, &format!("element {i}"))?);
    }
    Ok(out)
}

/// Compact JSON of exactly the four profile fields; no `id`.
pub fn encode_profile(profile: &ProfileSnapshot) -> Result<String> {
    serde_json::to_string(profile).map_err(|e| Error::Encode(e.to_string()))
}

/// Exactly the four profile keys; anything else (an `id`, a `protocol`) is `invalid-shape`.
pub fn decode_profile(text: &str) -> std::result::Result<ProfileSnapshot, DecodeError> {
    let value = parse_value(text)?;
    if !value.is_object() {
        return Err(DecodeError::invalid_shape(format!(
            "expected a profile object, found {}",
            kind_of(&value)
        )));
    }
    from_value(value, "profile")
}

fn parse_value(text: &str) -> std::result::Result<Value, DecodeError> {
    serde_json::from_str(text).map_err(|e| DecodeError::invalid_json(e.to_string()))
}

fn from_value<T: DeserializeOwned>(
    value: Value,
    what: &str,
) -> std::result::Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|e| DecodeError::invalid_shape(format!("{what}: {e}")))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

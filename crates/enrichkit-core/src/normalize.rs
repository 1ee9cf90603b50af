//! JSON normalization: typed parsing of upstream bodies and compaction of
//! payloads before they become query parameters.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{EnrichmentError, Result};

/// Deserializes a response body into `T`.
///
/// Response schemas in [`crate::models`] declare every nested field as
/// `Option`, so a missing or `null` branch parses to `None` at any depth.
pub fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|error| {
        EnrichmentError::MalformedResponse(format!(
            "cannot decode {}: {error}",
            short_type_name::<T>()
        ))
    })
}

/// Like [`parse`], but an empty body yields `None`.
pub fn parse_optional<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    parse(body).map(Some)
}

/// `deserialize_with` helper for nullable lists whose elements may also be
/// `null`. Null elements are dropped; a `null` list stays `None`.
pub fn sparse_list<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().flatten().collect()))
}

/// Recursively drops `null` values and collections that are empty once their
/// own contents are filtered. Keys listed in `exclude_keys` are dropped at
/// every depth. Scalars, including `0`, `false` and `""`, are kept.
///
/// The function is idempotent and leaves `value` untouched.
pub fn filter_object(value: &Value, exclude_keys: &[&str]) -> Value {
    match value {
        Value::Object(_) | Value::Array(_) => {
            filter_value(value, exclude_keys).unwrap_or_else(|| empty_like(value))
        }
        other => other.clone(),
    }
}

fn filter_value(value: &Value, exclude_keys: &[&str]) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let filtered: Map<String, Value> = map
                .iter()
                .filter(|(key, _)| !exclude_keys.contains(&key.as_str()))
                .filter_map(|(key, child)| {
                    filter_value(child, exclude_keys).map(|child| (key.clone(), child))
                })
                .collect();
            (!filtered.is_empty()).then_some(Value::Object(filtered))
        }
        Value::Array(items) => {
            let filtered: Vec<Value> = items
                .iter()
                .filter_map(|item| filter_value(item, exclude_keys))
                .collect();
            (!filtered.is_empty()).then_some(Value::Array(filtered))
        }
        scalar => Some(scalar.clone()),
    }
}

fn empty_like(value: &Value) -> Value {
    match value {
        Value::Array(_) => Value::Array(Vec::new()),
        _ => Value::Object(Map::new()),
    }
}

/// Serializes `params`, filters it and flattens the top level into query
/// pairs. Arrays of scalars are joined with commas.
pub fn to_query_params<P: Serialize>(params: &P) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)
        .map_err(|error| EnrichmentError::InvalidRequest(error.to_string()))?;

    let Value::Object(map) = filter_object(&value, &[]) else {
        return Err(EnrichmentError::InvalidRequest(String::from(
            "request parameters must serialize to an object",
        )));
    };

    map.into_iter()
        .map(|(key, value)| {
            let rendered = match &value {
                Value::Array(items) => items
                    .iter()
                    .map(scalar_to_string)
                    .collect::<Result<Vec<_>>>()?
                    .join(","),
                other => scalar_to_string(other)?,
            };
            Ok((key, rendered))
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(EnrichmentError::InvalidRequest(
            format!("query parameter value must be a scalar, got {value}"),
        )),
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

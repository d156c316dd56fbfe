//! Query string encoding in the bracket notation TrackThis expects:
//! `filter[username]=bob`, `changes[email]=a@b.c`, `ids[0]=1`.

use crate::errors::TrackThisError;
use serde::Serialize;
use serde_json::Value;

pub(crate) type QueryPairs = Vec<(String, String)>;

/// Flatten request parameters into `(key, value)` pairs.
///
/// The parameters must serialize to a map. `null` is written as an empty value.
pub(crate) fn to_query_pairs<P: Serialize + ?Sized>(
    parameters: &P,
) -> Result<QueryPairs, TrackThisError> {
    let value =
        serde_json::to_value(parameters).map_err(|e| TrackThisError::Query(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(TrackThisError::Query(format!(
                "expected a map of parameters, got {}",
                other
            )))
        }
    };
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        push_pairs(key, value, &mut pairs);
    }
    Ok(pairs)
}

fn push_pairs(key: String, value: Value, pairs: &mut QueryPairs) {
    match value {
        Value::Object(map) => {
            for (inner, value) in map {
                push_pairs(format!("{}[{}]", key, inner), value, pairs)
            }
        }
        Value::Array(items) => {
            for (i, value) in items.into_iter().enumerate() {
                push_pairs(format!("{}[{}]", key, i), value, pairs)
            }
        }
        Value::Null => pairs.push((key, String::new())),
        Value::String(s) => pairs.push((key, s)),
        other => pairs.push((key, other.to_string())),
    }
}

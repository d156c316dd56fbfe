//! Definitions of response data from the TrackThis API.
//!
//! Response shapes differ per action, so each operation picks what it
//! needs from the raw [Value] instead of sharing one envelope type.

use crate::errors::TrackThisError;
use crate::types::{Action, PartnerCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a credentials check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialsCheck {
    pub valid: bool,
    pub details: Value,
}

impl CredentialsCheck {
    /// Read `data.correct` and `data.details` of a `checkLogin` response.
    pub(crate) fn from_response(mut response: Value) -> Self {
        let data = response
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null);
        let valid = data.get("correct").map(is_truthy).unwrap_or(false);
        let details = data.get("details").cloned().unwrap_or(Value::Null);
        Self { valid, details }
    }
}

/// A performer account which was created and then configured.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub partner_code: PartnerCode,
    /// `data` of the create response.
    pub created: Value,
    /// Response of the edit request.
    pub edited: Value,
}

/// Return `data` if the response reports `"ok": true`.
pub(crate) fn accept_ok(action: Action, response: Value) -> Result<Value, TrackThisError> {
    match response {
        Value::Object(mut map) if map.get("ok") == Some(&Value::Bool(true)) => {
            Ok(map.remove("data").unwrap_or(Value::Null))
        }
        response => Err(TrackThisError::RemoteRejected { action, response }),
    }
}

/// Whether a response carries nothing at all.
pub(crate) fn is_empty(response: &Value) -> bool {
    match response {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

/// Find the code of an account in the `data` of a create response.
pub(crate) fn partner_code_of(data: &Value) -> Option<PartnerCode> {
    let code = match data {
        Value::Object(map) => map.get("hoofdcode")?,
        other => other,
    };
    match code {
        Value::String(s) if !s.is_empty() => Some(PartnerCode::from(s.as_str())),
        Value::Number(n) => Some(PartnerCode::new(n.to_string())),
        _ => None,
    }
}

/// PHP-style truthiness, TrackThis sends `1`/`"1"` as well as `true`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(s) => !(s.is_empty() || s == "0"),
        _ => false,
    }
}

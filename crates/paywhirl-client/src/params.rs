//! Request parameters and their wire encodings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, Result};

/// Request parameters: string keys mapped to JSON values.
pub type Params = Map<String, Value>;

/// How parameters travel with a request.
///
/// GET requests always use [`ParamEncoding::Query`]. POST requests use the
/// client's configured encoding unless a call overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamEncoding {
    /// Flattened into the URL query string. The PayWhirl API has always
    /// received POST parameters this way.
    #[default]
    Query,
    /// Flattened into an `application/x-www-form-urlencoded` body.
    Form,
    /// Sent as a JSON object body.
    Json,
}

impl fmt::Display for ParamEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Form => "form",
            Self::Json => "json",
        })
    }
}

impl FromStr for ParamEncoding {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "form" => Ok(Self::Form),
            "json" => Ok(Self::Json),
            other => Err(ClientError::Configuration(format!(
                "unknown parameter encoding: {other}"
            ))),
        }
    }
}

/// Convert any serializable value into request parameters.
///
/// `null` becomes an empty map.
///
/// # Errors
///
/// Returns [`ClientError::Serialization`] if the value fails to serialize,
/// or [`ClientError::Configuration`] if it is not a JSON object.
pub fn to_params<T: Serialize + ?Sized>(value: &T) -> Result<Params> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(ClientError::Configuration(format!(
            "request parameters must be a JSON object, got {other}"
        ))),
    }
}

/// Flatten parameters into key/value pairs for query strings and form bodies.
///
/// Nested objects and arrays use bracket notation (`address[city]`,
/// `items[0]`). Booleans become `1`/`0` and `null` values are dropped.
#[must_use]
pub fn flatten(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        flatten_into(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten_into(format!("{key}[{child}]"), item, pairs);
            }
        }
    }
}

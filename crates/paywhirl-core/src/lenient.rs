//! Deserializers that accept the loose JSON PayWhirl emits.
//!
//! Amounts and flags arrive as numbers, numeric strings, `0`/`1`, or `null`
//! depending on the endpoint. Text fields such as zip codes and phone numbers
//! sometimes arrive as numbers, and the PHP backend encodes an empty object
//! as `[]`.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserialize an optional decimal amount from a number or numeric string.
pub(crate) fn opt_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let raw = Option::<Loose>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Loose::Bool(_)) => None,
        #[allow(clippy::cast_precision_loss)]
        Some(Loose::Int(n)) => Some(n as f64),
        Some(Loose::Float(f)) => Some(f),
        Some(Loose::Text(s)) => s.trim().parse().ok(),
    })
}

/// Deserialize an optional integer from a number or numeric string.
pub(crate) fn opt_i64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    let raw = Option::<Loose>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Loose::Bool(_)) => None,
        Some(Loose::Int(n)) => Some(n),
        #[allow(clippy::cast_possible_truncation)]
        Some(Loose::Float(f)) => Some(f as i64),
        Some(Loose::Text(s)) => s.trim().parse().ok(),
    })
}

/// Deserialize an optional flag from `true`/`false`, `0`/`1`, or `"0"`/`"1"`.
pub(crate) fn opt_bool<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    let raw = Option::<Loose>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(Loose::Bool(b)) => Some(b),
        Some(Loose::Int(n)) => Some(n != 0),
        Some(Loose::Float(f)) => Some(f != 0.0),
        Some(Loose::Text(s)) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" | "" => Some(false),
            _ => None,
        },
    })
}

/// Deserialize optional text from a string or a number. Booleans are `None`.
pub(crate) fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = Option::<Loose>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Loose::Bool(_)) => None,
        Some(Loose::Int(n)) => Some(n.to_string()),
        Some(Loose::Float(f)) => Some(f.to_string()),
        Some(Loose::Text(s)) => Some(s),
    })
}

/// Deserialize a list where `null` means empty.
pub(crate) fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional nested object where `null` or `[]` means absent.
pub(crate) fn opt_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::opt_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_i64")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "super::opt_bool")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "super::opt_string")]
        zip: Option<String>,
        #[serde(default, deserialize_with = "super::vec_or_null")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "super::opt_object")]
        nested: Option<Nested>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Nested {
        name: String,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let s: Sample =
            serde_json::from_str(r#"{"amount":"19.99","count":"3","flag":"1"}"#).unwrap();
        assert_eq!(s.amount, Some(19.99));
        assert_eq!(s.count, Some(3));
        assert_eq!(s.flag, Some(true));

        let s: Sample = serde_json::from_str(r#"{"amount":5,"count":4.0,"flag":0}"#).unwrap();
        assert_eq!(s.amount, Some(5.0));
        assert_eq!(s.count, Some(4));
        assert_eq!(s.flag, Some(false));
    }

    #[test]
    fn missing_and_null_are_none() {
        let s: Sample = serde_json::from_str(r#"{"amount":null}"#).unwrap();
        assert!(s.amount.is_none());
        assert!(s.count.is_none());
        assert!(s.flag.is_none());
        assert!(s.zip.is_none());
        assert!(s.items.is_empty());
        assert!(s.nested.is_none());
    }

    #[test]
    fn text_accepts_numbers() {
        let s: Sample = serde_json::from_str(r#"{"zip":78701}"#).unwrap();
        assert_eq!(s.zip.as_deref(), Some("78701"));

        let s: Sample = serde_json::from_str(r#"{"zip":"02134"}"#).unwrap();
        assert_eq!(s.zip.as_deref(), Some("02134"));

        let s: Sample = serde_json::from_str(r#"{"zip":false}"#).unwrap();
        assert!(s.zip.is_none());
    }

    #[test]
    fn null_list_is_empty() {
        let s: Sample = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(s.items.is_empty());

        let s: Sample = serde_json::from_str(r#"{"items":[1,2]}"#).unwrap();
        assert_eq!(s.items, vec![1, 2]);
    }

    #[test]
    fn empty_array_object_is_none() {
        let s: Sample = serde_json::from_str(r#"{"nested":[]}"#).unwrap();
        assert!(s.nested.is_none());

        let s: Sample = serde_json::from_str(r#"{"nested":null}"#).unwrap();
        assert!(s.nested.is_none());

        let s: Sample = serde_json::from_str(r#"{"nested":{"name":"Gold"}}"#).unwrap();
        assert_eq!(s.nested, Some(Nested { name: "Gold".into() }));

        assert!(serde_json::from_str::<Sample>(r#"{"nested":[1]}"#).is_err());
    }
}

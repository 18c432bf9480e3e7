//! Lenient wire decoding
//!
//! The backend is loose about JSON types: identifiers arrive as strings or
//! numbers, numeric columns sometimes arrive as strings, and visibility may be
//! a boolean or the text `"true"`/`"false"`. These helpers accept every shape
//! seen in practice and map anything else to "missing".

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::table::RecordId;

/// Identifier that may be a JSON string or number; the kind is preserved
pub fn record_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordId, D::Error> {
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| {
        D::Error::custom(format!("expected string or number identifier, got {value}"))
    })
}

/// Identifier from an already-parsed JSON value
pub fn id_from_value(value: &Value) -> Option<RecordId> {
    match value {
        Value::String(s) => Some(RecordId::from(s.as_str())),
        Value::Number(n) => Some(RecordId::Number(n.clone())),
        _ => None,
    }
}

pub fn lenient_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub fn lenient_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Ok(number_of(&Value::deserialize(deserializer)?))
}

/// Integer column; fractional values are truncated
pub fn lenient_integer<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(i) = value.as_i64() {
        return Ok(Some(i));
    }
    if let Value::String(s) = &value
        && let Ok(i) = s.trim().parse::<i64>()
    {
        return Ok(Some(i));
    }
    Ok(number_of(&value).map(|f| f.trunc() as i64))
}

pub fn lenient_bool<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn number_of(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Encode an identifier exactly as it was received
pub fn id_value(id: &RecordId) -> Value {
    match id {
        RecordId::Text(s) => Value::from(s.as_ref()),
        RecordId::Number(n) => Value::Number(n.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "record_id")]
        id: RecordId,
        #[serde(default, deserialize_with = "lenient_number")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "lenient_integer")]
        stock: Option<i64>,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "lenient_text")]
        label: Option<String>,
    }

    fn row(value: Value) -> Row {
        serde_json::from_value(value).expect("row")
    }

    #[test]
    fn test_identifier_shapes() {
        assert_eq!(row(json!({"id": 17})).id, RecordId::Number(17.into()));
        assert_eq!(row(json!({"id": "abc"})).id, RecordId::from("abc"));
        assert!(serde_json::from_value::<Row>(json!({"id": null})).is_err());
    }

    #[test]
    fn test_numeric_columns_accept_strings() {
        let r = row(json!({"id": 1, "price": "12.5", "stock": "7"}));
        assert_eq!(r.price, Some(12.5));
        assert_eq!(r.stock, Some(7));

        let r = row(json!({"id": 1, "price": "n/a", "stock": 3.9}));
        assert_eq!(r.price, None);
        assert_eq!(r.stock, Some(3));
    }

    #[test]
    fn test_absent_and_null_are_missing() {
        let r = row(json!({"id": 1, "stock": null, "flag": null}));
        assert_eq!(r.price, None);
        assert_eq!(r.stock, None);
        assert_eq!(r.flag, None);
        assert_eq!(r.label, None);
    }

    #[test]
    fn test_bool_text_forms() {
        assert_eq!(row(json!({"id": 1, "flag": "true"})).flag, Some(true));
        assert_eq!(row(json!({"id": 1, "flag": false})).flag, Some(false));
        assert_eq!(row(json!({"id": 1, "flag": "yes"})).flag, None);
    }

    #[test]
    fn test_id_value_echoes_received_kind() {
        for id in [
            json!("42"),
            json!(42),
            json!("042"),
            json!("p-1"),
            json!(18446744073709551615u64),
            json!(-7),
        ] {
            let decoded = row(json!({ "id": id.clone() })).id;
            assert_eq!(id_value(&decoded), id);
        }
    }

    #[test]
    fn test_id_from_value_rejects_other_kinds() {
        assert!(id_from_value(&json!(true)).is_none());
        assert!(id_from_value(&json!({"id": 1})).is_none());
        assert_eq!(id_from_value(&json!("x")), Some(RecordId::from("x")));
    }
}

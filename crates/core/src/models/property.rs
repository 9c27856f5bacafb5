//! Secondary dataset records
//!
//! Property records arrive as raw JSON objects whose keys carry stray
//! leading whitespace, an artifact of the CSV-derived source data. Keys
//! are trimmed when a record is built, so lookups everywhere else use
//! clean names.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Raised when a property value is present but not coercible to the
/// requested type
///
/// Missing and `null` values are not coercion errors; they surface as
/// `None` from the accessors and default downstream.
#[derive(Debug, Clone, Error)]
#[error("value {value} is not coercible")]
pub struct CoercionError {
    /// Rendered form of the offending value
    pub value: String,
}

impl CoercionError {
    fn new(value: &Value) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// Raised when a raw JSON value cannot form a property record at all
#[derive(Debug, Clone, Error)]
pub enum InvalidProperty {
    #[error("property record is not a JSON object")]
    NotAnObject,
    #[error("property record has no usable integer `atomicNumber`")]
    MissingAtomicNumber,
}

/// Secondary dataset entry keyed by atomic number
#[derive(Debug, Clone)]
pub struct PropertyRecord {
    atomic_number: u32,
    fields: HashMap<String, Value>,
}

impl PropertyRecord {
    /// Build a record from a raw JSON object, trimming whitespace from
    /// every key
    pub fn from_object(value: &Value) -> Result<Self, InvalidProperty> {
        let object = value.as_object().ok_or(InvalidProperty::NotAnObject)?;

        let mut fields = HashMap::with_capacity(object.len());
        for (key, value) in object {
            fields.insert(key.trim().to_string(), value.clone());
        }

        let atomic_number = match fields.get("atomicNumber") {
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or(InvalidProperty::MissingAtomicNumber)?,
            Some(Value::String(s)) => s
                .trim()
                .parse::<u32>()
                .map_err(|_| InvalidProperty::MissingAtomicNumber)?,
            _ => return Err(InvalidProperty::MissingAtomicNumber),
        };

        Ok(Self {
            atomic_number,
            fields,
        })
    }

    /// Key the record joins on
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Raw value for a trimmed key
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Trimmed string value; `None` when missing or null
    ///
    /// JSON numbers are rendered to their display form. Other types are a
    /// coercion error.
    pub fn text(&self, key: &str) -> Result<Option<String>, CoercionError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(CoercionError::new(other)),
        }
    }

    /// Float value; `None` when missing, null, or a blank string
    ///
    /// Numeric strings parse; any other value that is present is a
    /// coercion error.
    pub fn float(&self, key: &str) -> Result<Option<f64>, CoercionError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(value @ Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| CoercionError::new(value))
            }
            Some(other) => Err(CoercionError::new(other)),
        }
    }

    /// Integer value; as [`float`](Self::float) but truncating fractional
    /// parts
    pub fn integer(&self, key: &str) -> Result<Option<i64>, CoercionError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    Ok(Some(i))
                } else {
                    Ok(n.as_f64().map(|f| f.trunc() as i64))
                }
            }
            Some(value @ Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Ok(Some(i));
                }
                trimmed
                    .parse::<f64>()
                    .map(|f| Some(f.trunc() as i64))
                    .map_err(|_| CoercionError::new(value))
            }
            Some(other) => Err(CoercionError::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> PropertyRecord {
        PropertyRecord::from_object(&value).unwrap()
    }

    #[test]
    fn test_keys_are_trimmed_at_ingestion() {
        let rec = record(json!({"atomicNumber": 1, " symbol": "H", " meltingPoint": 13.99}));
        assert_eq!(rec.text("symbol").unwrap(), Some("H".to_string()));
        assert_eq!(rec.float("meltingPoint").unwrap(), Some(13.99));
    }

    #[test]
    fn test_atomic_number_accepts_numeric_strings() {
        let rec = record(json!({"atomicNumber": "42"}));
        assert_eq!(rec.atomic_number(), 42);
    }

    #[test]
    fn test_from_object_rejects_non_objects_and_bad_keys() {
        assert!(matches!(
            PropertyRecord::from_object(&json!([1, 2])),
            Err(InvalidProperty::NotAnObject)
        ));
        assert!(matches!(
            PropertyRecord::from_object(&json!({"symbol": "H"})),
            Err(InvalidProperty::MissingAtomicNumber)
        ));
        assert!(matches!(
            PropertyRecord::from_object(&json!({"atomicNumber": -3})),
            Err(InvalidProperty::MissingAtomicNumber)
        ));
    }

    #[test]
    fn test_text_coercion() {
        let rec = record(json!({"atomicNumber": 1, " name": "  Hydrogen ", "mass": 1.008}));
        assert_eq!(rec.text("name").unwrap(), Some("Hydrogen".to_string()));
        assert_eq!(rec.text("mass").unwrap(), Some("1.008".to_string()));
        assert_eq!(rec.text("absent").unwrap(), None);
        let rec = record(json!({"atomicNumber": 1, "tags": ["a"]}));
        assert!(rec.text("tags").is_err());
    }

    #[test]
    fn test_float_coercion() {
        let rec = record(json!({
            "atomicNumber": 1,
            "a": 1.5,
            "b": "2.5",
            "c": "",
            "d": null,
            "e": "warm"
        }));
        assert_eq!(rec.float("a").unwrap(), Some(1.5));
        assert_eq!(rec.float("b").unwrap(), Some(2.5));
        assert_eq!(rec.float("c").unwrap(), None);
        assert_eq!(rec.float("d").unwrap(), None);
        assert_eq!(rec.float("missing").unwrap(), None);
        assert!(rec.float("e").is_err());
    }

    #[test]
    fn test_integer_coercion_truncates() {
        let rec = record(json!({
            "atomicNumber": 1,
            "a": 1766,
            "b": "1766",
            "c": 1766.9,
            "d": "Ancient"
        }));
        assert_eq!(rec.integer("a").unwrap(), Some(1766));
        assert_eq!(rec.integer("b").unwrap(), Some(1766));
        assert_eq!(rec.integer("c").unwrap(), Some(1766));
        assert!(rec.integer("d").is_err());
    }
}

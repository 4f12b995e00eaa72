use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("empty logging is not allowed")]
    EmptyPayload,
    #[error("wrong type of logging argument for {key:?}")]
    UnsupportedValueType { key: String },
}

/// A single field value. The three variants are the only value types a log
/// line carries; anything else has to be stringified by the caller or rejected
/// at the [`fields_from_json`] boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// One log call's worth of named values. Keys are unique and iterate in
/// sorted order, so the rendered payload is deterministic.
pub type Fields = BTreeMap<String, Value>;

/// Builds a [`Fields`] map from `key => value` pairs.
///
/// ```
/// use fieldlog::fields;
///
/// let fields = fields! { "word count" => 42, "cached" => false };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => { $crate::Fields::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.insert(($key).to_string(), $crate::Value::from($value));)+
        fields
    }};
}

/// Converts a JSON object into [`Fields`], the entry point for callers holding
/// untyped data. Only integer numbers, booleans, and strings are accepted;
/// the first float, null, array, or nested object fails the whole conversion.
pub fn fields_from_json(value: &serde_json::Value) -> Result<Fields, FieldError> {
    let serde_json::Value::Object(entries) = value else {
        return Err(FieldError::UnsupportedValueType {
            key: "<root>".to_string(),
        });
    };

    let mut fields = Fields::new();
    for (key, value) in entries {
        let value = match value {
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => {
                    return Err(FieldError::UnsupportedValueType { key: key.clone() });
                }
            },
            _ => {
                return Err(FieldError::UnsupportedValueType { key: key.clone() });
            }
        };
        fields.insert(key.clone(), value);
    }
    Ok(fields)
}

//! Property values carried by a symbol

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::function::FunctionDef;

/// A single symbol property value
///
/// Mirrors the JSON shapes a symbol can hold. An object with a `stops` array
/// of `[input, output]` pairs is recognized as a function-type definition;
/// every other object stays a plain [`Value::Object`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Function(FunctionDef<Value>),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Whether the value counts as absent (null or an empty string)
    pub fn is_nil(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Whether this is a zoom/attribute dependent function-type definition
    pub fn is_function_definition(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDef<Value>> {
        match self {
            Value::Function(def) => Some(def),
            _ => None,
        }
    }

    /// Render a scalar as an SVG attribute value
    ///
    /// Returns None for null, lists, objects and function-type definitions.
    pub fn to_attribute(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Function(def) => write!(f, "<function with {} stops>", def.stops.len()),
            Value::List(items) => write!(f, "<list of {}>", items.len()),
            Value::Object(_) => write!(f, "<object>"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<FunctionDef<Value>> for Value {
    fn from(def: FunctionDef<Value>) -> Self {
        Value::Function(def)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_scalars() {
        let v: Value = serde_json::from_str("12").unwrap();
        assert_eq!(v, Value::Number(12.0));
        let v: Value = serde_json::from_str(r#""a.png""#).unwrap();
        assert_eq!(v, Value::String("a.png".to_string()));
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Null);
    }

    #[test]
    fn test_object_with_stops_is_function() {
        let v: Value =
            serde_json::from_str(r#"{"stops": [[1, "a.png"], [10, "b.png"]]}"#).unwrap();
        assert!(v.is_function_definition());
        assert_eq!(v.as_function().unwrap().stops.len(), 2);
    }

    #[test]
    fn test_object_without_stops_is_object() {
        let v: Value = serde_json::from_str(r#"{"path": "M0 0", "fill": "red"}"#).unwrap();
        assert!(!v.is_function_definition());
        assert!(matches!(v, Value::Object(_)));
    }

    #[test]
    fn test_malformed_stops_fall_back_to_object() {
        let v: Value = serde_json::from_str(r#"{"stops": 3}"#).unwrap();
        assert!(matches!(v, Value::Object(_)));
    }

    #[test]
    fn test_is_nil() {
        assert!(Value::Null.is_nil());
        assert!(Value::from("").is_nil());
        assert!(!Value::from("x").is_nil());
        assert!(!Value::Number(0.0).is_nil());
    }

    #[test]
    fn test_to_attribute() {
        assert_eq!(Value::Number(10.0).to_attribute(), Some("10".to_string()));
        assert_eq!(Value::Number(0.5).to_attribute(), Some("0.5".to_string()));
        assert_eq!(Value::from("red").to_attribute(), Some("red".to_string()));
        assert_eq!(Value::Null.to_attribute(), None);
        assert_eq!(Value::List(vec![]).to_attribute(), None);
    }
}

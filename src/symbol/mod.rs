//! Map symbol descriptions
//!
//! A symbol is a flat mapping from style-property names to values. Values
//! are plain JSON shapes, with function-type definitions (zoom or attribute
//! dependent `stops`) recognized as their own variant. Resource-bearing
//! properties are read through the typed views in [`resource`].

pub mod function;
pub mod properties;
pub mod resource;
pub mod value;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use function::{FunctionDef, Stop};
pub use properties::{ResourceProperty, RESOURCE_PROPERTIES};
pub use resource::{MarkerPath, PathEntry, ResourceValue};
pub use value::Value;

use crate::error::SymbolError;

/// A map symbol: style-property name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol {
    properties: BTreeMap<String, Value>,
}

impl Symbol {
    /// Create an empty symbol
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single symbol from JSON
    pub fn from_json(source: &str) -> Result<Self, SymbolError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Set a property, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    /// Numeric value of a property, if it holds a number
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// A property that is present and not nil
    pub fn present(&self, name: &str) -> Option<&Value> {
        self.get(name).filter(|v| !v.is_nil())
    }

    pub fn marker_type(&self) -> Option<&str> {
        self.get(properties::MARKER_TYPE).and_then(Value::as_str)
    }

    /// Whether the marker is inline path data rather than an image file
    pub fn is_path_marker(&self) -> bool {
        self.marker_type() == Some(properties::PATH_MARKER_TYPE)
            && self.present(properties::MARKER_PATH).is_some()
    }

    /// Typed view of a resource property
    pub fn resource(&self, name: &str) -> Option<ResourceValue> {
        self.get(name).and_then(ResourceValue::from_value)
    }

    /// Typed view of `markerPath`
    pub fn marker_path(&self) -> Option<MarkerPath> {
        self.get(properties::MARKER_PATH)
            .and_then(MarkerPath::from_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl AsRef<[Symbol]> for Symbol {
    fn as_ref(&self) -> &[Symbol] {
        std::slice::from_ref(self)
    }
}

impl FromIterator<(String, Value)> for Symbol {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// Symbols as they arrive from JSON: nothing, one symbol or a list of them
///
/// A top-level `null` is no symbols at all, and `null` list entries are kept
/// out of the resulting symbol list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SymbolInput {
    Null,
    Single(Symbol),
    List(Vec<Option<Symbol>>),
}

impl SymbolInput {
    pub fn from_json(source: &str) -> Result<Self, SymbolError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        match self {
            Self::Null => vec![],
            Self::Single(symbol) => vec![symbol],
            Self::List(symbols) => symbols.into_iter().flatten().collect(),
        }
    }
}

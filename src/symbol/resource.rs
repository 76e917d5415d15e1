//! Typed views over resource-bearing property values

use std::collections::BTreeMap;

use super::function::FunctionDef;
use super::value::Value;

/// The value of a resource property (image, pattern or marker file)
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    Scalar(String),
    List(Vec<String>),
    Function(FunctionDef<ResourceValue>),
}

impl ResourceValue {
    /// Read a resource value out of a raw property value
    ///
    /// Returns None for absent values and for shapes a resource cannot take.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self::Scalar(s.clone())),
            Value::List(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect::<Option<Vec<_>>>()
                .map(Self::List),
            Value::Function(def) => def.filter_map(Self::from_value).map(Self::Function),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Scalar(s) => Value::String(s),
            Self::List(items) => Value::from(items),
            Self::Function(def) => Value::Function(def.map(Self::into_value)),
        }
    }

    /// Every resource string, expanding function-type stops in order
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Self::Scalar(s) => vec![s.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Function(def) => def.outputs().flat_map(Self::urls).collect(),
        }
    }

    /// Rewrite every resource string in place
    pub fn for_each_url_mut(&mut self, f: &mut impl FnMut(&mut String)) {
        match self {
            Self::Scalar(s) => f(s),
            Self::List(items) => items.iter_mut().for_each(|s| f(s)),
            Self::Function(def) => def.outputs_mut().for_each(|out| out.for_each_url_mut(&mut *f)),
        }
    }
}

/// One path of a path marker
#[derive(Debug, Clone, PartialEq)]
pub enum PathEntry {
    /// Bare path data
    Data(String),
    /// Path data with per-path attribute overrides
    Styled {
        data: String,
        attributes: BTreeMap<String, Value>,
    },
}

impl PathEntry {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Data(s.clone())),
            Value::Object(map) => {
                let data = map.get("path")?.as_str()?.to_string();
                let attributes = map
                    .iter()
                    .filter(|(k, _)| k.as_str() != "path")
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Some(Self::Styled { data, attributes })
            }
            _ => None,
        }
    }

    pub fn data(&self) -> &str {
        match self {
            Self::Data(data) | Self::Styled { data, .. } => data,
        }
    }

    /// Per-path attribute overrides, empty for bare path data
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &Value)> {
        let attributes = match self {
            Self::Data(_) => None,
            Self::Styled { attributes, .. } => Some(attributes),
        };
        attributes
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

/// The `markerPath` of a path marker symbol
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerPath {
    /// One or more paths, normalized to a list
    Paths(Vec<PathEntry>),
    Function(FunctionDef<MarkerPath>),
}

impl MarkerPath {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if s.is_empty() => None,
            Value::String(_) | Value::Object(_) => {
                PathEntry::from_value(value).map(|entry| Self::Paths(vec![entry]))
            }
            Value::List(items) => items
                .iter()
                .map(PathEntry::from_value)
                .collect::<Option<Vec<_>>>()
                .map(Self::Paths),
            Value::Function(def) => def.filter_map(Self::from_value).map(Self::Function),
            _ => None,
        }
    }

    /// Alternative path sets: one per stop for functions, itself otherwise
    pub fn variants(&self) -> Vec<&[PathEntry]> {
        match self {
            Self::Paths(entries) => vec![entries.as_slice()],
            Self::Function(def) => def.outputs().flat_map(Self::variants).collect(),
        }
    }
}

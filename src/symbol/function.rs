//! Function-type (zoom or attribute dependent) property definitions

use serde::{Deserialize, Serialize};

use super::value::Value;

/// One `[input, output]` pair of a function-type definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop<T>(pub Value, pub T);

impl<T> Stop<T> {
    pub fn input(&self) -> &Value {
        &self.0
    }

    pub fn output(&self) -> &T {
        &self.1
    }
}

/// A property whose value depends on zoom level or feature attributes
///
/// Never a final value: consumers expand it to its stop outputs first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef<T> {
    pub stops: Vec<Stop<T>>,

    /// Feature attribute driving the function (zoom when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// Interpolation kind, e.g. `interval`, `categorical`, `exponential`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,

    /// Fallback value, carried through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Box<Value>>,
}

impl<T> FunctionDef<T> {
    /// Create a definition from `(input, output)` pairs
    pub fn from_stops(stops: impl IntoIterator<Item = (Value, T)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(input, output)| Stop(input, output))
                .collect(),
            property: None,
            kind: None,
            base: None,
            default: None,
        }
    }

    /// Stop outputs in declaration order
    pub fn outputs(&self) -> impl Iterator<Item = &T> {
        self.stops.iter().map(Stop::output)
    }

    pub fn outputs_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.stops.iter_mut().map(|stop| &mut stop.1)
    }

    /// Convert the stop outputs, dropping stops whose output does not convert
    ///
    /// Each dropped stop is logged. Returns None when no stop survives.
    pub fn filter_map<U>(&self, mut f: impl FnMut(&T) -> Option<U>) -> Option<FunctionDef<U>> {
        let stops: Vec<_> = self
            .stops
            .iter()
            .filter_map(|stop| match f(&stop.1) {
                Some(output) => Some(Stop(stop.0.clone(), output)),
                None => {
                    log::warn!("dropping stop {} with unusable output", stop.0);
                    None
                }
            })
            .collect();
        if stops.is_empty() {
            return None;
        }

        Some(FunctionDef {
            stops,
            property: self.property.clone(),
            kind: self.kind.clone(),
            base: self.base,
            default: self.default.clone(),
        })
    }

    /// Convert every stop output infallibly
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> FunctionDef<U> {
        FunctionDef {
            stops: self
                .stops
                .into_iter()
                .map(|Stop(input, output)| Stop(input, f(output)))
                .collect(),
            property: self.property,
            kind: self.kind,
            base: self.base,
            default: self.default,
        }
    }
}

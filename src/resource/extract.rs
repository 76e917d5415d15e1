//! Enumeration of the external resources a set of symbols refers to

use std::borrow::Cow;

use serde::Serialize;

use crate::context::ResourceContext;
use crate::renderer::marker::marker_path_data_uri;
use crate::symbol::properties::{MARKER_HEIGHT, MARKER_WIDTH};
use crate::symbol::{MarkerPath, ResourceValue, Symbol, Value, RESOURCE_PROPERTIES};

use super::url::{convert_resource_url, extract_css_url, is_css_url};

/// Marker size used when the declared size is zoom dependent
pub const FUNCTION_SIZE_FALLBACK: f64 = 200.0;

/// A referenced resource and the size it is declared to render at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceDescriptor {
    pub url: String,
    pub width: Option<Value>,
    pub height: Option<Value>,
}

impl ResourceDescriptor {
    pub fn new(url: impl Into<String>, width: Option<Value>, height: Option<Value>) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// Collect the resources referenced by `symbols`
///
/// Symbols are visited from last to first. Within a symbol, resource
/// properties come in their fixed order, followed by the synthesized image
/// of a path marker. With `to_absolute` set, references are resolved
/// against the context's document location first.
///
/// Returns None for an empty symbol list.
pub fn get_external_resources(
    symbols: &[Symbol],
    to_absolute: bool,
    ctx: &ResourceContext,
) -> Option<Vec<ResourceDescriptor>> {
    if symbols.is_empty() {
        return None;
    }

    let mut resources = Vec::new();
    for symbol in symbols.iter().rev() {
        let symbol = if to_absolute {
            Cow::Owned(convert_resource_url(symbol, ctx))
        } else {
            Cow::Borrowed(symbol)
        };
        collect_symbol_resources(&symbol, ctx, &mut resources);
    }

    log::debug!(
        "found {} resources in {} symbols",
        resources.len(),
        symbols.len()
    );
    Some(resources)
}

fn collect_symbol_resources(
    symbol: &Symbol,
    ctx: &ResourceContext,
    resources: &mut Vec<ResourceDescriptor>,
) {
    for prop in RESOURCE_PROPERTIES.iter() {
        let Some(raw) = symbol.present(prop.name) else {
            continue;
        };
        let Some(value) = ResourceValue::from_value(raw) else {
            log::warn!("skipping malformed resource value in '{}': {}", prop.name, raw);
            continue;
        };

        let width = prop.width.and_then(|name| size_value(symbol, name));
        let height = prop.height.and_then(|name| size_value(symbol, name));
        for url in value.urls() {
            let url = if is_css_url(url) {
                extract_css_url(url)
            } else {
                url
            };
            log::trace!("{}: {}", prop.name, url);
            resources.push(ResourceDescriptor::new(url, width.clone(), height.clone()));
        }
    }

    if symbol.is_path_marker() {
        collect_marker_path(symbol, ctx, resources);
    }
}

fn collect_marker_path(
    symbol: &Symbol,
    ctx: &ResourceContext,
    resources: &mut Vec<ResourceDescriptor>,
) {
    let Some(path) = symbol.marker_path() else {
        log::warn!("skipping malformed markerPath");
        return;
    };
    let width = marker_size(symbol, MARKER_WIDTH);
    let height = marker_size(symbol, MARKER_HEIGHT);

    let variants: Vec<&MarkerPath> = match &path {
        MarkerPath::Function(def) => def.outputs().collect(),
        MarkerPath::Paths(_) => vec![&path],
    };
    for variant in variants {
        match marker_path_data_uri(symbol, variant, ctx) {
            Some(uri) => {
                resources.push(ResourceDescriptor::new(uri, width.clone(), height.clone()))
            }
            None => log::debug!("markerPath variant produced no image"),
        }
    }
}

fn size_value(symbol: &Symbol, name: &str) -> Option<Value> {
    symbol
        .get(name)
        .filter(|v| !matches!(v, Value::Null))
        .cloned()
}

/// Marker size, falling back to a fixed size for zoom-dependent values
fn marker_size(symbol: &Symbol, name: &str) -> Option<Value> {
    size_value(symbol, name).map(|v| {
        if v.is_function_definition() {
            Value::Number(FUNCTION_SIZE_FALLBACK)
        } else {
            v
        }
    })
}

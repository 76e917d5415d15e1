//! Rendering of path markers into embeddable SVG images
//!
//! A path marker carries its shape as inline path data instead of an image
//! file. To hand it to an image-based renderer the path data is wrapped in a
//! tiny SVG document, styled from the symbol's marker line and fill fields,
//! and embedded as a base64 `data:` URI.

use crate::context::ResourceContext;
use crate::symbol::properties::{MARKER_OPACITY, MARKER_PATH_HEIGHT, MARKER_PATH_WIDTH, OPACITY};
use crate::symbol::{MarkerPath, PathEntry, Symbol, Value};

use super::style::translate_to_svg_styles;
use super::svg::{Element, SvgDocument};

/// Render the symbol's own `markerPath` as a data URI
///
/// Returns None when the symbol has no renderable `markerPath`.
pub fn get_marker_path_base64(symbol: &Symbol, ctx: &ResourceContext) -> Option<String> {
    let path = symbol.marker_path()?;
    marker_path_data_uri(symbol, &path, ctx)
}

/// Render `path` with the styling and geometry of `symbol`
///
/// Used for the individual stop outputs of a zoom-dependent `markerPath`.
pub fn marker_path_data_uri(
    symbol: &Symbol,
    path: &MarkerPath,
    ctx: &ResourceContext,
) -> Option<String> {
    match path {
        MarkerPath::Paths(entries) => {
            Some(build_marker_document(symbol, entries, ctx).to_data_uri())
        }
        MarkerPath::Function(_) => {
            log::warn!("markerPath is a function-type definition; expand its stops first");
            None
        }
    }
}

/// Build the SVG document for a set of path entries
///
/// Attributes given on a path entry take precedence over the styles
/// translated from the symbol; the styles only fill in what the entry leaves
/// unset. Entry keys that are not XML names are dropped.
pub fn build_marker_document(
    symbol: &Symbol,
    entries: &[PathEntry],
    ctx: &ResourceContext,
) -> SvgDocument {
    let styles = translate_to_svg_styles(symbol, ctx).attributes();

    let mut doc = SvgDocument::new();
    let root = doc.root_mut();

    let opacity = combined_opacity(symbol);
    if opacity < 1.0 {
        root.set_attr("opacity", opacity.to_string());
    }

    if let (Some(w), Some(h)) = (
        view_box_dimension(symbol.get(MARKER_PATH_WIDTH)),
        view_box_dimension(symbol.get(MARKER_PATH_HEIGHT)),
    ) {
        root.set_attr("viewBox", format!("0 0 {} {}", w, h));
    }
    root.set_attr("preserveAspectRatio", "none");
    root.push_child(Element::new("defs"));

    for entry in entries {
        let mut path = Element::new("path");
        for (name, value) in entry.overrides() {
            if let Some(value) = value.to_attribute() {
                path.set_attr(name, value);
            }
        }
        for (name, value) in &styles {
            if !path.has_attr(name) {
                path.set_attr(*name, value.clone());
            }
        }
        path.set_attr("d", entry.data());
        root.push_child(path);
    }

    doc
}

/// `markerOpacity` times `opacity`, each defaulting to 1
fn combined_opacity(symbol: &Symbol) -> f64 {
    let marker = symbol.number(MARKER_OPACITY).unwrap_or(1.0);
    marker * symbol.number(OPACITY).unwrap_or(1.0)
}

/// A usable viewBox dimension: a non-zero number or a non-empty string
fn view_box_dimension(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) if *n != 0.0 => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

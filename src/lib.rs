//! Symbol Resources - external resource resolution for map symbols
//!
//! This library finds the images, fill patterns, line patterns and path
//! markers a map symbol refers to, rewrites relative references into
//! absolute URLs, and renders path markers as embeddable SVG images.
//!
//! # Example
//!
//! ```rust
//! use symbol_resources::{get_external_resources, ResourceContext, Symbol};
//!
//! let symbol = Symbol::from_json(r#"{"markerFile": "icons/a.png", "markerWidth": 20}"#).unwrap();
//! let ctx = ResourceContext::browser("http://example.com/maps/index.html");
//!
//! let resources = get_external_resources(symbol.as_ref(), true, &ctx).unwrap();
//! assert_eq!(resources[0].url, "http://example.com/maps/icons/a.png");
//! ```

pub mod context;
pub mod error;
pub mod renderer;
pub mod resource;
pub mod symbol;

pub use context::{ContextError, ResourceContext};
pub use error::SymbolError;
pub use renderer::{get_marker_path_base64, translate_to_svg_styles, SvgStyles};
pub use resource::{
    convert_resource_url, convert_resource_url_in_place, get_external_resources,
    ResourceDescriptor,
};
pub use symbol::{FunctionDef, MarkerPath, ResourceValue, Symbol, SymbolInput, Value};

/// Collect the resources of symbols given as JSON
///
/// Accepts `null`, a single symbol object or a list of symbols; `null`
/// entries in a list are skipped. Returns `Ok(None)` when there are no
/// symbols.
///
/// # Example
///
/// ```rust
/// use symbol_resources::{resources_from_json, ResourceContext};
///
/// let resources = resources_from_json(
///     r#"[{"markerFile": "a.png"}, {"polygonPatternFile": "b.png"}]"#,
///     false,
///     &ResourceContext::default(),
/// )
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(resources[0].url, "b.png");
/// assert_eq!(resources[1].url, "a.png");
/// ```
pub fn resources_from_json(
    source: &str,
    to_absolute: bool,
    ctx: &ResourceContext,
) -> Result<Option<Vec<ResourceDescriptor>>, SymbolError> {
    let symbols = SymbolInput::from_json(source)?.into_symbols();
    Ok(get_external_resources(&symbols, to_absolute, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_from_json_null_and_empty() {
        let ctx = ResourceContext::default();
        assert_eq!(resources_from_json("[]", false, &ctx).unwrap(), None);
        assert_eq!(resources_from_json("[null]", false, &ctx).unwrap(), None);
        assert_eq!(resources_from_json("null", false, &ctx).unwrap(), None);
        assert_eq!(resources_from_json(" null ", true, &ctx).unwrap(), None);
    }

    #[test]
    fn test_resources_from_json_invalid() {
        let result = resources_from_json("{\"markerFile\": ", false, &ResourceContext::default());
        assert!(matches!(result, Err(SymbolError::Json(_))));
    }

    #[test]
    fn test_resources_from_json_absolute() {
        let ctx = ResourceContext::browser("http://example.com/maps/index.html");
        let resources = resources_from_json(r#"{"markerFile": "/a.png"}"#, true, &ctx)
            .unwrap()
            .unwrap();
        assert_eq!(resources[0].url, "http://example.com/a.png");
    }
}

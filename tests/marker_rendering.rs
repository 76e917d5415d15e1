//! Integration tests for path marker images

use pretty_assertions::assert_eq;

use symbol_resources::renderer::svg::decode_data_uri;
use symbol_resources::{
    get_external_resources, get_marker_path_base64, ResourceContext, Symbol, Value,
};

fn decode(uri: &str) -> String {
    decode_data_uri(uri).expect("svg data uri")
}

#[test]
fn test_marker_markup() {
    let symbol = Symbol::new()
        .with("markerType", "path")
        .with("markerPath", "M0 0 L10 10")
        .with("markerPathWidth", 10.0)
        .with("markerPathHeight", 10.0)
        .with("markerFill", "#f00")
        .with("markerLineWidth", 2.0)
        .with("markerOpacity", 0.5);

    let uri = get_marker_path_base64(&symbol, &ResourceContext::default()).unwrap();
    assert!(uri.starts_with("data:image/svg+xml;base64,"));

    insta::assert_snapshot!(decode(&uri), @r###"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" opacity="0.5" viewBox="0 0 10 10" preserveAspectRatio="none"><defs></defs><path stroke-width="2" stroke-linecap="butt" stroke-linejoin="round" fill="#f00" d="M0 0 L10 10"></path></svg>"###);
}

#[test]
fn test_legacy_line_cap_in_marker() {
    let symbol = Symbol::new()
        .with("markerType", "path")
        .with("markerPath", "M0 0 L10 10");
    let ctx = ResourceContext::default().with_legacy_line_cap_quirk(true);

    let svg = decode(&get_marker_path_base64(&symbol, &ctx).unwrap());
    assert!(svg.contains(r#"stroke-linecap="flat""#));
}

#[test]
fn test_zero_width_outline_is_invisible() {
    let symbol = Symbol::new()
        .with("markerType", "path")
        .with("markerPath", "M0 0 L10 10")
        .with("markerLineWidth", 0.0)
        .with("markerLineOpacity", 0.9);

    let svg = decode(&get_marker_path_base64(&symbol, &ResourceContext::default()).unwrap());
    assert!(svg.contains(r#"stroke-opacity="0""#));
    assert!(!svg.contains(r#"stroke-opacity="0.9""#));
}

#[test]
fn test_attribute_values_are_escaped() {
    let symbol = Symbol::from_json(
        r#"{"markerType": "path", "markerPath": [{"path": "M0 0", "class": "a\"b<c"}]}"#,
    )
    .unwrap();

    let svg = decode(&get_marker_path_base64(&symbol, &ResourceContext::default()).unwrap());
    assert!(svg.contains(r#"class="a&quot;b&lt;c""#));
}

#[test]
fn test_zoom_dependent_marker_path() {
    let symbol = Symbol::from_json(
        r#"{
            "markerType": "path",
            "markerPath": {"stops": [[1, "M0 0 L5 5"], [10, "M0 0 L10 10"]]},
            "markerWidth": 16,
            "markerHeight": {"stops": [[1, 8], [10, 16]]}
        }"#,
    )
    .unwrap();

    let resources = get_external_resources(symbol.as_ref(), false, &ResourceContext::default())
        .unwrap();
    assert_eq!(resources.len(), 2);
    assert!(decode(&resources[0].url).contains(r#"d="M0 0 L5 5""#));
    assert!(decode(&resources[1].url).contains(r#"d="M0 0 L10 10""#));
    for resource in &resources {
        assert_eq!(resource.width, Some(Value::Number(16.0)));
        assert_eq!(resource.height, Some(Value::Number(200.0)));
    }
}

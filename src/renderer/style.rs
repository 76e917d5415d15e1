//! Translation of symbol style fields into SVG stroke and fill attributes

use std::fmt;

use serde::Serialize;

use crate::context::ResourceContext;
use crate::symbol::properties::{
    MARKER_FILL, MARKER_FILL_OPACITY, MARKER_LINE_COLOR, MARKER_LINE_OPACITY, MARKER_LINE_WIDTH,
};
use crate::symbol::{Symbol, Value};

/// Shape drawn at the ends of open strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    /// Legacy engine spelling of a square-off cap
    Flat,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Flat => "flat",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Stroke attributes of a marker outline
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StrokeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<Value>,
    /// Never set by translation; present so callers can add a dash pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    pub stroke_linecap: LineCap,
    pub stroke_linejoin: LineJoin,
}

/// Fill attributes of a marker body
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FillStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<Value>,
}

/// SVG attribute groups derived from a symbol
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SvgStyles {
    pub stroke: StrokeStyle,
    pub fill: FillStyle,
}

impl StrokeStyle {
    /// `(name, value)` pairs for every attribute that is set
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        push_value(&mut attrs, "stroke", self.stroke.as_ref());
        push_value(&mut attrs, "stroke-width", self.stroke_width.as_ref());
        push_value(&mut attrs, "stroke-opacity", self.stroke_opacity.as_ref());
        if let Some(dash) = &self.stroke_dasharray {
            attrs.push(("stroke-dasharray", dash.clone()));
        }
        attrs.push(("stroke-linecap", self.stroke_linecap.as_str().to_string()));
        attrs.push(("stroke-linejoin", self.stroke_linejoin.as_str().to_string()));
        attrs
    }
}

impl FillStyle {
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        push_value(&mut attrs, "fill", self.fill.as_ref());
        push_value(&mut attrs, "fill-opacity", self.fill_opacity.as_ref());
        attrs
    }
}

impl SvgStyles {
    /// Stroke attributes followed by fill attributes, absent values omitted
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = self.stroke.attributes();
        attrs.extend(self.fill.attributes());
        attrs
    }
}

fn push_value(attrs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&Value>) {
    if let Some(v) = value.and_then(Value::to_attribute) {
        attrs.push((name, v));
    }
}

/// Map a symbol's marker line and fill fields onto SVG attributes
pub fn translate_to_svg_styles(symbol: &Symbol, ctx: &ResourceContext) -> SvgStyles {
    let field = |name: &str| symbol.get(name).filter(|v| !matches!(v, Value::Null)).cloned();

    let mut stroke = StrokeStyle {
        stroke: field(MARKER_LINE_COLOR),
        stroke_width: field(MARKER_LINE_WIDTH),
        stroke_opacity: field(MARKER_LINE_OPACITY),
        stroke_dasharray: None,
        stroke_linecap: LineCap::Butt,
        stroke_linejoin: LineJoin::Round,
    };

    if stroke.stroke_linecap == LineCap::Butt && ctx.legacy_line_cap_quirk {
        stroke.stroke_linecap = LineCap::Flat;
    }

    // Zero-width strokes still leave a hairline on some renderers
    if stroke.stroke_width.as_ref().and_then(Value::as_f64) == Some(0.0) {
        stroke.stroke_opacity = Some(Value::Number(0.0));
    }

    let fill = FillStyle {
        fill: field(MARKER_FILL),
        fill_opacity: field(MARKER_FILL_OPACITY),
    };

    SvgStyles { stroke, fill }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(attrs: &[(&'static str, String)]) -> Vec<&'static str> {
        attrs.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn test_field_mapping() {
        let symbol = Symbol::new()
            .with("markerLineColor", "#000")
            .with("markerLineWidth", 2.0)
            .with("markerLineOpacity", 0.5)
            .with("markerFill", "#f00")
            .with("markerFillOpacity", 0.8);
        let styles = translate_to_svg_styles(&symbol, &ResourceContext::default());

        assert_eq!(styles.stroke.stroke, Some(Value::from("#000")));
        assert_eq!(styles.stroke.stroke_width, Some(Value::Number(2.0)));
        assert_eq!(styles.stroke.stroke_opacity, Some(Value::Number(0.5)));
        assert_eq!(styles.stroke.stroke_dasharray, None);
        assert_eq!(styles.stroke.stroke_linecap, LineCap::Butt);
        assert_eq!(styles.stroke.stroke_linejoin, LineJoin::Round);
        assert_eq!(styles.fill.fill, Some(Value::from("#f00")));
        assert_eq!(styles.fill.fill_opacity, Some(Value::Number(0.8)));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let symbol = Symbol::new().with("markerFill", "#f00").with("markerLineColor", Value::Null);
        let styles = translate_to_svg_styles(&symbol, &ResourceContext::default());

        assert_eq!(
            names(&styles.attributes()),
            vec!["stroke-linecap", "stroke-linejoin", "fill"]
        );
    }

    #[test]
    fn test_zero_width_forces_zero_opacity() {
        let symbol = Symbol::new()
            .with("markerLineWidth", 0.0)
            .with("markerLineOpacity", 1.0);
        let styles = translate_to_svg_styles(&symbol, &ResourceContext::default());
        assert_eq!(styles.stroke.stroke_opacity, Some(Value::Number(0.0)));

        let symbol = Symbol::new().with("markerLineWidth", 0.0);
        let styles = translate_to_svg_styles(&symbol, &ResourceContext::default());
        assert_eq!(styles.stroke.stroke_opacity, Some(Value::Number(0.0)));
    }

    #[test]
    fn test_legacy_engine_uses_flat_cap() {
        let ctx = ResourceContext::default().with_legacy_line_cap_quirk(true);
        let styles = translate_to_svg_styles(&Symbol::new(), &ctx);
        assert_eq!(styles.stroke.stroke_linecap, LineCap::Flat);
        assert!(styles
            .attributes()
            .contains(&("stroke-linecap", "flat".to_string())));
    }

    #[test]
    fn test_serialized_groups_skip_absent_values() {
        let symbol = Symbol::new().with("markerLineWidth", 3.0);
        let styles = translate_to_svg_styles(&symbol, &ResourceContext::default());
        let json = serde_json::to_value(&styles).unwrap();

        assert_eq!(json["stroke"]["stroke-width"], serde_json::json!(3.0));
        assert_eq!(json["stroke"]["stroke-linecap"], serde_json::json!("butt"));
        assert!(json["stroke"].get("stroke").is_none());
        assert!(json["fill"].as_object().unwrap().is_empty());
    }
}

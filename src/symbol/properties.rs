//! Names of the symbol properties this crate reads

/// A property that points at an external resource, with its size slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceProperty {
    pub name: &'static str,
    pub width: Option<&'static str>,
    pub height: Option<&'static str>,
}

impl ResourceProperty {
    const fn new(
        name: &'static str,
        width: Option<&'static str>,
        height: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            width,
            height,
        }
    }
}

/// Resource-bearing properties, in the order resources are reported
pub const RESOURCE_PROPERTIES: [ResourceProperty; 5] = [
    ResourceProperty::new("markerFile", Some("markerWidth"), Some("markerHeight")),
    ResourceProperty::new("polygonPatternFile", None, None),
    ResourceProperty::new("linePatternFile", None, Some("lineWidth")),
    ResourceProperty::new("markerFillPatternFile", None, None),
    ResourceProperty::new("markerLinePatternFile", None, Some("markerLineWidth")),
];

pub const MARKER_TYPE: &str = "markerType";
pub const MARKER_PATH: &str = "markerPath";
pub const MARKER_PATH_WIDTH: &str = "markerPathWidth";
pub const MARKER_PATH_HEIGHT: &str = "markerPathHeight";
pub const MARKER_WIDTH: &str = "markerWidth";
pub const MARKER_HEIGHT: &str = "markerHeight";
pub const MARKER_OPACITY: &str = "markerOpacity";
pub const OPACITY: &str = "opacity";

pub const MARKER_LINE_COLOR: &str = "markerLineColor";
pub const MARKER_LINE_WIDTH: &str = "markerLineWidth";
pub const MARKER_LINE_OPACITY: &str = "markerLineOpacity";
pub const MARKER_FILL: &str = "markerFill";
pub const MARKER_FILL_OPACITY: &str = "markerFillOpacity";

/// Marker type of symbols whose marker is inline vector path data
pub const PATH_MARKER_TYPE: &str = "path";

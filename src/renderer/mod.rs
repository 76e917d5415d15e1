//! SVG rendering for path markers
//!
//! Translates symbol styling into SVG attributes and wraps inline marker
//! path data into standalone images embedded as `data:` URIs.

pub mod marker;
pub mod style;
pub mod svg;

pub use marker::get_marker_path_base64;
pub use style::{translate_to_svg_styles, SvgStyles};

//! Minimal SVG document builder
//!
//! Elements hold their attributes in insertion order so the emitted markup
//! is deterministic. Attribute values are escaped on output; attribute names
//! that are not XML names are refused when set.

use std::borrow::Cow;
use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// An element with ordered attributes and child elements
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            children: vec![],
        }
    }

    /// Add an attribute, builder style
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing an earlier value of the same name in place
    ///
    /// Names that are not valid XML names are logged and ignored.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !is_xml_name(&name) {
            log::warn!("ignoring invalid attribute name {:?} on <{}>", name, self.name);
            return;
        }
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serialize into `out`, always with an explicit closing tag
    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            // Writing into a String cannot fail
            let _ = write!(out, r#" {}="{}""#, name, escape_attribute(value));
        }
        out.push('>');
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// A standalone SVG image
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    root: Element,
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgDocument {
    /// Root `<svg>` element carrying the version and namespace header
    pub fn new() -> Self {
        Self {
            root: Element::new("svg")
                .attr("version", "1.1")
                .attr("xmlns", SVG_NAMESPACE),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn to_markup(&self) -> String {
        self.root.to_markup()
    }

    /// Base64 `data:` URI embedding the markup
    pub fn to_data_uri(&self) -> String {
        format!(
            "{}{}",
            SVG_DATA_URI_PREFIX,
            STANDARD.encode(self.to_markup().as_bytes())
        )
    }
}

/// Escape a string for use inside a double-quoted attribute value
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Whether `name` can be written as an attribute name
///
/// Letters, digits, `_`, `:`, `-` and `.`, not starting with a digit, `-` or `.`.
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

/// Decode the markup out of a `data:image/svg+xml;base64,` URI
pub fn decode_data_uri(uri: &str) -> Option<String> {
    let payload = uri.strip_prefix(SVG_DATA_URI_PREFIX)?;
    let bytes = STANDARD.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_markup() {
        let el = Element::new("path").attr("d", "M0 0").attr("fill", "red");
        assert_eq!(el.to_markup(), r#"<path d="M0 0" fill="red"></path>"#);
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut el = Element::new("path").attr("a", "1").attr("b", "2");
        el.set_attr("a", "3");
        assert_eq!(el.to_markup(), r#"<path a="3" b="2"></path>"#);
        assert_eq!(el.get_attr("a"), Some("3"));
    }

    #[test]
    fn test_attribute_escaping() {
        assert_eq!(escape_attribute("plain"), "plain");
        assert_eq!(
            escape_attribute(r#"a<b & "c" 'd'>"#),
            "a&lt;b &amp; &quot;c&quot; &apos;d&apos;&gt;"
        );
        let el = Element::new("g").attr("title", "x\"y");
        assert_eq!(el.to_markup(), r#"<g title="x&quot;y"></g>"#);
    }

    #[test]
    fn test_xml_names() {
        assert!(is_xml_name("stroke-width"));
        assert!(is_xml_name("xlink:href"));
        assert!(is_xml_name("_x.1"));
        assert!(!is_xml_name(""));
        assert!(!is_xml_name("1x"));
        assert!(!is_xml_name("-x"));
        assert!(!is_xml_name(r#"x="1" onload"#));
        assert!(!is_xml_name("a>b"));
    }

    #[test]
    fn test_invalid_attribute_name_ignored() {
        let el = Element::new("path")
            .attr(r#"x="1" onload"#, "evil")
            .attr("d", "M0 0");
        assert_eq!(el.to_markup(), r#"<path d="M0 0"></path>"#);
        assert!(!el.has_attr(r#"x="1" onload"#));
    }

    #[test]
    fn test_document_header_and_children() {
        let mut doc = SvgDocument::new();
        doc.root_mut().push_child(Element::new("defs"));
        assert_eq!(
            doc.to_markup(),
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg"><defs></defs></svg>"#
        );
    }

    #[test]
    fn test_data_uri_decodes_back() {
        let doc = SvgDocument::new();
        let uri = doc.to_data_uri();
        assert!(uri.starts_with(SVG_DATA_URI_PREFIX));
        assert_eq!(decode_data_uri(&uri), Some(doc.to_markup()));
        assert_eq!(decode_data_uri("data:image/png;base64,AAAA"), None);
    }
}

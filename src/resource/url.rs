//! Rewriting of relative resource references into absolute URLs
//!
//! Resolution is purely textual: the base location is split on `/` and the
//! reference's segments are pushed onto it, popping on `..`. Query strings,
//! fragments and protocol-relative references get no special treatment.

use std::borrow::Cow;

use crate::context::ResourceContext;
use crate::symbol::{ResourceValue, Symbol, Value, RESOURCE_PROPERTIES};

const EMBED_PREFIX: &str = "data:";
const CSS_URL_PREFIX: &str = "url(";

/// Whether `url` already names an absolute http(s) or file location
pub fn is_url(url: &str) -> bool {
    ["http:/", "https:", "file:/"]
        .iter()
        .any(|head| url.starts_with(head))
}

/// Whether `url` embeds its content as a `data:` URI
pub fn is_embedded(url: &str) -> bool {
    url.len() > EMBED_PREFIX.len() && url.starts_with(EMBED_PREFIX)
}

/// Whether `value` is wrapped in a CSS `url(...)` function
pub fn is_css_url(value: &str) -> bool {
    value.starts_with(CSS_URL_PREFIX)
}

/// Strip a CSS `url(...)` wrapper, with or without quotes
///
/// Values that are not wrapped are returned unchanged.
pub fn extract_css_url(value: &str) -> &str {
    let inner = match value
        .get(..CSS_URL_PREFIX.len())
        .filter(|head| head.eq_ignore_ascii_case(CSS_URL_PREFIX))
        .and_then(|_| value[CSS_URL_PREFIX.len()..].strip_suffix(')'))
    {
        Some(inner) => inner,
        None => return value,
    };

    for quote in ['"', '\''] {
        if let Some(unquoted) = inner
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return unquoted;
        }
    }
    inner
}

/// Resolve `reference` against the `base` location
///
/// A reference starting with `/` is site-absolute and keeps only the
/// scheme and host of the base.
pub fn resolve_relative(base: &str, reference: &str) -> String {
    let mut stack: Vec<&str> = base.split('/').collect();

    if reference.starts_with('/') {
        let origin = stack.iter().take(3).copied().collect::<Vec<_>>().join("/");
        return origin + reference;
    }

    // Drop the current file name (or the empty segment after a trailing slash)
    stack.pop();
    for part in reference.split('/') {
        match part {
            "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(part),
        }
    }
    stack.join("/")
}

/// Absolutize a single resource reference
///
/// Unwraps `url(...)`, then leaves absolute and embedded references alone.
pub fn convert_url<'a>(url: &'a str, ctx: &ResourceContext) -> Cow<'a, str> {
    let url = if is_css_url(url) {
        extract_css_url(url)
    } else {
        url
    };

    if is_url(url) || is_embedded(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(resolve_relative(&ctx.base_url, url))
    }
}

/// Absolutize every reference of a resource value, including stop outputs
pub fn convert_resource_value(value: &mut ResourceValue, ctx: &ResourceContext) {
    value.for_each_url_mut(&mut |url| {
        let converted = convert_url(url, ctx).into_owned();
        if converted != *url {
            log::trace!("resolved '{}' to '{}'", url, converted);
            *url = converted;
        }
    });
}

/// Absolutize the references held by a raw property value in place
///
/// Function stops whose output holds no resource are left as they are.
/// Returns false when the value holds no resource at all.
fn convert_raw_in_place(value: &mut Value, ctx: &ResourceContext) -> bool {
    if let Value::Function(def) = value {
        let mut converted = false;
        for output in def.outputs_mut() {
            if convert_raw_in_place(output, ctx) {
                converted = true;
            } else {
                log::warn!("leaving stop output {} unresolved", output);
            }
        }
        return converted;
    }

    let Some(mut resource) = ResourceValue::from_value(value) else {
        return false;
    };
    convert_resource_value(&mut resource, ctx);
    *value = resource.into_value();
    true
}

/// Absolutize the resource properties of `symbol` in place
///
/// Does nothing in a headless context, where there is no document location
/// to anchor against.
pub fn convert_resource_url_in_place(symbol: &mut Symbol, ctx: &ResourceContext) {
    if ctx.is_headless {
        return;
    }

    for prop in RESOURCE_PROPERTIES.iter() {
        let Some(mut value) = symbol.present(prop.name).cloned() else {
            continue;
        };
        if !convert_raw_in_place(&mut value, ctx) {
            log::warn!("skipping malformed resource value in '{}': {}", prop.name, value);
            continue;
        }
        symbol.set(prop.name, value);
    }
}

/// Return a copy of `symbol` with its resource properties absolutized
pub fn convert_resource_url(symbol: &Symbol, ctx: &ResourceContext) -> Symbol {
    let mut converted = symbol.clone();
    convert_resource_url_in_place(&mut converted, ctx);
    converted
}

/// Absolutize a raw property value, returning None if it holds no resource
pub fn convert_value(value: &Value, ctx: &ResourceContext) -> Option<Value> {
    let mut value = value.clone();
    convert_raw_in_place(&mut value, ctx).then_some(value)
}

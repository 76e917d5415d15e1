//! Host environment description for resource resolution
//!
//! Where the resolver runs decides how references are treated: the document
//! location relative URLs are anchored at, whether there is a document at
//! all, and whether the vector renderer is a legacy engine with its own
//! line-cap vocabulary. All of it is passed in explicitly, either built in
//! code or loaded from a TOML file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a context file
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failed to read context file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse context TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Environment the symbols are resolved in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContext {
    /// Location of the current document, the anchor for relative URLs
    pub base_url: String,

    /// Renderer lacks native SVG line caps and calls a butt cap "flat"
    pub legacy_line_cap_quirk: bool,

    /// No browsing context; URL absolutization is skipped entirely
    pub is_headless: bool,
}

/// TOML structure for deserializing contexts
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TomlContext {
    base_url: Option<String>,
    legacy_line_cap_quirk: Option<bool>,
    is_headless: Option<bool>,
}

impl Default for ResourceContext {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            legacy_line_cap_quirk: false,
            is_headless: true,
        }
    }
}

impl ResourceContext {
    /// Create a headless context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a browsing context anchored at the given document location
    pub fn browser(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Load a context from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ContextError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a context from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ContextError> {
        let parsed: TomlContext = toml::from_str(content)?;
        let base_url = parsed.base_url.unwrap_or_default();

        Ok(ResourceContext {
            // A document location implies a browsing context unless stated otherwise
            is_headless: parsed.is_headless.unwrap_or(base_url.is_empty()),
            legacy_line_cap_quirk: parsed.legacy_line_cap_quirk.unwrap_or(false),
            base_url,
        })
    }

    /// Anchor relative URLs at this location; implies a browsing context
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.is_headless = false;
        self
    }

    /// Set whether the legacy line-cap substitution applies
    pub fn with_legacy_line_cap_quirk(mut self, quirk: bool) -> Self {
        self.legacy_line_cap_quirk = quirk;
        self
    }

    /// Set whether there is no browsing context
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.is_headless = headless;
        self
    }
}

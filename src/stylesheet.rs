//! CSS stylesheets embedded in the SVG `<defs>`
//!
//! A stylesheet is a list of selector rules. Rules load from TOML so that a document's
//! classes can be themed without touching the renderer:
//!
//! ```toml
//! [[rules]]
//! selector = ".title"
//!
//! [rules.properties]
//! font-size = "20px"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One CSS rule. Properties are kept sorted so output is stable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// An ordered set of CSS rules
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    pub rules: Vec<StyleRule>,
}

/// Typography and helper classes available to every document by default
const DEFAULT_RULES: &str = r#"
[[rules]]
selector = ".sans"
[rules.properties]
font-family = '-apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif, "Apple Color Emoji", "Segoe UI Emoji"'

[[rules]]
selector = ".mono"
[rules.properties]
font-family = 'ui-monospace, SFMono-Regular, "SF Mono", Menlo, Consolas, "Liberation Mono", monospace'
font-size = "12px"
letter-spacing = "-0.5px"

[[rules]]
selector = ".bold"
[rules.properties]
font-weight = "500"

[[rules]]
selector = ".medium"
[rules.properties]
font-size = "16px"

[[rules]]
selector = ".small"
[rules.properties]
font-size = "14px"

[[rules]]
selector = ".smaller"
[rules.properties]
font-size = "12px"

[[rules]]
selector = ".pre"
[rules.properties]
white-space = "pre"

[[rules]]
selector = ".glow"
[rules.properties]
paint-order = "stroke"
"#;

impl StyleSheet {
    /// A stylesheet without rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        Ok(toml::from_str(content)?)
    }

    pub fn add_rule(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    /// Find the first rule for a selector
    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    /// Render as a `<style>` element
    pub fn to_svg(&self) -> String {
        let mut css = String::from("<style>");
        for rule in &self.rules {
            css.push_str(&format!("\n    {} {{", rule.selector));
            for (name, value) in &rule.properties {
                css.push_str(&format!("\n        {name}: {value};"));
            }
            css.push_str("\n    }");
        }
        css.push_str("\n</style>");
        css
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_RULES).expect("Default stylesheet should be valid TOML")
    }
}

//! Configuration for one render pass

use std::fmt;
use std::sync::Arc;

use crate::layout::BoxNode;
use crate::style::Style;
use crate::stylesheet::StyleSheet;

use super::clip::ClipPathRegistry;

/// Per-node style override, called once per visited node with its depth
pub type StyleFn = Arc<dyn Fn(&BoxNode, usize, &mut ClipPathRegistry) -> Style + Send + Sync>;

/// Per-node markup override. `Some` non-empty markup replaces the node and its subtree.
pub type RenderFn =
    Arc<dyn Fn(&BoxNode, usize, &mut ClipPathRegistry) -> Option<String> + Send + Sync>;

/// Configuration options for SVG output
#[derive(Clone)]
pub struct RenderOptions {
    /// Canvas width, integer-formatted in the `width` attribute
    pub width: f64,

    /// Canvas height, integer-formatted in the `height` attribute
    pub height: f64,

    /// Explicit viewBox; defaults to `0 0 {width} {height}`
    pub view_box: Option<String>,

    /// CSS emitted in a `<style>` element inside `<defs>`
    pub stylesheet: Option<StyleSheet>,

    /// Prepend `<?xml ...?>`
    pub include_xml_declaration: bool,

    /// Emit the SVG `xmlns` attribute
    pub namespace: bool,

    /// Emitted verbatim when non-empty
    pub preserve_aspect_ratio: String,

    /// Full-canvas background rectangle fill
    pub background_color: Option<String>,

    /// Extra `<defs>` children such as markers or gradients, written verbatim
    pub definitions: Vec<String>,

    pub style_fn: Option<StyleFn>,

    pub render_fn: Option<RenderFn>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            view_box: None,
            stylesheet: Some(StyleSheet::default()),
            include_xml_declaration: false,
            namespace: true,
            preserve_aspect_ratio: "xMidYMid meet".to_string(),
            background_color: None,
            definitions: vec![],
            style_fn: None,
            render_fn: None,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("view_box", &self.view_box)
            .field("stylesheet", &self.stylesheet)
            .field("include_xml_declaration", &self.include_xml_declaration)
            .field("namespace", &self.namespace)
            .field("preserve_aspect_ratio", &self.preserve_aspect_ratio)
            .field("background_color", &self.background_color)
            .field("definitions", &self.definitions)
            .field("style_fn", &self.style_fn.is_some())
            .field("render_fn", &self.render_fn.is_some())
            .finish()
    }
}

impl RenderOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the given canvas size and everything else defaulted
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_view_box(mut self, view_box: impl Into<String>) -> Self {
        self.view_box = Some(view_box.into());
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: StyleSheet) -> Self {
        self.stylesheet = Some(stylesheet);
        self
    }

    pub fn without_stylesheet(mut self) -> Self {
        self.stylesheet = None;
        self
    }

    pub fn with_xml_declaration(mut self, include: bool) -> Self {
        self.include_xml_declaration = include;
        self
    }

    pub fn with_namespace(mut self, namespace: bool) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_preserve_aspect_ratio(mut self, value: impl Into<String>) -> Self {
        self.preserve_aspect_ratio = value.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_definition(mut self, markup: impl Into<String>) -> Self {
        self.definitions.push(markup.into());
        self
    }

    pub fn with_style_fn(
        mut self,
        f: impl Fn(&BoxNode, usize, &mut ClipPathRegistry) -> Style + Send + Sync + 'static,
    ) -> Self {
        self.style_fn = Some(Arc::new(f));
        self
    }

    pub fn with_render_fn(
        mut self,
        f: impl Fn(&BoxNode, usize, &mut ClipPathRegistry) -> Option<String>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.render_fn = Some(Arc::new(f));
        self
    }

    /// The viewBox attribute value
    pub fn resolved_view_box(&self) -> String {
        match &self.view_box {
            Some(vb) if !vb.is_empty() => vb.clone(),
            _ => format!("0 0 {:.0} {:.0}", self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.width, 800.0);
        assert_eq!(options.height, 600.0);
        assert!(options.stylesheet.is_some());
        assert!(!options.include_xml_declaration);
        assert!(options.namespace);
        assert_eq!(options.preserve_aspect_ratio, "xMidYMid meet");
        assert!(options.style_fn.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let options = RenderOptions::new()
            .with_size(200.0, 100.0)
            .with_view_box("-10 -10 220 120")
            .without_stylesheet()
            .with_xml_declaration(true)
            .with_namespace(false)
            .with_preserve_aspect_ratio("none")
            .with_background("#fff")
            .with_style_fn(|_, _, _| Style::new());

        assert_eq!(options.width, 200.0);
        assert_eq!(options.height, 100.0);
        assert_eq!(options.resolved_view_box(), "-10 -10 220 120");
        assert!(options.stylesheet.is_none());
        assert!(options.include_xml_declaration);
        assert!(!options.namespace);
        assert_eq!(options.preserve_aspect_ratio, "none");
        assert_eq!(options.background_color.as_deref(), Some("#fff"));
        assert!(options.style_fn.is_some());
    }

    #[test]
    fn test_default_view_box() {
        let options = RenderOptions::new().with_size(200.0, 150.0);
        assert_eq!(options.resolved_view_box(), "0 0 200 150");
    }
}

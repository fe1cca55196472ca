//! Layout documents: a positioned box tree plus canvas and per-node styles, as TOML
//!
//! ```toml
//! [canvas]
//! width = 400
//! height = 300
//! background = "#ffffff"
//!
//! [styles.card]
//! fill = "#eef2ff"
//! stroke = "#6366f1"
//! clip-radius = 8
//!
//! [root]
//! rect = { x = 0, y = 0, width = 400, height = 300 }
//!
//! [[root.children]]
//! id = "card"
//! rect = { x = 20, y = 20, width = 160, height = 100 }
//! transform = { e = 10, f = 0 }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::error::DocumentError;
use crate::renderer::{clip_url, RenderOptions};
use crate::style::Style;
use crate::stylesheet::StyleSheet;

use super::BoxNode;

/// Canvas-level settings for a document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub view_box: Option<String>,
    pub background: Option<String>,
    pub xml_declaration: bool,
    pub namespace: bool,
    pub preserve_aspect_ratio: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            width: options.width,
            height: options.height,
            view_box: None,
            background: None,
            xml_declaration: options.include_xml_declaration,
            namespace: options.namespace,
            preserve_aspect_ratio: options.preserve_aspect_ratio,
        }
    }
}

/// Style for the node with a matching id
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NodeStyle {
    #[serde(flatten)]
    pub style: Style,
    /// Clip the node's rectangle to rounded corners of this radius
    pub clip_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub styles: HashMap<String, NodeStyle>,
    pub root: BoxNode,
}

impl LayoutDocument {
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, DocumentError> {
        let document: LayoutDocument = toml::from_str(content)?;
        debug!(
            nodes = document.root.node_count(),
            styles = document.styles.len();
            "Loaded layout document"
        );
        Ok(document)
    }

    /// Render options for this document.
    ///
    /// Nodes with an entry in `styles` use it; every other node gets
    /// [`Style::node_default`]. A `clip_radius` registers one rounded clip path per
    /// styled node.
    pub fn render_options(&self, stylesheet: Option<StyleSheet>) -> RenderOptions {
        let canvas = &self.canvas;
        let mut options = RenderOptions::new()
            .with_size(canvas.width, canvas.height)
            .with_xml_declaration(canvas.xml_declaration)
            .with_namespace(canvas.namespace)
            .with_preserve_aspect_ratio(canvas.preserve_aspect_ratio.clone());
        options.view_box = canvas.view_box.clone();
        options.background_color = canvas.background.clone();
        options.stylesheet = stylesheet;

        let styles = Arc::new(self.styles.clone());
        options.with_style_fn(move |node, _, clips| {
            let Some(node_style) = node.id.as_ref().and_then(|id| styles.get(id)) else {
                return Style::node_default();
            };

            let mut style = node_style.style.clone();
            if let Some(radius) = node_style.clip_radius.filter(|r| *r > 0.0) {
                let r = &node.rect;
                let id = clips.add_rounded_rect(r.x, r.y, r.width, r.height, radius);
                style.clip_path = Some(clip_url(&id));
            }
            style
        })
    }

    /// Render the document to SVG
    pub fn render(&self, stylesheet: Option<StyleSheet>) -> String {
        crate::renderer::render_to_svg(&self.root, self.render_options(stylesheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Rect, Transform};
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = r##"
[canvas]
width = 400
height = 300
background = "#ffffff"

[styles.card]
fill = "#eef2ff"
stroke = "#6366f1"
stroke-width = 2
clip-radius = 8

[root]
id = "root"
rect = { x = 0, y = 0, width = 400, height = 300 }

[[root.children]]
id = "card"
rect = { x = 20, y = 20, width = 160, height = 100 }
transform = { e = 10, f = 0 }
"##;

    #[test]
    fn test_parse_document() {
        let document = LayoutDocument::from_str(DOCUMENT).expect("valid document");
        assert_eq!(document.canvas.width, 400.0);
        assert_eq!(document.canvas.background.as_deref(), Some("#ffffff"));
        assert!(document.canvas.namespace);
        assert_eq!(document.canvas.preserve_aspect_ratio, "xMidYMid meet");

        let card = document.root.find("card").expect("card node");
        assert_eq!(card.rect, Rect::new(20.0, 20.0, 160.0, 100.0));
        assert_eq!(card.transform, Some(Transform::translate(10.0, 0.0)));

        let style = &document.styles["card"];
        assert_eq!(style.clip_radius, Some(8.0));
        assert_eq!(style.style.stroke_width, Some(2.0));
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let document = LayoutDocument::from_str(
            "[root]\nrect = { x = 0, y = 0, width = 10, height = 10 }\n",
        )
        .expect("valid document");
        assert_eq!(document.canvas, CanvasConfig::default());
        assert!(document.styles.is_empty());
        assert!(document.root.children.is_empty());
    }

    #[test]
    fn test_canvas_keys_are_kebab_case() {
        let document = LayoutDocument::from_str(
            r#"
            [canvas]
            view-box = "0 0 10 10"
            xml-declaration = true
            preserve-aspect-ratio = "none"

            [root]
            rect = { x = 0, y = 0, width = 10, height = 10 }
            "#,
        )
        .expect("valid document");
        assert_eq!(document.canvas.view_box.as_deref(), Some("0 0 10 10"));
        assert!(document.canvas.xml_declaration);
        assert_eq!(document.canvas.preserve_aspect_ratio, "none");

        let svg = document.render(None);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 10 10""#));
        assert!(svg.contains(r#"preserveAspectRatio="none""#));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let result = LayoutDocument::from_str("[canvas]\nwidth = 10\n");
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }

    #[test]
    fn test_render_registers_clip_paths() {
        let document = LayoutDocument::from_str(DOCUMENT).expect("valid document");
        let svg = document.render(None);

        assert!(svg.starts_with("<svg width=\"400\" height=\"300\" viewBox=\"0 0 400 300\""));
        assert_eq!(svg.matches("<clipPath").count(), 1);
        assert!(svg.contains("<rect width=\"400\" height=\"300\" fill=\"#ffffff\"/>"));
        assert!(svg.contains("clip-path=\"url(#clip-"));
        assert!(svg.contains("<g transform=\"translate(10.00 0.00)\">"));
        // Unstyled root keeps the renderer default
        assert!(svg.contains("fill=\"#e0e0e0\" stroke=\"#333\""));
    }
}

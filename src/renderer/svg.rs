//! SVG generation from box trees

use log::{debug, trace};

use crate::elements;
use crate::layout::BoxNode;
use crate::style::Style;

use super::clip::ClipPathRegistry;
use super::RenderOptions;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Renders one document.
///
/// Content is rendered into a buffer first so every clip path registered during the
/// walk can be written into `<defs>` ahead of it. [`Renderer::render`] consumes the
/// renderer, one renderer per document.
#[derive(Debug)]
pub struct Renderer {
    options: RenderOptions,
    clip_paths: ClipPathRegistry,
    default_style: Style,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_clip_paths(options, ClipPathRegistry::new())
    }

    /// Use an existing registry, e.g. one with a deterministic id source
    pub fn with_clip_paths(options: RenderOptions, clip_paths: ClipPathRegistry) -> Self {
        Self {
            options,
            clip_paths,
            default_style: Style::node_default(),
        }
    }

    /// Style for nodes when no style function is configured
    pub fn set_default_style(&mut self, style: Style) {
        self.default_style = style;
    }

    /// The registry, for adding clip paths before rendering
    pub fn clip_paths(&mut self) -> &mut ClipPathRegistry {
        &mut self.clip_paths
    }

    /// Render a single tree into a complete SVG document
    pub fn render(self, root: &BoxNode) -> String {
        self.render_nodes(std::slice::from_ref(root))
    }

    /// Render several top-level trees, each at depth 0, into one document
    pub fn render_nodes(mut self, roots: &[BoxNode]) -> String {
        let mut content = String::new();
        for root in roots {
            self.render_node(root, 0, &mut content);
        }

        debug!(
            roots = roots.len(),
            nodes = roots.iter().map(BoxNode::node_count).sum::<usize>(),
            clip_paths = self.clip_paths.len();
            "Rendered SVG content"
        );

        let mut svg = self.header();
        svg.push_str(&self.defs());
        if let Some(background) = &self.options.background_color {
            svg.push_str(&format!(
                r#"<rect width="{:.0}" height="{:.0}" fill="{}"/>"#,
                self.options.width, self.options.height, background
            ));
            svg.push('\n');
        }
        svg.push_str(&content);
        svg.push_str("</svg>");
        svg
    }

    fn header(&self) -> String {
        let options = &self.options;
        let mut header = String::new();
        if options.include_xml_declaration {
            header.push_str(XML_DECLARATION);
            header.push('\n');
        }

        header.push_str(&format!(
            r#"<svg width="{:.0}" height="{:.0}" viewBox="{}""#,
            options.width,
            options.height,
            options.resolved_view_box()
        ));
        if options.namespace {
            header.push_str(&format!(r#" xmlns="{SVG_NAMESPACE}""#));
        }
        if !options.preserve_aspect_ratio.is_empty() {
            header.push_str(&format!(
                r#" preserveAspectRatio="{}""#,
                options.preserve_aspect_ratio
            ));
        }
        header.push_str(">\n");
        header
    }

    fn defs(&self) -> String {
        let mut defs = String::from("<defs>\n");
        if let Some(stylesheet) = &self.options.stylesheet {
            defs.push_str(&stylesheet.to_svg());
            defs.push('\n');
        }
        for markup in &self.options.definitions {
            defs.push_str(markup);
            defs.push('\n');
        }
        for def in self.clip_paths.definitions() {
            defs.push_str(&format!(
                r#"{}<clipPath id="{}">{}</clipPath>"#,
                indent(1),
                def.id,
                def.shape
            ));
            defs.push('\n');
        }
        defs.push_str("</defs>\n");
        defs
    }

    fn render_node(&mut self, node: &BoxNode, depth: usize, out: &mut String) {
        if let Some(render_fn) = &self.options.render_fn {
            if let Some(custom) = render_fn(node, depth, &mut self.clip_paths) {
                if !custom.is_empty() {
                    trace!(depth = depth; "Node replaced by custom markup");
                    out.push_str(&indent(depth));
                    out.push_str(&custom);
                    if !custom.ends_with('\n') {
                        out.push('\n');
                    }
                    return;
                }
            }
        }

        let style = match &self.options.style_fn {
            Some(style_fn) => style_fn(node, depth, &mut self.clip_paths),
            None => self.default_style.clone(),
        };

        let transform = node.transform.as_ref().and_then(|t| t.to_svg());
        let grouped = transform.is_some() || !node.children.is_empty();

        if grouped {
            out.push_str(&indent(depth));
            match &transform {
                Some(t) => out.push_str(&format!(r#"<g transform="{t}">"#)),
                None => out.push_str("<g>"),
            }
            out.push('\n');
        }

        if node.rect.has_area() {
            let r = &node.rect;
            out.push_str(&indent(if grouped { depth + 1 } else { depth }));
            out.push_str(&elements::rect(r.x, r.y, r.width, r.height, &style));
            out.push('\n');
        }

        for child in &node.children {
            self.render_node(child, depth + 1, out);
        }

        if grouped {
            out.push_str(&indent(depth));
            out.push_str("</g>\n");
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Render a tree with a fresh [`Renderer`]
pub fn render_to_svg(root: &BoxNode, options: RenderOptions) -> String {
    Renderer::new(options).render(root)
}

/// Render several positioned trees into one document
pub fn render_nodes(nodes: &[BoxNode], options: RenderOptions) -> String {
    Renderer::new(options).render_nodes(nodes)
}

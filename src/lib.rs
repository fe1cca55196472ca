//! layout-svg - SVG rendering for positioned box trees
//!
//! This library turns already-laid-out [`BoxNode`] trees into SVG documents and provides
//! the pieces such documents are built from: typed path construction, spline and area
//! synthesis, element constructors, CSS stylesheets, gradients, markers, and clip paths.
//!
//! # Example
//!
//! ```rust
//! use layout_svg::{render_to_svg, BoxNode, Rect, RenderOptions};
//!
//! let root = BoxNode::new(Rect::new(0.0, 0.0, 200.0, 200.0));
//! let svg = render_to_svg(&root, RenderOptions::new().with_size(200.0, 200.0));
//! assert!(svg.contains(r#"width="200""#));
//! assert!(svg.ends_with("</svg>"));
//! ```

pub mod elements;
pub mod error;
pub mod gradient;
pub mod layout;
pub mod marker;
pub mod path;
pub mod renderer;
pub mod style;
pub mod stylesheet;

pub use error::DocumentError;
pub use gradient::{GradientError, GradientSpace};
pub use layout::{BoxNode, LayoutDocument, Point, Rect, Transform};
pub use path::{
    area_path, polygon_path, polyline_path, smooth_area_path, smooth_line_path, PathBuilder,
    PathCommand,
};
pub use renderer::{
    clip_url, render_nodes, render_to_svg, ClipPathRegistry, IdSource, RenderOptions, Renderer,
};
pub use style::{format_style, Style};
pub use stylesheet::{StyleRule, StyleSheet, StylesheetError};

/// Render a TOML layout document to SVG with the default stylesheet
///
/// # Example
///
/// ```rust
/// use layout_svg::render_document;
///
/// let svg = render_document(r#"
///     [canvas]
///     width = 120
///     height = 80
///
///     [root]
///     rect = { x = 10, y = 10, width = 100, height = 60 }
/// "#).unwrap();
///
/// assert!(svg.contains(r#"viewBox="0 0 120 80""#));
/// assert_eq!(svg.matches("<rect").count(), 1);
/// ```
pub fn render_document(source: &str) -> Result<String, DocumentError> {
    render_document_with_stylesheet(source, Some(StyleSheet::default()))
}

/// Render a TOML layout document to SVG, embedding `stylesheet` when given
pub fn render_document_with_stylesheet(
    source: &str,
    stylesheet: Option<StyleSheet>,
) -> Result<String, DocumentError> {
    let document = LayoutDocument::from_str(source)?;
    Ok(document.render(stylesheet))
}

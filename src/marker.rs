//! Marker definitions for `<defs>` and paths that reference them
//!
//! Preset markers share a `0 0 10 10` viewBox so they scale with the stroke width of
//! the path they decorate.

use std::fmt;

use crate::elements;
use crate::style::Style;

/// How a marker is rotated along its path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerOrient {
    /// Follow the path direction
    Auto,
    /// Follow the path direction, flipped at the start
    AutoStartReverse,
    /// Fixed angle in degrees
    Angle(f64),
}

impl fmt::Display for MarkerOrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerOrient::Auto => f.write_str("auto"),
            MarkerOrient::AutoStartReverse => f.write_str("auto-start-reverse"),
            MarkerOrient::Angle(degrees) => write!(f, "{degrees}"),
        }
    }
}

/// Coordinate system for marker width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerUnits {
    StrokeWidth,
    UserSpaceOnUse,
}

impl fmt::Display for MarkerUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarkerUnits::StrokeWidth => "strokeWidth",
            MarkerUnits::UserSpaceOnUse => "userSpaceOnUse",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerDef {
    pub id: String,
    pub view_box: String,
    pub ref_x: f64,
    pub ref_y: f64,
    /// Left out when not positive
    pub width: f64,
    pub height: f64,
    pub orient: Option<MarkerOrient>,
    pub units: Option<MarkerUnits>,
    /// Child markup, written verbatim
    pub content: String,
}

pub fn marker(def: &MarkerDef) -> String {
    let mut out = format!(r#"<marker id="{}""#, def.id);
    if !def.view_box.is_empty() {
        out.push_str(&format!(r#" viewBox="{}""#, def.view_box));
    }
    out.push_str(&format!(
        r#" refX="{:.2}" refY="{:.2}""#,
        def.ref_x, def.ref_y
    ));
    if def.width > 0.0 {
        out.push_str(&format!(r#" markerWidth="{:.2}""#, def.width));
    }
    if def.height > 0.0 {
        out.push_str(&format!(r#" markerHeight="{:.2}""#, def.height));
    }
    if let Some(orient) = def.orient {
        out.push_str(&format!(r#" orient="{orient}""#));
    }
    if let Some(units) = def.units {
        out.push_str(&format!(r#" markerUnits="{units}""#));
    }
    out.push_str(">\n");
    out.push_str(&format!("  {}\n", def.content));
    out.push_str("</marker>");
    out
}

/// `url(#id)` reference for the `marker-*` attributes
pub fn marker_url(id: &str) -> String {
    format!("url(#{id})")
}

fn preset(id: &str, ref_x: f64, orient: MarkerOrient, content: String) -> String {
    marker(&MarkerDef {
        id: id.to_string(),
        view_box: "0 0 10 10".to_string(),
        ref_x,
        ref_y: 5.0,
        width: 6.0,
        height: 6.0,
        orient: Some(orient),
        units: Some(MarkerUnits::StrokeWidth),
        content,
    })
}

fn filled(color: &str) -> Style {
    Style::new().with_fill(color)
}

fn stroked(color: &str, stroke_width: f64) -> Style {
    Style::new()
        .with_fill("none")
        .with_stroke(color)
        .with_stroke_width(stroke_width)
}

/// Arrowhead whose tip sits on the path end
pub fn arrow_marker(id: &str, color: &str) -> String {
    let head = elements::path("M 0 0 L 10 5 L 0 10 z", &filled(color));
    preset(id, 9.0, MarkerOrient::Auto, head)
}

pub fn circle_marker(id: &str, color: &str) -> String {
    preset(id, 5.0, MarkerOrient::Auto, elements::circle(5.0, 5.0, 4.0, &filled(color)))
}

pub fn square_marker(id: &str, color: &str) -> String {
    let square = elements::rect(1.0, 1.0, 8.0, 8.0, &filled(color));
    preset(id, 5.0, MarkerOrient::Auto, square)
}

pub fn diamond_marker(id: &str, color: &str) -> String {
    let diamond = elements::path("M 5 0 L 10 5 L 5 10 L 0 5 z", &filled(color));
    preset(id, 5.0, MarkerOrient::Auto, diamond)
}

/// Upward triangle that keeps its orientation
pub fn triangle_marker(id: &str, color: &str) -> String {
    let triangle = elements::path("M 5 0 L 10 10 L 0 10 z", &filled(color));
    preset(id, 5.0, MarkerOrient::Angle(0.0), triangle)
}

/// `+` drawn with strokes
pub fn cross_marker(id: &str, color: &str, stroke_width: f64) -> String {
    let cross = elements::path("M 5 1 L 5 9 M 1 5 L 9 5", &stroked(color, stroke_width));
    preset(id, 5.0, MarkerOrient::Angle(0.0), cross)
}

/// `x` drawn with strokes
pub fn x_marker(id: &str, color: &str, stroke_width: f64) -> String {
    let x = elements::path("M 2 2 L 8 8 M 8 2 L 2 8", &stroked(color, stroke_width));
    preset(id, 5.0, MarkerOrient::Angle(0.0), x)
}

/// Filled dot with a caller-chosen radius in viewBox units
pub fn dot_marker(id: &str, color: &str, radius: f64) -> String {
    preset(id, 5.0, MarkerOrient::Auto, elements::circle(5.0, 5.0, radius, &filled(color)))
}

/// Path element with optional `marker-start`, `marker-mid` and `marker-end`. Missing or
/// empty references are left out.
pub fn path_with_markers(
    d: &str,
    style: &Style,
    start: Option<&str>,
    mid: Option<&str>,
    end: Option<&str>,
) -> String {
    let path = elements::path(d, style);
    with_markers(path, &[("marker-start", start), ("marker-mid", mid), ("marker-end", end)])
}

/// Straight line with optional start and end markers
pub fn line_with_markers(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    style: &Style,
    start: Option<&str>,
    end: Option<&str>,
) -> String {
    let line = elements::line(x1, y1, x2, y2, style);
    with_markers(line, &[("marker-start", start), ("marker-end", end)])
}

// Splices the attributes in before the closing `/>`
fn with_markers(element: String, markers: &[(&str, Option<&str>)]) -> String {
    let attrs: String = markers
        .iter()
        .filter_map(|(name, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!(r#" {name}="{v}""#))
        })
        .collect();
    match element.strip_suffix("/>") {
        Some(open) => format!("{open}{attrs}/>"),
        None => element,
    }
}

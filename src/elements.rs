//! Standalone SVG element constructors
//!
//! Each function returns one element's markup with the [`Style`] attributes appended
//! after its geometry. Coordinates use two decimals.

use crate::layout::Point;
use crate::renderer::clip_url;
use crate::style::{format_style, Style};

/// Escape the five XML special characters in text content
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

pub fn rect(x: f64, y: f64, width: f64, height: f64, style: &Style) -> String {
    format!(
        r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}"{}/>"#,
        format_style(style)
    )
}

/// Rectangle with rounded corners. An `ry` of 0 reuses `rx`.
pub fn rounded_rect(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rx: f64,
    ry: f64,
    style: &Style,
) -> String {
    let ry = if ry == 0.0 { rx } else { ry };
    format!(
        r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" rx="{rx:.2}" ry="{ry:.2}"{}/>"#,
        format_style(style)
    )
}

pub fn circle(cx: f64, cy: f64, r: f64, style: &Style) -> String {
    format!(
        r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}"{}/>"#,
        format_style(style)
    )
}

pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, style: &Style) -> String {
    format!(
        r#"<ellipse cx="{cx:.2}" cy="{cy:.2}" rx="{rx:.2}" ry="{ry:.2}"{}/>"#,
        format_style(style)
    )
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, style: &Style) -> String {
    format!(
        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}"{}/>"#,
        format_style(style)
    )
}

pub fn polyline(points: &[Point], style: &Style) -> String {
    format!(
        r#"<polyline points="{}"{}/>"#,
        points_attr(points),
        format_style(style)
    )
}

pub fn polygon(points: &[Point], style: &Style) -> String {
    format!(
        r#"<polygon points="{}"{}/>"#,
        points_attr(points),
        format_style(style)
    )
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text element; `content` is escaped
pub fn text(content: &str, x: f64, y: f64, style: &Style) -> String {
    format!(
        r#"<text x="{x:.2}" y="{y:.2}"{}>{}</text>"#,
        format_style(style),
        escape_xml(content)
    )
}

/// Styled run inside a text element. Zero offsets are left out.
pub fn tspan(content: &str, style: &Style, dx: f64, dy: f64) -> String {
    let mut position = String::new();
    if dx != 0.0 {
        position.push_str(&format!(r#" dx="{dx:.2}""#));
    }
    if dy != 0.0 {
        position.push_str(&format!(r#" dy="{dy:.2}""#));
    }
    format!(
        "<tspan{position}{}>{}</tspan>",
        format_style(style),
        escape_xml(content)
    )
}

/// Text element wrapping already-built [`tspan`] markup
pub fn text_with_spans(x: f64, y: f64, style: &Style, spans: &[String]) -> String {
    format!(
        r#"<text x="{x:.2}" y="{y:.2}"{}>{}</text>"#,
        format_style(style),
        spans.concat()
    )
}

/// Text laid out along the path with id `path_id`
pub fn text_path(content: &str, path_id: &str, style: &Style, start_offset: Option<&str>) -> String {
    let offset = start_offset
        .filter(|o| !o.is_empty())
        .map(|o| format!(r#" startOffset="{o}""#))
        .unwrap_or_default();
    format!(
        r##"<textPath href="#{path_id}"{offset}{}>{}</textPath>"##,
        format_style(style),
        escape_xml(content)
    )
}

pub fn path(d: &str, style: &Style) -> String {
    format!(r#"<path d="{d}"{}/>"#, format_style(style))
}

/// Wrap `content` in a `<g>`, with a `transform` attribute when one is given
pub fn group(content: &str, transform: Option<&str>, style: &Style) -> String {
    let transform = transform
        .filter(|t| !t.is_empty())
        .map(|t| format!(r#" transform="{t}""#))
        .unwrap_or_default();
    format!("<g{transform}{}>{content}</g>", format_style(style))
}

/// [`group`] clipped by the clip path with id `clip_id`
pub fn group_with_clip_path(content: &str, clip_id: &str, style: &Style) -> String {
    let style = style.clone().with_clip_path(clip_url(clip_id));
    group(content, None, &style)
}

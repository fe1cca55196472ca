//! Gradient definitions for `<defs>`
//!
//! [`linear_gradient`] and [`radial_gradient`] serialize explicit definitions. The
//! `interpolated_*` builders compute their stops by interpolating between two CSS colors
//! in a chosen color space and emitting each stop as an sRGB hex color, which every SVG
//! consumer understands.

use std::fmt;
use std::str::FromStr;

use color::{ColorSpaceTag, DynamicColor, HueDirection, Srgb};
use log::trace;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    #[error("invalid {role} color `{color}`: {reason}")]
    InvalidColor {
        role: &'static str,
        color: String,
        reason: String,
    },
}

/// Coordinate system for gradient geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientUnits {
    UserSpaceOnUse,
    ObjectBoundingBox,
}

impl fmt::Display for GradientUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GradientUnits::UserSpaceOnUse => "userSpaceOnUse",
            GradientUnits::ObjectBoundingBox => "objectBoundingBox",
        })
    }
}

/// How a gradient fills outside its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadMethod {
    Pad,
    Reflect,
    Repeat,
}

impl fmt::Display for SpreadMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpreadMethod::Pad => "pad",
            SpreadMethod::Reflect => "reflect",
            SpreadMethod::Repeat => "repeat",
        })
    }
}

/// Color space used when interpolating stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientSpace {
    Rgb,
    Hsl,
    Lab,
    Lch,
    Oklab,
    /// Perceptually uniform, keeps hue and chroma steady across the ramp
    #[default]
    Oklch,
}

impl GradientSpace {
    fn tag(self) -> ColorSpaceTag {
        match self {
            GradientSpace::Rgb => ColorSpaceTag::Srgb,
            GradientSpace::Hsl => ColorSpaceTag::Hsl,
            GradientSpace::Lab => ColorSpaceTag::Lab,
            GradientSpace::Lch => ColorSpaceTag::Lch,
            GradientSpace::Oklab => ColorSpaceTag::Oklab,
            GradientSpace::Oklch => ColorSpaceTag::Oklch,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Percentage or fraction, e.g. `"50%"`
    pub offset: String,
    pub color: String,
    /// Emitted only when strictly between 0 and 1
    pub opacity: f64,
}

impl GradientStop {
    pub fn new(offset: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            offset: offset.into(),
            color: color.into(),
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearGradientDef {
    pub id: String,
    pub x1: Option<String>,
    pub y1: Option<String>,
    pub x2: Option<String>,
    pub y2: Option<String>,
    pub stops: Vec<GradientStop>,
    pub units: Option<GradientUnits>,
    pub spread_method: Option<SpreadMethod>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadialGradientDef {
    pub id: String,
    pub cx: Option<String>,
    pub cy: Option<String>,
    pub r: Option<String>,
    /// Focal point, defaults to the center
    pub fx: Option<String>,
    pub fy: Option<String>,
    pub fr: Option<String>,
    pub stops: Vec<GradientStop>,
    pub units: Option<GradientUnits>,
    pub spread_method: Option<SpreadMethod>,
}

pub fn linear_gradient(def: &LinearGradientDef) -> String {
    let mut out = format!(r#"<linearGradient id="{}""#, def.id);
    push_attr(&mut out, "x1", def.x1.as_deref());
    push_attr(&mut out, "y1", def.y1.as_deref());
    push_attr(&mut out, "x2", def.x2.as_deref());
    push_attr(&mut out, "y2", def.y2.as_deref());
    push_common(&mut out, def.units, def.spread_method, &def.stops);
    out.push_str("</linearGradient>");
    out
}

pub fn radial_gradient(def: &RadialGradientDef) -> String {
    let mut out = format!(r#"<radialGradient id="{}""#, def.id);
    push_attr(&mut out, "cx", def.cx.as_deref());
    push_attr(&mut out, "cy", def.cy.as_deref());
    push_attr(&mut out, "r", def.r.as_deref());
    push_attr(&mut out, "fx", def.fx.as_deref());
    push_attr(&mut out, "fy", def.fy.as_deref());
    push_attr(&mut out, "fr", def.fr.as_deref());
    push_common(&mut out, def.units, def.spread_method, &def.stops);
    out.push_str("</radialGradient>");
    out
}

fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        out.push_str(&format!(r#" {name}="{value}""#));
    }
}

/// Units, spread method, closing `>` and one `<stop>` line per stop
fn push_common(
    out: &mut String,
    units: Option<GradientUnits>,
    spread_method: Option<SpreadMethod>,
    stops: &[GradientStop],
) {
    if let Some(units) = units {
        out.push_str(&format!(r#" gradientUnits="{units}""#));
    }
    if let Some(spread) = spread_method {
        out.push_str(&format!(r#" spreadMethod="{spread}""#));
    }
    out.push_str(">\n");

    for stop in stops {
        out.push_str(&format!(
            r#"  <stop offset="{}" stop-color="{}""#,
            stop.offset, stop.color
        ));
        if stop.opacity > 0.0 && stop.opacity < 1.0 {
            out.push_str(&format!(r#" stop-opacity="{:.2}""#, stop.opacity));
        }
        out.push_str("/>\n");
    }
}

/// `url(#id)` reference for fill or stroke
pub fn gradient_url(id: &str) -> String {
    format!("url(#{id})")
}

/// `(x1, y1, x2, y2)` for the eight compass angles. 0 runs left to right, 90 bottom to
/// top; any other angle is treated as 0.
fn angle_to_coordinates(angle: f64) -> [&'static str; 4] {
    match angle {
        a if a == 90.0 => ["0%", "100%", "0%", "0%"],
        a if a == 180.0 => ["100%", "0%", "0%", "0%"],
        a if a == 270.0 => ["0%", "0%", "0%", "100%"],
        a if a == 45.0 => ["0%", "100%", "100%", "0%"],
        a if a == 135.0 => ["100%", "100%", "0%", "0%"],
        a if a == 225.0 => ["100%", "0%", "0%", "100%"],
        a if a == 315.0 => ["0%", "0%", "100%", "100%"],
        _ => ["0%", "0%", "100%", "0%"],
    }
}

fn linear_def(id: &str, angle: f64, stops: Vec<GradientStop>) -> LinearGradientDef {
    let [x1, y1, x2, y2] = angle_to_coordinates(angle);
    LinearGradientDef {
        id: id.to_string(),
        x1: Some(x1.to_string()),
        y1: Some(y1.to_string()),
        x2: Some(x2.to_string()),
        y2: Some(y2.to_string()),
        stops,
        ..LinearGradientDef::default()
    }
}

fn centered_radial_def(id: &str, stops: Vec<GradientStop>) -> RadialGradientDef {
    RadialGradientDef {
        id: id.to_string(),
        cx: Some("50%".to_string()),
        cy: Some("50%".to_string()),
        r: Some("50%".to_string()),
        stops,
        ..RadialGradientDef::default()
    }
}

/// Two-color linear gradient along one of the compass angles
pub fn simple_linear_gradient(id: &str, start_color: &str, end_color: &str, angle: f64) -> String {
    let stops = vec![
        GradientStop::new("0%", start_color),
        GradientStop::new("100%", end_color),
    ];
    linear_gradient(&linear_def(id, angle, stops))
}

/// Two-color radial gradient centered in the bounding box
pub fn simple_radial_gradient(id: &str, center_color: &str, edge_color: &str) -> String {
    let stops = vec![
        GradientStop::new("0%", center_color),
        GradientStop::new("100%", edge_color),
    ];
    radial_gradient(&centered_radial_def(id, stops))
}

/// Linear gradient with `steps` stops interpolated in `space`. Fewer than two steps
/// still produce the two endpoints.
pub fn interpolated_linear_gradient(
    id: &str,
    start_color: &str,
    end_color: &str,
    angle: f64,
    steps: usize,
    space: GradientSpace,
) -> Result<String, GradientError> {
    let stops = interpolated_stops(("start", start_color), ("end", end_color), steps, space)?;
    Ok(linear_gradient(&linear_def(id, angle, stops)))
}

/// Radial gradient with `steps` stops interpolated in `space`
pub fn interpolated_radial_gradient(
    id: &str,
    center_color: &str,
    edge_color: &str,
    steps: usize,
    space: GradientSpace,
) -> Result<String, GradientError> {
    let stops = interpolated_stops(("center", center_color), ("edge", edge_color), steps, space)?;
    Ok(radial_gradient(&centered_radial_def(id, stops)))
}

/// [`interpolated_linear_gradient`] in OKLCH
pub fn oklch_linear_gradient(
    id: &str,
    start_color: &str,
    end_color: &str,
    angle: f64,
    steps: usize,
) -> Result<String, GradientError> {
    interpolated_linear_gradient(id, start_color, end_color, angle, steps, GradientSpace::Oklch)
}

/// [`interpolated_radial_gradient`] in OKLCH
pub fn oklch_radial_gradient(
    id: &str,
    center_color: &str,
    edge_color: &str,
    steps: usize,
) -> Result<String, GradientError> {
    interpolated_radial_gradient(id, center_color, edge_color, steps, GradientSpace::Oklch)
}

fn parse_color(role: &'static str, value: &str) -> Result<DynamicColor, GradientError> {
    DynamicColor::from_str(value).map_err(|err| GradientError::InvalidColor {
        role,
        color: value.to_string(),
        reason: err.to_string(),
    })
}

fn interpolated_stops(
    (from_role, from): (&'static str, &str),
    (to_role, to): (&'static str, &str),
    steps: usize,
    space: GradientSpace,
) -> Result<Vec<GradientStop>, GradientError> {
    let steps = steps.max(2);
    let from = parse_color(from_role, from)?;
    let to = parse_color(to_role, to)?;
    let ramp = from.interpolate(to, space.tag(), HueDirection::Shorter);

    trace!(steps = steps, space:? = space; "Interpolating gradient stops");

    let last = (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| {
            let t = i as f64 / last;
            let rgba = ramp.eval(t as f32).to_alpha_color::<Srgb>().to_rgba8();
            GradientStop::new(
                format!("{:.1}%", t * 100.0),
                format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
            )
        })
        .collect())
}

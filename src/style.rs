//! Presentation attributes and their serialization
//!
//! [`Style`] is the one canonical style record used by the tree renderer and by the
//! standalone element constructors. [`format_style`] turns it into an attribute string
//! that can be appended directly after a tag name.

use std::fmt;

use serde::Deserialize;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// How the end of a stroke is rendered
    StrokeLinecap {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
}

keyword_enum! {
    /// How corners of a stroke are rendered
    StrokeLinejoin {
        Miter => "miter",
        Round => "round",
        Bevel => "bevel",
    }
}

keyword_enum! {
    /// Horizontal text alignment
    TextAnchor {
        Start => "start",
        Middle => "middle",
        End => "end",
    }
}

keyword_enum! {
    /// Vertical text alignment
    DominantBaseline {
        Auto => "auto",
        Middle => "middle",
        Hanging => "hanging",
        TextTop => "text-top",
        TextBottom => "text-bottom",
        Alphabetic => "alphabetic",
        Mathematical => "mathematical",
    }
}

keyword_enum! {
    FontWeight {
        Normal => "normal",
        Bold => "bold",
        Bolder => "bolder",
        Lighter => "lighter",
        W100 => "100",
        W200 => "200",
        W300 => "300",
        W400 => "400",
        W500 => "500",
        W600 => "600",
        W700 => "700",
        W800 => "800",
        W900 => "900",
    }
}

keyword_enum! {
    FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

/// Styling attributes for SVG elements.
///
/// Every field is optional. A set field is still omitted when it carries no
/// information: empty strings, a stroke width or font size `<= 0`, and opacities of
/// exactly 0 or 1 (or anything outside that range).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_linecap: Option<StrokeLinecap>,
    pub stroke_linejoin: Option<StrokeLinejoin>,
    pub opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub class: Option<String>,
    pub clip_path: Option<String>,
    pub text_anchor: Option<TextAnchor>,
    pub dominant_baseline: Option<DominantBaseline>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Light fill with a dark outline, used for nodes without a style function
    pub fn node_default() -> Self {
        Self::new().with_fill("#e0e0e0").with_stroke("#333")
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_clip_path(mut self, clip_path: impl Into<String>) -> Self {
        self.clip_path = Some(clip_path.into());
        self
    }
}

/// Format a [`Style`] as an SVG attribute string.
///
/// Attributes come out in a fixed order so identical input gives identical bytes.
/// The result starts with a single space when non-empty.
pub fn format_style(style: &Style) -> String {
    let mut parts: Vec<String> = vec![];

    push_text(&mut parts, "fill", style.fill.as_deref());
    push_text(&mut parts, "stroke", style.stroke.as_deref());
    push_positive(&mut parts, "stroke-width", style.stroke_width);
    push_text(&mut parts, "stroke-linecap", style.stroke_linecap.map(|v| v.as_str()));
    push_text(&mut parts, "stroke-linejoin", style.stroke_linejoin.map(|v| v.as_str()));
    push_fraction(&mut parts, "opacity", style.opacity);
    push_fraction(&mut parts, "fill-opacity", style.fill_opacity);
    push_fraction(&mut parts, "stroke-opacity", style.stroke_opacity);
    push_text(&mut parts, "class", style.class.as_deref());
    push_text(&mut parts, "clip-path", style.clip_path.as_deref());
    push_text(&mut parts, "text-anchor", style.text_anchor.map(|v| v.as_str()));
    push_text(
        &mut parts,
        "dominant-baseline",
        style.dominant_baseline.map(|v| v.as_str()),
    );
    push_text(&mut parts, "font-family", style.font_family.as_deref());
    push_positive(&mut parts, "font-size", style.font_size);
    push_text(&mut parts, "font-weight", style.font_weight.map(|v| v.as_str()));
    push_text(&mut parts, "font-style", style.font_style.map(|v| v.as_str()));

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}

fn push_text(parts: &mut Vec<String>, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        parts.push(format!(r#"{name}="{value}""#));
    }
}

fn push_positive(parts: &mut Vec<String>, name: &str, value: Option<f64>) {
    if let Some(value) = value.filter(|v| *v > 0.0) {
        parts.push(format!(r#"{name}="{value:.2}""#));
    }
}

// 0 and 1 are the SVG defaults for opacities
fn push_fraction(parts: &mut Vec<String>, name: &str, value: Option<f64>) {
    if let Some(value) = value.filter(|v| *v > 0.0 && *v < 1.0) {
        parts.push(format!(r#"{name}="{value:.2}""#));
    }
}

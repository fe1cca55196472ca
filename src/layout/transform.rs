//! Affine transforms attached to layout nodes.
//!
//! A [`Transform`] holds the six coefficients of an SVG `matrix(a b c d e f)`:
//!
//! ```text
//! x' = a * x + c * y + e
//! y' = b * x + d * y + f
//! ```
//!
//! ## Rotation Convention
//!
//! Rotation uses the SVG convention: clockwise positive angles, in degrees, with the
//! Y-axis pointing down.
//! - 0° = no rotation
//! - 90° = rotated clockwise (right becomes down)
//! - 180° = upside down
//! - 270° = rotated counter-clockwise (right becomes up)
//!
//! ## Loose Bounds
//!
//! [`Transform::transform_rect`] maps the 4 corners of the rectangle and returns the
//! axis-aligned box of the mapped corners. This matches CSS/SVG transform behavior and
//! over-estimates for rotations that are not multiples of 90°.

use serde::Deserialize;

use super::types::{Point, Rect};

const EPSILON: f64 = 1e-9;

/// A 2D affine transformation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Clockwise rotation around the origin
    ///
    /// In SVG's coordinate system (Y-down), clockwise rotation uses:
    /// ```text
    /// [cos  -sin] [x]
    /// [sin   cos] [y]
    /// ```
    pub fn rotate(angle_degrees: f64) -> Self {
        let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
        Self::new(cos_a, sin_a, -sin_a, cos_a, 0.0, 0.0)
    }

    /// Clockwise rotation around `center`
    pub fn rotate_about(angle_degrees: f64, center: Point) -> Self {
        Self::translate(-center.x, -center.y)
            .then(&Self::rotate(angle_degrees))
            .then(&Self::translate(center.x, center.y))
    }

    /// The transform that applies `self` first and `next` second
    pub fn then(&self, next: &Transform) -> Transform {
        let (s, n) = (self, next);
        Transform {
            a: n.a * s.a + n.c * s.b,
            b: n.b * s.a + n.d * s.b,
            c: n.a * s.c + n.c * s.d,
            d: n.b * s.c + n.d * s.d,
            e: n.a * s.e + n.c * s.f + n.e,
            f: n.b * s.e + n.d * s.f + n.f,
        }
    }

    /// Check if this transform would not produce any visible change
    pub fn is_identity(&self) -> bool {
        self.is_translation() && self.e.abs() < EPSILON && self.f.abs() < EPSILON
    }

    /// True when the linear part is the identity
    pub fn is_translation(&self) -> bool {
        (self.a - 1.0).abs() < EPSILON
            && self.b.abs() < EPSILON
            && self.c.abs() < EPSILON
            && (self.d - 1.0).abs() < EPSILON
    }

    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            x: self.a * point.x + self.c * point.y + self.e,
            y: self.b * point.x + self.d * point.y + self.f,
        }
    }

    /// Transform a rectangle using the loose bounds algorithm
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        if self.is_identity() {
            return *rect;
        }

        let mapped = rect.corners().map(|p| self.transform_point(p));

        let min_x = mapped.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = mapped.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = mapped.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = mapped.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// SVG `transform` attribute value, or `None` for the identity
    pub fn to_svg(&self) -> Option<String> {
        if self.is_identity() {
            return None;
        }
        if self.is_translation() {
            return Some(format!("translate({:.2} {:.2})", self.e, self.f));
        }
        Some(format!(
            "matrix({:.4} {:.4} {:.4} {:.4} {:.2} {:.2})",
            self.a, self.b, self.c, self.d, self.e, self.f
        ))
    }
}

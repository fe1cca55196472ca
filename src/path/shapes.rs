//! Curve and area synthesis from point sequences.
//!
//! Every function here is a pure mapping from points (plus scalar parameters) to a path
//! `d` string, built on [`PathBuilder`].
//!
//! ## Smoothing
//!
//! [`smooth_line_path`] fits a Catmull-Rom style cubic spline through the points. For
//! the segment from `p1 = P[i]` to `p2 = P[i + 1]`, with neighbours `p0 = P[i - 1]` and
//! `p3 = P[i + 2]`:
//!
//! ```text
//! c1 = p1 + (p2 - p0) * tension
//! c2 = p2 - (p3 - p1) * tension
//! ```
//!
//! At the two ends the missing neighbour is the endpoint itself. A tension of 0 puts
//! the control points on the segment ends, giving straight segments; larger values bow
//! the curve further out.

use crate::layout::Point;

use super::builder::PathBuilder;

/// Move to the first point, then a line to each remaining point
pub fn polyline_path(points: &[Point]) -> String {
    polyline(points).serialize()
}

/// [`polyline_path`] closed back to the first point
pub fn polygon_path(points: &[Point]) -> String {
    let mut builder = polyline(points);
    if !builder.is_empty() {
        builder.close();
    }
    builder.serialize()
}

/// Smoothed cubic spline through every point.
///
/// Fewer than three points fall back to [`polyline_path`], since there is nothing to
/// fit with only two.
pub fn smooth_line_path(points: &[Point], tension: f64) -> String {
    if points.len() <= 2 {
        return polyline_path(points);
    }

    let mut builder = PathBuilder::new();
    builder.move_to(points[0].x, points[0].y);
    push_spline(&mut builder, points, tension);
    builder.serialize()
}

/// Closed shape between the polyline and a horizontal baseline, for area charts
pub fn area_path(points: &[Point], baseline_y: f64) -> String {
    area(points, baseline_y, |builder, points| push_lines(builder, points))
}

/// [`area_path`] with a smoothed top edge
pub fn smooth_area_path(points: &[Point], baseline_y: f64, tension: f64) -> String {
    area(points, baseline_y, |builder, points| {
        if points.len() <= 2 {
            push_lines(builder, points);
        } else {
            push_spline(builder, points, tension);
        }
    })
}

fn polyline(points: &[Point]) -> PathBuilder {
    let mut builder = PathBuilder::new();
    if let Some(first) = points.first() {
        builder.move_to(first.x, first.y);
        push_lines(&mut builder, points);
    }
    builder
}

/// Frame an area: baseline under the first point, the interior edge, back down to the
/// baseline under the last point, close.
fn area(
    points: &[Point],
    baseline_y: f64,
    interior: impl FnOnce(&mut PathBuilder, &[Point]),
) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    let mut builder = PathBuilder::new();
    builder
        .move_to(first.x, baseline_y)
        .line_to(first.x, first.y);
    interior(&mut builder, points);
    builder.line_to(last.x, baseline_y).close();
    builder.serialize()
}

/// Lines from `points[0]` (the current point) through the rest
fn push_lines(builder: &mut PathBuilder, points: &[Point]) {
    for p in points.iter().skip(1) {
        builder.line_to(p.x, p.y);
    }
}

/// Cubic segments from `points[0]` (the current point) through the rest
fn push_spline(builder: &mut PathBuilder, points: &[Point], tension: f64) {
    let last = points.len() - 1;
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let c1x = p1.x + (p2.x - p0.x) * tension;
        let c1y = p1.y + (p2.y - p0.y) * tension;
        let c2x = p2.x - (p3.x - p1.x) * tension;
        let c2y = p2.y - (p3.y - p1.y) * tension;

        builder.cubic_curve_to(c1x, c1y, c2x, c2y, p2.x, p2.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_polyline_path() {
        let points = pts(&[(0.0, 0.0), (10.0, 20.0), (30.0, 15.0), (40.0, 40.0)]);
        assert_snapshot!(
            polyline_path(&points),
            @"M 0.00 0.00 L 10.00 20.00 L 30.00 15.00 L 40.00 40.00"
        );
    }

    #[test]
    fn test_polyline_path_empty_points() {
        assert_eq!(polyline_path(&[]), "");
    }

    #[test]
    fn test_polyline_path_single_point() {
        assert_eq!(polyline_path(&pts(&[(10.0, 20.0)])), "M 10.00 20.00");
    }

    #[test]
    fn test_polygon_path() {
        let points = pts(&[(50.0, 0.0), (100.0, 50.0), (50.0, 100.0), (0.0, 50.0)]);
        assert_snapshot!(
            polygon_path(&points),
            @"M 50.00 0.00 L 100.00 50.00 L 50.00 100.00 L 0.00 50.00 Z"
        );
    }

    #[test]
    fn test_polygon_path_empty_points() {
        assert_eq!(polygon_path(&[]), "");
    }

    #[test]
    fn test_smooth_line_path() {
        let points = pts(&[(0.0, 100.0), (50.0, 50.0), (100.0, 80.0)]);
        assert_snapshot!(
            smooth_line_path(&points, 0.5),
            @"M 0.00 100.00 C 25.00 75.00, 0.00 60.00, 50.00 50.00 C 100.00 40.00, 75.00 65.00, 100.00 80.00"
        );
    }

    #[test]
    fn test_smooth_line_path_two_points() {
        let points = pts(&[(0.0, 0.0), (100.0, 100.0)]);
        assert_eq!(smooth_line_path(&points, 0.3), "M 0.00 0.00 L 100.00 100.00");
    }

    #[test]
    fn test_smooth_line_path_degenerate() {
        assert_eq!(smooth_line_path(&[], 0.3), "");
        assert_eq!(smooth_line_path(&pts(&[(1.0, 2.0)]), 0.3), "M 1.00 2.00");
    }

    #[test]
    fn test_smooth_line_path_tension_zero() {
        // Control points collapse onto the segment ends
        let points = pts(&[(0.0, 100.0), (50.0, 50.0), (100.0, 80.0)]);
        assert_snapshot!(
            smooth_line_path(&points, 0.0),
            @"M 0.00 100.00 C 0.00 100.00, 50.00 50.00, 50.00 50.00 C 50.00 50.00, 100.00 80.00, 100.00 80.00"
        );
    }

    #[test]
    fn test_area_path() {
        let points = pts(&[(0.0, 50.0), (50.0, 20.0), (100.0, 80.0)]);
        assert_snapshot!(
            area_path(&points, 100.0),
            @"M 0.00 100.00 L 0.00 50.00 L 50.00 20.00 L 100.00 80.00 L 100.00 100.00 Z"
        );
    }

    #[test]
    fn test_area_path_empty_points() {
        assert_eq!(area_path(&[], 100.0), "");
        assert_eq!(smooth_area_path(&[], 100.0, 0.3), "");
    }

    #[test]
    fn test_smooth_area_path() {
        let points = pts(&[(0.0, 50.0), (50.0, 20.0), (100.0, 80.0), (150.0, 40.0)]);
        let d = smooth_area_path(&points, 100.0, 0.3);

        assert!(d.starts_with("M 0.00 100.00 L 0.00 50.00 C "), "got: {d}");
        assert!(d.ends_with("L 150.00 100.00 Z"), "got: {d}");
        assert_eq!(d.matches("C ").count(), 3);
        assert!(!d.contains("L 50.00 20.00"));
    }

    #[test]
    fn test_smooth_area_path_two_points_uses_lines() {
        let points = pts(&[(0.0, 50.0), (100.0, 80.0)]);
        assert_eq!(
            smooth_area_path(&points, 100.0, 0.3),
            area_path(&points, 100.0)
        );
    }
}

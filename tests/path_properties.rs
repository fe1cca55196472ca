//! Property tests for path synthesis, styles and geometry

use proptest::prelude::*;

use layout_svg::layout::{bounding_box, polyline_length};
use layout_svg::{
    area_path, format_style, polygon_path, polyline_path, smooth_area_path, smooth_line_path,
    ClipPathRegistry, Point, Style, Transform,
};

// ===================
// Strategies
// ===================

fn point_strategy() -> impl Strategy<Value = Point> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn points_strategy(min: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point_strategy(), min..24)
}

fn tension_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1.0
}

fn count_commands(d: &str, command: &str) -> usize {
    d.split_whitespace().filter(|token| *token == command).count()
}

// ===================
// Property Test Functions
// ===================

/// One move, then one line per remaining point
fn check_polyline_command_counts(points: Vec<Point>) -> Result<(), TestCaseError> {
    let d = polyline_path(&points);
    prop_assert_eq!(count_commands(&d, "M"), 1);
    prop_assert_eq!(count_commands(&d, "L"), points.len() - 1);
    Ok(())
}

/// A polygon is the polyline closed with `Z`
fn check_polygon_closes_polyline(points: Vec<Point>) -> Result<(), TestCaseError> {
    prop_assert_eq!(polygon_path(&points), format!("{} Z", polyline_path(&points)));
    Ok(())
}

/// One cubic segment per gap between consecutive points
fn check_smooth_line_segment_count(points: Vec<Point>, tension: f64) -> Result<(), TestCaseError> {
    let d = smooth_line_path(&points, tension);
    prop_assert_eq!(count_commands(&d, "M"), 1);
    prop_assert_eq!(count_commands(&d, "C"), points.len() - 1);
    prop_assert_eq!(count_commands(&d, "L"), 0);
    Ok(())
}

/// Areas start and end on the baseline under the outer points
fn check_area_framing(points: Vec<Point>, baseline: f64, tension: f64) -> Result<(), TestCaseError> {
    let first = points[0];
    let last = points[points.len() - 1];
    let head = format!(
        "M {:.2} {:.2} L {:.2} {:.2}",
        first.x, baseline, first.x, first.y
    );
    let tail = format!("L {:.2} {:.2} Z", last.x, baseline);

    for d in [
        area_path(&points, baseline),
        smooth_area_path(&points, baseline, tension),
    ] {
        prop_assert!(d.starts_with(&head), "{} does not start with {}", d, head);
        prop_assert!(d.ends_with(&tail), "{} does not end with {}", d, tail);
    }
    Ok(())
}

/// Opacity is emitted exactly when it is strictly between 0 and 1
fn check_opacity_emission(opacity: f64) -> Result<(), TestCaseError> {
    let attrs = format_style(&Style::new().with_opacity(opacity));
    let expected = opacity > 0.0 && opacity < 1.0;
    prop_assert_eq!(attrs.contains("opacity="), expected);
    Ok(())
}

/// Every point lies inside the bounding box
fn check_bounding_box_contains_points(points: Vec<Point>) -> Result<(), TestCaseError> {
    let bounds = bounding_box(&points).expect("non-empty input");
    for p in &points {
        // right/bottom are recomputed from x + width, so allow rounding
        prop_assert!(p.x >= bounds.x && p.x <= bounds.right() + 1e-9);
        prop_assert!(p.y >= bounds.y && p.y <= bounds.bottom() + 1e-9);
    }
    Ok(())
}

/// A polyline is never shorter than the straight line between its ends
fn check_polyline_length_at_least_chord(points: Vec<Point>) -> Result<(), TestCaseError> {
    let chord = points[0].distance_to(points[points.len() - 1]);
    prop_assert!(polyline_length(&points) + 1e-6 >= chord);
    Ok(())
}

/// Composing transforms matches applying them in sequence
fn check_transform_composition(p: Point, angle: f64, dx: f64, dy: f64) -> Result<(), TestCaseError> {
    let rotate = Transform::rotate(angle);
    let translate = Transform::translate(dx, dy);

    let composed = rotate.then(&translate).transform_point(p);
    let sequential = translate.transform_point(rotate.transform_point(p));

    prop_assert!((composed.x - sequential.x).abs() < 1e-6);
    prop_assert!((composed.y - sequential.y).abs() < 1e-6);
    Ok(())
}

proptest! {
    #[test]
    fn polyline_command_counts(points in points_strategy(1)) {
        check_polyline_command_counts(points)?;
    }

    #[test]
    fn polygon_closes_polyline(points in points_strategy(1)) {
        check_polygon_closes_polyline(points)?;
    }

    #[test]
    fn smooth_line_two_points_is_polyline(a in point_strategy(), b in point_strategy(), t in tension_strategy()) {
        prop_assert_eq!(smooth_line_path(&[a, b], t), polyline_path(&[a, b]));
    }

    #[test]
    fn smooth_line_segment_count(points in points_strategy(3), t in tension_strategy()) {
        check_smooth_line_segment_count(points, t)?;
    }

    #[test]
    fn area_framing(points in points_strategy(1), baseline in -500.0f64..500.0, t in tension_strategy()) {
        check_area_framing(points, baseline, t)?;
    }

    #[test]
    fn opacity_emission(opacity in -0.5f64..1.5) {
        check_opacity_emission(opacity)?;
    }

    #[test]
    fn bounding_box_contains_points(points in points_strategy(1)) {
        check_bounding_box_contains_points(points)?;
    }

    #[test]
    fn polyline_length_at_least_chord(points in points_strategy(2)) {
        check_polyline_length_at_least_chord(points)?;
    }

    #[test]
    fn transform_composition(
        p in point_strategy(),
        angle in -360.0f64..360.0,
        dx in -100.0f64..100.0,
        dy in -100.0f64..100.0,
    ) {
        check_transform_composition(p, angle, dx, dy)?;
    }

    #[test]
    fn clip_ids_distinct_across_registries(count in 1usize..20) {
        let a = ClipPathRegistry::new();
        let b = ClipPathRegistry::new();
        let mut ids: Vec<String> = (0..count)
            .flat_map(|_| [a.generate_id(), b.generate_id()])
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}

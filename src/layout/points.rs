//! Helpers over ordered point sequences

use super::types::{Point, Rect};

/// Axis-aligned bounds of a point sequence, `None` when empty
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let start = Rect::new(first.x, first.y, 0.0, 0.0);
    Some(rest.iter().fold(start, |acc, p| acc.expand_to_include(*p)))
}

/// Total length of the open polyline through `points`
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(bounding_box(&[]), None);
    }

    #[test]
    fn test_bounding_box_single_point() {
        let b = bounding_box(&[Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(b, Rect::new(3.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn test_bounding_box() {
        let points = [
            Point::new(0.0, 100.0),
            Point::new(50.0, 50.0),
            Point::new(100.0, 80.0),
            Point::new(150.0, 20.0),
        ];
        assert_eq!(bounding_box(&points), Some(Rect::new(0.0, 20.0, 150.0, 80.0)));
    }

    #[test]
    fn test_polyline_length() {
        assert_eq!(polyline_length(&[]), 0.0);
        assert_eq!(polyline_length(&[Point::new(1.0, 1.0)]), 0.0);
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 10.0)];
        assert_eq!(polyline_length(&points), 11.0);
    }
}

//! Core types for computed layout trees

use serde::Deserialize;

use super::transform::Transform;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A resolved rectangle: position plus size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized rectangle at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// True when both width and height are strictly positive
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// The four corners, clockwise from the top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Expand this rectangle to include a point
    pub fn expand_to_include(&self, point: Point) -> Rect {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        Rect::new(x, y, right - x, bottom - y)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}

/// A node of an already-computed layout tree.
///
/// The renderer reads `rect`, `transform` and `children` once per node and never
/// mutates the tree. `id` is carried for callbacks that need to tell nodes apart.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BoxNode {
    pub id: Option<String>,
    pub rect: Rect,
    pub transform: Option<Transform>,
    pub children: Vec<BoxNode>,
}

impl BoxNode {
    /// A leaf node covering `rect`
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_child(mut self, child: BoxNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = BoxNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a node by id in this subtree, depth-first
    pub fn find(&self, id: &str) -> Option<&BoxNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(BoxNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_has_area() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 10.0, 0.0).has_area());
        assert!(!Rect::new(0.0, 0.0, -5.0, 10.0).has_area());
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 15.0, 15.0));
    }

    #[test]
    fn test_expand_to_include() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).expand_to_include(Point::new(-5.0, 20.0));
        assert_eq!(r, Rect::new(-5.0, 0.0, 15.0, 20.0));
    }

    #[test]
    fn test_find_and_count() {
        let tree = BoxNode::new(Rect::new(0.0, 0.0, 200.0, 100.0))
            .with_id("root")
            .with_child(BoxNode::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_id("a"))
            .with_child(
                BoxNode::new(Rect::new(100.0, 0.0, 100.0, 100.0))
                    .with_id("b")
                    .with_child(BoxNode::new(Rect::zero()).with_id("b1")),
            );

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.find("b1").map(|n| n.rect), Some(Rect::zero()));
        assert!(tree.find("missing").is_none());
    }
}

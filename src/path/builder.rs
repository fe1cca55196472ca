//! Path command accumulation and `d` attribute serialization

use std::fmt;

use crate::layout::Point;

/// A single SVG path drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Horizontal line to x
    HorizontalLineTo(f64),
    /// Vertical line to y
    VerticalLineTo(f64),
    /// Cubic Bezier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Smooth cubic continuation; the first control point is reflected
    SmoothCubicTo { control2: Point, end: Point },
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
    /// Elliptical arc
    ArcTo {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    /// Close path back to start
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {:.2} {:.2}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {:.2} {:.2}", p.x, p.y),
            PathCommand::HorizontalLineTo(x) => write!(f, "H {:.2}", x),
            PathCommand::VerticalLineTo(y) => write!(f, "V {:.2}", y),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => write!(
                f,
                "C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                control1.x, control1.y, control2.x, control2.y, end.x, end.y
            ),
            PathCommand::SmoothCubicTo { control2, end } => write!(
                f,
                "S {:.2} {:.2}, {:.2} {:.2}",
                control2.x, control2.y, end.x, end.y
            ),
            PathCommand::QuadraticTo { control, end } => write!(
                f,
                "Q {:.2} {:.2}, {:.2} {:.2}",
                control.x, control.y, end.x, end.y
            ),
            PathCommand::ArcTo {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                end,
            } => write!(
                f,
                "A {:.2} {:.2} {:.2} {} {} {:.2} {:.2}",
                rx,
                ry,
                rotation,
                u8::from(*large_arc),
                u8::from(*sweep),
                end.x,
                end.y
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Builds SVG path data one command at a time.
///
/// Every method appends exactly one command and returns the builder, so calls chain:
///
/// ```rust
/// use layout_svg::PathBuilder;
///
/// let mut square = PathBuilder::new();
/// square
///     .move_to(10.0, 10.0)
///     .line_to(90.0, 10.0)
///     .line_to(90.0, 90.0)
///     .line_to(10.0, 90.0)
///     .close();
///
/// assert_eq!(
///     square.serialize(),
///     "M 10.00 10.00 L 90.00 10.00 L 90.00 90.00 L 10.00 90.00 Z"
/// );
/// ```
///
/// Inputs are not validated: non-finite numbers are formatted as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::MoveTo(Point::new(x, y)))
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::LineTo(Point::new(x, y)))
    }

    pub fn horizontal_line_to(&mut self, x: f64) -> &mut Self {
        self.push(PathCommand::HorizontalLineTo(x))
    }

    pub fn vertical_line_to(&mut self, y: f64) -> &mut Self {
        self.push(PathCommand::VerticalLineTo(y))
    }

    pub fn cubic_curve_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        })
    }

    pub fn smooth_cubic_curve_to(&mut self, c2x: f64, c2y: f64, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::SmoothCubicTo {
            control2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        })
    }

    pub fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::QuadraticTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        })
    }

    /// SVG arc: `A rx ry x-axis-rotation large-arc-flag sweep-flag x y`
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.push(PathCommand::ArcTo {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            end: Point::new(x, y),
        })
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::Close)
    }

    /// Append an already-built command
    pub fn push(&mut self, command: PathCommand) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Convert to an SVG path `d` attribute string
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_move_and_line() {
        let mut pb = PathBuilder::new();
        pb.move_to(10.0, 20.0).line_to(30.0, 40.0);
        assert_snapshot!(pb.serialize(), @"M 10.00 20.00 L 30.00 40.00");
    }

    #[test]
    fn test_horizontal_and_vertical() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0).horizontal_line_to(50.0).vertical_line_to(50.0);
        assert_snapshot!(pb.serialize(), @"M 0.00 0.00 H 50.00 V 50.00");
    }

    #[test]
    fn test_cubic_and_smooth_cubic() {
        let mut pb = PathBuilder::new();
        pb.move_to(10.0, 80.0)
            .cubic_curve_to(40.0, 10.0, 65.0, 10.0, 95.0, 80.0)
            .smooth_cubic_curve_to(150.0, 150.0, 180.0, 80.0);
        assert_snapshot!(
            pb.serialize(),
            @"M 10.00 80.00 C 40.00 10.00, 65.00 10.00, 95.00 80.00 S 150.00 150.00, 180.00 80.00"
        );
    }

    #[test]
    fn test_quadratic() {
        let mut pb = PathBuilder::new();
        pb.move_to(10.0, 80.0).quadratic_curve_to(52.5, 10.0, 95.0, 80.0);
        assert_snapshot!(pb.serialize(), @"M 10.00 80.00 Q 52.50 10.00, 95.00 80.00");
    }

    #[test]
    fn test_arc() {
        let mut pb = PathBuilder::new();
        pb.move_to(10.0, 50.0)
            .arc_to(40.0, 40.0, 0.0, false, true, 90.0, 50.0);
        assert_snapshot!(pb.serialize(), @"M 10.00 50.00 A 40.00 40.00 0.00 0 1 90.00 50.00");
    }

    #[test]
    fn test_close() {
        let mut pb = PathBuilder::new();
        pb.move_to(10.0, 10.0)
            .line_to(90.0, 10.0)
            .line_to(90.0, 90.0)
            .line_to(10.0, 90.0)
            .close();
        assert_eq!(pb.len(), 5);
        assert_eq!(pb.commands().last(), Some(&PathCommand::Close));
        assert_snapshot!(
            pb.serialize(),
            @"M 10.00 10.00 L 90.00 10.00 L 90.00 90.00 L 10.00 90.00 Z"
        );
    }

    #[test]
    fn test_empty_path() {
        let pb = PathBuilder::new();
        assert!(pb.is_empty());
        assert_eq!(pb.serialize(), "");
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut pb = PathBuilder::new();
        pb.move_to(1.0, 2.0).line_to(3.0, 4.0);
        let first = pb.serialize();
        let second = pb.serialize();
        assert_eq!(first, second);

        // Serializing must not freeze the builder
        pb.close();
        assert_eq!(pb.serialize(), format!("{first} Z"));
    }

    #[test]
    fn test_non_finite_values_are_formatted() {
        let mut pb = PathBuilder::new();
        pb.move_to(f64::NAN, 0.0);
        assert_eq!(pb.serialize(), "M NaN 0.00");
    }
}

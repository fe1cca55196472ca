//! SVG path data construction
//!
//! [`PathBuilder`] accumulates typed commands; the functions in [`shapes`] turn point
//! sequences into complete path data.

pub mod builder;
pub mod shapes;

pub use builder::{PathBuilder, PathCommand};
pub use shapes::{area_path, polygon_path, polyline_path, smooth_area_path, smooth_line_path};

//! Layout tree input and geometry value types
//!
//! The tree is produced by an external layout computation; this module only describes
//! it. `document` loads a tree plus canvas settings from TOML for the command-line tool.

pub mod document;
pub mod points;
pub mod transform;
pub mod types;

pub use document::{CanvasConfig, LayoutDocument, NodeStyle};
pub use points::{bounding_box, polyline_length};
pub use transform::Transform;
pub use types::{BoxNode, Point, Rect};

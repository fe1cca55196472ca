//! SVG renderer for box trees
//!
//! This module takes positioned [`BoxNode`](crate::layout::BoxNode) trees and produces
//! a complete SVG document, collecting clip-path definitions on the way.

pub mod clip;
pub mod config;
pub mod svg;

pub use clip::{clip_url, ClipDefinition, ClipPathRegistry, IdSource, ProcessIds, SequentialIds};
pub use config::{RenderFn, RenderOptions, StyleFn};
pub use svg::{render_nodes, render_to_svg, Renderer};

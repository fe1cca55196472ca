//! Clip-path definitions and process-unique identifiers
//!
//! Ids come from an [`IdSource`]. The default, [`ProcessIds`], is one atomic counter
//! shared by every registry in the process, so documents rendered in parallel never
//! reuse an id.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::trace;

/// Hands out identifier numbers that are never repeated by the same source
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> u64;
}

static PROCESS_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The process-wide counter
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIds;

impl IdSource for ProcessIds {
    fn next_id(&self) -> u64 {
        PROCESS_COUNTER.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// A counter owned by the caller, starting at 1. Unique only among registries that
/// share the same instance.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// A registered `<clipPath>`: its id and the clipping shape markup
#[derive(Debug, Clone, PartialEq)]
pub struct ClipDefinition {
    pub id: String,
    pub shape: String,
}

/// Collects clip-path definitions discovered while rendering
pub struct ClipPathRegistry {
    ids: Arc<dyn IdSource>,
    definitions: Vec<ClipDefinition>,
}

impl std::fmt::Debug for ClipPathRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipPathRegistry")
            .field("definitions", &self.definitions)
            .finish_non_exhaustive()
    }
}

impl Default for ClipPathRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipPathRegistry {
    /// A registry drawing ids from the process-wide counter
    pub fn new() -> Self {
        Self::with_source(Arc::new(ProcessIds))
    }

    pub fn with_source(ids: Arc<dyn IdSource>) -> Self {
        Self {
            ids,
            definitions: vec![],
        }
    }

    /// Generate a fresh `clip-N` id without registering anything
    pub fn generate_id(&self) -> String {
        format!("clip-{}", self.ids.next_id())
    }

    /// Register a rounded rectangle clip and return its id
    pub fn add_rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
        self.add_custom(format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" rx="{radius:.2}" ry="{radius:.2}"/>"#
        ))
    }

    /// Register a rectangle clip and return its id
    pub fn add_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> String {
        self.add_custom(format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}"/>"#
        ))
    }

    /// Register a circle clip and return its id
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64) -> String {
        self.add_custom(format!(r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}"/>"#))
    }

    /// Register arbitrary clipping markup and return its id
    pub fn add_custom(&mut self, shape: impl Into<String>) -> String {
        let id = self.generate_id();
        trace!(id = id.as_str(); "Registered clip path");
        self.definitions.push(ClipDefinition {
            id: id.clone(),
            shape: shape.into(),
        });
        id
    }

    /// Registered definitions, in insertion order
    pub fn definitions(&self) -> &[ClipDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Serialize every definition, one `<clipPath>` per line, in insertion order.
    ///
    /// The registry keeps its definitions.
    pub fn flush_definitions(&self) -> String {
        self.definitions
            .iter()
            .map(|def| format!(r#"<clipPath id="{}">{}</clipPath>"#, def.id, def.shape))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The CSS `url()` reference for a clip-path id
pub fn clip_url(id: &str) -> String {
    format!("url(#{id})")
}

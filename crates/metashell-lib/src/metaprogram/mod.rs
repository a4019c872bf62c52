//! Template metaprogram traces as navigable graphs.
//!
//! # Architecture
//!
//! ```text
//! Templight XML → TraceEvent* → MetaprogramBuilder → Metaprogram → Navigator
//! ```
//!
//! The `Metaprogram` is immutable once built. A `Cursor` holds the
//! debugger position; a `Navigator` pairs the two for stepping and queries.

mod builder;
mod graph;
mod navigator;
mod templight;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod graph_tests;
#[cfg(test)]
mod templight_tests;

pub use builder::{MetaprogramBuilder, TraceEvent};
pub use graph::{Edge, EdgeId, Metaprogram, Mode, ROOT_VERTEX, Vertex, VertexId};
pub use navigator::{Cursor, Navigator, StepOutcome};
pub use templight::parse_templight;

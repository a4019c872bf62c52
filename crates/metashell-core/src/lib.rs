#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for metashell.
//!
//! Everything the trace engine, the navigator and the displayers exchange:
//! - **Names**: `Type` wraps a rendered C++ type or expression
//! - **Frames**: a name plus the instantiation kind that produced it
//! - **Call graphs**: depth-annotated pre-order node sequences
//! - **Text**: structured comments made of indented paragraphs

pub mod colors;

mod call_graph;
mod error;
mod frame;
mod kind;
mod location;
mod text;


pub use call_graph::CallGraphNode;
pub use colors::Colors;
pub use error::ParseError;
pub use frame::{Backtrace, Frame, Type};
pub use kind::InstantiationKind;
pub use location::FileLocation;
pub use text::{Paragraph, Text};

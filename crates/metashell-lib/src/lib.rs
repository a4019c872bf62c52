//! Metashell: inspect how the compiler instantiates C++ templates.
//!
//! A Templight trace is replayed into a [`Metaprogram`] graph, which the
//! [`Navigator`] walks like a debugger walks a call stack. All output goes
//! through a [`Displayer`], so console, JSON and in-memory sinks are
//! interchangeable.
//!
//! # Example
//!
//! ```
//! use metashell_lib::metaprogram::{Cursor, Metaprogram, Mode, Navigator};
//!
//! let xml = r#"<Trace>
//!   <TemplateBegin>
//!     <Kind>TemplateInstantiation</Kind>
//!     <Context context="fib&lt;2&gt;"/>
//!     <PointOfInstantiation>main.cpp|3|10</PointOfInstantiation>
//!     <TimeStamp time="0.0"/>
//!     <MemoryUsage bytes="0"/>
//!   </TemplateBegin>
//!   <TemplateEnd>
//!     <Kind>TemplateInstantiation</Kind>
//!     <TimeStamp time="0.1"/>
//!     <MemoryUsage bytes="0"/>
//!   </TemplateEnd>
//! </Trace>"#;
//!
//! let mp = Metaprogram::from_templight_str(xml, Mode::Normal, "fib<2>::value", "int".into())?;
//! let mut cursor = Cursor::new(&mp);
//! let mut nav = Navigator::new(&mp, &mut cursor);
//! nav.step();
//! assert_eq!(nav.backtrace().len(), 2);
//! # Ok::<(), metashell_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod display;
pub mod mdb;
pub mod metaprogram;

pub use display::{ConsoleDisplayer, Displayer, InMemoryDisplayer, JsonDisplayer};
pub use metaprogram::{Cursor, Metaprogram, Mode, Navigator};

pub use metashell_core::{
    Backtrace, CallGraphNode, Colors, FileLocation, Frame, InstantiationKind, Paragraph,
    ParseError, Text, Type,
};

/// Errors that can occur while loading a trace.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("templight xml parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("templight xml parse failed: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("templight xml parse failed (missing <Trace> root element)")]
    MissingTraceElement,

    #[error("unknown templight xml node \"{0}\"")]
    UnknownTraceNode(String),

    #[error("templight xml parse failed ({event} without {field})")]
    MissingField {
        event: &'static str,
        field: &'static str,
    },

    #[error("templight xml parse failed (invalid {field}: \"{value}\")")]
    InvalidNumber { field: &'static str, value: String },

    /// A `TemplateEnd` event arrived with no open `TemplateBegin`.
    #[error("mismatched Templight TemplateBegin and TemplateEnd events")]
    MismatchedTrace,

    /// The trace ended with `TemplateBegin` events still open.
    #[error("some Templight TemplateEnd events are missing")]
    UnterminatedTrace,

    /// A trace source could not produce a trace for an expression.
    #[error("{0}")]
    Evaluation(String),

    #[error("can't open templight file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for trace loading.
pub type Result<T> = std::result::Result<T, Error>;

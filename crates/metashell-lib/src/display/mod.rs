//! Output sinks.
//!
//! Everything user-visible goes through a [`Displayer`]. The console sink
//! renders text for a terminal, the JSON sink writes one document per call,
//! and the in-memory sink records calls for inspection.

mod call_graph;
mod console;
mod console_displayer;
mod in_memory;
mod indenter;
mod json_displayer;

#[cfg(test)]
mod indenter_tests;
#[cfg(test)]
mod json_displayer_tests;

use metashell_core::{Backtrace, CallGraphNode, Frame, Text, Type};

pub use call_graph::{PRETTY_PRINT_THRESHOLD, render_call_graph};
pub use console::{BufferConsole, Console, DEFAULT_WIDTH, WriteConsole};
pub use console_displayer::{ConsoleConfig, ConsoleDisplayer};
pub use in_memory::InMemoryDisplayer;
pub use indenter::Indenter;
pub use json_displayer::{Document, JsonDisplayer, JsonNode};

/// Sink for everything the shell shows to the user.
pub trait Displayer {
    fn show_raw_text(&mut self, text: &str);
    /// Shows nothing for an empty message.
    fn show_error(&mut self, msg: &str);
    /// Shows nothing for an empty type name.
    fn show_type(&mut self, ty: &Type);
    fn show_comment(&mut self, text: &Text);
    /// Shows nothing for empty code.
    fn show_cpp_code(&mut self, code: &str);
    fn show_frame(&mut self, frame: &Frame);
    fn show_backtrace(&mut self, trace: &Backtrace);
    fn show_call_graph(&mut self, nodes: &[CallGraphNode]);
}

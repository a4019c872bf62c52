//! Recording displayer for tests and embedding.

use metashell_core::{Backtrace, CallGraphNode, Frame, Text, Type};

use super::Displayer;

/// Keeps every shown item, grouped by kind.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDisplayer {
    raw_texts: Vec<String>,
    errors: Vec<String>,
    types: Vec<Type>,
    comments: Vec<Text>,
    cpp_codes: Vec<String>,
    frames: Vec<Frame>,
    backtraces: Vec<Backtrace>,
    call_graphs: Vec<Vec<CallGraphNode>>,
}

impl InMemoryDisplayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_texts(&self) -> &[String] {
        &self.raw_texts
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn comments(&self) -> &[Text] {
        &self.comments
    }

    pub fn cpp_codes(&self) -> &[String] {
        &self.cpp_codes
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn backtraces(&self) -> &[Backtrace] {
        &self.backtraces
    }

    pub fn call_graphs(&self) -> &[Vec<CallGraphNode>] {
        &self.call_graphs
    }

    /// True if nothing has been shown since creation or the last `clear`.
    pub fn is_empty(&self) -> bool {
        self.raw_texts.is_empty()
            && self.errors.is_empty()
            && self.types.is_empty()
            && self.comments.is_empty()
            && self.cpp_codes.is_empty()
            && self.frames.is_empty()
            && self.backtraces.is_empty()
            && self.call_graphs.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Displayer for InMemoryDisplayer {
    fn show_raw_text(&mut self, text: &str) {
        self.raw_texts.push(text.to_owned());
    }

    fn show_error(&mut self, msg: &str) {
        if msg.is_empty() {
            return;
        }
        self.errors.push(msg.to_owned());
    }

    fn show_type(&mut self, ty: &Type) {
        if ty.name().is_empty() {
            return;
        }
        self.types.push(ty.clone());
    }

    fn show_comment(&mut self, text: &Text) {
        self.comments.push(text.clone());
    }

    fn show_cpp_code(&mut self, code: &str) {
        if code.is_empty() {
            return;
        }
        self.cpp_codes.push(code.to_owned());
    }

    fn show_frame(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn show_backtrace(&mut self, trace: &Backtrace) {
        self.backtraces.push(trace.clone());
    }

    fn show_call_graph(&mut self, nodes: &[CallGraphNode]) {
        self.call_graphs.push(nodes.to_vec());
    }
}

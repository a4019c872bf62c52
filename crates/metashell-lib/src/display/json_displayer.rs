//! Machine-readable output: one JSON document per line.
//!
//! ```text
//! {"type":"frame","name":"fib<2>","kind":"TemplateInstantiation"}
//! {"type":"call_graph","nodes":[{"name":"int","depth":0,"children":0}]}
//! ```

use metashell_core::{Backtrace, CallGraphNode, Frame, InstantiationKind, Paragraph, Text, Type};
use serde::{Deserialize, Serialize};

use super::Displayer;
use super::console::Console;

/// One output document. Keys are emitted in declaration order, `type` first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Document {
    RawText {
        value: String,
    },
    Error {
        msg: String,
    },
    Type {
        name: Type,
    },
    Comment {
        paragraphs: Vec<Paragraph>,
    },
    CppCode {
        code: String,
    },
    Frame {
        name: Type,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<InstantiationKind>,
    },
    Backtrace {
        frames: Vec<Frame>,
    },
    CallGraph {
        nodes: Vec<JsonNode>,
    },
}

/// Call graph entry as it appears in a `call_graph` document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonNode {
    pub name: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<InstantiationKind>,
    pub depth: usize,
    pub children: usize,
}

impl From<&CallGraphNode> for JsonNode {
    fn from(node: &CallGraphNode) -> Self {
        Self {
            name: node.frame.name().clone(),
            kind: node.frame.kind(),
            depth: node.depth,
            children: node.number_of_children,
        }
    }
}

impl From<&JsonNode> for CallGraphNode {
    fn from(node: &JsonNode) -> Self {
        let frame = match node.kind {
            Some(kind) => Frame::with_kind(node.name.clone(), kind),
            None => Frame::new(node.name.clone()),
        };
        CallGraphNode::new(frame, node.depth, node.children)
    }
}

impl Document {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

pub struct JsonDisplayer<C> {
    console: C,
}

impl<C: Console> JsonDisplayer<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn emit(&mut self, doc: Document) {
        match doc.to_json() {
            Ok(line) => {
                self.console.show(&line);
                self.console.new_line();
            }
            Err(err) => log::error!("cannot serialize {:?}: {err}", doc),
        }
    }
}

impl<C: Console> Displayer for JsonDisplayer<C> {
    fn show_raw_text(&mut self, text: &str) {
        self.emit(Document::RawText {
            value: text.to_owned(),
        });
    }

    fn show_error(&mut self, msg: &str) {
        if msg.is_empty() {
            return;
        }
        self.emit(Document::Error {
            msg: msg.to_owned(),
        });
    }

    fn show_type(&mut self, ty: &Type) {
        if ty.name().is_empty() {
            return;
        }
        self.emit(Document::Type { name: ty.clone() });
    }

    fn show_comment(&mut self, text: &Text) {
        self.emit(Document::Comment {
            paragraphs: text.paragraphs.clone(),
        });
    }

    fn show_cpp_code(&mut self, code: &str) {
        if code.is_empty() {
            return;
        }
        self.emit(Document::CppCode {
            code: code.to_owned(),
        });
    }

    fn show_frame(&mut self, frame: &Frame) {
        self.emit(Document::Frame {
            name: frame.name().clone(),
            kind: frame.kind(),
        });
    }

    fn show_backtrace(&mut self, trace: &Backtrace) {
        self.emit(Document::Backtrace {
            frames: trace.as_slice().to_vec(),
        });
    }

    fn show_call_graph(&mut self, nodes: &[CallGraphNode]) {
        self.emit(Document::CallGraph {
            nodes: nodes.iter().map(JsonNode::from).collect(),
        });
    }
}

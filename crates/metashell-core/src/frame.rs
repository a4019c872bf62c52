//! Frames: the unit shown by backtraces, call graphs and the debugger prompt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InstantiationKind;

/// A rendered C++ type or expression.
///
/// Opaque to metashell: compared and displayed as written by the compiler.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(String);

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Type {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Type {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One node of an instantiation chain.
///
/// Frames without a kind stand for the evaluated root or a non-template entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    name: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<InstantiationKind>,
}

impl Frame {
    pub fn new(name: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }

    pub fn with_kind(name: impl Into<Type>, kind: InstantiationKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
        }
    }

    pub fn name(&self) -> &Type {
        &self.name
    }

    pub fn kind(&self) -> Option<InstantiationKind> {
        self.kind
    }

    pub fn has_kind(&self) -> bool {
        self.kind.is_some()
    }
}

/// Renders as `<name>[ (<kind>)]`.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(kind) = self.kind {
            write!(f, " ({})", kind)?;
        }
        Ok(())
    }
}

/// Frames from the evaluated root down to the current instantiation.
///
/// Index 0 is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Backtrace {
    frames: Vec<Frame>,
}

impl Backtrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// The innermost frame.
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }
}

impl FromIterator<Frame> for Backtrace {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Backtrace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl IntoIterator for Backtrace {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

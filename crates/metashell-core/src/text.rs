//! Structured comments.

use serde::{Deserialize, Serialize};

/// A block of prose with its own hanging indentation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub first_line_indentation: String,
    pub rest_of_lines_indentation: String,
    pub content: String,
}

impl Paragraph {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn indented(
        content: impl Into<String>,
        rest_of_lines_indentation: impl Into<String>,
        first_line_indentation: impl Into<String>,
    ) -> Self {
        Self {
            first_line_indentation: first_line_indentation.into(),
            rest_of_lines_indentation: rest_of_lines_indentation.into(),
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub paragraphs: Vec<Paragraph>,
}

impl Text {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// One unindented paragraph per line of `s`.
    pub fn from_lines(s: &str) -> Self {
        Self {
            paragraphs: s.lines().map(Paragraph::new).collect(),
        }
    }
}

impl From<Paragraph> for Text {
    fn from(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
        }
    }
}

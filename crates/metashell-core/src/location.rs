use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Point of instantiation in a source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileLocation {
    pub file: String,
    pub line: i32,
    pub column: i32,
}

impl FileLocation {
    pub fn new(file: impl Into<String>, line: i32, column: i32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// Parses the Templight `file|line|column` form.
impl FromStr for FileLocation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidFileLocation(s.to_owned());

        let parts: Vec<&str> = s.split('|').collect();
        let [file, line, column] = parts.as_slice() else {
            return Err(invalid());
        };

        Ok(Self {
            file: (*file).to_owned(),
            line: line.parse().map_err(|_| invalid())?,
            column: column.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

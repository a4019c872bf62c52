//! Trace source backed by a Templight file recorded ahead of time.

use std::path::PathBuf;

use metashell_lib::mdb::{Evaluation, TraceSource};
use metashell_lib::metaprogram::parse_templight;
use metashell_lib::{Error, Result, Type};

/// Answers every `evaluate` with the same recorded trace.
///
/// There is no compiler behind it: the expression only names the root
/// frame, and the result type is fixed on the command line.
#[derive(Clone, Debug)]
pub struct FileTraceSource {
    path: Option<PathBuf>,
    result: Type,
}

impl FileTraceSource {
    pub fn new(path: Option<PathBuf>, result: Type) -> Self {
        Self { path, result }
    }
}

impl TraceSource for FileTraceSource {
    fn evaluate(&mut self, expression: &str) -> Result<Evaluation> {
        let Some(path) = &self.path else {
            return Err(Error::Evaluation("no templight trace file given".to_owned()));
        };
        log::info!("evaluating {expression} from {}", path.display());

        let xml = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Evaluation {
            events: parse_templight(&xml)?,
            result: self.result.clone(),
        })
    }
}

//! Trace replay: turns Begin/End events into a `Metaprogram`.

use std::collections::HashMap;
use std::path::Path;

use metashell_core::{FileLocation, InstantiationKind, Type};

use super::graph::{Edge, Metaprogram, Mode, VertexId};
use super::templight::parse_templight;
use crate::{Error, Result};

/// One record of a template instantiation trace.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    TemplateBegin {
        kind: InstantiationKind,
        context: String,
        location: FileLocation,
        timestamp: f64,
        memory_usage: u64,
    },
    TemplateEnd {
        kind: InstantiationKind,
        timestamp: f64,
        memory_usage: u64,
    },
}

/// Replays trace events as a call stack over deduplicated vertices.
///
/// Vertices are keyed by the raw context string: two instantiations with the
/// same context share one vertex, whatever path reached them.
#[derive(Debug)]
pub struct MetaprogramBuilder {
    mp: Metaprogram,
    /// Open instantiations: vertex and the kind it was opened with.
    open: Vec<(VertexId, InstantiationKind)>,
    vertex_by_context: HashMap<String, VertexId>,
}

impl MetaprogramBuilder {
    pub fn new(mode: Mode, root_name: &str, evaluation_result: Type) -> Self {
        Self {
            mp: Metaprogram::new(mode, root_name, evaluation_result),
            open: Vec::new(),
            vertex_by_context: HashMap::new(),
        }
    }

    pub fn handle_event(&mut self, event: TraceEvent) -> Result<()> {
        match event {
            TraceEvent::TemplateBegin {
                kind,
                context,
                location,
                timestamp,
                memory_usage,
            } => {
                self.template_begin(kind, &context, location, timestamp, memory_usage);
                Ok(())
            }
            TraceEvent::TemplateEnd { kind, .. } => self.template_end(kind),
        }
    }

    /// Open an instantiation of `context` from the innermost open one.
    pub fn template_begin(
        &mut self,
        kind: InstantiationKind,
        context: &str,
        location: FileLocation,
        timestamp: f64,
        memory_usage: u64,
    ) {
        let target = self.vertex_for(context);
        let source = self.open.last().map_or(self.mp.root(), |&(v, _)| v);

        self.mp.add_edge(Edge {
            source,
            target,
            kind,
            point_of_instantiation: location,
            timestamp,
            memory_usage,
        });
        self.open.push((target, kind));
    }

    /// Close the innermost open instantiation.
    ///
    /// The kind is not required to match the one the instantiation was
    /// opened with; a mismatch is only logged.
    pub fn template_end(&mut self, kind: InstantiationKind) -> Result<()> {
        let (vertex, opened_as) = self.open.pop().ok_or(Error::MismatchedTrace)?;

        if opened_as != kind {
            log::warn!(
                "TemplateEnd ({}) closes {} opened as {}",
                kind,
                self.mp.vertex(vertex).name,
                opened_as
            );
        }
        Ok(())
    }

    pub fn finish(self) -> Result<Metaprogram> {
        if !self.open.is_empty() {
            return Err(Error::UnterminatedTrace);
        }

        log::debug!(
            "metaprogram built: {} vertices, {} edges, {:?} mode",
            self.mp.vertex_count(),
            self.mp.edge_count(),
            self.mp.mode()
        );
        Ok(self.mp)
    }

    fn vertex_for(&mut self, context: &str) -> VertexId {
        if let Some(&id) = self.vertex_by_context.get(context) {
            return id;
        }
        let id = self.mp.add_vertex(context);
        self.vertex_by_context.insert(context.to_owned(), id);
        id
    }
}

impl Metaprogram {
    /// Build from an ordered event sequence.
    pub fn from_events(
        events: impl IntoIterator<Item = TraceEvent>,
        mode: Mode,
        root_name: &str,
        evaluation_result: Type,
    ) -> Result<Self> {
        let mut builder = MetaprogramBuilder::new(mode, root_name, evaluation_result);
        for event in events {
            builder.handle_event(event)?;
        }
        builder.finish()
    }

    /// Build from the text of a Templight XML trace.
    pub fn from_templight_str(
        xml: &str,
        mode: Mode,
        root_name: &str,
        evaluation_result: Type,
    ) -> Result<Self> {
        Self::from_events(parse_templight(xml)?, mode, root_name, evaluation_result)
    }

    /// Build from a Templight XML trace file.
    pub fn from_templight_file(
        path: &Path,
        mode: Mode,
        root_name: &str,
        evaluation_result: Type,
    ) -> Result<Self> {
        let xml = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_templight_str(&xml, mode, root_name, evaluation_result)
    }
}

//! Arena storage for instantiation graphs.
//!
//! Vertices and edges live in flat vectors referenced by `VertexId` and
//! `EdgeId`. A vertex is shared by every edge that instantiates the same
//! context, so the graph is a DAG rather than a tree.

use metashell_core::{CallGraphNode, FileLocation, Frame, InstantiationKind, Type};

/// Index into `Metaprogram::vertices`.
pub type VertexId = u32;

/// Index into `Metaprogram::edges`.
pub type EdgeId = u32;

/// The evaluated root entity is always the first vertex.
pub const ROOT_VERTEX: VertexId = 0;

/// How repeated instantiations of the same context are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Shared vertices are expanded on their first visit only.
    #[default]
    Normal,
    /// Shared vertices are expanded on every visit.
    Full,
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub name: Type,
    out_edges: Vec<EdgeId>,
}

impl Vertex {
    /// Outgoing instantiation edges, in trace order.
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }
}

/// One instantiation event: `source` instantiated `target`.
#[derive(Clone, Debug)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub kind: InstantiationKind,
    pub point_of_instantiation: FileLocation,
    /// Seconds, as reported by the `TemplateBegin` event.
    pub timestamp: f64,
    /// Bytes, as reported by the `TemplateBegin` event.
    pub memory_usage: u64,
}

/// Instantiation graph of one evaluation.
#[derive(Clone, Debug)]
pub struct Metaprogram {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    mode: Mode,
    evaluation_result: Type,
}

impl Metaprogram {
    pub(crate) fn new(mode: Mode, root_name: &str, evaluation_result: Type) -> Self {
        let mut mp = Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            mode,
            evaluation_result,
        };
        mp.add_vertex(root_name);
        mp
    }

    pub(crate) fn add_vertex(&mut self, name: &str) -> VertexId {
        let id = self.vertices.len() as VertexId;
        self.vertices.push(Vertex {
            name: Type::new(name),
            out_edges: Vec::new(),
        });
        id
    }

    pub(crate) fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edges.len() as EdgeId;
        self.vertices[edge.source as usize].out_edges.push(id);
        self.edges.push(edge);
        id
    }

    pub fn root(&self) -> VertexId {
        ROOT_VERTEX
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn root_name(&self) -> &Type {
        &self.vertices[ROOT_VERTEX as usize].name
    }

    pub fn evaluation_result(&self) -> &Type {
        &self.evaluation_result
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id as usize]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id as usize]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn out_edges(&self, id: VertexId) -> &[EdgeId] {
        self.vertex(id).out_edges()
    }

    /// Iterate over all vertices with their IDs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (i as VertexId, v))
    }

    /// Iterate over all edges with their IDs.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (i as EdgeId, e))
    }

    /// Frame of the evaluated root: its name, no kind.
    pub fn root_frame(&self) -> Frame {
        Frame::new(self.root_name().clone())
    }

    /// Frame of an edge's target, tagged with the edge's kind.
    pub fn edge_frame(&self, id: EdgeId) -> Frame {
        let edge = self.edge(id);
        Frame::with_kind(self.vertex(edge.target).name.clone(), edge.kind)
    }

    /// Pre-order flattening of everything reachable from `start`.
    ///
    /// `start_frame` labels the first node. In `Mode::Normal` a vertex seen
    /// earlier in this traversal is listed again but not expanded. Vertices
    /// already on the current path are never re-entered. Nodes at
    /// `max_depth` are listed without children.
    pub fn call_graph(
        &self,
        start: VertexId,
        start_frame: Frame,
        mode: Mode,
        max_depth: Option<usize>,
    ) -> Vec<CallGraphNode> {
        let mut nodes = Vec::new();
        let mut visited = vec![false; self.vertices.len()];
        let mut path: Vec<VertexId> = Vec::new();
        let mut stack = vec![(start, start_frame, 0usize)];

        while let Some((vertex, frame, depth)) = stack.pop() {
            path.truncate(depth);

            let expand = max_depth.is_none_or(|max| depth < max)
                && !path.contains(&vertex)
                && (mode == Mode::Full || !visited[vertex as usize]);

            visited[vertex as usize] = true;
            path.push(vertex);

            let children: &[EdgeId] = if expand { self.out_edges(vertex) } else { &[] };
            nodes.push(CallGraphNode::new(frame, depth, children.len()));

            for &edge in children.iter().rev() {
                stack.push((self.edge(edge).target, self.edge_frame(edge), depth + 1));
            }
        }

        nodes
    }
}

//! Debugger-style walking of a `Metaprogram`.
//!
//! The walk is a depth-first replay of the instantiation graph. The cursor
//! keeps the edges it actually followed from the root, so the backtrace
//! reflects the current path even when a vertex is shared by several edges.
//! Every forward step records what it changed, which makes stepping
//! backwards exact.

use metashell_core::{Backtrace, CallGraphNode, Frame};

use super::graph::{EdgeId, Metaprogram, Mode, VertexId};

/// An edge waiting to be followed, with the depth of its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingEdge {
    edge: EdgeId,
    depth: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CursorState {
    /// Edges followed from the root to the current vertex.
    path: Vec<EdgeId>,
    /// DFS stack; the next step pops from the end.
    pending: Vec<PendingEdge>,
    discovered: Vec<bool>,
    finished: bool,
}

/// What one forward step changed.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Undo {
    /// The step ran out of pending edges.
    Finish,
    Follow {
        popped: PendingEdge,
        /// Path entries dropped to get back to the popped edge's depth.
        unwound: Vec<EdgeId>,
        /// Out-edges of the target pushed onto `pending`.
        pushed: usize,
        newly_discovered: bool,
    },
}

/// Position of a debugging session inside one `Metaprogram`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    state: CursorState,
    history: Vec<Undo>,
    edge_count: usize,
}

impl Cursor {
    /// A cursor at the root of `mp`.
    pub fn new(mp: &Metaprogram) -> Self {
        let mut discovered = vec![false; mp.vertex_count()];
        discovered[mp.root() as usize] = true;

        let pending = mp
            .out_edges(mp.root())
            .iter()
            .rev()
            .map(|&edge| PendingEdge { edge, depth: 1 })
            .collect();

        Self {
            state: CursorState {
                path: Vec::new(),
                pending,
                discovered,
                finished: false,
            },
            history: Vec::new(),
            edge_count: mp.edge_count(),
        }
    }

    /// Forward steps that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn belongs_to(&self, mp: &Metaprogram) -> bool {
        self.state.discovered.len() == mp.vertex_count() && self.edge_count == mp.edge_count()
    }
}

/// Result of a stepping command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cursor moved.
    Moved,
    /// Forward step requested after the end of the metaprogram.
    AlreadyFinished,
    /// Backward step requested at the start, or step out of the root.
    AtRoot,
}

/// Read-only graph plus a mutable cursor.
pub struct Navigator<'a> {
    mp: &'a Metaprogram,
    cursor: &'a mut Cursor,
}

impl<'a> Navigator<'a> {
    pub fn new(mp: &'a Metaprogram, cursor: &'a mut Cursor) -> Self {
        debug_assert!(
            cursor.belongs_to(mp),
            "cursor belongs to a different metaprogram"
        );
        Self { mp, cursor }
    }

    pub fn metaprogram(&self) -> &Metaprogram {
        self.mp
    }

    /// Back to the root, forgetting the history.
    pub fn reset(&mut self) {
        *self.cursor = Cursor::new(self.mp);
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.state.finished
    }

    pub fn is_at_root(&self) -> bool {
        !self.is_finished() && self.cursor.state.path.is_empty()
    }

    /// Number of edges between the root and the current vertex.
    pub fn depth(&self) -> usize {
        self.cursor.state.path.len()
    }

    pub fn current_vertex(&self) -> Option<VertexId> {
        if self.is_finished() {
            return None;
        }
        Some(
            self.cursor
                .state
                .path
                .last()
                .map_or(self.mp.root(), |&edge| self.mp.edge(edge).target),
        )
    }

    pub fn current_frame(&self) -> Option<Frame> {
        if self.is_finished() {
            return None;
        }
        Some(
            self.cursor
                .state
                .path
                .last()
                .map_or_else(|| self.mp.root_frame(), |&edge| self.mp.edge_frame(edge)),
        )
    }

    /// Frames from the root to the current one. Empty once finished.
    pub fn backtrace(&self) -> Backtrace {
        if self.is_finished() {
            return Backtrace::new();
        }
        std::iter::once(self.mp.root_frame())
            .chain(
                self.cursor
                    .state
                    .path
                    .iter()
                    .map(|&edge| self.mp.edge_frame(edge)),
            )
            .collect()
    }

    /// Forward trace from the current frame. Empty once finished.
    pub fn call_graph(&self, mode: Mode, max_depth: Option<usize>) -> Vec<CallGraphNode> {
        match (self.current_vertex(), self.current_frame()) {
            (Some(vertex), Some(frame)) => self.mp.call_graph(vertex, frame, mode, max_depth),
            _ => Vec::new(),
        }
    }

    /// Follow the next edge in depth-first order.
    ///
    /// Stepping past the last edge finishes the metaprogram. Returns false
    /// if it was already finished.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        let mp = self.mp;
        let cursor = &mut *self.cursor;
        let state = &mut cursor.state;
        let Some(popped) = state.pending.pop() else {
            state.finished = true;
            cursor.history.push(Undo::Finish);
            log::trace!("metaprogram finished");
            return true;
        };
        let PendingEdge { edge, depth } = popped;

        let keep = (depth - 1).min(state.path.len());
        let unwound: Vec<EdgeId> = state.path.drain(keep..).collect();
        let target = mp.edge(edge).target;
        let on_path = target == mp.root()
            || state.path.iter().any(|&e| mp.edge(e).target == target);
        state.path.push(edge);

        let newly_discovered = !state.discovered[target as usize];
        let expand = !on_path && (mp.mode() == Mode::Full || newly_discovered);
        state.discovered[target as usize] = true;

        let pushed = if expand {
            let children = mp.out_edges(target);
            state
                .pending
                .extend(children.iter().rev().map(|&edge| PendingEdge {
                    edge,
                    depth: depth + 1,
                }));
            children.len()
        } else {
            0
        };

        cursor.history.push(Undo::Follow {
            popped,
            unwound,
            pushed,
            newly_discovered,
        });
        log::trace!("stepped to {} at depth {}", mp.vertex(target).name, depth);
        true
    }

    /// Undo the last forward step. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        let state = &mut self.cursor.state;
        match self.cursor.history.pop() {
            Some(Undo::Finish) => {
                state.finished = false;
                true
            }
            Some(Undo::Follow {
                popped,
                unwound,
                pushed,
                newly_discovered,
            }) => {
                let kept = state.pending.len() - pushed;
                state.pending.truncate(kept);
                state.pending.push(popped);

                if let Some(edge) = state.path.pop() {
                    if newly_discovered {
                        state.discovered[self.mp.edge(edge).target as usize] = false;
                    }
                }
                state.path.extend(unwound);
                true
            }
            None => false,
        }
    }

    pub fn step_into(&mut self, count: usize) -> StepOutcome {
        if self.is_finished() && count > 0 {
            return StepOutcome::AlreadyFinished;
        }
        for _ in 0..count {
            if !self.step() {
                break;
            }
        }
        StepOutcome::Moved
    }

    pub fn step_back_by(&mut self, count: usize) -> StepOutcome {
        if self.cursor.history.is_empty() && count > 0 {
            return StepOutcome::AtRoot;
        }
        for _ in 0..count {
            if !self.step_back() {
                break;
            }
        }
        StepOutcome::Moved
    }

    /// Step to the next frame that is not inside the current one.
    pub fn step_over(&mut self) -> StepOutcome {
        if self.is_finished() {
            return StepOutcome::AlreadyFinished;
        }
        let depth = self.depth();
        self.step();
        while !self.is_finished() && self.depth() > depth {
            self.step();
        }
        StepOutcome::Moved
    }

    /// Step to the first frame shallower than the current one.
    ///
    /// No effect at the root.
    pub fn step_out(&mut self) -> StepOutcome {
        if self.is_finished() {
            return StepOutcome::AlreadyFinished;
        }
        if self.is_at_root() {
            return StepOutcome::AtRoot;
        }
        let depth = self.depth();
        self.step();
        while !self.is_finished() && self.depth() >= depth {
            self.step();
        }
        StepOutcome::Moved
    }

    /// Step at least once, until `stop` accepts the current frame or the
    /// metaprogram finishes.
    pub fn continue_until(&mut self, mut stop: impl FnMut(&Frame) -> bool) -> StepOutcome {
        if self.is_finished() {
            return StepOutcome::AlreadyFinished;
        }
        while self.step() {
            if self.current_frame().is_some_and(|frame| stop(&frame)) {
                break;
            }
        }
        StepOutcome::Moved
    }

    /// Step back at least once, until `stop` accepts the current frame or
    /// the start is reached.
    pub fn continue_back_until(&mut self, mut stop: impl FnMut(&Frame) -> bool) -> StepOutcome {
        if self.cursor.history.is_empty() {
            return StepOutcome::AtRoot;
        }
        while self.step_back() {
            if self.current_frame().is_some_and(|frame| stop(&frame)) {
                break;
            }
        }
        StepOutcome::Moved
    }
}

use serde::{Deserialize, Serialize};

use crate::Frame;

/// One entry of a pre-order call graph flattening.
///
/// `depth` is the distance from the node the traversal started at;
/// `number_of_children` is how many of the following entries are its
/// direct children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallGraphNode {
    pub frame: Frame,
    pub depth: usize,
    pub number_of_children: usize,
}

impl CallGraphNode {
    pub fn new(frame: Frame, depth: usize, number_of_children: usize) -> Self {
        Self {
            frame,
            depth,
            number_of_children,
        }
    }
}

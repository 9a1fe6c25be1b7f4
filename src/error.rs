use std::fmt;

use crate::NodeId;

/// The black-height of a node's left subtree differs from its right one.
///
/// Returned by the validator only. After a sequence of insertions this
/// means the rebalancing went wrong, not that the caller did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralInvariantViolation {
    /// The node whose subtrees disagree.
    pub node: NodeId,
    /// Black-height of the left subtree.
    pub left: usize,
    /// Black-height of the right subtree.
    pub right: usize,
}

impl fmt::Display for StructuralInvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "black-height mismatch at node {}: left subtree has {}, right subtree has {}",
            self.node.index(),
            self.left,
            self.right
        )
    }
}

impl std::error::Error for StructuralInvariantViolation {}

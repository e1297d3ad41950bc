use thiserror::Error;

use crate::{rearrange::Fragment, NodeId};

/// Errors raised while navigating or rearranging a [`RootedTree`](crate::RootedTree).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A node's parent does not list it as either child.
    #[error("tree is not consistent: {node} is not a child of its parent {parent}")]
    InvalidTree { node: NodeId, parent: NodeId },

    /// The node is in the wrong structural role for the requested operation.
    #[error("invalid node {node}: {reason}")]
    InvalidNode { node: NodeId, reason: &'static str },

    /// Distance bounds are malformed.
    #[error("invalid distance range: {min}..{max} (max_distance < min_distance)")]
    InvalidRange { min: i32, max: i32 },

    /// The handle does not refer to a node of this tree.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),

    /// A node has exactly one child outside of a rearrangement.
    #[error("node {node} has a single child")]
    IncompleteNode { node: NodeId },

    /// Following links from a node revisited it.
    #[error("cycle detected at node {node}")]
    Cycle { node: NodeId },
}

impl TreeError {
    pub(crate) fn invalid_node(node: NodeId, reason: &'static str) -> Self {
        TreeError::InvalidNode { node, reason }
    }
}

/// Errors raised by the SPR composer and rollback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SprError {
    /// The move was rejected before the tree was modified.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Regrafting failed after a successful prune. The prune was undone and
    /// the tree holds its original topology.
    #[error("regraft failed, move rolled back: {0}")]
    Regraft(#[source] TreeError),

    /// Regrafting failed and reattaching the fragment at its old position
    /// failed as well. The tree is left pruned: `fragment` is detached and
    /// `connected` is where the remainder was spliced together.
    #[error("regraft failed and the prune could not be undone: {regraft}")]
    HalfApplied {
        fragment: Fragment,
        connected: NodeId,
        regraft: TreeError,
        restore: TreeError,
    },
}

impl SprError {
    /// Whether the tree was left in the pruned intermediate state
    pub fn is_dirty(&self) -> bool {
        matches!(self, SprError::HalfApplied { .. })
    }
}

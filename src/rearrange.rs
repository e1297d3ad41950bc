//! Prune, regraft and SPR moves on a [`RootedTree`](crate::RootedTree).
//!
//! A prune leaves a [`Fragment`] behind: the pruned subtree still hangs from
//! its former parent, which has lost its parent and its other child. That
//! single-child node is the only place a half node is visible, and a regraft
//! consumes it by splicing it into an edge of a tree.

use crate::{node::Side, NodeId};

mod prune;
mod regraft;
mod rollback;
mod spr;

pub use prune::Pruned;
pub use rollback::{RearrangeKind, RollbackRecord, SprBranchLengths};

/// A detached subtree awaiting regraft.
///
/// `parent` has no parent of its own and holds `subtree` in one child slot;
/// the `vacant` slot is empty until a regraft fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    parent: NodeId,
    subtree: NodeId,
    vacant: Side,
}

impl Fragment {
    /// The parentless node that becomes the new internal node on regraft
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Root of the pruned subtree
    pub fn subtree(&self) -> NodeId {
        self.subtree
    }

    pub fn vacant(&self) -> Side {
        self.vacant
    }
}

use tracing::warn;

use crate::{NodeId, RootedTree, SprError, TreeError};

/// Kind of rearrangement a [`RollbackRecord`] undoes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RearrangeKind {
    Spr,
}

/// Branch lengths around an SPR move.
///
/// Declared so the gap is visible: this crate carries no branch lengths,
/// never fills this in, and never restores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprBranchLengths {
    pub prune: f64,
    pub prune_left: f64,
    pub prune_right: f64,
    pub regraft: f64,
}

/// What is needed to undo one rearrangement.
///
/// For an SPR, `prune_edge` is the pruned node and `regraft_edge` is the
/// sibling it had before the move. Re-applying the move with the same
/// fragment onto `regraft_edge` restores the original topology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollbackRecord {
    pub kind: RearrangeKind,
    pub rooted: bool,
    pub prune_edge: NodeId,
    pub regraft_edge: NodeId,
    /// Always `None` when produced by this crate
    pub branch_lengths: Option<SprBranchLengths>,
}

impl RollbackRecord {
    pub fn spr(prune_edge: NodeId, regraft_edge: NodeId) -> Self {
        Self {
            kind: RearrangeKind::Spr,
            rooted: true,
            prune_edge,
            regraft_edge,
            branch_lengths: None,
        }
    }
}

impl<D> RootedTree<D> {
    /// Undo the rearrangement described by `record`.
    ///
    /// Restores the topology only; branch lengths in the record are ignored.
    /// `root` is moved to the root of the restored tree. Returns the record
    /// that redoes the move.
    pub fn rollback(
        &mut self,
        record: &RollbackRecord,
        root: &mut NodeId,
    ) -> Result<RollbackRecord, SprError> {
        if !record.rooted {
            return Err(TreeError::invalid_node(
                record.prune_edge,
                "unrooted rollback record applied to a rooted tree",
            )
            .into());
        }
        if record.branch_lengths.is_some() {
            warn!("Rollback restores topology only, branch lengths are left as they are");
        }

        match record.kind {
            RearrangeKind::Spr => self.spr(record.prune_edge, record.regraft_edge, root),
        }
    }
}

use tracing::{debug, debug_span, warn};

use super::RollbackRecord;
use crate::{NodeId, RootedTree, SprError, TreeError};

impl<D> RootedTree<D> {
    /// Apply one subtree-prune-and-regraft move.
    ///
    /// Prunes `prune_node` and regrafts its fragment onto the edge above
    /// `regraft_target`. `root` is walked up to the root of its component
    /// afterwards, since either step can move the root.
    ///
    /// The move is transactional. If the regraft is rejected after the prune
    /// succeeded, the fragment is put back next to its former sibling and
    /// [`SprError::Regraft`] is returned with the tree unchanged. Only if that
    /// restore fails too is the tree left pruned, reported as
    /// [`SprError::HalfApplied`].
    ///
    /// Returns the record that undoes the move with
    /// [`rollback`](RootedTree::rollback).
    pub fn spr(
        &mut self,
        prune_node: NodeId,
        regraft_target: NodeId,
        root: &mut NodeId,
    ) -> Result<RollbackRecord, SprError> {
        let span = debug_span!("spr", prune = %prune_node, target = %regraft_target);
        let _enter = span.enter();

        self.get(*root)?;
        self.get(regraft_target)?;
        if self.get(prune_node)?.is_root() {
            return Err(
                TreeError::invalid_node(prune_node, "attempting to prune the root node").into(),
            );
        }

        let Some(sister) = self.sister(prune_node)? else {
            return Err(TreeError::invalid_node(prune_node, "pruned node has no sibling").into());
        };
        let record = RollbackRecord::spr(prune_node, sister);

        let pruned = self.prune(prune_node)?;

        if let Err(regraft) = self.regraft_fragment(pruned.fragment, regraft_target) {
            warn!("Regraft rejected, restoring fragment next to {}: {}", sister, regraft);
            return match self.regraft_fragment(pruned.fragment, sister) {
                Ok(()) => Err(SprError::Regraft(regraft)),
                Err(restore) => Err(SprError::HalfApplied {
                    fragment: pruned.fragment,
                    connected: pruned.connected,
                    regraft,
                    restore,
                }),
            };
        }

        *root = self.root_of(*root)?;
        debug!("Applied, root is {}", root);

        Ok(record)
    }
}

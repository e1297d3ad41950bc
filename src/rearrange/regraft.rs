use tracing::debug;

use super::Fragment;
use crate::{node::Side, NodeId, RootedTree, TreeError};

const NOT_DETACHED: &str = "attempting to regraft a node without detached parent";

impl<D> RootedTree<D> {
    /// Reinsert the fragment hanging above `node` into the edge above `target`.
    ///
    /// `node` must be the child of a detached single-child node, the shape
    /// [`prune`](RootedTree::prune) leaves behind.
    pub fn regraft(&mut self, node: NodeId, target: NodeId) -> Result<(), TreeError> {
        let fragment = self.detached_fragment(node)?;
        self.regraft_fragment(fragment, target)
    }

    /// Splice `fragment` into the edge between `target` and its parent.
    ///
    /// The fragment's parent node becomes a new internal node with the pruned
    /// subtree and `target` as children. When `target` is a root, the fragment
    /// parent becomes the new root. The target must not lie inside the
    /// fragment itself.
    ///
    /// Validation happens before the first write; on error the tree is
    /// unchanged.
    pub fn regraft_fragment(
        &mut self,
        fragment: Fragment,
        target: NodeId,
    ) -> Result<(), TreeError> {
        if self.detached_fragment(fragment.subtree)? != fragment {
            return Err(TreeError::invalid_node(
                fragment.subtree,
                "fragment no longer matches the tree",
            ));
        }
        if self.root_of(target)? == fragment.parent {
            return Err(TreeError::invalid_node(
                target,
                "regraft target lies inside the pruned subtree",
            ));
        }
        let target_slot = self.get_sister(target)?.own;

        let p = fragment.parent;
        self.set_parent(p, target_slot.parent());
        self.write_slot(target_slot, Some(p));
        self.set_parent(target, Some(p));
        self.set_child(p, fragment.vacant, Some(target));

        debug!(
            "Regrafted {} via {} onto edge above {}",
            fragment.subtree, p, target
        );
        Ok(())
    }

    /// Recover the fragment shape above a pruned node
    pub(crate) fn detached_fragment(&self, node: NodeId) -> Result<Fragment, TreeError> {
        let Some(parent) = self.get(node)?.parent() else {
            return Err(TreeError::invalid_node(node, NOT_DETACHED));
        };
        let parent_node = self.get(parent)?;
        if !parent_node.is_root() {
            return Err(TreeError::invalid_node(node, NOT_DETACHED));
        }

        let vacant = match (parent_node.left(), parent_node.right()) {
            (Some(left), None) if left == node => Side::Right,
            (None, Some(right)) if right == node => Side::Left,
            _ => return Err(TreeError::invalid_node(node, NOT_DETACHED)),
        };

        Ok(Fragment {
            parent,
            subtree: node,
            vacant,
        })
    }
}

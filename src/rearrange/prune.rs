use tracing::debug;

use super::Fragment;
use crate::{NodeId, RootedTree, TreeError};

/// Outcome of a prune
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pruned {
    /// The node now occupying the position the fragment vacated: the former
    /// grandparent, or the sibling when it became the new root.
    pub connected: NodeId,
    pub fragment: Fragment,
}

impl<D> RootedTree<D> {
    /// Detach the subtree rooted at `node`.
    ///
    /// The sibling of `node` is spliced into the grandparent slot that held
    /// the parent, or becomes the root of the remainder tree when the parent
    /// was the root. The parent stays attached to `node` as a detached
    /// [`Fragment`].
    ///
    /// All lookups happen before the first write; on error the tree is
    /// unchanged.
    pub fn prune(&mut self, node: NodeId) -> Result<Pruned, TreeError> {
        if self.get(node)?.is_root() {
            return Err(TreeError::invalid_node(
                node,
                "attempting to prune the root node",
            ));
        }

        let linkage = self.get_sister(node)?;
        let (Some(parent), Some(side)) = (linkage.own.parent(), linkage.own.side()) else {
            return Err(TreeError::invalid_node(node, "pruned node has no parent slot"));
        };
        let Some(sister) = linkage.sister.target(self)? else {
            return Err(TreeError::IncompleteNode { node: parent });
        };
        let parent_slot = self.get_sister(parent)?.own;

        // Lookups are done, rewrite links
        self.write_slot(linkage.sister, None);

        let connected = match parent_slot.parent() {
            Some(grandparent) => {
                self.write_slot(parent_slot, Some(sister));
                self.set_parent(sister, Some(grandparent));
                self.set_parent(parent, None);
                grandparent
            }
            None => {
                self.set_parent(sister, None);
                sister
            }
        };

        debug!(
            "Pruned {} with parent {}, {} reconnected at {}",
            node, parent, sister, connected
        );

        Ok(Pruned {
            connected,
            fragment: Fragment {
                parent,
                subtree: node,
                vacant: side.other(),
            },
        })
    }
}

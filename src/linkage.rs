//! Locating the parent-side cells that reference a node.
//!
//! Every mutation rewrites "whichever child slot of the parent currently holds
//! this node". [`Slot`] names such a cell explicitly, and mutators write
//! through it with [`RootedTree::write_slot`] instead of re-deriving the
//! position from scratch.

use crate::{node::Side, NodeId, RootedTree, TreeError};

/// A child cell of some parent, or the absence of one for a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    NoParent,
    LeftChildOf(NodeId),
    RightChildOf(NodeId),
}

impl Slot {
    pub(crate) fn of(parent: NodeId, side: Side) -> Self {
        match side {
            Side::Left => Slot::LeftChildOf(parent),
            Side::Right => Slot::RightChildOf(parent),
        }
    }

    /// The node owning the cell
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Slot::NoParent => None,
            Slot::LeftChildOf(parent) | Slot::RightChildOf(parent) => Some(*parent),
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Slot::NoParent => None,
            Slot::LeftChildOf(_) => Some(Side::Left),
            Slot::RightChildOf(_) => Some(Side::Right),
        }
    }

    /// The node currently stored in the cell
    pub fn target<D>(&self, tree: &RootedTree<D>) -> Result<Option<NodeId>, TreeError> {
        match (self.parent(), self.side()) {
            (Some(parent), Some(side)) => Ok(tree.get(parent)?.child(side)),
            _ => Ok(None),
        }
    }
}

/// The cell holding a node and the cell holding its sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linkage {
    pub own: Slot,
    pub sister: Slot,
}

impl Linkage {
    const ROOT: Linkage = Linkage {
        own: Slot::NoParent,
        sister: Slot::NoParent,
    };
}

impl<D> RootedTree<D> {
    /// Find the parent cell referencing `node` and the cell of its sibling.
    ///
    /// A root yields [`Slot::NoParent`] for both. A parent that holds `node` in
    /// neither child slot is a corrupted tree and fails with
    /// [`TreeError::InvalidTree`].
    pub fn get_sister(&self, node: NodeId) -> Result<Linkage, TreeError> {
        let Some(parent) = self.get(node)?.parent() else {
            return Ok(Linkage::ROOT);
        };

        let parent_node = self.get(parent)?;
        let side = if parent_node.left() == Some(node) {
            Side::Left
        } else if parent_node.right() == Some(node) {
            Side::Right
        } else {
            return Err(TreeError::InvalidTree { node, parent });
        };

        Ok(Linkage {
            own: Slot::of(parent, side),
            sister: Slot::of(parent, side.other()),
        })
    }

    /// The other child of `node`'s parent, `None` for a root
    pub fn sister(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.get_sister(node)?.sister.target(self)
    }

    /// Store `child` in the cell. Writing to [`Slot::NoParent`] does nothing.
    pub(crate) fn write_slot(&mut self, slot: Slot, child: Option<NodeId>) {
        if let (Some(parent), Some(side)) = (slot.parent(), slot.side()) {
            self.set_child(parent, side, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{balanced_tree, five_node_tree, label};

    #[test]
    fn root_has_no_slots() {
        let (tree, root) = five_node_tree();
        assert_eq!(tree.get_sister(root).unwrap(), Linkage::ROOT);
        assert_eq!(tree.sister(root).unwrap(), None);
    }

    #[test]
    fn left_and_right_children() {
        let (tree, root) = five_node_tree();
        let a = label(&tree, root, "A");
        let b = label(&tree, root, "B");

        let linkage = tree.get_sister(a).unwrap();
        assert_eq!(linkage.own, Slot::LeftChildOf(root));
        assert_eq!(linkage.sister, Slot::RightChildOf(root));

        let linkage = tree.get_sister(b).unwrap();
        assert_eq!(linkage.own, Slot::RightChildOf(root));
        assert_eq!(linkage.sister, Slot::LeftChildOf(root));
    }

    #[test]
    fn slots_dereference_to_self_and_sibling() {
        let (tree, root) = balanced_tree(3);

        for node in tree.iter(root).skip(1) {
            let id = node.id();
            let linkage = tree.get_sister(id).unwrap();
            let parent = tree.parent(id).unwrap().unwrap();
            let (left, right) = tree.get(parent).unwrap().children().unwrap();
            let sibling = if left == id { right } else { left };

            assert_eq!(linkage.own.target(&tree).unwrap(), Some(id));
            assert_eq!(linkage.sister.target(&tree).unwrap(), Some(sibling));
            assert_eq!(tree.sister(id).unwrap(), Some(sibling));
        }
    }

    #[test]
    fn inconsistent_parent_is_invalid_tree() {
        let (mut tree, root) = five_node_tree();
        let a = label(&tree, root, "A");
        let c = label(&tree, root, "C");

        // C claims A as parent, but A holds no children
        tree.set_parent(c, Some(a));

        assert_eq!(
            tree.get_sister(c),
            Err(TreeError::InvalidTree { node: c, parent: a })
        );
    }
}

use std::{collections::VecDeque, ops::Deref};

use crate::{node::RootedTreeNode, NodeId, RootedTree};

pub mod leaf;

/// Item yielded by [`NodeIter`]: a resolved node with its handle and its
/// depth below the traversal start
#[derive(Debug)]
pub struct IterNode<'tree, D> {
    depth: usize,
    id: NodeId,
    node: &'tree RootedTreeNode<D>,
}

impl<'tree, D> IterNode<'tree, D> {
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'tree RootedTreeNode<D> {
        self.node
    }
}

impl<'tree, D> Deref for IterNode<'tree, D> {
    type Target = RootedTreeNode<D>;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

/// Pre-order traversal, left child before right.
///
/// Unknown handles end the traversal. The links are assumed acyclic; use
/// [`RootedTree::validate`] first on untrusted trees.
pub struct NodeIter<'tree, D> {
    tree: &'tree RootedTree<D>,
    stack: VecDeque<(usize, NodeId)>,
}

impl<'tree, D> NodeIter<'tree, D> {
    pub fn new(tree: &'tree RootedTree<D>, root: NodeId) -> Self {
        Self {
            tree,
            stack: VecDeque::from([(0, root)]),
        }
    }
}

impl<'tree, D> Iterator for NodeIter<'tree, D> {
    type Item = IterNode<'tree, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop_front()?;
        let node: &'tree RootedTreeNode<D> = self.tree.get(id).ok()?;

        // Push right first so the left child is visited next
        for child in [node.right(), node.left()].into_iter().flatten() {
            self.stack.push_front((depth + 1, child));
        }

        Some(IterNode { depth, id, node })
    }
}

#[cfg(test)]
mod tests {
    use crate::test::five_node_tree;

    #[test]
    fn yields_resolved_nodes_in_pre_order() {
        let (tree, root) = five_node_tree();

        let visited: Vec<_> = tree
            .iter(root)
            .map(|node| (node.depth(), node.node().data().as_str()))
            .collect();
        assert_eq!(
            visited,
            vec![(0, "root"), (1, "A"), (1, "B"), (2, "C"), (2, "D")]
        );

        for node in tree.iter(root) {
            assert!(std::ptr::eq(node.node(), tree.get(node.id()).unwrap()));
        }
    }
}

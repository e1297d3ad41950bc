use tracing::{debug, trace};

use crate::{
    iterator::{leaf::Leaves, NodeIter},
    node::{RootedTreeNode, Side},
    NodeId, TreeError,
};

/// Caller-owned storage for the nodes of one or more rooted binary trees.
///
/// Nodes are addressed by [`NodeId`] handles. Rearrangements only rewrite the
/// links between existing nodes, so handles stay valid for the lifetime of the
/// tree and no node is ever allocated or freed by a move.
#[derive(Debug, Clone)]
pub struct RootedTree<D> {
    nodes: Vec<RootedTreeNode<D>>,
}

impl<D> Default for RootedTree<D> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<D> RootedTree<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes in storage, across all components
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Store a new parentless leaf
    pub fn add_node(&mut self, data: D) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(RootedTreeNode::new(data));
        trace!("Created node {}", id);
        id
    }

    /// Attach two component roots as the children of a leaf.
    ///
    /// `left` and `right` must be distinct parentless nodes and `parent` must
    /// not belong to either of their subtrees.
    pub fn join(&mut self, parent: NodeId, left: NodeId, right: NodeId) -> Result<(), TreeError> {
        if !self.get(parent)?.is_leaf() {
            return Err(TreeError::invalid_node(parent, "node already has children"));
        }
        if left == right {
            return Err(TreeError::invalid_node(left, "node cannot be both children"));
        }
        for child in [left, right] {
            if !self.get(child)?.is_root() {
                return Err(TreeError::invalid_node(child, "child is attached elsewhere"));
            }
        }
        let top = self.root_of(parent)?;
        if top == left || top == right {
            return Err(TreeError::invalid_node(parent, "join would create a cycle"));
        }

        self.set_child(parent, Side::Left, Some(left));
        self.set_child(parent, Side::Right, Some(right));
        self.set_parent(left, Some(parent));
        self.set_parent(right, Some(parent));
        debug!("Joined {} and {} under {}", left, right, parent);
        Ok(())
    }

    /// Get a node by handle
    pub fn get(&self, id: NodeId) -> Result<&RootedTreeNode<D>, TreeError> {
        self.nodes.get(id.index()).ok_or(TreeError::UnknownNode(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut RootedTreeNode<D>, TreeError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(TreeError::UnknownNode(id))
    }

    pub fn data(&self, id: NodeId) -> Result<&D, TreeError> {
        self.get(id).map(|node| node.data())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.get(id).map(|node| node.parent())
    }

    /// Walk parent links up to the root of the component containing `id`
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, TreeError> {
        let mut current = id;
        // A chain longer than the arena can only be a parent cycle
        for _ in 0..=self.nodes.len() {
            match self.get(current)?.parent() {
                Some(parent) => current = parent,
                None => return Ok(current),
            }
        }
        Err(TreeError::Cycle { node: id })
    }

    /// Whether `ancestor` lies on the path from `node` to its root (inclusive)
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool, TreeError> {
        self.get(ancestor)?;
        let mut current = Some(node);
        for _ in 0..=self.nodes.len() {
            match current {
                Some(id) if id == ancestor => return Ok(true),
                Some(id) => current = self.get(id)?.parent(),
                None => return Ok(false),
            }
        }
        Err(TreeError::Cycle { node })
    }

    /// Pre-order traversal of the subtree rooted at `root`
    pub fn iter(&self, root: NodeId) -> NodeIter<'_, D> {
        NodeIter::new(self, root)
    }

    /// Leaves of the subtree rooted at `root`, left to right
    pub fn leaves(&self, root: NodeId) -> Leaves<'_, D> {
        Leaves::new(self.iter(root))
    }

    /// Check the structural invariants of the component containing `node`.
    ///
    /// Every child must point back at the parent holding it, every node has
    /// zero or two children, and no node is reachable twice.
    pub fn validate(&self, node: NodeId) -> Result<(), TreeError> {
        let root = self.root_of(node)?;
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut visited[id.index()], true) {
                return Err(TreeError::Cycle { node: id });
            }

            let current = self.get(id)?;
            let (left, right) = match (current.left(), current.right()) {
                (None, None) => continue,
                (Some(left), Some(right)) => (left, right),
                _ => return Err(TreeError::IncompleteNode { node: id }),
            };

            for child in [right, left] {
                if self.get(child)?.parent() != Some(id) {
                    return Err(TreeError::InvalidTree {
                        node: child,
                        parent: id,
                    });
                }
                stack.push(child);
            }
        }

        Ok(())
    }

    // Link writers. Handles passed here have already been resolved by the
    // calling operation, so indexing cannot go out of bounds.

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.nodes[id.index()].set_parent(parent);
    }

    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        self.nodes[id.index()].set_child(side, child);
    }
}

use crate::NodeId;

use super::NodeIter;

/// Leaves of a subtree in left-to-right order
pub struct Leaves<'tree, D> {
    inner: NodeIter<'tree, D>,
}

impl<'tree, D> Leaves<'tree, D> {
    pub fn new(inner: NodeIter<'tree, D>) -> Self {
        Self { inner }
    }
}

impl<'tree, D> Iterator for Leaves<'tree, D> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|node| node.is_leaf()).map(|node| node.id())
    }
}

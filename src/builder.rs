//! Builders for assembling rooted binary trees.
//!
//! The `TreeBuilder` and `NodeBuilder` types build a [`RootedTree`] in a
//! composable way: every node's children are added from a closure, and the
//! node is linked to them once the closure returns.
//!

use std::marker::PhantomData;

use tracing::{debug, debug_span};

use crate::{NodeId, RootedTree, TreeError};

/// A builder for adding the children of one node.
///
/// Designed to be used through [`TreeBuilder::root`]. A node ends up either a
/// leaf (no `child` calls) or an internal node (exactly two `child` calls).
pub struct NodeBuilder<'a, D, E> {
    tree: &'a mut RootedTree<D>,
    id: NodeId,
    depth: usize,
    children: Vec<NodeId>,
    _phantom: PhantomData<E>,
}

impl<'a, D, E> NodeBuilder<'a, D, E>
where
    E: From<TreeError>,
{
    fn new(tree: &'a mut RootedTree<D>, id: NodeId, depth: usize) -> Self {
        Self {
            tree,
            id,
            depth,
            children: Vec::with_capacity(2),
            _phantom: PhantomData,
        }
    }

    /// Adds a child to the current node.
    ///
    /// # Arguments
    ///
    /// * `data`: The data to associate with the child node.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn child<F>(&mut self, data: D, f: F) -> Result<NodeId, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, D, E>) -> Result<(), E>,
    {
        if self.children.len() == 2 {
            return Err(
                TreeError::invalid_node(self.id, "binary node already has two children").into(),
            );
        }

        let id = self.tree.add_node(data);
        let mut node_builder = NodeBuilder::new(self.tree, id, self.depth + 1);

        f(&mut node_builder)?;
        node_builder.finish()?;

        self.children.push(id);
        Ok(id)
    }

    /// Adds a leaf child to the current node
    pub fn leaf(&mut self, data: D) -> Result<NodeId, E> {
        self.child(data, |_| Ok(()))
    }

    /// Handle of the node being built
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    // Link the collected children to this node
    fn finish(self) -> Result<(), E> {
        match self.children.as_slice() {
            [] => Ok(()),
            [left, right] => Ok(self.tree.join(self.id, *left, *right)?),
            _ => Err(TreeError::IncompleteNode { node: self.id }.into()),
        }
    }
}

/// A builder for constructing trees.
///
/// There is a `root` method on the builder to add the root node, which calls
/// the provided closure with a NodeBuilder that can be used to recursively
/// build children of the node. The closures return `Result<(), E>` where `E`
/// is your error type, so errors inside your closures propagate. `E` must be
/// constructible from [`TreeError`], which reports malformed (non-binary)
/// nodes.
///
/// # Examples
///
/// ```
/// use sprig::{TreeBuilder, TreeError};
///
/// let (tree, root) = TreeBuilder::<&str, TreeError>::new()
///     .root("root", |root| {
///         root.leaf("A")?;
///         root.child("B", |b| {
///             b.leaf("C")?;
///             b.leaf("D")?;
///             Ok(())
///         })?;
///         Ok(())
///     })?
///     .done()
///     .expect("root was added");
///
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.leaves(root).count(), 3);
/// # Ok::<(), TreeError>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder<D, E = TreeError> {
    tree: RootedTree<D>,
    root: Option<NodeId>,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<D, E> Default for TreeBuilder<D, E>
where
    E: From<TreeError>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, E> TreeBuilder<D, E>
where
    E: From<TreeError>,
{
    /// Creates a new `TreeBuilder` instance.
    pub fn new() -> Self {
        Self::with_tree(RootedTree::new())
    }

    /// Build into existing storage, keeping the nodes already in it
    pub fn with_tree(tree: RootedTree<D>) -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            tree,
            root: None,
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Adds a root node to the tree and returns the updated builder.
    ///
    /// # Arguments
    ///
    /// * `data`: The data to associate with the root node.
    /// * `f`: A closure that takes the root builder and adds its own children.
    pub fn root<F>(mut self, data: D, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, D, E>) -> Result<(), E>,
    {
        let span = self.debug_span.clone();
        let _enter = span.enter();

        if let Some(existing) = self.root {
            return Err(TreeError::invalid_node(existing, "root node already exists").into());
        }

        let id = self.tree.add_node(data);
        let mut node_builder = NodeBuilder::new(&mut self.tree, id, 0);
        f(&mut node_builder)?;
        node_builder.finish()?;

        debug!("Added root {}", id);
        self.root = Some(id);
        Ok(self)
    }

    /// Returns the storage and the root handle when finished building.
    /// `None` if no root was added.
    pub fn done(self) -> Option<(RootedTree<D>, NodeId)> {
        self.debug_span.in_scope(|| debug!("Finished building tree"));
        let root = self.root?;
        Some((self.tree, root))
    }
}

use std::hash::{Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

use crate::{NodeId, RootedTree};

/// Fingerprint of a subtree's shape and payloads.
///
/// Positional: swapping the two children of a node changes the value. Two
/// subtrees with equal fingerprints have, up to hash collisions, the same
/// nesting, the same child order and the same data at every position.
#[derive(Hash, PartialEq, Eq, Clone, Copy)]
pub struct TopologyHash(u64);

impl TopologyHash {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Debug for TopologyHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TopologyHash")
            .field(&format_args!("0x{:X}", self.0))
            .finish()
    }
}

impl<D> RootedTree<D>
where
    D: Hash,
{
    /// Hash the subtree rooted at `root`.
    ///
    /// Each node contributes its depth, which child slots it uses and its
    /// data, in pre-order. Handles are not hashed, so equal shapes built in
    /// different storage compare equal.
    pub fn topology_hash(&self, root: NodeId) -> TopologyHash {
        let mut hasher = Xxh64::new(0);

        for node in self.iter(root) {
            hasher.write_usize(node.depth());
            hasher.write_u8(node.left().is_some() as u8 | (node.right().is_some() as u8) << 1);
            node.data().hash(&mut hasher);
        }

        TopologyHash(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use crate::test::{balanced_tree, five_node_tree, label};
    use crate::TreeBuilder;

    #[test]
    fn equal_shapes_hash_equal() {
        let (first, first_root) = balanced_tree(3);
        let (second, second_root) = balanced_tree(3);
        assert_eq!(first.topology_hash(first_root), second.topology_hash(second_root));
    }

    #[test]
    fn child_order_matters() {
        let build = |left: &'static str, right: &'static str| {
            TreeBuilder::<&str>::new()
                .root("root", |root| {
                    root.leaf(left)?;
                    root.leaf(right)?;
                    Ok(())
                })
                .unwrap()
                .done()
                .unwrap()
        };

        let (ab, ab_root) = build("A", "B");
        let (ba, ba_root) = build("B", "A");
        assert_ne!(ab.topology_hash(ab_root), ba.topology_hash(ba_root));
    }

    #[test]
    fn subtree_hash_differs_from_whole() {
        let (tree, root) = five_node_tree();
        let b = label(&tree, root, "B");
        assert_ne!(tree.topology_hash(root), tree.topology_hash(b));
    }
}

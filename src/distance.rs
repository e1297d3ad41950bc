//! Enumerating nodes by topological distance from a reference node.
//!
//! The neighbourhood of a node is collected in two directions. Below the
//! reference, every descendant sits at its depth. Walking toward the root,
//! each ancestor sits one edge further out, and so does the sibling subtree
//! hanging off the path at that ancestor, one edge further again at its root.
//! Both bounds are carried down each branch and decremented per edge, so a
//! node is reported when its remaining lower bound has reached zero and its
//! remaining upper bound has not gone negative.

use tracing::trace;

use crate::{NodeId, RootedTree, TreeError};

impl<D> RootedTree<D> {
    /// All nodes whose distance in edges from `reference` lies within
    /// `min_distance..=max_distance`.
    ///
    /// Negative bounds are accepted and mean "already reached": a negative
    /// `min_distance` behaves like zero. Bounds saturate at `i32::MIN` while
    /// being lowered per edge.
    pub fn nodes_at_distance(
        &self,
        reference: NodeId,
        min_distance: i32,
        max_distance: i32,
    ) -> Result<Vec<NodeId>, TreeError> {
        let mut out = Vec::new();
        self.nodes_at_distance_into(reference, min_distance, max_distance, &mut out)?;
        Ok(out)
    }

    /// Like [`nodes_at_distance`](RootedTree::nodes_at_distance), appending to
    /// `out` and returning how many nodes were written.
    ///
    /// On error `out` is left as it was.
    pub fn nodes_at_distance_into(
        &self,
        reference: NodeId,
        min_distance: i32,
        max_distance: i32,
        out: &mut Vec<NodeId>,
    ) -> Result<usize, TreeError> {
        if max_distance < min_distance {
            return Err(TreeError::InvalidRange {
                min: min_distance,
                max: max_distance,
            });
        }
        self.get(reference)?;

        let start = out.len();
        if let Err(err) = self.collect_at_distance(reference, min_distance, max_distance, out) {
            out.truncate(start);
            return Err(err);
        }

        let written = out.len() - start;
        trace!(
            "{} nodes within {}..={} of {}",
            written,
            min_distance,
            max_distance,
            reference
        );
        Ok(written)
    }

    fn collect_at_distance(
        &self,
        reference: NodeId,
        mut min_distance: i32,
        mut max_distance: i32,
        out: &mut Vec<NodeId>,
    ) -> Result<(), TreeError> {
        self.collect_down(reference, min_distance, max_distance, out)?;

        let mut current = reference;
        while let Some(parent) = self.get(current)?.parent() {
            let sister = self.sister(current)?;

            min_distance = min_distance.saturating_sub(1);
            max_distance = max_distance.saturating_sub(1);
            if max_distance < 0 {
                break;
            }

            if min_distance <= 0 {
                out.push(parent);
            }
            if let Some(sister) = sister {
                self.collect_down(
                    sister,
                    min_distance.saturating_sub(1),
                    max_distance.saturating_sub(1),
                    out,
                )?;
            }

            current = parent;
        }

        Ok(())
    }

    // Pre-order over the subtree at `root`, which sits at the distance where
    // the remaining bounds are `min_distance` and `max_distance`
    fn collect_down(
        &self,
        root: NodeId,
        min_distance: i32,
        max_distance: i32,
        out: &mut Vec<NodeId>,
    ) -> Result<(), TreeError> {
        let mut stack = vec![(root, min_distance, max_distance)];

        while let Some((id, min_distance, max_distance)) = stack.pop() {
            if max_distance < 0 {
                continue;
            }
            if min_distance <= 0 {
                out.push(id);
            }

            let node = self.get(id)?;
            for child in [node.right(), node.left()].into_iter().flatten() {
                stack.push((
                    child,
                    min_distance.saturating_sub(1),
                    max_distance.saturating_sub(1),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet, VecDeque};

    use tracing_test::traced_test;

    use super::*;
    use crate::test::{balanced_tree, caterpillar, five_node_tree, label};

    /// Distances from `reference` to every node of its component, by BFS
    fn bfs_distances<D>(tree: &RootedTree<D>, reference: NodeId) -> HashMap<NodeId, i32> {
        let mut distances = HashMap::from([(reference, 0)]);
        let mut queue = VecDeque::from([reference]);

        while let Some(id) = queue.pop_front() {
            let node = tree.get(id).unwrap();
            let next = distances[&id] + 1;
            for neighbour in [node.parent(), node.left(), node.right()].into_iter().flatten() {
                if !distances.contains_key(&neighbour) {
                    distances.insert(neighbour, next);
                    queue.push_back(neighbour);
                }
            }
        }

        distances
    }

    #[test]
    fn zero_window_is_reference_only() {
        let (tree, root) = balanced_tree(3);
        for node in tree.iter(root) {
            assert_eq!(tree.nodes_at_distance(node.id(), 0, 0).unwrap(), vec![node.id()]);
        }
    }

    #[test]
    fn leaf_at_one_is_parent_only() {
        let (tree, root) = five_node_tree();
        let c = label(&tree, root, "C");
        let b = label(&tree, root, "B");

        assert_eq!(tree.nodes_at_distance(c, 1, 1).unwrap(), vec![b]);
    }

    #[test]
    fn inverted_range_is_rejected_without_output() {
        let (tree, root) = five_node_tree();
        let mut out = vec![root];

        assert_eq!(
            tree.nodes_at_distance_into(root, 2, 1, &mut out),
            Err(TreeError::InvalidRange { min: 2, max: 1 })
        );
        assert_eq!(out, vec![root]);
    }

    #[test]
    fn balanced_tree_from_root_covers_everything_once() {
        for depth in 0..5 {
            let (tree, root) = balanced_tree(depth);
            let found = tree.nodes_at_distance(root, 0, depth as i32).unwrap();
            let unique: HashSet<_> = found.iter().copied().collect();

            assert_eq!(found.len(), tree.len());
            assert_eq!(unique.len(), tree.len());
        }
    }

    #[traced_test]
    #[test]
    fn matches_breadth_first_distances() {
        let trees = [balanced_tree(3), caterpillar(7), five_node_tree()];

        for (tree, root) in trees {
            let references: Vec<_> = tree.iter(root).map(|n| n.id()).collect();
            for reference in references {
                let distances = bfs_distances(&tree, reference);
                for (min, max) in [(0, 0), (1, 1), (0, 2), (2, 3), (-3, 1), (3, 10), (-2, -1)] {
                    let mut found = tree.nodes_at_distance(reference, min, max).unwrap();
                    found.sort();

                    let mut expected: Vec<_> = distances
                        .iter()
                        .filter(|(_, d)| (min..=max).contains(*d))
                        .map(|(id, _)| *id)
                        .collect();
                    expected.sort();

                    assert_eq!(found, expected, "reference {reference} window {min}..={max}");
                }
            }
        }
    }

    #[test]
    fn extreme_bounds_match_breadth_first_distances() {
        let trees = [balanced_tree(3), caterpillar(7), five_node_tree()];

        for (tree, root) in trees {
            let references: Vec<_> = tree.iter(root).map(|n| n.id()).collect();
            for reference in references {
                let distances = bfs_distances(&tree, reference);
                for (min, max) in [
                    (i32::MIN, 0),
                    (i32::MIN, 2),
                    (i32::MIN, i32::MAX),
                    (i32::MIN, i32::MIN),
                    (0, i32::MAX),
                ] {
                    let mut found = tree.nodes_at_distance(reference, min, max).unwrap();
                    found.sort();

                    let mut expected: Vec<_> = distances
                        .iter()
                        .filter(|(_, d)| (min..=max).contains(*d))
                        .map(|(id, _)| *id)
                        .collect();
                    expected.sort();

                    assert_eq!(found, expected, "reference {reference} window {min}..={max}");
                }
            }
        }
    }

    #[test]
    fn lowest_lower_bound_counts_as_reached() {
        let (tree, root) = five_node_tree();
        let c = label(&tree, root, "C");

        assert_eq!(tree.nodes_at_distance(c, i32::MIN, 0).unwrap(), vec![c]);
        assert_eq!(tree.nodes_at_distance(root, i32::MIN, 5).unwrap().len(), tree.len());
    }

    #[test]
    fn output_order_is_inside_out() {
        // root{A, B{C, D}} from C: C, then B and its other child D, then root and A
        let (tree, root) = five_node_tree();
        let ids = |names: &[&str]| names.iter().map(|n| label(&tree, root, n)).collect::<Vec<_>>();
        let c = label(&tree, root, "C");

        assert_eq!(
            tree.nodes_at_distance(c, 0, 3).unwrap(),
            ids(&["C", "B", "D", "root", "A"])
        );
        assert_eq!(tree.nodes_at_distance(c, 2, 3).unwrap(), ids(&["D", "root", "A"]));
    }

    #[test]
    fn appends_after_existing_output() {
        let (tree, root) = five_node_tree();
        let a = label(&tree, root, "A");
        let mut out = vec![a];

        let written = tree.nodes_at_distance_into(root, 1, 1, &mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], a);
    }

    #[test]
    fn inconsistent_path_leaves_output_untouched() {
        let (mut tree, root) = five_node_tree();
        let a = label(&tree, root, "A");
        let b = label(&tree, root, "B");
        let c = label(&tree, root, "C");

        // B claims A as parent, but root still holds B
        tree.set_parent(b, Some(a));

        let mut out = Vec::new();
        assert_eq!(
            tree.nodes_at_distance_into(c, 0, 4, &mut out),
            Err(TreeError::InvalidTree { node: b, parent: a })
        );
        assert!(out.is_empty());
    }
}

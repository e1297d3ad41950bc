use std::fmt::Write;

use colored::Colorize;

use crate::{NodeId, RootedTree};

/// Box-drawing rendering of a subtree, created by [`RootedTree::display`]
pub struct TreeDisplay<'tree, D> {
    tree: &'tree RootedTree<D>,
    root: NodeId,
}

impl<D> RootedTree<D>
where
    D: std::fmt::Display,
{
    /// Render the subtree rooted at `root`, one node per line
    pub fn display(&self, root: NodeId) -> TreeDisplay<'_, D> {
        TreeDisplay { tree: self, root }
    }
}

impl<'tree, D> std::fmt::Display for TreeDisplay<'tree, D>
where
    D: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // (node, indentation of the row, last child of its parent)
        let mut stack = vec![(self.root, String::new(), true)];

        while let Some((id, indent, last)) = stack.pop() {
            let Ok(node) = self.tree.get(id) else {
                writeln!(f, "{indent}{}", format!("<missing {id}>").red())?;
                continue;
            };

            if id == self.root {
                f.write_char(if node.is_leaf() { '━' } else { '┏' })?;
            } else {
                f.write_str(&indent)?;
                f.write_char(if last { '┗' } else { '┣' })?;
            }

            let label = node.data().to_string();
            if node.is_leaf() {
                writeln!(f, "{} {}", label.green(), id.to_string().dimmed())?;
            } else {
                writeln!(f, "{} {}", label.bold(), id.to_string().dimmed())?;
            }

            let child_indent = if id == self.root {
                String::new()
            } else if last {
                format!("{indent}  ")
            } else {
                format!("{indent}┃ ")
            };

            if let Some(right) = node.right() {
                stack.push((right, child_indent.clone(), true));
            }
            if let Some(left) = node.left() {
                stack.push((left, child_indent, node.right().is_none()));
            }
        }

        Ok(())
    }
}

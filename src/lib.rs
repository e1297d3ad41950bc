//! # Sprig
//!
//! In-place rearrangement of rooted binary trees.
//!
//! ## Overview
//!
//! Sprig operates on nodes stored in a caller-owned [`RootedTree`] and
//! addressed by [`NodeId`] handles. It provides the topological moves used by
//! tree search: pruning a subtree, regrafting it onto another edge, and the
//! composed subtree-prune-and-regraft (SPR) move with a [`RollbackRecord`] to
//! undo it. It can also enumerate the nodes within a window of topological
//! distance from a reference node.
//!
//! Every operation checks parent/child backlinks before writing, and reports
//! corrupted links as [`TreeError::InvalidTree`] instead of following them.
//!
//! ```
//! use sprig::{TreeBuilder, TreeError};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (mut tree, mut root) = TreeBuilder::<&str, TreeError>::new()
//!     .root("root", |root| {
//!         let _a = root.leaf("A")?;
//!         root.child("B", |b| {
//!             b.leaf("C")?;
//!             b.leaf("D")?;
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })?
//!     .done()
//!     .ok_or("no root")?;
//!
//! let leaves: Vec<_> = tree.leaves(root).collect();
//! let (a, c) = (leaves[0], leaves[1]);
//!
//! let record = tree.spr(c, a, &mut root)?;
//! assert_eq!(tree.sister(c)?, Some(a));
//!
//! tree.rollback(&record, &mut root)?;
//! assert_eq!(tree.nodes_at_distance(c, 1, 1)?.len(), 1);
//! # Ok(())
//! # }
//! ```

mod builder;
mod display;
mod distance;
mod error;
mod hash;
mod id;
mod iterator;
mod linkage;
mod tree;

pub mod node;
pub mod rearrange;


pub use builder::*;
pub use display::TreeDisplay;
pub use error::{SprError, TreeError};
pub use hash::TopologyHash;
pub use id::NodeId;
pub use iterator::{leaf::Leaves, IterNode, NodeIter};
pub use linkage::{Linkage, Slot};
pub use tree::RootedTree;

pub use node::{RootedTreeNode, Side};
pub use rearrange::{Fragment, Pruned, RearrangeKind, RollbackRecord, SprBranchLengths};

//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Every path from a node down to an absent child crosses the same number of black nodes and no
//! red node has a red child, which keeps the height within twice the logarithm of the length.

mod fixup;
mod node;
mod tree;

pub use self::node::{Color, Node};
pub use self::tree::RedBlackTree;

use crate::node::NodeRef as View;

/// An in-order iterator over a `RedBlackTree<T, C>`.
pub type Iter<'a, T> = crate::traversal::Iter<'a, Node<T>>;

/// A view of a node in a `RedBlackTree<T, C>`.
pub type NodeRef<'a, T> = View<'a, Node<T>>;

impl<'a, T> View<'a, Node<T>> {
    /// Returns the color of this node.
    pub fn color(&self) -> Color {
        self.node().color()
    }

    pub fn is_red(&self) -> bool {
        self.node().is_red()
    }
}

//! Binary search tree without any rebalancing.
//!
//! Its shape depends entirely on insertion order, so sorted input degrades it into a chain. Every
//! walk over it is iterative for that reason.

mod node;
mod tree;

pub use self::node::Node;
pub use self::tree::BinarySearchTree;

/// An in-order iterator over a `BinarySearchTree<T, C>`.
pub type Iter<'a, T> = crate::traversal::Iter<'a, Node<T>>;

/// A view of a node in a `BinarySearchTree<T, C>`.
pub type NodeRef<'a, T> = crate::node::NodeRef<'a, Node<T>>;

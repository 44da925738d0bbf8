//! Ordered trees backed by a typed arena.
//!
//! Two trees share one contract: `bst::BinarySearchTree` performs no rebalancing, while
//! `red_black_tree::RedBlackTree` keeps itself balanced with rotations and recoloring. Both order
//! their elements with a caller-supplied `compare::Comparator`, keep equal elements, and store
//! every node in a `arena::TypedArena` owned by the tree, with parent and child links held as
//! arena handles.
//!
//! # Examples
//!
//! ```
//! use sorted_trees::red_black_tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for value in &[5, 1, 4, 2, 3] {
//!     tree.insert(*value).unwrap();
//! }
//!
//! let mut sorted = Vec::new();
//! tree.iterate(&mut sorted);
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! ```

#[macro_use]
extern crate log;

pub mod arena;
pub mod bst;
pub mod buffer;
pub mod compare;
pub mod config;
pub mod error;
pub mod node;
pub mod red_black_tree;
pub mod rotate;
pub mod traversal;

pub use crate::error::{ConfigError, Error, Result};

//! Construction-time configuration for trees.

use crate::arena::TypedArena;
use crate::bst::BinarySearchTree;
use crate::compare::Comparator;
use crate::error::{ConfigError, Result};
use crate::red_black_tree::RedBlackTree;
use std::any;
use std::mem;

/// Number of nodes reserved at a time when a tree's arena grows.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// Storage settings shared by every tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreeConfig {
    /// Number of nodes reserved whenever the arena runs out of room.
    pub chunk_size: usize,
    /// Maximum number of nodes the tree may hold, or `None` for no limit.
    pub capacity: Option<usize>,
}

impl TreeConfig {
    /// Checks the configuration against element type `T` and returns the element size.
    pub(crate) fn validate<T>(&self) -> Result<usize> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize.into());
        }
        let element_size = mem::size_of::<T>();
        if element_size == 0 {
            return Err(ConfigError::ZeroSizedElement {
                type_name: any::type_name::<T>(),
            }
            .into());
        }
        Ok(element_size)
    }

    pub(crate) fn arena<N>(&self) -> TypedArena<N> {
        match self.capacity {
            Some(limit) => TypedArena::with_limit(self.chunk_size, limit),
            None => TypedArena::new(self.chunk_size),
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            capacity: None,
        }
    }
}

/// A builder for `BinarySearchTree<T, C>` and `RedBlackTree<T, C>`.
///
/// A comparator is required; building without one fails with `ConfigError::MissingComparator`.
///
/// # Examples
///
/// ```
/// use sorted_trees::config::TreeBuilder;
///
/// let mut tree = TreeBuilder::new()
///     .comparator(|a: &u32, b: &u32| b.cmp(a))
///     .chunk_size(16)
///     .build_red_black()
///     .unwrap();
///
/// tree.insert(1).unwrap();
/// tree.insert(2).unwrap();
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
/// ```
pub struct TreeBuilder<C> {
    comparator: Option<C>,
    config: TreeConfig,
}

impl<C> TreeBuilder<C> {
    pub fn new() -> Self {
        TreeBuilder {
            comparator: None,
            config: TreeConfig::default(),
        }
    }

    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Caps the number of nodes the tree may hold. Insertions past the cap fail with
    /// `Error::CapacityExceeded` and leave the tree unchanged.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = Some(capacity);
        self
    }

    fn finish<T>(self) -> Result<(C, TreeConfig, usize)>
    where
        C: Comparator<T>,
    {
        let comparator = self.comparator.ok_or(ConfigError::MissingComparator)?;
        let element_size = self.config.validate::<T>()?;
        debug!(
            "configured tree of `{}` ({} bytes per element, {:?})",
            any::type_name::<T>(),
            element_size,
            self.config,
        );
        Ok((comparator, self.config, element_size))
    }

    pub fn build_bst<T>(self) -> Result<BinarySearchTree<T, C>>
    where
        C: Comparator<T>,
    {
        let (comparator, config, element_size) = self.finish::<T>()?;
        Ok(BinarySearchTree::from_parts(comparator, config, element_size))
    }

    pub fn build_red_black<T>(self) -> Result<RedBlackTree<T, C>>
    where
        C: Comparator<T>,
    {
        let (comparator, config, element_size) = self.finish::<T>()?;
        Ok(RedBlackTree::from_parts(comparator, config, element_size))
    }
}

impl<C> Default for TreeBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

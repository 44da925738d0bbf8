use crate::arena::{Entry, TypedArena};
use crate::buffer::Buffer;
use crate::compare::{Comparator, Natural};
use crate::config::{TreeBuilder, TreeConfig};
use crate::error::Result;
use crate::node::{self, Direction, Links};
use crate::red_black_tree::fixup;
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::{Iter, NodeRef};
use crate::traversal;
use std::fmt;
use std::mem;
use std::vec;

/// An ordered multiset implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree. Each node carries a color, the root
/// is black, no red node has a red child, and every path from a node to an absent child passes
/// through the same number of black nodes. Insertion and removal restore these rules with
/// recoloring and at most three rotations, so the height stays logarithmic in the length.
///
/// Elements are ordered by the comparator the tree was built with. Equal elements are kept and
/// a new element equal to an existing one is inserted after it.
///
/// # Examples
///
/// ```
/// use sorted_trees::red_black_tree::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// for value in &[30, 20, 10] {
///     tree.insert(*value).unwrap();
/// }
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.value(), &20);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(tree.black_height(), 1);
///
/// assert_eq!(tree.delete(&20), Some(20));
/// assert_eq!(tree.delete(&20), None);
/// ```
pub struct RedBlackTree<T, C = Natural> {
    arena: TypedArena<Node<T>>,
    root: Option<Entry>,
    comparator: C,
    element_size: usize,
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackTree<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Panics
    ///
    /// Panics if `T` is a zero-sized type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        match Self::with_comparator(Natural) {
            Ok(tree) => tree,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Comparator<T>,
{
    pub(crate) fn from_parts(comparator: C, config: TreeConfig, element_size: usize) -> Self {
        RedBlackTree {
            arena: config.arena(),
            root: None,
            comparator,
            element_size,
        }
    }

    /// Constructs a new, empty `RedBlackTree<T, C>` ordered by `comparator` with the default
    /// configuration.
    pub fn with_comparator(comparator: C) -> Result<Self> {
        TreeBuilder::new().comparator(comparator).build_red_black()
    }

    /// Inserts a copy of `value` into the tree and returns a view of the new node.
    ///
    /// The new node starts red at the leaf position an unbalanced tree would use, then the tree
    /// is recolored and rotated until the red black rules hold again. The node is allocated
    /// before any link is written, so when allocation fails the error is returned and the tree is
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::{Color, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.insert(1).unwrap().color(), Color::Black);
    /// assert_eq!(tree.insert(2).unwrap().color(), Color::Red);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<NodeRef<'_, T>> {
        let slot = traversal::insertion_slot(&self.arena, self.root, &value, &self.comparator);
        let entry = match self.arena.try_allocate(Node::new(value)) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("insertion into red black tree failed: {}", err);
                return Err(err);
            },
        };
        match slot {
            Some((parent, dir)) => node::link(&mut self.arena, parent, dir, Some(entry)),
            None => self.root = Some(entry),
        }
        fixup::after_insert(&mut self.arena, &mut self.root, entry);
        Ok(NodeRef::new(&self.arena, entry))
    }

    /// Returns a view of a node comparing equal to `value`, or `None` if there is no such node.
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        traversal::search(&self.arena, self.root, value, &self.comparator)
            .map(|entry| self.view(entry))
    }

    /// Checks if an element comparing equal to `value` exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Returns a view of a node comparing equal to `value`, descending from `start` instead of
    /// the root. Returns `None` if the subtree rooted at `start` has no such node or if `start`
    /// is a node of another tree.
    pub fn search_from(&self, start: NodeRef<'_, T>, value: &T) -> Option<NodeRef<'_, T>> {
        if !start.belongs_to(&self.arena) {
            return None;
        }
        traversal::search(&self.arena, Some(start.entry()), value, &self.comparator)
            .map(|entry| self.view(entry))
    }

    /// Removes an element comparing equal to `value` and returns it, or returns `None` and leaves
    /// the tree unchanged if there is no such element.
    ///
    /// The node that is physically unlinked has at most one child: it is the matching node
    /// itself, or its in-order successor when the matching node has two children. In the second
    /// case the successor's element moves into the matching node. If the unlinked node was black,
    /// the tree is repaired starting from the child that took its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let target = traversal::search(&self.arena, self.root, value, &self.comparator)?;
        let removed = match (self.arena[target].left(), self.arena[target].right()) {
            (Some(_), Some(right)) => traversal::extreme(&self.arena, right, Direction::Left),
            _ => target,
        };

        let child = self.arena[removed].left().or_else(|| self.arena[removed].right());
        let parent = self.arena[removed].parent();
        let removed_color = self.arena[removed].color();
        node::replace(&mut self.arena, &mut self.root, removed, child);

        if removed_color == Color::Black {
            fixup::after_remove(&mut self.arena, &mut self.root, child, parent);
        }

        let removed_value = self.arena.free(&removed).into_value();
        if removed == target {
            Some(removed_value)
        } else {
            Some(mem::replace(self.arena[target].value_mut(), removed_value))
        }
    }

    /// Appends a copy of every element to `buffer` in order and returns how many were appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let mut buffer = Vec::new();
    /// tree.iterate(&mut buffer);
    /// assert_eq!(buffer, vec![1, 3]);
    /// ```
    pub fn iterate<B>(&self, buffer: &mut B) -> usize
    where
        T: Clone,
        B: Buffer<T>,
    {
        self.iter().fold(0, |count, value| {
            buffer.push(value.clone());
            count + 1
        })
    }

    /// Appends a copy of every element in the subtree rooted at `start` to `buffer` in order and
    /// returns how many were appended. Nothing is appended if `start` is a node of another tree.
    pub fn iterate_from<B>(&self, start: NodeRef<'_, T>, buffer: &mut B) -> usize
    where
        T: Clone,
        B: Buffer<T>,
    {
        if !start.belongs_to(&self.arena) {
            return 0;
        }
        start.iter().fold(0, |count, value| {
            buffer.push(value.clone());
            count + 1
        })
    }

    /// Returns an element that is less than or equal to `value`, choosing the greatest such
    /// element. Returns `None` if no such element exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        traversal::floor(&self.arena, self.root, value, &self.comparator)
            .map(|entry| self.value(entry))
    }

    /// Returns an element that is greater than or equal to `value`, choosing the least such
    /// element. Returns `None` if no such element exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        traversal::ceil(&self.arena, self.root, value, &self.comparator)
            .map(|entry| self.value(entry))
    }
}

impl<T, C> RedBlackTree<T, C> {
    fn view(&self, entry: Entry) -> NodeRef<'_, T> {
        NodeRef::new(&self.arena, entry)
    }

    fn value(&self, entry: Entry) -> &T {
        self.arena[entry].value()
    }

    /// Returns a view of the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|entry| self.view(entry))
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the size in bytes of one element.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the maximum number of elements the tree accepts, if it was built with one.
    pub fn capacity(&self) -> Option<usize> {
        self.arena.limit()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        traversal::height(&self.arena, self.root)
    }

    /// Returns the number of black nodes on a path from the root to an absent child. Every such
    /// path agrees, so the leftmost one is counted.
    pub fn black_height(&self) -> usize {
        let mut ret = 0;
        let mut curr = self.root;
        while let Some(entry) = curr {
            if !self.arena[entry].is_red() {
                ret += 1;
            }
            curr = self.arena[entry].left();
        }
        ret
    }

    /// Returns the minimum element of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        traversal::min(&self.arena, self.root).map(|entry| self.value(entry))
    }

    /// Returns the maximum element of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        traversal::max(&self.arena, self.root).map(|entry| self.value(entry))
    }

    /// Removes every element from the tree, releasing each node after both of its children.
    pub fn clear(&mut self) {
        let order = traversal::post_order(&self.arena, self.root);
        debug!("releasing {} red black tree nodes", order.len());
        for entry in &order {
            self.arena.free(entry);
        }
        self.root = None;
    }

    /// Returns an iterator over the tree. The iterator will yield elements using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.root, self.len())
    }
}

impl<T> Default for RedBlackTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> IntoIterator for RedBlackTree<T, C> {
    type IntoIter = vec::IntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        let root = self.root.take();
        traversal::drain(&mut self.arena, root, len)
            .into_iter()
            .map(Node::into_value)
            .collect::<Vec<T>>()
            .into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> fmt::Debug for RedBlackTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

use crate::arena::{Entry, TypedArena};
use crate::bst::node::Node;
use crate::bst::{Iter, NodeRef};
use crate::buffer::Buffer;
use crate::compare::{Comparator, Natural};
use crate::config::{TreeBuilder, TreeConfig};
use crate::error::Result;
use crate::node::{self, Links};
use crate::traversal;
use std::fmt;
use std::mem;
use std::vec;

/// An ordered multiset implemented using an unbalanced binary search tree.
///
/// Elements are ordered by the comparator the tree was built with. Equal elements are kept; a new
/// element equal to an existing one is placed to its right, so equal elements iterate in
/// insertion order. Nodes live in an arena owned by the tree and refer to each other by handle.
///
/// # Examples
///
/// ```
/// use sorted_trees::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(3).unwrap();
/// tree.insert(1).unwrap();
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.min(), Some(&1));
/// assert!(tree.search(&3).is_some());
///
/// assert_eq!(tree.delete(&3), Some(3));
/// assert_eq!(tree.delete(&2), None);
/// ```
pub struct BinarySearchTree<T, C = Natural> {
    arena: TypedArena<Node<T>>,
    root: Option<Entry>,
    comparator: C,
    element_size: usize,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Panics
    ///
    /// Panics if `T` is a zero-sized type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        match Self::with_comparator(Natural) {
            Ok(tree) => tree,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Comparator<T>,
{
    pub(crate) fn from_parts(comparator: C, config: TreeConfig, element_size: usize) -> Self {
        BinarySearchTree {
            arena: config.arena(),
            root: None,
            comparator,
            element_size,
        }
    }

    /// Constructs a new, empty `BinarySearchTree<T, C>` ordered by `comparator` with the default
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::with_comparator(|a: &i32, b: &i32| b.cmp(a)).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.iter().collect::<Vec<&i32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Result<Self> {
        TreeBuilder::new().comparator(comparator).build_bst()
    }

    /// Inserts a copy of `value` into the tree and returns a view of the new node. Equal elements
    /// are kept and the new one is placed after them.
    ///
    /// The insertion slot is found and the node is allocated before any link is written, so when
    /// allocation fails the error is returned and the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2).unwrap();
    /// let node = tree.insert(1).unwrap();
    /// assert_eq!(node.value(), &1);
    /// assert_eq!(node.parent().map(|parent| *parent.value()), Some(2));
    /// ```
    pub fn insert(&mut self, value: T) -> Result<NodeRef<'_, T>> {
        let slot = traversal::insertion_slot(&self.arena, self.root, &value, &self.comparator);
        let entry = match self.arena.try_allocate(Node::new(value)) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("insertion into binary search tree failed: {}", err);
                return Err(err);
            },
        };
        match slot {
            Some((parent, dir)) => node::link(&mut self.arena, parent, dir, Some(entry)),
            None => self.root = Some(entry),
        }
        Ok(NodeRef::new(&self.arena, entry))
    }

    /// Returns a view of a node comparing equal to `value`, or `None` if there is no such node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.search(&1).map(|node| *node.value()), Some(1));
    /// assert!(tree.search(&0).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        traversal::search(&self.arena, self.root, value, &self.comparator)
            .map(|entry| self.view(entry))
    }

    /// Checks if an element comparing equal to `value` exists in the tree.
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
    /// A node with two children keeps its place: it takes over the element of its in-order
    /// successor and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let target = traversal::search(&self.arena, self.root, value, &self.comparator)?;
        let removed = match (self.arena[target].left(), self.arena[target].right()) {
            // leaf
            (None, None) => {
                node::replace(&mut self.arena, &mut self.root, target, None);
                target
            },
            // one child
            (Some(child), None) | (None, Some(child)) => {
                node::replace(&mut self.arena, &mut self.root, target, Some(child));
                target
            },
            // two children: unlink the successor, which has no left child
            (Some(_), Some(right)) => {
                let successor = traversal::extreme(&self.arena, right, node::Direction::Left);
                let child = self.arena[successor].right();
                node::replace(&mut self.arena, &mut self.root, successor, child);
                successor
            },
        };

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
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let mut buffer = Vec::new();
    /// assert_eq!(tree.iterate(&mut buffer), 2);
    /// assert_eq!(buffer, vec![1, 3]);
    /// ```
    pub fn iterate<B>(&self, buffer: &mut B) -> usize
    where
        T: Clone,
        B: Buffer<T>,
    {
        let mut count = 0;
        for value in self.iter() {
            buffer.push(value.clone());
            count += 1;
        }
        count
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
    pub fn floor(&self, value: &T) -> Option<&T> {
        traversal::floor(&self.arena, self.root, value, &self.comparator)
            .map(|entry| self.value(entry))
    }

    /// Returns an element that is greater than or equal to `value`, choosing the least such
    /// element. Returns `None` if no such element exists.
    pub fn ceil(&self, value: &T) -> Option<&T> {
        traversal::ceil(&self.arena, self.root, value, &self.comparator)
            .map(|entry| self.value(entry))
    }
}

impl<T, C> BinarySearchTree<T, C> {
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

    /// Returns the minimum element of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        traversal::min(&self.arena, self.root).map(|entry| self.value(entry))
    }

    /// Returns the maximum element of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        traversal::max(&self.arena, self.root).map(|entry| self.value(entry))
    }

    /// Removes every element from the tree, releasing each node after both of its children.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let order = traversal::post_order(&self.arena, self.root);
        debug!("releasing {} binary search tree nodes", order.len());
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
    /// use sorted_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
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

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> IntoIterator for BinarySearchTree<T, C> {
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

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> fmt::Debug for BinarySearchTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySearchTree;
    use crate::compare::Natural;
    use crate::config::TreeBuilder;
    use crate::error::Error;
    use crate::node::Direction;

    fn build(values: &[u32]) -> BinarySearchTree<u32> {
        let mut tree = BinarySearchTree::new();
        for value in values {
            tree.insert(*value).unwrap();
        }
        tree
    }

    #[test]
    fn test_len_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert_links_parent_and_direction() {
        let mut tree = build(&[5, 3]);
        let node = tree.insert(4).unwrap();
        assert_eq!(node.value(), &4);
        assert_eq!(node.direction(), Some(Direction::Right));
        let parent = node.parent().unwrap();
        assert_eq!(parent.value(), &3);
        assert_eq!(parent.direction(), Some(Direction::Left));
        assert!(parent.parent().unwrap().is_root());
    }

    #[test]
    fn test_insert_duplicate_routes_right() {
        let mut tree = build(&[5]);
        let node = tree.insert(5).unwrap();
        assert_eq!(node.direction(), Some(Direction::Right));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&5, &5]);
    }

    #[test]
    fn test_search() {
        let tree = build(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.search(&4).map(|node| *node.value()), Some(4));
        assert!(tree.search(&7).is_none());
        assert!(tree.contains(&1));
        assert!(!tree.contains(&2));
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = build(&[5, 3, 8]);
        assert_eq!(tree.delete(&3), Some(3));
        assert!(tree.root().unwrap().left().is_none());
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&5, &8]);
    }

    #[test]
    fn test_delete_one_child() {
        let mut tree = build(&[5, 3, 1]);
        assert_eq!(tree.delete(&3), Some(3));
        let child = tree.root().unwrap().left().unwrap();
        assert_eq!(child.value(), &1);
        assert_eq!(child.direction(), Some(Direction::Left));
        assert_eq!(child.parent().map(|node| *node.value()), Some(5));
    }

    #[test]
    fn test_delete_two_children() {
        let mut tree = build(&[5, 3, 8, 7, 9, 6]);
        assert_eq!(tree.delete(&5), Some(5));
        assert_eq!(tree.root().map(|node| *node.value()), Some(6));
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&3, &6, &7, &8, &9]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_delete_root_until_empty() {
        let mut tree = build(&[2, 1]);
        assert_eq!(tree.delete(&2), Some(2));
        assert!(tree.root().unwrap().is_root());
        assert_eq!(tree.delete(&1), Some(1));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(tree.delete(&4), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_degenerate_chain() {
        let values = (0..2_000).collect::<Vec<u32>>();
        let tree = build(&values);
        assert_eq!(tree.height(), 2_000);
        assert_eq!(tree.iter().count(), 2_000);
        assert_eq!(tree.max(), Some(&1_999));
    }

    #[test]
    fn test_floor_ceil() {
        let tree = build(&[1, 3, 5]);
        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.floor(&4), Some(&3));
        assert_eq!(tree.ceil(&4), Some(&5));
        assert_eq!(tree.ceil(&6), None);
    }

    #[test]
    fn test_iterate_into_buffer() {
        let tree = build(&[4, 2, 6]);
        let mut buffer = vec![0];
        assert_eq!(tree.iterate(&mut buffer), 3);
        assert_eq!(buffer, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_clear_and_reuse() {
        let mut tree = build(&[4, 2, 6]);
        tree.clear();
        assert_eq!(tree.len(), 0);
        tree.insert(1).unwrap();
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1]);
    }

    #[test]
    fn test_capacity_exceeded_leaves_tree_unchanged() {
        let mut tree = TreeBuilder::new()
            .comparator(Natural)
            .capacity(2)
            .build_bst()
            .unwrap();
        tree.insert(2).unwrap();
        tree.insert(1).unwrap();
        match tree.insert(3) {
            Err(Error::CapacityExceeded { capacity }) => assert_eq!(capacity, 2),
            _ => panic!("Expected insertion to fail."),
        }
        assert_eq!(tree.len(), 2);
        assert!(tree.root().unwrap().right().is_none());
        assert_eq!(tree.capacity(), Some(2));
    }

    #[test]
    fn test_into_iter() {
        let tree = build(&[1, 5, 3]);
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_debug() {
        let tree = build(&[2, 1]);
        assert_eq!(format!("{:?}", tree), "{1, 2}");
    }
}

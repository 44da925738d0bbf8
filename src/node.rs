//! Link plumbing shared by the nodes of every tree in this crate.

use crate::arena::{Entry, TypedArena};
use crate::traversal::{self, Iter};
use std::fmt;
use std::ptr;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A node that lives in a `TypedArena` and refers to its neighbours by `Entry`.
///
/// The parent link is a navigation aid only; ownership of every node belongs to the arena. The
/// cached direction is `None` exactly when the parent is `None`.
pub trait Links {
    type Value;

    fn value(&self) -> &Self::Value;

    fn value_mut(&mut self) -> &mut Self::Value;

    fn child(&self, dir: Direction) -> Option<Entry>;

    fn set_child(&mut self, dir: Direction, child: Option<Entry>);

    fn parent(&self) -> Option<Entry>;

    fn set_parent(&mut self, parent: Option<Entry>);

    fn direction(&self) -> Option<Direction>;

    fn set_direction(&mut self, dir: Option<Direction>);

    fn left(&self) -> Option<Entry> {
        self.child(Direction::Left)
    }

    fn right(&self) -> Option<Entry> {
        self.child(Direction::Right)
    }
}

/// Hangs `child` under `parent` in the `dir` slot and points the child back at its new parent.
pub fn link<N: Links>(
    arena: &mut TypedArena<N>,
    parent: Entry,
    dir: Direction,
    child: Option<Entry>,
) {
    arena[parent].set_child(dir, child);
    if let Some(child) = child {
        arena[child].set_parent(Some(parent));
        arena[child].set_direction(Some(dir));
    }
}

/// Puts `new` into the slot `old` occupies, which is either a child slot of `old`'s parent or the
/// root. `old` keeps its own links and must be detached or freed by the caller.
pub fn replace<N: Links>(
    arena: &mut TypedArena<N>,
    root: &mut Option<Entry>,
    old: Entry,
    new: Option<Entry>,
) {
    let parent = arena[old].parent();
    let dir = arena[old].direction();
    match (parent, dir) {
        (Some(parent), Some(dir)) => arena[parent].set_child(dir, new),
        _ => *root = new,
    }
    if let Some(new) = new {
        arena[new].set_parent(parent);
        arena[new].set_direction(dir);
    }
}

/// A read-only view of a node inside a tree.
///
/// Views are returned by insertion and search and allow walking to neighbouring nodes. They
/// borrow the tree, so the tree cannot be modified while a view is alive.
pub struct NodeRef<'a, N> {
    arena: &'a TypedArena<N>,
    entry: Entry,
}

impl<'a, N> NodeRef<'a, N>
where
    N: Links,
{
    pub(crate) fn new(arena: &'a TypedArena<N>, entry: Entry) -> Self {
        NodeRef { arena, entry }
    }

    pub(crate) fn node(&self) -> &'a N {
        &self.arena[self.entry]
    }

    pub(crate) fn belongs_to(&self, arena: &TypedArena<N>) -> bool {
        ptr::eq(self.arena, arena)
    }

    fn neighbour(&self, entry: Option<Entry>) -> Option<NodeRef<'a, N>> {
        entry.map(|entry| NodeRef::new(self.arena, entry))
    }

    /// Returns the handle of this node.
    pub fn entry(&self) -> Entry {
        self.entry
    }

    /// Returns the element stored in this node.
    pub fn value(&self) -> &'a N::Value {
        self.node().value()
    }

    pub fn left(&self) -> Option<NodeRef<'a, N>> {
        self.neighbour(self.node().left())
    }

    pub fn right(&self) -> Option<NodeRef<'a, N>> {
        self.neighbour(self.node().right())
    }

    pub fn child(&self, dir: Direction) -> Option<NodeRef<'a, N>> {
        self.neighbour(self.node().child(dir))
    }

    pub fn parent(&self) -> Option<NodeRef<'a, N>> {
        self.neighbour(self.node().parent())
    }

    /// Returns which child of its parent this node is, or `None` for the root.
    pub fn direction(&self) -> Option<Direction> {
        self.node().direction()
    }

    pub fn is_root(&self) -> bool {
        self.node().parent().is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().left().is_none() && self.node().right().is_none()
    }

    /// Returns an iterator over the subtree rooted at this node. The iterator will yield elements
    /// using in-order traversal.
    pub fn iter(&self) -> Iter<'a, N> {
        let len = traversal::size(self.arena, Some(self.entry));
        Iter::new(self.arena, Some(self.entry), len)
    }
}

impl<'a, N> Clone for NodeRef<'a, N> {
    fn clone(&self) -> Self {
        NodeRef {
            arena: self.arena,
            entry: self.entry,
        }
    }
}

impl<'a, N> Copy for NodeRef<'a, N> {}

impl<'a, N> fmt::Debug for NodeRef<'a, N>
where
    N: Links,
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("entry", &self.entry)
            .field("value", self.value())
            .field("direction", &self.direction())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{link, replace, Direction, Links, NodeRef};
    use crate::arena::{Entry, TypedArena};
    use crate::bst::Node;

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_link_and_replace() {
        let mut arena = TypedArena::new(8);
        let parent = arena.try_allocate(Node::new(2)).unwrap();
        let child = arena.try_allocate(Node::new(1)).unwrap();
        let other = arena.try_allocate(Node::new(0)).unwrap();
        let mut root: Option<Entry> = Some(parent);

        link(&mut arena, parent, Direction::Left, Some(child));
        assert_eq!(arena[parent].left(), Some(child));
        assert_eq!(arena[child].parent(), Some(parent));
        assert_eq!(arena[child].direction(), Some(Direction::Left));

        replace(&mut arena, &mut root, child, Some(other));
        assert_eq!(arena[parent].left(), Some(other));
        assert_eq!(arena[other].direction(), Some(Direction::Left));

        replace(&mut arena, &mut root, parent, Some(other));
        assert_eq!(root, Some(other));
        assert_eq!(arena[other].parent(), None);
        assert_eq!(arena[other].direction(), None);
    }

    #[test]
    fn test_subtree_iter() {
        let mut arena = TypedArena::new(8);
        let root = arena.try_allocate(Node::new(4)).unwrap();
        let left = arena.try_allocate(Node::new(2)).unwrap();
        let right = arena.try_allocate(Node::new(6)).unwrap();
        let leaf = arena.try_allocate(Node::new(3)).unwrap();
        link(&mut arena, root, Direction::Left, Some(left));
        link(&mut arena, root, Direction::Right, Some(right));
        link(&mut arena, left, Direction::Right, Some(leaf));

        let view = NodeRef::new(&arena, root);
        assert_eq!(view.iter().len(), 4);
        assert_eq!(view.iter().collect::<Vec<&u32>>(), vec![&2, &3, &4, &6]);

        let subtree = view.left().unwrap();
        assert_eq!(subtree.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
        assert!(subtree.belongs_to(&arena));
        assert!(!subtree.belongs_to(&TypedArena::new(8)));
    }
}

//! Ordered lookup and in-order walks shared by every tree in this crate.
//!
//! Everything here is iterative so that a degenerate, list-shaped tree cannot exhaust the call
//! stack.

use crate::arena::{Entry, TypedArena};
use crate::compare::Comparator;
use crate::node::{Direction, Links};
use std::cmp::Ordering;
use std::vec::Vec;

/// Finds a node comparing equal to `value`, descending from `root`.
pub fn search<N, C>(
    arena: &TypedArena<N>,
    root: Option<Entry>,
    value: &N::Value,
    comparator: &C,
) -> Option<Entry>
where
    N: Links,
    C: Comparator<N::Value>,
{
    let mut curr = root;
    while let Some(entry) = curr {
        let node = &arena[entry];
        curr = match comparator.compare(value, node.value()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(entry),
        };
    }
    None
}

/// Returns the node a new `value` should hang under and the slot it should take. Ties route to
/// the right. Returns `None` for an empty tree.
pub fn insertion_slot<N, C>(
    arena: &TypedArena<N>,
    root: Option<Entry>,
    value: &N::Value,
    comparator: &C,
) -> Option<(Entry, Direction)>
where
    N: Links,
    C: Comparator<N::Value>,
{
    let mut curr = root?;
    loop {
        let dir = match comparator.compare(value, arena[curr].value()) {
            Ordering::Less => Direction::Left,
            Ordering::Equal | Ordering::Greater => Direction::Right,
        };
        match arena[curr].child(dir) {
            Some(next) => curr = next,
            None => return Some((curr, dir)),
        }
    }
}

/// Follows `dir` links from `entry` until there are none left.
pub fn extreme<N: Links>(arena: &TypedArena<N>, mut entry: Entry, dir: Direction) -> Entry {
    while let Some(next) = arena[entry].child(dir) {
        entry = next;
    }
    entry
}

pub fn min<N: Links>(arena: &TypedArena<N>, root: Option<Entry>) -> Option<Entry> {
    root.map(|entry| extreme(arena, entry, Direction::Left))
}

pub fn max<N: Links>(arena: &TypedArena<N>, root: Option<Entry>) -> Option<Entry> {
    root.map(|entry| extreme(arena, entry, Direction::Right))
}

/// Finds the greatest node that compares less than or equal to `value`.
pub fn floor<N, C>(
    arena: &TypedArena<N>,
    root: Option<Entry>,
    value: &N::Value,
    comparator: &C,
) -> Option<Entry>
where
    N: Links,
    C: Comparator<N::Value>,
{
    let mut curr = root;
    let mut best = None;
    while let Some(entry) = curr {
        let node = &arena[entry];
        curr = match comparator.compare(value, node.value()) {
            Ordering::Less => node.left(),
            Ordering::Greater => {
                best = Some(entry);
                node.right()
            },
            Ordering::Equal => return Some(entry),
        };
    }
    best
}

/// Finds the least node that compares greater than or equal to `value`.
pub fn ceil<N, C>(
    arena: &TypedArena<N>,
    root: Option<Entry>,
    value: &N::Value,
    comparator: &C,
) -> Option<Entry>
where
    N: Links,
    C: Comparator<N::Value>,
{
    let mut curr = root;
    let mut best = None;
    while let Some(entry) = curr {
        let node = &arena[entry];
        curr = match comparator.compare(value, node.value()) {
            Ordering::Greater => node.right(),
            Ordering::Less => {
                best = Some(entry);
                node.left()
            },
            Ordering::Equal => return Some(entry),
        };
    }
    best
}

/// Returns the number of nodes on the longest downward path from `root`.
pub fn height<N: Links>(arena: &TypedArena<N>, root: Option<Entry>) -> usize {
    let mut stack = Vec::new();
    let mut ret = 0;
    if let Some(entry) = root {
        stack.push((entry, 1));
    }
    while let Some((entry, depth)) = stack.pop() {
        ret = ret.max(depth);
        let node = &arena[entry];
        for child in node.left().into_iter().chain(node.right()) {
            stack.push((child, depth + 1));
        }
    }
    ret
}

/// Returns the number of nodes in the subtree under `root`.
pub fn size<N: Links>(arena: &TypedArena<N>, root: Option<Entry>) -> usize {
    let mut stack = Vec::new();
    let mut ret = 0;
    stack.extend(root);
    while let Some(entry) = stack.pop() {
        ret += 1;
        stack.extend(arena[entry].left());
        stack.extend(arena[entry].right());
    }
    ret
}

/// Lists the handles under `root` so that every node comes after both of its children.
pub fn post_order<N: Links>(arena: &TypedArena<N>, root: Option<Entry>) -> Vec<Entry> {
    let mut stack = Vec::new();
    let mut ret = Vec::new();
    stack.extend(root);
    while let Some(entry) = stack.pop() {
        ret.push(entry);
        let node = &arena[entry];
        stack.extend(node.left());
        stack.extend(node.right());
    }
    ret.reverse();
    ret
}

/// An in-order walk over node handles using an explicit stack.
pub struct Entries<'a, N> {
    arena: &'a TypedArena<N>,
    stack: Vec<Entry>,
    curr: Option<Entry>,
    remaining: usize,
}

impl<'a, N: Links> Entries<'a, N> {
    pub fn new(arena: &'a TypedArena<N>, root: Option<Entry>, len: usize) -> Self {
        Entries {
            arena,
            stack: Vec::new(),
            curr: root,
            remaining: len,
        }
    }
}

impl<'a, N: Links> Iterator for Entries<'a, N> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.curr {
            self.stack.push(entry);
            self.curr = self.arena[entry].left();
        }
        self.stack.pop().map(|entry| {
            self.curr = self.arena[entry].right();
            self.remaining = self.remaining.saturating_sub(1);
            entry
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// An iterator over the elements of a tree.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct Iter<'a, N> {
    entries: Entries<'a, N>,
}

impl<'a, N: Links> Iter<'a, N> {
    pub(crate) fn new(arena: &'a TypedArena<N>, root: Option<Entry>, len: usize) -> Self {
        Iter {
            entries: Entries::new(arena, root, len),
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: Links + 'a,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.entries.arena;
        self.entries.next().map(|entry| arena[entry].value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, N> ExactSizeIterator for Iter<'a, N> where N: Links + 'a {}

/// Frees every node under `root` in-order and returns the elements, leaving the arena empty of
/// those nodes.
pub fn drain<N: Links>(arena: &mut TypedArena<N>, root: Option<Entry>, len: usize) -> Vec<N> {
    let order = Entries::new(arena, root, len).collect::<Vec<Entry>>();
    order.iter().map(|entry| arena.free(entry)).collect()
}

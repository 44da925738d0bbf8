//! Single rotations over arena-linked nodes.

use crate::arena::{Entry, TypedArena};
use crate::node::{Direction, Links};

/// Rotates the subtree rooted at `node` so that `node` moves down into its `dir` slot and its
/// child on the opposite side takes its place. Returns the new top of the subtree.
///
/// Four link groups change: the promoted child's parent link, the branch handed from the promoted
/// child to `node`, the link between `node` and the promoted child, and the slot above `node`
/// (a child slot of its parent, or `root`).
///
/// # Panics
///
/// Panics if `node` has no child opposite to `dir`.
pub fn rotate<N: Links>(
    arena: &mut TypedArena<N>,
    root: &mut Option<Entry>,
    node: Entry,
    dir: Direction,
) -> Entry {
    let opposite = dir.opposite();
    let child = arena[node]
        .child(opposite)
        .expect("Expected a child node to rotate into place.");
    let swapped = arena[child].child(dir);
    let grandparent = arena[node].parent();
    let node_dir = arena[node].direction();

    arena[child].set_parent(grandparent);
    arena[child].set_direction(node_dir);

    arena[node].set_child(opposite, swapped);
    if let Some(swapped) = swapped {
        arena[swapped].set_parent(Some(node));
        arena[swapped].set_direction(Some(opposite));
    }

    arena[child].set_child(dir, Some(node));
    arena[node].set_parent(Some(child));
    arena[node].set_direction(Some(dir));

    match (grandparent, node_dir) {
        (Some(grandparent), Some(node_dir)) => arena[grandparent].set_child(node_dir, Some(child)),
        _ => *root = Some(child),
    }

    trace!("rotated {:?} {:?}, {:?} promoted", node, dir, child);
    child
}

pub fn rotate_left<N: Links>(
    arena: &mut TypedArena<N>,
    root: &mut Option<Entry>,
    node: Entry,
) -> Entry {
    rotate(arena, root, node, Direction::Left)
}

pub fn rotate_right<N: Links>(
    arena: &mut TypedArena<N>,
    root: &mut Option<Entry>,
    node: Entry,
) -> Entry {
    rotate(arena, root, node, Direction::Right)
}

#[cfg(test)]
mod tests {
    use super::{rotate_left, rotate_right};
    use crate::arena::{Entry, TypedArena};
    use crate::node::{link, Direction, Links};
    use crate::red_black_tree::Node;

    fn value(arena: &TypedArena<Node<u32>>, entry: Option<Entry>) -> Option<u32> {
        entry.map(|entry| *arena[entry].value())
    }

    //     p              p
    //     |              |
    //     x              y
    //    / \            / \
    //   a   y    =>    x   c
    //      / \        / \
    //     b   c      a   b
    #[test]
    fn test_rotate_left_and_back() {
        let mut arena = TypedArena::new(8);
        let mut entries = Vec::new();
        for key in &[10, 2, 1, 4, 3, 5] {
            entries.push(arena.try_allocate(Node::new(*key)).unwrap());
        }
        let (p, x, a) = (entries[0], entries[1], entries[2]);
        let (y, b, c) = (entries[3], entries[4], entries[5]);
        let mut root = Some(p);
        link(&mut arena, p, Direction::Left, Some(x));
        link(&mut arena, x, Direction::Left, Some(a));
        link(&mut arena, x, Direction::Right, Some(y));
        link(&mut arena, y, Direction::Left, Some(b));
        link(&mut arena, y, Direction::Right, Some(c));

        assert_eq!(rotate_left(&mut arena, &mut root, x), y);
        assert_eq!(root, Some(p));
        assert_eq!(arena[p].left(), Some(y));
        assert_eq!(arena[y].parent(), Some(p));
        assert_eq!(arena[y].direction(), Some(Direction::Left));
        assert_eq!(arena[y].left(), Some(x));
        assert_eq!(arena[x].parent(), Some(y));
        assert_eq!(arena[x].direction(), Some(Direction::Left));
        assert_eq!(value(&arena, arena[x].right()), Some(3));
        assert_eq!(arena[b].parent(), Some(x));
        assert_eq!(arena[b].direction(), Some(Direction::Right));

        assert_eq!(rotate_right(&mut arena, &mut root, y), x);
        assert_eq!(arena[p].left(), Some(x));
        assert_eq!(arena[x].right(), Some(y));
        assert_eq!(arena[y].left(), Some(b));
        assert_eq!(arena[b].direction(), Some(Direction::Left));
        assert_eq!(arena[y].right(), Some(c));
    }

    #[test]
    fn test_rotate_at_root() {
        let mut arena = TypedArena::new(8);
        let x = arena.try_allocate(Node::new(1)).unwrap();
        let y = arena.try_allocate(Node::new(2)).unwrap();
        let mut root = Some(x);
        link(&mut arena, x, Direction::Right, Some(y));

        rotate_left(&mut arena, &mut root, x);
        assert_eq!(root, Some(y));
        assert_eq!(arena[y].parent(), None);
        assert_eq!(arena[y].direction(), None);
        assert_eq!(value(&arena, arena[y].left()), Some(1));
    }

    #[test]
    #[should_panic]
    fn test_rotate_without_child() {
        let mut arena = TypedArena::new(8);
        let x = arena.try_allocate(Node::new(1)).unwrap();
        let mut root = Some(x);
        rotate_right(&mut arena, &mut root, x);
    }
}

//! Recoloring and rotation passes that restore the red black invariants after a single insertion
//! or removal.

use crate::arena::{Entry, TypedArena};
use crate::node::{Direction, Links};
use crate::red_black_tree::node::{Color, Node};
use crate::rotate::rotate;

/// Absent children count as black.
pub fn is_red<T>(arena: &TypedArena<Node<T>>, entry: Option<Entry>) -> bool {
    match entry {
        None => false,
        Some(entry) => arena[entry].is_red(),
    }
}

fn set_color<T>(arena: &mut TypedArena<Node<T>>, entry: Entry, color: Color) {
    arena[entry].set_color(color);
}

fn paint_root_black<T>(arena: &mut TypedArena<Node<T>>, root: Option<Entry>) {
    if let Some(root) = root {
        set_color(arena, root, Color::Black);
    }
}

/// Repairs a red-red violation introduced by hanging the red node `entry` into the tree.
pub fn after_insert<T>(arena: &mut TypedArena<Node<T>>, root: &mut Option<Entry>, entry: Entry) {
    let mut curr = entry;
    loop {
        let parent = match arena[curr].parent() {
            Some(parent) if arena[parent].is_red() => parent,
            _ => break,
        };
        let grandparent = match arena[parent].parent() {
            Some(grandparent) => grandparent,
            None => {
                set_color(arena, parent, Color::Black);
                break;
            },
        };
        let side = arena[parent]
            .direction()
            .expect("Expected a non-root node to have a direction.");
        let uncle = arena[grandparent].child(side.opposite());

        if is_red(arena, uncle) {
            trace!("insert fix-up: red uncle, recoloring at {:?}", grandparent);
            set_color(arena, parent, Color::Black);
            if let Some(uncle) = uncle {
                set_color(arena, uncle, Color::Black);
            }
            set_color(arena, grandparent, Color::Red);
            curr = grandparent;
            continue;
        }

        let mut top = parent;
        if arena[curr].direction() == Some(side.opposite()) {
            trace!("insert fix-up: straightening bend at {:?}", parent);
            rotate(arena, root, parent, side);
            top = curr;
        }
        trace!("insert fix-up: black uncle, rotating {:?}", grandparent);
        rotate(arena, root, grandparent, side.opposite());
        set_color(arena, top, Color::Black);
        set_color(arena, grandparent, Color::Red);
        break;
    }

    paint_root_black(arena, *root);
}

/// Repairs the black deficiency left behind when a black node was unlinked. `curr` is the node
/// that took the unlinked node's place (possibly absent) and `parent` is its parent.
pub fn after_remove<T>(
    arena: &mut TypedArena<Node<T>>,
    root: &mut Option<Entry>,
    mut curr: Option<Entry>,
    mut parent: Option<Entry>,
) {
    while curr != *root && !is_red(arena, curr) {
        let above = match parent {
            Some(above) => above,
            None => break,
        };
        let side = match curr {
            Some(entry) => arena[entry]
                .direction()
                .expect("Expected a non-root node to have a direction."),
            None if arena[above].left().is_none() => Direction::Left,
            None => Direction::Right,
        };

        let mut sibling = arena[above].child(side.opposite());
        if is_red(arena, sibling) {
            trace!("remove fix-up: red sibling under {:?}", above);
            if let Some(sibling) = sibling {
                set_color(arena, sibling, Color::Black);
            }
            set_color(arena, above, Color::Red);
            rotate(arena, root, above, side);
            sibling = arena[above].child(side.opposite());
        }

        let sibling = match sibling {
            Some(sibling) => sibling,
            None => {
                curr = Some(above);
                parent = arena[above].parent();
                continue;
            },
        };
        let near = arena[sibling].child(side);
        let far = arena[sibling].child(side.opposite());

        if !is_red(arena, near) && !is_red(arena, far) {
            trace!("remove fix-up: black nephews, moving deficiency up from {:?}", above);
            set_color(arena, sibling, Color::Red);
            curr = Some(above);
            parent = arena[above].parent();
            continue;
        }

        let mut sibling = sibling;
        if !is_red(arena, far) {
            trace!("remove fix-up: red near nephew, rotating {:?}", sibling);
            if let Some(near) = near {
                set_color(arena, near, Color::Black);
            }
            set_color(arena, sibling, Color::Red);
            sibling = rotate(arena, root, sibling, side.opposite());
        }

        trace!("remove fix-up: red far nephew, rotating {:?}", above);
        let parent_color = arena[above].color();
        set_color(arena, sibling, parent_color);
        set_color(arena, above, Color::Black);
        if let Some(far) = arena[sibling].child(side.opposite()) {
            set_color(arena, far, Color::Black);
        }
        rotate(arena, root, above, side);
        curr = *root;
        break;
    }

    if let Some(curr) = curr {
        set_color(arena, curr, Color::Black);
    }
    paint_root_black(arena, *root);
}

use crate::arena::Entry;
use crate::node::{Direction, Links};

/// A struct representing an internal node of an unbalanced binary search tree.
pub struct Node<T> {
    value: T,
    left: Option<Entry>,
    right: Option<Entry>,
    parent: Option<Entry>,
    direction: Option<Direction>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
            parent: None,
            direction: None,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Links for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn child(&self, dir: Direction) -> Option<Entry> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn set_child(&mut self, dir: Direction, child: Option<Entry>) {
        match dir {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }

    fn parent(&self) -> Option<Entry> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<Entry>) {
        self.parent = parent;
    }

    fn direction(&self) -> Option<Direction> {
        self.direction
    }

    fn set_direction(&mut self, dir: Option<Direction>) {
        self.direction = dir;
    }
}

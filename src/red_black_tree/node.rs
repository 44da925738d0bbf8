use crate::arena::Entry;
use crate::node::{Direction, Links};

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T> {
    value: T,
    color: Color,
    left: Option<Entry>,
    right: Option<Entry>,
    parent: Option<Entry>,
    direction: Option<Direction>,
}

impl<T> Node<T> {
    /// Creates a detached red node.
    pub fn new(value: T) -> Self {
        Node {
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
            direction: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
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

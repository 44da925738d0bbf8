#![allow(dead_code)]

use simplelog::{Config, LevelFilter, TestLogger};
use sorted_trees::bst::BinarySearchTree;
use sorted_trees::node::{Direction, Links, NodeRef};
use sorted_trees::red_black_tree::{self, Color, RedBlackTree};
use std::fmt::Debug;

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// Walks every node reachable from `root`, checking that parent links and cached directions agree
/// with the child slots. Returns the number of nodes visited.
pub fn check_links<N: Links>(root: Option<NodeRef<'_, N>>) -> usize {
    let mut count = 0;
    let mut stack = Vec::new();
    if let Some(root) = root {
        assert!(root.is_root());
        assert_eq!(root.direction(), None);
        stack.push(root);
    }
    while let Some(node) = stack.pop() {
        count += 1;
        for dir in &[Direction::Left, Direction::Right] {
            if let Some(child) = node.child(*dir) {
                assert_eq!(child.parent().map(|parent| parent.entry()), Some(node.entry()));
                assert_eq!(child.direction(), Some(*dir));
                stack.push(child);
            }
        }
    }
    count
}

pub fn check_sorted<'a, T, I>(values: I) -> Vec<T>
where
    T: Ord + Clone + Debug + 'a,
    I: Iterator<Item = &'a T>,
{
    let values = values.cloned().collect::<Vec<T>>();
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "{:?} is out of order", pair);
    }
    values
}

/// Checks ordering, links and the size invariant, and returns the elements in order.
pub fn check_bst<T, C>(tree: &BinarySearchTree<T, C>) -> Vec<T>
where
    T: Ord + Clone + Debug,
{
    assert_eq!(check_links(tree.root()), tree.len());
    let values = check_sorted(tree.iter());
    assert_eq!(values.len(), tree.len());
    assert_eq!(tree.is_empty(), tree.len() == 0);
    values
}

// Returns the number of black nodes on every path below `node`, not counting absent children.
fn black_height<T>(node: Option<red_black_tree::NodeRef<'_, T>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            if node.color() == Color::Red {
                for child in node.left().into_iter().chain(node.right()) {
                    assert_eq!(child.color(), Color::Black, "red node has a red child");
                }
            }
            let left = black_height(node.left());
            let right = black_height(node.right());
            assert_eq!(left, right, "black height differs below a node");
            left + if node.color() == Color::Black { 1 } else { 0 }
        },
    }
}

/// Checks every binary search tree invariant plus the red black coloring rules, and returns the
/// elements in order.
pub fn check_red_black<T, C>(tree: &RedBlackTree<T, C>) -> Vec<T>
where
    T: Ord + Clone + Debug,
{
    if let Some(root) = tree.root() {
        assert_eq!(root.color(), Color::Black, "root is not black");
    }
    assert_eq!(black_height(tree.root()), tree.black_height());
    assert!(tree.height() <= 2 * tree.black_height() + 1);

    assert_eq!(check_links(tree.root()), tree.len());
    let values = check_sorted(tree.iter());
    assert_eq!(values.len(), tree.len());
    values
}

/// Returns every ordering of `values`.
pub fn permutations(values: &[u32]) -> Vec<Vec<u32>> {
    if values.len() <= 1 {
        return vec![values.to_vec()];
    }
    let mut ret = Vec::new();
    for i in 0..values.len() {
        let mut rest = values.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            ret.push(tail);
        }
    }
    ret
}

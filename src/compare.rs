//! The ordering contract shared by every tree in this crate.

use std::cmp::Ordering;

/// A three-way comparison over two elements.
///
/// The comparator is the only source of ordering and equality for a tree. It must describe a
/// total order and must answer consistently for the lifetime of the tree.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the order of the wrapped comparator.
///
/// # Examples
///
/// ```
/// use sorted_trees::compare::{Comparator, Natural, Reverse};
/// use std::cmp::Ordering;
///
/// assert_eq!(Reverse(Natural).compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Adapts a comparison that reports its result as a signed integer (negative, zero or positive).
///
/// # Examples
///
/// ```
/// use sorted_trees::compare::{Comparator, Signed};
/// use std::cmp::Ordering;
///
/// let by_value = Signed(|a: &i32, b: &i32| a - b);
/// assert_eq!(by_value.compare(&3, &7), Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Signed<F>(pub F);

impl<T, F> Comparator<T> for Signed<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> i32,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}

//! Growable output buffers that receive the elements of an in-order traversal.

use std::collections::VecDeque;

/// A growable sequence that a tree can append its elements to.
pub trait Buffer<T> {
    /// Appends one element to the end of the buffer.
    fn push(&mut self, value: T);

    /// Removes every element from the buffer.
    fn clear(&mut self);

    /// Returns the number of elements in the buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Buffer<T> for Vec<T> {
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Buffer<T> for VecDeque<T> {
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Buffer;
    use std::collections::VecDeque;

    fn fill<B: Buffer<u32>>(buffer: &mut B) {
        buffer.push(1);
        buffer.push(2);
    }

    #[test]
    fn test_vec() {
        let mut buffer = Vec::new();
        fill(&mut buffer);
        assert_eq!(Buffer::len(&buffer), 2);
        Buffer::clear(&mut buffer);
        assert!(Buffer::is_empty(&buffer));
    }

    #[test]
    fn test_vec_deque() {
        let mut buffer = VecDeque::new();
        fill(&mut buffer);
        assert_eq!(buffer.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
        Buffer::clear(&mut buffer);
        assert_eq!(Buffer::len(&buffer), 0);
    }
}

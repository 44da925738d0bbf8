//! Chunked slab allocator that owns every node of a tree.

use crate::error::{Error, Result};
use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A stable handle to an object stored in a `TypedArena<T>`.
///
/// Handles are plain indices, so trees store parent and child links as `Entry` values instead of
/// owning pointers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Entry>),
}

/// An allocator for a single type of object, addressed by `Entry` handles.
///
/// Storage grows one chunk at a time and chunks are never reallocated, so handles stay valid until
/// the object they name is freed. Freed blocks are threaded onto a free list and reused by later
/// allocations. Reserving a new chunk is fallible: `try_allocate` reports
/// `Error::ResourceExhausted` when the chunk cannot be reserved and `Error::CapacityExceeded` when
/// a configured object limit would be crossed. In both cases the arena is left as it was.
///
/// # Examples
///
/// ```
/// use sorted_trees::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.try_allocate(1).unwrap();
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// ```
pub struct TypedArena<T> {
    head: Option<Entry>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    size: usize,
    capacity: usize,
    limit: Option<usize>,
}

impl<T> TypedArena<T> {
    fn is_valid_entry(&self, entry: &Entry) -> bool {
        entry.chunk_index < self.chunks.len()
            && entry.block_index < self.chunks[entry.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// assert!(arena.is_empty());
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be non-zero.");
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            size: 0,
            capacity: 0,
            limit: None,
        }
    }

    /// Constructs a new, empty `TypedArena<T>` that refuses to hold more than `limit` live
    /// objects at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::with_limit(16, 1);
    /// assert!(arena.try_allocate(0).is_ok());
    /// assert!(arena.try_allocate(1).is_err());
    /// ```
    pub fn with_limit(chunk_size: usize, limit: usize) -> Self {
        let mut arena = Self::new(chunk_size);
        arena.limit = Some(limit);
        arena
    }

    /// Returns the maximum number of live objects, if one was configured.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn reserve_chunk(&mut self) -> Result<()> {
        let mut chunk = Vec::new();
        chunk
            .try_reserve_exact(self.chunk_size)
            .map_err(|_| Error::ResourceExhausted {
                requested: self.chunk_size,
            })?;
        self.chunks
            .try_reserve(1)
            .map_err(|_| Error::ResourceExhausted { requested: 1 })?;
        self.chunks.push(chunk);
        self.capacity += self.chunk_size;
        Ok(())
    }

    /// Allocates an object in the typed arena and returns its `Entry`. The entry can later be used
    /// to retrieve references to the object and to deallocate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.try_allocate(0).unwrap();
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn try_allocate(&mut self, value: T) -> Result<Entry> {
        if let Some(limit) = self.limit {
            if self.size >= limit {
                return Err(Error::CapacityExceeded { capacity: limit });
            }
        }
        if self.head.is_none() && self.size == self.capacity {
            self.reserve_chunk()?;
        }
        self.size += 1;

        match self.head.take() {
            None => {
                let chunk_count = self.chunks.len();
                let last_chunk = &mut self.chunks[chunk_count - 1];
                last_chunk.push(Block::Occupied(value));
                Ok(Entry {
                    chunk_index: chunk_count - 1,
                    block_index: last_chunk.len() - 1,
                })
            },
            Some(entry) => {
                let vacant_block = mem::replace(
                    &mut self.chunks[entry.chunk_index][entry.block_index],
                    Block::Occupied(value),
                );

                match vacant_block {
                    Block::Vacant(next_entry) => {
                        self.head = next_entry;
                        Ok(entry)
                    },
                    Block::Occupied(_) => panic!("Expected a vacant block."),
                }
            },
        }
    }

    /// Deallocates an object in the typed arena and returns the object.
    ///
    /// # Panics
    ///
    /// Panics if entry corresponds to an invalid or vacant value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_trees::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.try_allocate(0).unwrap();
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, entry: &Entry) -> T {
        if !self.is_valid_entry(entry) {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(
            &mut self.chunks[entry.chunk_index][entry.block_index],
            Block::Vacant(self.head),
        );
        match old_block {
            Block::Vacant(next_entry) => {
                self.chunks[entry.chunk_index][entry.block_index] = Block::Vacant(next_entry);
                panic!("Error: attempting to free vacant block.");
            },
            Block::Occupied(value) => {
                self.size -= 1;
                self.head = Some(*entry);
                value
            },
        }
    }

    /// Drops every object and releases all chunks. Previously issued entries become invalid.
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.size = 0;
        self.capacity = 0;
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        match self.chunks[entry.chunk_index][entry.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to a live object.
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        match self.chunks[entry.chunk_index][entry.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Error: entry out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;
    use super::TypedArena;
    use crate::error::Error;

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new(1024);
        arena.free(&Entry {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let entry = arena.try_allocate(0).unwrap();
        arena.free(&entry);
        arena.free(&entry);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::new(2);
        let entries = (0..3)
            .map(|i| arena.try_allocate(i).unwrap())
            .collect::<Vec<Entry>>();
        assert_eq!(
            entries[2],
            Entry {
                chunk_index: 1,
                block_index: 0
            },
        );
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.capacity, 4);
    }

    #[test]
    fn test_free_reuses_block() {
        let mut arena = TypedArena::new(1024);
        let entry = arena.try_allocate(0).unwrap();
        arena.try_allocate(1).unwrap();
        assert_eq!(arena.free(&entry), 0);
        assert_eq!(arena.try_allocate(2).unwrap(), entry);
        assert_eq!(arena[entry], 2);
    }

    #[test]
    fn test_limit() {
        let mut arena = TypedArena::with_limit(4, 2);
        assert_eq!(arena.limit(), Some(2));
        let first = arena.try_allocate(0).unwrap();
        arena.try_allocate(1).unwrap();
        match arena.try_allocate(2) {
            Err(Error::CapacityExceeded { capacity }) => assert_eq!(capacity, 2),
            _ => panic!("Expected the arena to be full."),
        }
        assert_eq!(arena.len(), 2);

        arena.free(&first);
        assert!(arena.try_allocate(3).is_ok());
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let entry = arena.try_allocate(0).unwrap();
        arena.free(&entry);
        assert_eq!(arena.get(&entry), None);
        assert_eq!(arena.get_mut(&entry), None);
    }

    #[test]
    fn test_get_mut() {
        let mut pool = TypedArena::new(1024);
        let entry = pool.try_allocate(0).unwrap();
        *pool.get_mut(&entry).unwrap() = 1;
        assert_eq!(pool.get(&entry), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new(2);
        let entry = arena.try_allocate(0).unwrap();
        arena.try_allocate(1).unwrap();
        arena.try_allocate(2).unwrap();
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(&entry), None);
        assert!(arena.try_allocate(3).is_ok());
    }
}

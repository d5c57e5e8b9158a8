//! Pluggable storage backends for heap records
//!
//! The engine never grows or shrinks its storage: it only needs a fixed run
//! of record slots it can read, swap and overwrite. [`RecordStorage`]
//! abstracts over where those slots live:
//!
//! - `&mut [T]`: a caller-owned buffer borrowed for the heap's lifetime
//!   (no allocation; works without the `alloc` feature)
//! - `[T; N]`: an inline array owned by the heap
//! - `Box<[T]>` / `Vec<T>`: heap-allocated storage owned by the heap
//!   (requires the `alloc` feature)
//!
//! The number of slots is the heap's capacity. For `Vec<T>` that is the
//! vector's length at construction, not its allocated capacity.
//!
//! # Example
//!
//! ```rust
//! use fixed_heap::{FixedHeap, NaturalOrder, Orientation};
//!
//! // Borrowed: the buffer outlives the heap
//! let mut buffer = [0u32; 8];
//! let mut heap = FixedHeap::new(&mut buffer[..], NaturalOrder, Orientation::Max);
//! heap.insert(7).unwrap();
//! assert_eq!(heap.capacity(), 8);
//!
//! // Owned inline array
//! let mut heap = FixedHeap::new([0u32; 4], NaturalOrder, Orientation::Min);
//! heap.insert(7).unwrap();
//! assert_eq!(heap.peek(), Some(&7));
//! ```

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

/// Trait for record storage backends
///
/// A backend exposes a fixed number of slots. The slice returned by
/// [`slots`](RecordStorage::slots) and [`slots_mut`](RecordStorage::slots_mut)
/// must have the same length for the whole life of the heap.
pub trait RecordStorage {
    /// The record type held in each slot
    type Record;

    /// All slots, live and stale
    fn slots(&self) -> &[Self::Record];

    /// All slots, live and stale, mutably
    fn slots_mut(&mut self) -> &mut [Self::Record];

    /// Number of slots
    #[inline]
    fn capacity(&self) -> usize {
        self.slots().len()
    }
}

impl<T> RecordStorage for &mut [T] {
    type Record = T;

    #[inline]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> RecordStorage for [T; N] {
    type Record = T;

    #[inline]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}

#[cfg(feature = "alloc")]
impl<T> RecordStorage for Box<[T]> {
    type Record = T;

    #[inline]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T> RecordStorage for Vec<T> {
    type Record = T;

    #[inline]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

/// Allocates `capacity` default-initialized slots
#[cfg(feature = "alloc")]
pub(crate) fn default_slots<T: Default>(capacity: usize) -> Box<[T]> {
    core::iter::repeat_with(T::default).take(capacity).collect()
}

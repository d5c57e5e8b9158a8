//! Fixed-capacity binary heap
//!
//! [`FixedHeap`] keeps an implicit binary tree in a fixed run of slots
//! provided by a [`RecordStorage`] backend. Records are only ever moved
//! (swapped) between slots, never cloned, so any record type works.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `insert`           | O(log n)   |
//! | `extract_into`     | O(log n)   |
//! | `replace_extreme`  | O(log n)   |
//! | `push_pop`         | O(log n)   |
//! | `peek`             | O(1)       |
//! | `heapify`          | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use fixed_heap::{FixedHeap, HeapError};
//!
//! let mut storage = [0i32; 3];
//! let mut heap = FixedHeap::max(&mut storage[..]);
//! heap.insert(3).unwrap();
//! heap.insert(9).unwrap();
//! heap.insert(5).unwrap();
//! assert_eq!(heap.insert(1), Err(HeapError::CapacityExceeded));
//!
//! assert_eq!(heap.peek(), Some(&9));
//! let mut top = 0;
//! heap.extract_into(&mut top).unwrap();
//! assert_eq!(top, 9);
//! assert_eq!(heap.len(), 2);
//! ```

use core::fmt;
use core::mem;

use crate::index::{left, parent, right};
use crate::storage::RecordStorage;
use crate::traits::{Comparator, HeapError, NaturalOrder, Orientation};

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// A binary heap over a fixed number of record slots
///
/// The first `len` slots hold the live records in heap order; slots from
/// `len` up to the capacity hold stale records that are never compared or
/// returned. Whether the root is the minimum or the maximum is chosen by the
/// [`Orientation`] given at construction.
///
/// Equal records come out in no particular order.
#[derive(Clone)]
pub struct FixedHeap<S: RecordStorage, C = NaturalOrder> {
    storage: S,
    len: usize,
    comparator: C,
    orientation: Orientation,
}

/// A heap over a caller-owned buffer
pub type SliceHeap<'a, T, C = NaturalOrder> = FixedHeap<&'a mut [T], C>;

/// A heap that owns its boxed slots
#[cfg(feature = "alloc")]
pub type OwnedHeap<T, C = NaturalOrder> = FixedHeap<Box<[T]>, C>;

impl<S, C> FixedHeap<S, C>
where
    S: RecordStorage,
    C: Comparator<S::Record>,
{
    /// Binds an empty heap to `storage`
    ///
    /// Existing slot contents are left in place and treated as stale.
    pub fn new(storage: S, comparator: C, orientation: Orientation) -> Self {
        Self {
            storage,
            len: 0,
            comparator,
            orientation,
        }
    }

    /// Treats every slot of `storage` as a live record and arranges them
    /// into heap order
    ///
    /// Each record is admitted in turn as if inserted into the growing
    /// prefix, so this runs in O(n log n) rather than the bottom-up O(n).
    /// The returned heap is full.
    pub fn heapify(storage: S, comparator: C, orientation: Orientation) -> Self {
        let mut heap = Self::new(storage, comparator, orientation);
        while heap.len < heap.capacity() {
            // Slot `len` already holds the record being inserted
            heap.len += 1;
            heap.sift_up(heap.len - 1);
        }
        debug_assert!(heap.is_heap());
        heap
    }

    /// Returns the number of live records
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no live records
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns true if every slot holds a live record
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the orientation this heap was built with
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the comparator records are ordered by
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the extreme record (minimum or maximum) without removing it
    pub fn peek(&self) -> Option<&S::Record> {
        self.as_slice().first()
    }

    /// Returns the live records in heap order
    pub fn as_slice(&self) -> &[S::Record] {
        &self.storage.slots()[..self.len]
    }

    /// Inserts a record
    ///
    /// # Errors
    /// Returns `HeapError::CapacityExceeded` if the heap is full. The heap is
    /// unchanged and `record` is dropped.
    pub fn insert(&mut self, record: S::Record) -> Result<(), HeapError> {
        self.try_insert(record)
            .map_err(|_| HeapError::CapacityExceeded)
    }

    /// Inserts a record, handing it back if the heap is full
    ///
    /// Same as [`insert`](Self::insert) except that a rejected record is
    /// returned to the caller instead of dropped.
    pub fn try_insert(&mut self, record: S::Record) -> Result<(), S::Record> {
        if self.is_full() {
            return Err(record);
        }

        let index = self.len;
        self.storage.slots_mut()[index] = record;
        self.len += 1;
        let settled = self.sift_up(index);
        debug_assert!(self.is_ordered_around(settled));
        Ok(())
    }

    /// Removes the extreme record and moves it into `receiver`
    ///
    /// The previous contents of `receiver` take the vacated slot past the
    /// end of the heap, so no record is cloned or dropped.
    ///
    /// # Errors
    /// Returns `HeapError::Empty` if there are no live records; `receiver`
    /// is left untouched.
    pub fn extract_into(&mut self, receiver: &mut S::Record) -> Result<(), HeapError> {
        if !self.retire_extreme() {
            return Err(HeapError::Empty);
        }
        mem::swap(receiver, &mut self.storage.slots_mut()[self.len]);
        Ok(())
    }

    /// Removes and returns the extreme record
    ///
    /// # Errors
    /// Returns `HeapError::Empty` if there are no live records.
    pub fn extract(&mut self) -> Result<S::Record, HeapError>
    where
        S::Record: Default,
    {
        let mut record = S::Record::default();
        self.extract_into(&mut record)?;
        Ok(record)
    }

    /// Replaces the extreme record with `record` and returns the old one
    ///
    /// Equivalent to an extract followed by an insert, but sifts only once.
    ///
    /// # Errors
    /// Returns `HeapError::Empty` if there is no record to replace. `record`
    /// is dropped.
    pub fn replace_extreme(&mut self, record: S::Record) -> Result<S::Record, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        let old = mem::replace(&mut self.storage.slots_mut()[0], record);
        let settled = self.sift_down(0);
        debug_assert!(self.is_ordered_around(settled));
        Ok(old)
    }

    /// Offers `record` to the heap and returns whichever record loses
    ///
    /// If the current extreme should sit above `record`, the extreme is
    /// swapped out for it and returned; otherwise `record` itself comes
    /// straight back. The length never changes, so feeding a full min-heap
    /// keeps the largest records seen (and a full max-heap the smallest).
    /// An empty heap always returns `record`.
    pub fn push_pop(&mut self, record: S::Record) -> S::Record {
        let displaces_root = match self.peek() {
            Some(root) => self
                .orientation
                .prefers(self.comparator.compare(root, &record)),
            None => false,
        };
        if !displaces_root {
            return record;
        }
        let old = mem::replace(&mut self.storage.slots_mut()[0], record);
        let settled = self.sift_down(0);
        debug_assert!(self.is_ordered_around(settled));
        old
    }

    /// Forgets all live records
    ///
    /// Slot contents stay in storage as stale records.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Releases the storage
    ///
    /// The first `len()` slots are in heap order.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Checks the heap property over every live parent/child pair
    pub fn is_heap(&self) -> bool {
        (1..self.len).all(|child| match parent(child) {
            Some(p) => !self.precedes(child, p),
            None => true,
        })
    }

    /// Moves the extreme record into the last live slot and shrinks the
    /// heap by one, restoring order over the remaining prefix
    ///
    /// Returns false if the heap was empty. After a successful call the
    /// retired record sits at index `len()`.
    pub(crate) fn retire_extreme(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        if self.len > 0 {
            self.storage.slots_mut().swap(0, self.len);
            let settled = self.sift_down(0);
            debug_assert!(self.is_ordered_around(settled));
        }
        true
    }

    /// Checks the slot at `index` against its parent and its live children
    ///
    /// After a sift only the slot where the moved record came to rest can
    /// be out of order, so this is the O(1) check run in debug builds.
    fn is_ordered_around(&self, index: usize) -> bool {
        let below_parent = parent(index).map_or(true, |p| !self.precedes(index, p));
        let above_children = [left(index, self.len), right(index, self.len)]
            .into_iter()
            .flatten()
            .all(|c| !self.precedes(c, index));
        below_parent && above_children
    }

    /// Returns true if the record at `a` should sit above the record at `b`
    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        let slots = self.storage.slots();
        self.orientation
            .prefers(self.comparator.compare(&slots[a], &slots[b]))
    }

    /// Move record at index up to maintain heap property; returns where it
    /// settled
    fn sift_up(&mut self, mut index: usize) -> usize {
        while let Some(p) = parent(index) {
            if !self.precedes(index, p) {
                break;
            }
            self.storage.slots_mut().swap(index, p);
            index = p;
        }
        index
    }

    /// Move record at index down to maintain heap property; returns where
    /// it settled
    fn sift_down(&mut self, mut index: usize) -> usize {
        loop {
            let candidate = match (left(index, self.len), right(index, self.len)) {
                (Some(l), Some(r)) => {
                    if self.precedes(l, r) {
                        l
                    } else {
                        r
                    }
                }
                (Some(l), None) => l,
                // Heap shape: a right child implies a left child
                (None, _) => break,
            };

            if !self.precedes(candidate, index) {
                break;
            }
            self.storage.slots_mut().swap(index, candidate);
            index = candidate;
        }
        index
    }
}

impl<S> FixedHeap<S, NaturalOrder>
where
    S: RecordStorage,
    S::Record: Ord,
{
    /// Binds an empty max-heap using the records' own ordering
    pub fn max(storage: S) -> Self {
        Self::new(storage, NaturalOrder, Orientation::Max)
    }

    /// Binds an empty min-heap using the records' own ordering
    pub fn min(storage: S) -> Self {
        Self::new(storage, NaturalOrder, Orientation::Min)
    }
}

#[cfg(feature = "alloc")]
impl<T, C> FixedHeap<Box<[T]>, C>
where
    T: Default,
    C: Comparator<T>,
{
    /// Allocates `capacity` default-initialized slots and binds an empty heap
    /// to them
    pub fn with_capacity(capacity: usize, comparator: C, orientation: Orientation) -> Self {
        Self::new(
            crate::storage::default_slots(capacity),
            comparator,
            orientation,
        )
    }
}

impl<S, C> fmt::Debug for FixedHeap<S, C>
where
    S: RecordStorage,
    S::Record: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedHeap")
            .field("orientation", &self.orientation)
            .field("len", &self.len)
            .field("capacity", &self.storage.capacity())
            .field("records", &&self.storage.slots()[..self.len])
            .finish()
    }
}

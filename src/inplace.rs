//! In-place heapify and heapsort over caller arrays
//!
//! Both operations are compositions of the [`FixedHeap`] engine with the
//! array itself as storage: no auxiliary buffer is allocated.
//!
//! # Example
//!
//! ```rust
//! use fixed_heap::{heapify_in_place, sort_in_place, NaturalOrder, Orientation};
//!
//! let mut values = [5, 3, 8, 1, 9, 2];
//! sort_in_place(&mut values, NaturalOrder, true);
//! assert_eq!(values, [1, 2, 3, 5, 8, 9]);
//!
//! let mut values = [5, 3, 8, 1, 9, 2];
//! let heap = heapify_in_place(&mut values, NaturalOrder, Orientation::Min);
//! assert_eq!(heap.peek(), Some(&1));
//! ```

use core::cmp::Ordering;

use crate::fixed_binary::{FixedHeap, SliceHeap};
use crate::traits::{ByKey, Comparator, NaturalOrder, Orientation};

/// Arranges `array` into heap order and returns the full heap over it
///
/// Records are admitted one at a time, each sifting up through the prefix
/// already in heap order. O(n log n).
pub fn heapify_in_place<T, C>(
    array: &mut [T],
    comparator: C,
    orientation: Orientation,
) -> SliceHeap<'_, T, C>
where
    C: Comparator<T>,
{
    FixedHeap::heapify(array, comparator, orientation)
}

/// Sorts `array` in place with heapsort
///
/// `ascending` selects the direction. Not stable: equal records may be
/// reordered. O(n log n) comparisons, no allocation.
pub fn sort_in_place<T, C>(array: &mut [T], comparator: C, ascending: bool)
where
    C: Comparator<T>,
{
    let mut heap = heapify_in_place(array, comparator, Orientation::for_sort(ascending));
    // Each extreme lands in the slot vacated at the back of the prefix
    while heap.retire_extreme() {}
}

/// Sorts `array` ascending by the records' own ordering
pub fn sort<T: Ord>(array: &mut [T]) {
    sort_in_place(array, NaturalOrder, true);
}

/// Sorts `array` ascending by `compare`
pub fn sort_by<T, F>(array: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_in_place(array, compare, true);
}

/// Sorts `array` ascending by the key `f` extracts from each record
pub fn sort_by_key<T, K, F>(array: &mut [T], f: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(array, ByKey(f), true);
}

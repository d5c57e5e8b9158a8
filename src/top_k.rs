//! Top-k selection into a caller buffer
//!
//! Keeps the `k` most extreme records of a stream, where `k` is the length
//! of the output buffer. The buffer doubles as the storage of a fixed heap
//! of the *opposite* orientation, so its root is always the weakest record
//! kept so far and is the one a better candidate replaces.
//!
//! # Time Complexity
//!
//! O(n log k) comparisons for `n` input records; no allocation.
//!
//! # Example
//!
//! ```rust
//! use fixed_heap::top_k::largest_into;
//! use fixed_heap::NaturalOrder;
//!
//! let mut best = [0; 3];
//! let kept = largest_into([5, 3, 8, 1, 9, 2], &mut best, NaturalOrder);
//! assert_eq!(kept, 3);
//! assert_eq!(best, [9, 8, 5]);
//! ```

use crate::fixed_binary::FixedHeap;
use crate::traits::{Comparator, Orientation};

/// Keeps the `out.len()` largest records, ordered largest first
///
/// Returns how many records were kept; only `out[..kept]` is meaningful
/// when the input is shorter than the buffer.
pub fn largest_into<T, I, C>(records: I, out: &mut [T], comparator: C) -> usize
where
    I: IntoIterator<Item = T>,
    C: Comparator<T>,
{
    retain_extremes(records, out, comparator, Orientation::Max)
}

/// Keeps the `out.len()` smallest records, ordered smallest first
///
/// Returns how many records were kept; only `out[..kept]` is meaningful
/// when the input is shorter than the buffer.
pub fn smallest_into<T, I, C>(records: I, out: &mut [T], comparator: C) -> usize
where
    I: IntoIterator<Item = T>,
    C: Comparator<T>,
{
    retain_extremes(records, out, comparator, Orientation::Min)
}

fn retain_extremes<T, I, C>(records: I, out: &mut [T], comparator: C, keep: Orientation) -> usize
where
    I: IntoIterator<Item = T>,
    C: Comparator<T>,
{
    let mut heap = FixedHeap::new(&mut *out, comparator, keep.reverse());

    for record in records {
        if let Err(record) = heap.try_insert(record) {
            // Full: the weakest of root and candidate drops out
            heap.push_pop(record);
        }
    }

    let kept = heap.len();
    // Weakest records retire to the back, leaving the best at the front
    while heap.retire_extreme() {}
    kept
}

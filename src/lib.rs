//! Fixed-capacity binary heaps for Rust
//!
//! This crate provides a binary heap whose capacity is fixed when it is
//! built: it never allocates on insert and reports a full heap as an error
//! instead of growing. The same engine heapifies and heapsorts caller
//! arrays in place.
//!
//! # Features
//!
//! - **[`FixedHeap`]**: min- or max-heap over any record type and any
//!   total-order [`Comparator`]; O(log n) insert and extract
//! - **Pluggable storage**: borrow a caller buffer (`&mut [T]`), own an
//!   inline array (`[T; N]`), or own boxed slots (`Box<[T]>`, `Vec<T>`)
//! - **In-place bulk operations**: [`heapify_in_place`] and
//!   [`sort_in_place`] over caller arrays, no auxiliary buffer
//! - **Top-k selection**: [`top_k`] keeps the k most extreme records of a
//!   stream in a caller buffer
//! - **`no_std`**: only the owned boxed storage needs the `alloc` feature
//!   (enabled by default)
//!
//! # Example
//!
//! ```rust
//! use fixed_heap::{FixedHeap, HeapError, NaturalOrder, Orientation};
//!
//! let mut slots = [0u32; 4];
//! let mut heap = FixedHeap::new(&mut slots[..], NaturalOrder, Orientation::Min);
//! for x in [7, 2, 9, 4] {
//!     heap.insert(x).unwrap();
//! }
//! assert_eq!(heap.insert(1), Err(HeapError::CapacityExceeded));
//! assert_eq!(heap.extract(), Ok(2));
//! assert_eq!(heap.extract(), Ok(4));
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod fixed_binary;
pub mod index;
pub mod inplace;
pub mod storage;
pub mod top_k;
pub mod traits;

// Re-export the main types for convenience
#[cfg(feature = "alloc")]
pub use fixed_binary::OwnedHeap;
pub use fixed_binary::{FixedHeap, SliceHeap};
pub use inplace::{heapify_in_place, sort, sort_by, sort_by_key, sort_in_place};
pub use storage::RecordStorage;
pub use traits::{ByKey, Comparator, HeapError, NaturalOrder, Orientation};

//! Common traits and types for the fixed heap
//!
//! - [`HeapError`]: the two failure conditions of the engine
//! - [`Orientation`]: min-heap or max-heap ordering of the root
//! - [`Comparator`]: a total-order three-way comparison over records
//!
//! Any `Fn(&T, &T) -> Ordering` closure is a [`Comparator`], and
//! [`NaturalOrder`] covers types that already implement `Ord`.

use core::cmp::Ordering;
use core::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Insert attempted while every storage slot holds a live record
    CapacityExceeded,
    /// Extract attempted on a heap with no live records
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityExceeded => {
                write!(f, "heap is full (capacity exceeded)")
            }
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl core::error::Error for HeapError {}

/// Which extreme lives at the root of the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Smallest record at the root; every parent <= its children
    Min,
    /// Largest record at the root; every parent >= its children
    #[default]
    Max,
}

impl Orientation {
    /// Returns true if a record comparing as `ordering` against another
    /// should sit above it in the heap.
    ///
    /// `ordering` is `compare(a, b)`; the answer is whether `a` precedes `b`.
    /// Equal records never precede each other.
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use fixed_heap::Orientation;
    ///
    /// assert!(Orientation::Max.prefers(Ordering::Greater));
    /// assert!(Orientation::Min.prefers(Ordering::Less));
    /// assert!(!Orientation::Min.prefers(Ordering::Equal));
    /// ```
    #[inline]
    pub fn prefers(self, ordering: Ordering) -> bool {
        match self {
            Orientation::Min => ordering == Ordering::Less,
            Orientation::Max => ordering == Ordering::Greater,
        }
    }

    /// The other orientation
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Min => Orientation::Max,
            Orientation::Max => Orientation::Min,
        }
    }

    /// Orientation that heapsort needs to produce the requested direction.
    ///
    /// Extracted records fill the array from the back, so an ascending sort
    /// extracts maxima first.
    #[inline]
    pub fn for_sort(ascending: bool) -> Self {
        if ascending {
            Orientation::Max
        } else {
            Orientation::Min
        }
    }
}

/// Total-order three-way comparison over records of type `T`
///
/// Implementations must be a total order: consistent, antisymmetric and
/// transitive. A comparator that violates this cannot corrupt memory, but
/// the heap property (and therefore extraction order) is then unspecified.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares records with their own `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Compares records by a key extracted from each one
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers() {
        assert!(Orientation::Max.prefers(Ordering::Greater));
        assert!(!Orientation::Max.prefers(Ordering::Less));
        assert!(!Orientation::Max.prefers(Ordering::Equal));

        assert!(Orientation::Min.prefers(Ordering::Less));
        assert!(!Orientation::Min.prefers(Ordering::Greater));
        assert!(!Orientation::Min.prefers(Ordering::Equal));
    }

    #[test]
    fn test_orientation_helpers() {
        assert_eq!(Orientation::Min.reverse(), Orientation::Max);
        assert_eq!(Orientation::Max.reverse(), Orientation::Min);
        assert_eq!(Orientation::for_sort(true), Orientation::Max);
        assert_eq!(Orientation::for_sort(false), Orientation::Min);
    }

    #[test]
    fn test_comparators() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&-5, &3), Ordering::Less);
        assert_eq!(ByKey(|s: &&str| s.len()).compare(&"abc", &"xy"), Ordering::Greater);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HeapError::CapacityExceeded.to_string(),
            "heap is full (capacity exceeded)"
        );
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
    }
}

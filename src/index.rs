//! Index arithmetic for an implicit binary tree stored in an array.
//!
//! Slot `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`.
//! A child exists only when its index is strictly less than the number of
//! live records; slots at or past `len` hold stale records and must never be
//! compared against.

/// Parent of slot `index`, or `None` for the root.
///
/// ```rust
/// use fixed_heap::index::parent;
///
/// assert_eq!(parent(0), None);
/// assert_eq!(parent(1), Some(0));
/// assert_eq!(parent(2), Some(0));
/// assert_eq!(parent(6), Some(2));
/// ```
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

/// Left child of slot `index` if it is a live slot in a heap of `len` records.
///
/// ```rust
/// use fixed_heap::index::left;
///
/// assert_eq!(left(0, 2), Some(1));
/// assert_eq!(left(0, 1), None);
/// ```
#[inline]
pub fn left(index: usize, len: usize) -> Option<usize> {
    child(index, 1, len)
}

/// Right child of slot `index` if it is a live slot in a heap of `len` records.
///
/// ```rust
/// use fixed_heap::index::right;
///
/// assert_eq!(right(0, 3), Some(2));
/// assert_eq!(right(0, 2), None);
/// ```
#[inline]
pub fn right(index: usize, len: usize) -> Option<usize> {
    child(index, 2, len)
}

#[inline]
fn child(index: usize, offset: usize, len: usize) -> Option<usize> {
    index
        .checked_mul(2)
        .and_then(|i| i.checked_add(offset))
        .filter(|&c| c < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent() {
        assert_eq!(parent(0), None);
        for i in 1..1000 {
            let p = parent(i).unwrap();
            assert!(left(p, usize::MAX) == Some(i) || right(p, usize::MAX) == Some(i));
        }
    }

    #[test]
    fn test_children_strict_bound() {
        // A child index equal to len is past the logical end
        assert_eq!(left(1, 3), None);
        assert_eq!(left(1, 4), Some(3));
        assert_eq!(right(1, 4), None);
        assert_eq!(right(1, 5), Some(4));
        assert_eq!(left(0, 0), None);
        assert_eq!(right(0, 0), None);
    }

    #[test]
    fn test_children_overflow() {
        assert_eq!(left(usize::MAX / 2 + 1, usize::MAX), None);
        assert_eq!(right(usize::MAX / 2, usize::MAX), None);
        assert_eq!(left(usize::MAX / 2, usize::MAX), None);
    }
}

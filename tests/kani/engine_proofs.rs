//! Bounded proofs for the heap engine
//!
//! Every harness drives a small heap with symbolic records and checks the
//! heap property plus the size accounting after each step.

#[cfg(kani)]
use fixed_heap::{FixedHeap, HeapError, NaturalOrder, Orientation};

#[cfg(kani)]
fn any_orientation() -> Orientation {
    if kani::any() {
        Orientation::Min
    } else {
        Orientation::Max
    }
}

/// Proof: a full heap rejects inserts and keeps its length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_insert_on_full_is_noop() {
    let mut heap = FixedHeap::new([0u32; 3], NaturalOrder, any_orientation());
    for _ in 0..3 {
        assert!(heap.insert(kani::any()).is_ok());
    }
    let root_before = *heap.peek().unwrap();

    assert_eq!(heap.insert(kani::any()), Err(HeapError::CapacityExceeded));
    assert_eq!(heap.len(), 3);
    assert_eq!(*heap.peek().unwrap(), root_before);
    assert!(heap.is_heap());
}

/// Proof: extracting from an empty heap leaves the receiver untouched
#[cfg(kani)]
#[kani::proof]
fn verify_extract_on_empty_is_noop() {
    let mut heap = FixedHeap::new([0u32; 2], NaturalOrder, any_orientation());
    let original: u32 = kani::any();
    let mut receiver = original;

    assert_eq!(heap.extract_into(&mut receiver), Err(HeapError::Empty));
    assert_eq!(receiver, original);
    assert_eq!(heap.len(), 0);
}

/// Proof: arbitrary operation sequences keep the heap property and the count
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_random_ops_keep_invariant() {
    let mut heap = FixedHeap::new([0u8; 4], NaturalOrder, any_orientation());
    let mut expected_len = 0usize;

    for _ in 0..5 {
        if kani::any() {
            match heap.insert(kani::any()) {
                Ok(()) => expected_len += 1,
                Err(e) => {
                    assert_eq!(e, HeapError::CapacityExceeded);
                    assert_eq!(expected_len, 4);
                }
            }
        } else {
            match heap.extract() {
                Ok(_) => expected_len -= 1,
                Err(e) => {
                    assert_eq!(e, HeapError::Empty);
                    assert_eq!(expected_len, 0);
                }
            }
        }
        assert_eq!(heap.len(), expected_len);
        assert!(heap.is_heap());
    }
}

/// Proof: the root is never beaten by any live record
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_root_is_extreme() {
    let mut heap = FixedHeap::max([0u8; 4]);
    for _ in 0..4 {
        heap.insert(kani::any()).unwrap();
    }
    let root = *heap.peek().unwrap();
    assert!(heap.as_slice().iter().all(|&x| x <= root));

    let first = heap.extract().unwrap();
    let second = heap.extract().unwrap();
    assert_eq!(first, root);
    assert!(second <= first);
}

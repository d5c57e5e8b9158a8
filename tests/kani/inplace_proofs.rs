//! Bounded proofs for in-place heapify and heapsort

#[cfg(kani)]
use fixed_heap::{heapify_in_place, sort_in_place, NaturalOrder, Orientation};

/// Proof: heapify puts any 4-element array into heap order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heapify_any_array() {
    let mut array: [i8; 4] = kani::any();
    let orientation = if kani::any() {
        Orientation::Min
    } else {
        Orientation::Max
    };
    let heap = heapify_in_place(&mut array, NaturalOrder, orientation);
    assert_eq!(heap.len(), 4);
    assert!(heap.is_heap());
}

/// Proof: heapsort orders any 4-element array and keeps its records
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_sort_any_array() {
    let original: [i8; 4] = kani::any();
    let ascending: bool = kani::any();
    let mut array = original;
    sort_in_place(&mut array, NaturalOrder, ascending);

    for i in 0..3 {
        if ascending {
            assert!(array[i] <= array[i + 1]);
        } else {
            assert!(array[i] >= array[i + 1]);
        }
    }

    let sum = |a: &[i8; 4]| a.iter().map(|&x| x as i32).sum::<i32>();
    assert_eq!(sum(&array), sum(&original));
}

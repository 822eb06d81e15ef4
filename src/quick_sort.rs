//! Quicksort Implementation
//!
//! Recursive quicksort with randomized pivot selection and a Lomuto-style
//! partition. The pivot index is drawn uniformly from the current range,
//! which bounds the expected running time and defeats adversarial inputs
//! that degrade fixed-pivot variants to quadratic time.
//!
//! Complexity: O(n log n) comparisons expected, O(n²) worst case.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sort a slice in-place using randomized quicksort.
///
/// A generator is freshly seeded from OS entropy once per call and threaded
/// through the recursion, so repeated calls take different pivot paths while
/// always producing the same sorted result.
pub fn sort<T: Ord>(data: &mut [T]) {
    let mut rng = StdRng::from_entropy();
    sort_with(data, &mut rng);
}

fn sort_with<T: Ord, R: Rng>(data: &mut [T], rng: &mut R) {
    if data.len() > 1 {
        let pivot = random_partition(data, rng);
        sort_with(&mut data[..pivot], rng);
        sort_with(&mut data[pivot + 1..], rng);
    }
}

/// Swap a uniformly chosen element into the last position, then partition
/// around it.
fn random_partition<T: Ord, R: Rng>(data: &mut [T], rng: &mut R) -> usize {
    let pivot_idx = rng.gen_range(0..data.len());
    data.swap(pivot_idx, data.len() - 1);
    partition(data)
}

/// Lomuto partition around the last element. Elements not greater than the
/// pivot are swapped to the front; the pivot ends up at the returned index,
/// with everything before it ≤ pivot and everything after it > pivot.
fn partition<T: Ord>(data: &mut [T]) -> usize {
    let last = data.len() - 1;
    let mut i = 0;
    for j in 0..last {
        if data[j] <= data[last] {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, last);
    i
}

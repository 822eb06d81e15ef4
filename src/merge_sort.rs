//! Merge Sort Implementation
//!
//! Top-down recursive merge sort. Each merge combines two sorted halves
//! into a temporary buffer, comparing element by element with the left side
//! winning ties, then copies the buffer back over the range.
//!
//! Complexity: O(n log n) comparisons, O(n) auxiliary space per merge call.
//! Stable.

/// Sort a slice in-place using top-down merge sort.
///
/// The `Clone` bound stands in for the copy-vs-move element policy: safe
/// Rust cannot move elements out of a borrowed slice, and for primitive
/// element types the clone compiles down to a copy.
pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    sort(&mut data[..mid]);
    sort(&mut data[mid..]);

    merge(data, mid);
}

/// Merge the two sorted halves `data[..mid]` and `data[mid..]`.
fn merge<T: Ord + Clone>(data: &mut [T], mid: usize) {
    let mut temp = Vec::with_capacity(data.len());
    let (left, right) = data.split_at(mid);

    let mut l = 0;
    let mut r = 0;
    while l < left.len() && r < right.len() {
        // Strict comparison keeps equal elements in left-then-right order.
        if right[r] < left[l] {
            temp.push(right[r].clone());
            r += 1;
        } else {
            temp.push(left[l].clone());
            l += 1;
        }
    }
    temp.extend_from_slice(&left[l..]);
    temp.extend_from_slice(&right[r..]);

    data.clone_from_slice(&temp);
}

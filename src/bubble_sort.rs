//! Bubble Sort Implementation
//!
//! Adjacent-pair comparison sort with an early-exit pass check. The sorted
//! tail grows by one element per outer pass, and a pass that performs no
//! swap terminates the sort.
//!
//! Complexity: O(n²) comparisons worst case, O(n) on already sorted input.
//! Stable.

/// Sort a slice in-place using bubble sort.
///
/// Each outer pass bubbles the largest remaining element to the end of the
/// unsorted range. A pass without swaps means the range is sorted and the
/// remaining passes are skipped.
pub fn sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

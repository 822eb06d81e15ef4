//! Sorting Algorithm Timing Comparison
//!
//! This crate compares classic sorting algorithms (counting sort, bubble
//! sort, merge sort, randomized quicksort) against the standard library's
//! pdqsort across exponentially growing input sizes and several input
//! distributions (random, almost sorted, almost sorted decreasing, sorted).
//!
//! Each algorithm is timed on an identical copy of the same generated input,
//! verified for correctness after every run, and retired from larger sizes
//! once it exceeds a fixed time ceiling. The accumulated timing series are
//! emitted as a matplotlib/pyplot script on stdout; progress diagnostics go
//! to stderr.

pub mod benchmark;
pub mod bubble_sort;
pub mod counting_sort;
pub mod generators;
pub mod merge_sort;
pub mod pyplot_report;
pub mod quick_sort;
pub mod registry;
pub mod std_sort;

//! Benchmark Harness
//!
//! Drives every registered sorting method over one input distribution,
//! doubling the input length from 2 up to 2^20. At each length a single
//! input is generated and every still-active method sorts its own copy of
//! it, so all methods face an identical workload. Elapsed wall-clock time
//! is measured per sort with a monotonic clock, the result is verified to
//! be in ascending order, and a method whose run exceeds the time ceiling
//! is retired from all larger lengths in the same run.
//!
//! Progress and verification diagnostics go to stderr; the collected
//! timing series are returned for the reporting stage.

use crate::registry::Registry;
use std::time::Instant;

/// Largest input length a run reaches.
pub const MAX_LEN: usize = 2usize.pow(20);

/// Retirement ceiling in nanoseconds: a method slower than this (ten
/// seconds) at some length is skipped at every larger length.
pub const TIME_LIMIT_NS: u64 = 10u64.pow(10);

/// Timing series and metadata collected by one benchmark run, consumed by
/// the report emitter.
pub struct RunResult {
    pub label: String,
    pub slot: u32,
    /// Display names, in registry order.
    pub names: Vec<&'static str>,
    /// Per-method elapsed nanoseconds, one entry per length at which the
    /// method was active and produced a correctly sorted result.
    pub series: Vec<Vec<u64>>,
}

/// Check a slice for non-descending order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Benchmark runner for one registry. The length and time limits default
/// to the full measurement range; tests narrow them to keep retirement
/// scenarios fast.
pub struct Benchmark<T> {
    registry: Registry<T>,
    max_len: usize,
    time_limit_ns: u64,
}

impl<T: Ord + Clone> Benchmark<T> {
    pub fn new(registry: Registry<T>) -> Self {
        Self::with_limits(registry, MAX_LEN, TIME_LIMIT_NS)
    }

    pub fn with_limits(registry: Registry<T>, max_len: usize, time_limit_ns: u64) -> Self {
        Benchmark {
            registry,
            max_len,
            time_limit_ns,
        }
    }

    /// Run every registered method over inputs produced by `generate`,
    /// returning the accumulated timing series tagged with `label` and the
    /// report `slot`.
    pub fn run(
        &self,
        label: &str,
        slot: u32,
        mut generate: impl FnMut(usize) -> Vec<T>,
    ) -> RunResult {
        let methods = self.registry.methods();
        let mut series: Vec<Vec<u64>> = (0..methods.len()).map(|_| Vec::new()).collect();
        let mut retired = vec![false; methods.len()];

        let mut len = 2usize;
        let mut exponent = 1u32;
        while len <= self.max_len {
            eprintln!("[{}] input size: 2^{} ({} elements)", label, exponent, len);

            // One shared input per length keeps the workload identical
            // across methods.
            let input = generate(len);

            for (idx, method) in methods.iter().enumerate() {
                if retired[idx] {
                    continue;
                }

                eprintln!("  sorting with {}...", method.name);
                let mut data = input.clone();

                let start = Instant::now();
                (method.run)(&mut data);
                let elapsed = start.elapsed().as_nanos() as u64;

                if is_sorted(&data) {
                    series[idx].push(elapsed);
                } else {
                    eprintln!(
                        "  {} produced an unsorted result at {} elements, sample discarded",
                        method.name, len
                    );
                }

                // Retirement looks at the measured time alone, whether or
                // not the result was accepted.
                if elapsed > self.time_limit_ns {
                    eprintln!(
                        "  {} exceeded the time limit at {} elements, retiring",
                        method.name, len
                    );
                    retired[idx] = true;
                }
            }

            len *= 2;
            exponent += 1;
        }

        RunResult {
            label: label.to_string(),
            slot,
            names: self.registry.names(),
            series,
        }
    }
}

//! Benchmark Input Generators
//!
//! Producers for the input-distribution shapes the benchmark runs over:
//! uniform random, almost sorted (ascending or descending, chosen by the
//! comparator), and fully sorted. Every generator returns a fresh vector of
//! exactly `len` elements drawn from `lo..hi`.

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::cmp::Ordering;

/// Uniformly random sequence.
pub fn random<T, R>(len: usize, lo: T, hi: T, rng: &mut R) -> Vec<T>
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng,
{
    (0..len).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Random sequence sorted by `compare` (ascending with `a.cmp(b)`,
/// descending with `b.cmp(a)`).
pub fn sorted<T, R, F>(len: usize, lo: T, hi: T, rng: &mut R, mut compare: F) -> Vec<T>
where
    T: SampleUniform + Ord + Copy,
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut data = random(len, lo, hi, rng);
    data.sort_unstable_by(&mut compare);
    data
}

/// Sorted sequence disturbed by a bounded number of random transpositions,
/// one per hundred elements and at least one.
pub fn almost_sorted<T, R, F>(len: usize, lo: T, hi: T, rng: &mut R, compare: F) -> Vec<T>
where
    T: SampleUniform + Ord + Copy,
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut data = sorted(len, lo, hi, rng, compare);
    if len < 2 {
        return data;
    }

    let disorder = (len / 100).max(1);
    for _ in 0..disorder {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        data.swap(a, b);
    }
    data
}

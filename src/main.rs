//! Sorting Algorithm Timing Comparison
//!
//! Benchmarks counting sort, bubble sort, merge sort, randomized quicksort
//! and the standard library's unstable sort over four input distributions,
//! doubling the input size from 2 up to 2^20. Slow algorithms are retired
//! once a run exceeds the ten second ceiling, so the quadratic entries stop
//! early while the rest continue to the full range.
//!
//! Output: a matplotlib/pyplot script on stdout (one subplot per input
//! distribution), progress diagnostics on stderr.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sort_timing::benchmark::Benchmark;
use sort_timing::generators;
use sort_timing::pyplot_report::PlotScript;
use sort_timing::registry::Registry;

fn main() {
    let bench = Benchmark::new(Registry::<u32>::new());
    let mut plot = PlotScript::new();

    let run = bench.run("random", 1, |len| {
        let mut rng = StdRng::from_entropy();
        generators::random(len, 0, len as u32, &mut rng)
    });
    plot.add_run(&run);

    let run = bench.run("almost sorted", 2, |len| {
        let mut rng = StdRng::from_entropy();
        generators::almost_sorted(len, 0, len as u32, &mut rng, |a, b| a.cmp(b))
    });
    plot.add_run(&run);

    let run = bench.run("almost sorted (decreasing)", 3, |len| {
        let mut rng = StdRng::from_entropy();
        generators::almost_sorted(len, 0, len as u32, &mut rng, |a, b| b.cmp(a))
    });
    plot.add_run(&run);

    let run = bench.run("sorted", 4, |len| {
        let mut rng = StdRng::from_entropy();
        generators::sorted(len, 0, len as u32, &mut rng, |a, b| a.cmp(b))
    });
    plot.add_run(&run);

    print!("{}", plot.finish());
}

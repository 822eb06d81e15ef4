//! Crate-level tests: registry composition, harness behavior, and the
//! algorithms driven end-to-end through the registry.

use rand::Rng;
use sort_timing::benchmark::{is_sorted, Benchmark, TIME_LIMIT_NS};
use sort_timing::registry::{Registry, SortMethod};
use sort_timing::{generators, quick_sort, std_sort};
use std::time::Duration;

#[test]
fn every_registered_method_sorts_the_reference_sequence() {
    for method in Registry::<u32>::new().methods() {
        let mut data = vec![5u32, 3, 1, 4, 2];
        (method.run)(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5], "{} failed", method.name);
    }
}

#[test]
fn every_registered_method_agrees_on_random_input() {
    let mut rng = rand::thread_rng();
    let input: Vec<u32> = (0..2000).map(|_| rng.gen_range(0..500)).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    for method in Registry::<u32>::new().methods() {
        let mut data = input.clone();
        (method.run)(&mut data);
        assert_eq!(data, expected, "{} disagrees", method.name);
    }
}

#[test]
fn quick_sort_value_content_is_deterministic() {
    let mut rng = rand::thread_rng();
    let input: Vec<u32> = (0..1000).map(|_| rng.gen_range(0..1000)).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    // The pivot path is randomized, the sorted result must not be.
    for _ in 0..100 {
        let mut data = input.clone();
        quick_sort::sort(&mut data);
        assert_eq!(data, expected);
    }
}

fn stalling_sort(data: &mut [u32]) {
    data.sort_unstable();
    if data.len() >= 8 {
        std::thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn harness_retires_a_method_past_the_ceiling() {
    let registry = Registry::from_methods(vec![
        SortMethod {
            name: "fast",
            run: std_sort::sort::<u32>,
        },
        SortMethod {
            name: "stalling",
            run: stalling_sort,
        },
    ]);

    // 5 ms ceiling; lengths 2, 4, 8, 16, 32, 64.
    let bench = Benchmark::with_limits(registry, 64, 5_000_000);
    let result = bench.run("retirement", 1, |len| (0..len as u32).rev().collect());

    // The fast method records at every length.
    assert_eq!(result.series[0].len(), 6);

    // The stalling method records at 2 and 4, exceeds the ceiling at 8
    // (that sample is still kept) and is skipped at 16, 32 and 64.
    assert_eq!(result.series[1].len(), 3);
}

fn reversing_sort(data: &mut [u32]) {
    data.sort_unstable();
    data.reverse();
}

#[test]
fn harness_discards_unsorted_results_and_continues() {
    let registry = Registry::from_methods(vec![
        SortMethod {
            name: "broken",
            run: reversing_sort,
        },
        SortMethod {
            name: "fast",
            run: std_sort::sort::<u32>,
        },
    ]);

    let bench = Benchmark::with_limits(registry, 16, TIME_LIMIT_NS);
    let result = bench.run("verification", 2, |len| (0..len as u32).collect());

    // Descending output never verifies, so no samples; the run still
    // completes for the healthy method.
    assert!(result.series[0].is_empty());
    assert_eq!(result.series[1].len(), 4);
}

#[test]
fn harness_over_every_generator_shape() {
    let bench = Benchmark::with_limits(Registry::<u32>::new(), 256, TIME_LIMIT_NS);

    let shapes: [(&str, fn(usize) -> Vec<u32>); 4] = [
        ("random", |len| {
            let mut rng = rand::thread_rng();
            generators::random(len, 0, len as u32, &mut rng)
        }),
        ("almost sorted", |len| {
            let mut rng = rand::thread_rng();
            generators::almost_sorted(len, 0, len as u32, &mut rng, |a, b| a.cmp(b))
        }),
        ("almost sorted (decreasing)", |len| {
            let mut rng = rand::thread_rng();
            generators::almost_sorted(len, 0, len as u32, &mut rng, |a, b| b.cmp(a))
        }),
        ("sorted", |len| {
            let mut rng = rand::thread_rng();
            generators::sorted(len, 0, len as u32, &mut rng, |a, b| a.cmp(b))
        }),
    ];

    for (slot, (label, generate)) in shapes.into_iter().enumerate() {
        let result = bench.run(label, slot as u32 + 1, generate);

        // Lengths 2..=256 doubling: 8 sizes, every method healthy.
        assert_eq!(result.names.len(), 5);
        for series in &result.series {
            assert_eq!(series.len(), 8, "{} series incomplete", label);
        }
    }
}

#[test]
fn generated_inputs_stay_inside_the_counting_domain() {
    let mut rng = rand::thread_rng();
    let data = generators::random(4096, 0u32, 4096, &mut rng);
    assert!(data.iter().all(|&x| (x as u64) < 1 << 29));

    let mut sorted = data;
    sort_timing::counting_sort::sort(&mut sorted);
    assert!(is_sorted(&sorted));
}

use algo_test_tools::patterns;
use divconq::{closest_pair_distance, select, stable, unstable, Metrics, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn fresh_sink_is_zeroed() {
    let metrics = Metrics::new();
    assert_eq!(metrics.comparisons(), 0);
    assert_eq!(metrics.allocations(), 0);
    assert_eq!(metrics.recursion_depth(), 0);
    assert_eq!(metrics.max_recursion_depth(), 0);
}

#[test]
fn reset_clears_all_counters() {
    let mut metrics = Metrics::new();
    let mut data = patterns::random_uniform(100, 1_000);
    stable::merge::sort(&mut data, &mut metrics);

    assert!(metrics.comparisons() > 0);
    assert!(metrics.allocations() > 0);
    assert!(metrics.max_recursion_depth() > 0);

    metrics.reset();
    assert_eq!(metrics.comparisons(), 0);
    assert_eq!(metrics.allocations(), 0);
    assert_eq!(metrics.recursion_depth(), 0);
    assert_eq!(metrics.max_recursion_depth(), 0);
}

#[test]
fn depth_returns_to_zero_after_each_run() {
    let mut metrics = Metrics::new();

    let mut data = patterns::random_uniform(500, 5_000);
    stable::merge::sort(&mut data, &mut metrics);
    assert_eq!(metrics.recursion_depth(), 0);

    metrics.reset();
    let mut data = patterns::random_uniform(500, 5_000);
    unstable::quick::sort(&mut data, &mut metrics);
    assert_eq!(metrics.recursion_depth(), 0);

    metrics.reset();
    let mut data = patterns::random_uniform(500, 5_000);
    select(&mut data, 250, &mut metrics).unwrap();
    assert_eq!(metrics.recursion_depth(), 0);

    metrics.reset();
    let mut rng = StdRng::seed_from_u64(0xDE97);
    let points: Vec<Point> = (0..200)
        .map(|_| Point::new(rng.gen_range(0.0..50.0), rng.gen_range(0.0..50.0)))
        .collect();
    closest_pair_distance(&points, &mut metrics).unwrap();
    assert_eq!(metrics.recursion_depth(), 0);
}

#[test]
fn merge_sort_below_cutoff_never_touches_the_buffer() {
    // Ten elements sit below the insertion-sort cutoff: a single leaf
    // frame, no merge, no buffer snapshot.
    let mut metrics = Metrics::new();
    let mut data = [64, 34, 25, 12, 22, 11, 90, 5, 77, 42];
    stable::merge::sort(&mut data, &mut metrics);

    assert_eq!(metrics.allocations(), 0);
    assert_eq!(metrics.max_recursion_depth(), 1);
    assert!(metrics.comparisons() > 0);
}

#[test]
fn merge_sort_depth_is_logarithmic() {
    let mut metrics = Metrics::new();
    let mut data = patterns::random_uniform(10_000, 1_000_000);
    stable::merge::sort(&mut data, &mut metrics);

    // Balanced halving with 15-element leaves: 11 levels for 10k keys.
    assert!(metrics.max_recursion_depth() <= 16);
    assert!(metrics.allocations() > 0);
}

#[test]
fn quick_sort_depth_is_bounded_by_recurse_smaller() {
    let mut metrics = Metrics::new();
    let mut data = patterns::random_uniform(10_000, 1_000_000);
    unstable::quick::sort(&mut data, &mut metrics);

    // Each nested frame handles at most half its parent's range.
    assert!(metrics.max_recursion_depth() <= 16);
}

#[test]
fn select_small_range_allocates_nothing() {
    // Up to five elements is a single insertion-sorted group: no medians
    // vector is ever built.
    let mut metrics = Metrics::new();
    let mut data = [9, 2, 7, 4, 1];
    select(&mut data, 3, &mut metrics).unwrap();
    assert_eq!(metrics.allocations(), 0);
    assert!(metrics.comparisons() > 0);
}

#[test]
fn select_depth_stays_shallow() {
    let mut metrics = Metrics::new();
    let mut data = patterns::random_uniform(10_000, 1_000_000);
    select(&mut data, 5_000, &mut metrics).unwrap();

    // The medians recursion shrinks by a factor of five per nesting level
    // and the rank recursion is tail-shaped, so depth stays small.
    assert!(metrics.max_recursion_depth() <= 12);
}

#[test]
fn closest_pair_counts_the_upfront_orderings() {
    // Two points hit the brute-force base case immediately: the only
    // allocations are the two sorted copies of the input.
    let mut metrics = Metrics::new();
    let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    closest_pair_distance(&points, &mut metrics).unwrap();

    assert_eq!(metrics.allocations(), 4);
    assert_eq!(metrics.comparisons(), 0);
    assert_eq!(metrics.max_recursion_depth(), 1);
}

#[test]
fn comparison_counts_scale_sanely() {
    let n = 2_000u64;
    let data = patterns::random_uniform(n as usize, 1_000_000);

    let mut metrics = Metrics::new();
    let mut v = data.clone();
    stable::merge::sort(&mut v, &mut metrics);
    let merge_cmps = metrics.comparisons();

    metrics.reset();
    let mut v = data.clone();
    unstable::quick::sort(&mut v, &mut metrics);
    let quick_cmps = metrics.comparisons();

    // Both are well above linear and nowhere near quadratic for random
    // input.
    for cmps in [merge_cmps, quick_cmps] {
        assert!(cmps > n, "got {}", cmps);
        assert!(cmps < n * n / 4, "got {}", cmps);
    }
}

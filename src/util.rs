//! Order primitives shared by the sorters.

use rand::Rng;

use crate::metrics::Metrics;

/// Shuffles `v` uniformly at random (Fisher-Yates, walking high to low).
pub fn shuffle<T>(v: &mut [T]) {
    let mut rng = rand::thread_rng();
    for i in (1..v.len()).rev() {
        let j = rng.gen_range(0..=i);
        v.swap(i, j);
    }
}

/// Returns true if `v` is in non-descending order.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Insertion sort over the half-open range `lo..hi`.
///
/// Counting contract shared by merge sort and select: one comparison per
/// executed shift test inside the scan, plus one for the final test that
/// ends it.
pub(crate) fn insertion_sort<T: Ord + Copy>(
    v: &mut [T],
    lo: usize,
    hi: usize,
    metrics: &mut Metrics,
) {
    for i in (lo + 1)..hi {
        let key = v[i];
        let mut j = i;
        while j > lo && v[j - 1] > key {
            metrics.inc_comparisons();
            v[j] = v[j - 1];
            j -= 1;
        }
        metrics.inc_comparisons();
        v[j] = key;
    }
}

//! Stable top-down merge sort with an insertion-sort cutoff.

use crate::metrics::Metrics;
use crate::util::insertion_sort;

// Ranges at or below this length are insertion sorted.
const CUTOFF: usize = 15;

/// Sorts `v` in non-descending order.
///
/// This sort is stable (equal elements keep their relative order) and
/// performs O(n log n) comparisons in the worst case. One auxiliary buffer
/// the size of `v` is created per call and reused by every merge step via
/// index offsets; each merge's snapshot copy into it is recorded in
/// `metrics` as allocations.
pub fn sort<T: Ord + Copy>(v: &mut [T], metrics: &mut Metrics) {
    let mut buffer = v.to_vec();
    sort_range(v, &mut buffer, 0, v.len(), metrics);
}

fn sort_range<T: Ord + Copy>(
    v: &mut [T],
    buffer: &mut [T],
    lo: usize,
    hi: usize,
    metrics: &mut Metrics,
) {
    metrics.enter_recursion();

    if hi - lo <= CUTOFF {
        insertion_sort(v, lo, hi, metrics);
        metrics.exit_recursion();
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(v, buffer, lo, mid, metrics);
    sort_range(v, buffer, mid, hi, metrics);
    merge(v, buffer, lo, mid, hi, metrics);

    metrics.exit_recursion();
}

/// Merges the sorted halves `lo..mid` and `mid..hi` in place, using
/// `buffer` as scratch. Taking the not-greater left element first is what
/// keeps the sort stable.
fn merge<T: Ord + Copy>(
    v: &mut [T],
    buffer: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    metrics: &mut Metrics,
) {
    buffer[lo..hi].copy_from_slice(&v[lo..hi]);
    metrics.inc_allocations((hi - lo) as u64);

    let mut i = lo;
    let mut j = mid;
    let mut k = lo;
    while i < mid && j < hi {
        metrics.inc_comparisons();
        if buffer[i] <= buffer[j] {
            v[k] = buffer[i];
            i += 1;
        } else {
            v[k] = buffer[j];
            j += 1;
        }
        k += 1;
    }

    // Flush whichever half remains.
    while i < mid {
        v[k] = buffer[i];
        i += 1;
        k += 1;
    }
    while j < hi {
        v[k] = buffer[j];
        j += 1;
        k += 1;
    }
}

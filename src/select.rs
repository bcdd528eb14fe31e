//! Worst-case linear order-statistic selection (median of medians).

use crate::error::DivConqError;
use crate::metrics::Metrics;
use crate::unstable::quick::partition;
use crate::util::insertion_sort;

// Group width for median-of-medians pivot selection. Five is the smallest
// width for which the chosen pivot provably lands between the 30th and
// 70th percentile, making the recurrence linear.
const GROUP: usize = 5;

/// Returns the k-th smallest element of `v` (1-indexed).
///
/// Worst-case linear via median-of-medians pivot selection. The slice may
/// be reordered but does not end up sorted; callers that need the original
/// ordering pass a copy. Fails with [`DivConqError::RankOutOfRange`] before
/// touching `v` if `k` is not in `1..=v.len()`.
pub fn select<T: Ord + Copy>(
    v: &mut [T],
    k: usize,
    metrics: &mut Metrics,
) -> Result<T, DivConqError> {
    if k == 0 || k > v.len() {
        return Err(DivConqError::RankOutOfRange { k, len: v.len() });
    }
    Ok(select_range(v, 0, v.len(), k, metrics))
}

/// Selects the k-th smallest of `lo..hi`, with `k` 1-indexed within the
/// range. The range is never empty.
fn select_range<T: Ord + Copy>(
    v: &mut [T],
    lo: usize,
    hi: usize,
    k: usize,
    metrics: &mut Metrics,
) -> T {
    metrics.enter_recursion();

    if hi - lo == 1 {
        metrics.exit_recursion();
        return v[lo];
    }

    let pivot_index = partition_with_mom(v, lo, hi, metrics);
    let pivot_rank = pivot_index - lo + 1;

    if k == pivot_rank {
        metrics.exit_recursion();
        v[pivot_index]
    } else if k < pivot_rank {
        metrics.exit_recursion();
        select_range(v, lo, pivot_index, k, metrics)
    } else {
        metrics.exit_recursion();
        select_range(v, pivot_index + 1, hi, k - pivot_rank, metrics)
    }
}

/// Chooses the median-of-medians pivot, moves it to the range's right end,
/// and runs the same Lomuto partition as quicksort. Returns the pivot's
/// final index.
fn partition_with_mom<T: Ord + Copy>(
    v: &mut [T],
    lo: usize,
    hi: usize,
    metrics: &mut Metrics,
) -> usize {
    let pivot_pos = median_of_medians(v, lo, hi, metrics);
    v.swap(pivot_pos, hi - 1);
    partition(v, lo, hi, metrics)
}

/// Returns the index within `lo..hi` of the chosen median-of-medians
/// element.
///
/// Each group of five is insertion-sorted in place, which parks the group
/// median at a fixed slot. The recursive call then selects the median of
/// the collected median values, and the pivot position is looked up among
/// the known slots rather than by scanning the whole range. Under
/// duplicate keys every candidate slot holds the same value, so the first
/// match is always a true group-median occurrence.
fn median_of_medians<T: Ord + Copy>(
    v: &mut [T],
    lo: usize,
    hi: usize,
    metrics: &mut Metrics,
) -> usize {
    let n = hi - lo;
    if n <= GROUP {
        insertion_sort(v, lo, hi, metrics);
        return lo + (n - 1) / 2;
    }

    let num_groups = (n + GROUP - 1) / GROUP;
    let mut medians = Vec::with_capacity(num_groups);
    let mut median_slots = Vec::with_capacity(num_groups);

    for g in 0..num_groups {
        let group_lo = lo + g * GROUP;
        let group_hi = (group_lo + GROUP).min(hi);
        insertion_sort(v, group_lo, group_hi, metrics);
        let slot = group_lo + (group_hi - group_lo - 1) / 2;
        medians.push(v[slot]);
        median_slots.push(slot);
    }
    metrics.inc_allocations(num_groups as u64);

    // Median of the medians vector: 0-indexed num_groups / 2.
    let mom = select_range(&mut medians, 0, num_groups, num_groups / 2 + 1, metrics);

    // The recursive call reorders `medians`, but the group slots in `v`
    // are untouched while it runs.
    for &slot in &median_slots {
        if v[slot] == mom {
            return slot;
        }
    }
    unreachable!("median of medians is always present at a group slot");
}

//! The shared correctness suite stamped out per sort implementation.

use crate::{patterns, test_sizes, Sort, TaggedKey};

/// Sorts a copy of `data` with `S` and with the standard library, then
/// compares. Covers sortedness and permutation preservation in one step.
pub fn check_sorts_like_std<S: Sort>(data: &[i64]) {
    let mut actual = data.to_vec();
    S::sort(&mut actual);

    let mut expected = data.to_vec();
    expected.sort_unstable();

    assert_eq!(
        actual,
        expected,
        "sort={} input_len={}",
        S::name(),
        data.len()
    );
}

pub fn empty_and_trivial<S: Sort>() {
    for data in [vec![], vec![77], vec![2, 1]] {
        check_sorts_like_std::<S>(&data);
    }
}

pub fn fixed_scenario<S: Sort>() {
    let mut data = [64, 34, 25, 12, 22, 11, 90, 5, 77, 42];
    S::sort(&mut data);
    assert_eq!(data, [5, 11, 12, 22, 25, 34, 42, 64, 77, 90]);
}

pub fn already_sorted_idempotent<S: Sort>() {
    for len in test_sizes() {
        let expected = patterns::ascending(len);
        let mut data = expected.clone();
        S::sort(&mut data);
        assert_eq!(data, expected, "sort={} len={}", S::name(), len);

        S::sort(&mut data);
        assert_eq!(data, expected, "sort={} len={} second pass", S::name(), len);
    }
}

pub fn reverse<S: Sort>() {
    for len in test_sizes() {
        check_sorts_like_std::<S>(&patterns::descending(len));
    }
}

pub fn random<S: Sort>() {
    for len in test_sizes() {
        check_sorts_like_std::<S>(&patterns::random(len));
    }
}

pub fn uniform_duplicates<S: Sort>() {
    for len in test_sizes() {
        check_sorts_like_std::<S>(&patterns::random_uniform(len, 16));
    }
}

pub fn zipf_duplicates<S: Sort>() {
    for len in test_sizes() {
        check_sorts_like_std::<S>(&patterns::random_zipf(len, 1.1));
    }
}

pub fn all_equal<S: Sort>() {
    for len in test_sizes() {
        check_sorts_like_std::<S>(&patterns::all_equal(len));
    }
}

pub fn saw_mixed<S: Sort>() {
    for len in test_sizes() {
        check_sorts_like_std::<S>(&patterns::saw_mixed(len, 20));
    }
}

/// Equal keys must keep their input order. Keys are drawn from a narrow
/// range so every length has plenty of duplicates.
pub fn stability<S: Sort>() {
    for len in test_sizes() {
        let keys = patterns::random_uniform(len, 8);
        let mut data: Vec<TaggedKey> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| TaggedKey { key, tag })
            .collect();

        S::sort(&mut data);

        for w in data.windows(2) {
            assert!(w[0].key <= w[1].key, "sort={} len={}", S::name(), len);
            if w[0].key == w[1].key {
                assert!(
                    w[0].tag < w[1].tag,
                    "sort={} len={}: equal keys reordered",
                    S::name(),
                    len
                );
            }
        }
    }
}

use algo_test_tools::{instantiate_sort_tests, instantiate_stable_sort_tests, Sort};
use divconq::Metrics;

struct MergeSortImpl;

impl Sort for MergeSortImpl {
    fn name() -> String {
        "merge_sort".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Copy,
    {
        divconq::stable::merge::sort(v, &mut Metrics::new());
    }
}

struct QuickSortImpl;

impl Sort for QuickSortImpl {
    fn name() -> String {
        "quick_sort".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Copy,
    {
        divconq::unstable::quick::sort(v, &mut Metrics::new());
    }
}

instantiate_stable_sort_tests!(merge_sort, MergeSortImpl);
instantiate_sort_tests!(quick_sort, QuickSortImpl);

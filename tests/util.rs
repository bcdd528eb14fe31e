use divconq::util::{is_sorted, shuffle};

#[test]
fn is_sorted_basics() {
    assert!(is_sorted::<i64>(&[]));
    assert!(is_sorted(&[3]));
    assert!(is_sorted(&[1, 1, 2, 9]));
    assert!(!is_sorted(&[2, 1]));
    assert!(!is_sorted(&[1, 3, 2, 4]));
}

#[test]
fn shuffle_preserves_the_multiset() {
    let original: Vec<i64> = (0..500).collect();
    let mut shuffled = original.clone();
    shuffle(&mut shuffled);

    let mut restored = shuffled.clone();
    restored.sort_unstable();
    assert_eq!(restored, original);
}

#[test]
fn shuffle_of_trivial_slices_is_a_no_op() {
    let mut empty: [i64; 0] = [];
    shuffle(&mut empty);

    let mut one = [42];
    shuffle(&mut one);
    assert_eq!(one, [42]);
}

//! Tests for the generic in-place shuffle.

use std::collections::HashMap;

use proptest::prelude::*;
use xoshiro_core_rs::{shuffle, Rng};

fn counts<T: std::hash::Hash + Eq + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut map = HashMap::new();
    for item in items {
        *map.entry(item.clone()).or_insert(0) += 1;
    }
    map
}

#[test]
fn test_shuffle_preserves_contents() {
    let mut rng = Rng::new();
    rng.reseed(11);

    let original: Vec<u32> = (0..500).map(|_| rng.bounded_u64(50) as u32).collect();
    let mut shuffled = original.clone();
    shuffle(Some(&mut rng), &mut shuffled);

    assert_eq!(counts(&original), counts(&shuffled));
}

#[test]
fn test_shuffle_short_slices_unchanged() {
    let mut empty: Vec<i32> = vec![];
    shuffle(None, &mut empty);
    assert!(empty.is_empty());

    let mut single = vec![7];
    shuffle(None, &mut single);
    assert_eq!(single, vec![7]);
}

#[test]
fn test_shuffle_lazy_handle_path() {
    // No handle supplied: a 512-bit generator is built for this call only
    let mut values: Vec<usize> = (0..200).collect();
    shuffle(None, &mut values);

    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..200).collect::<Vec<usize>>());
}

#[test]
fn test_shuffle_reproducible_with_seeded_handle() {
    let mut rng1 = Rng::new_128();
    let mut rng2 = Rng::new_128();
    rng1.reseed(123);
    rng2.reseed(123);

    let mut a: Vec<u8> = (0..=255).collect();
    let mut b: Vec<u8> = (0..=255).collect();
    shuffle(Some(&mut rng1), &mut a);
    shuffle(Some(&mut rng2), &mut b);

    assert_eq!(a, b);
}

#[test]
fn test_shuffle_actually_permutes() {
    let mut rng = Rng::new();
    rng.reseed(12);

    // 100! orderings; the identity surviving a shuffle would mean the
    // swap loop never ran
    let original: Vec<usize> = (0..100).collect();
    let mut shuffled = original.clone();
    shuffle(Some(&mut rng), &mut shuffled);
    assert_ne!(original, shuffled);
}

#[test]
fn test_shuffle_works_on_non_copy_elements() {
    let mut rng = Rng::new();
    rng.reseed(13);

    let mut words: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let before = counts(&words);
    shuffle(Some(&mut rng), &mut words);
    assert_eq!(before, counts(&words));
}

proptest! {
    #[test]
    fn prop_shuffle_preserves_multiset(seed: u64, mut values: Vec<u8>) {
        let mut rng = Rng::new();
        rng.reseed(seed);

        let before = counts(&values);
        shuffle(Some(&mut rng), &mut values);
        prop_assert_eq!(before, counts(&values));
    }
}

use pairsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sorted_pairs<K: Ord + Copy, V: Ord + Copy>(keys: &[K], values: &[V]) -> Vec<(K, V)> {
    let mut pairs: Vec<(K, V)> = keys.iter().copied().zip(values.iter().copied()).collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn test_basic_ascending() {
    let mut keys = vec![5, 3, 3, 1, 4];
    let mut values = vec![50, 30, 31, 10, 40];

    sort(&mut keys, &mut values).unwrap();

    assert_eq!(keys, vec![1, 3, 3, 4, 5]);
    assert_eq!(values[0], 10);
    assert_eq!(values[3], 40);
    assert_eq!(values[4], 50);
    let mut threes = [values[1], values[2]];
    threes.sort_unstable();
    assert_eq!(threes, [30, 31]);
}

#[test]
fn test_empty() {
    let mut keys: Vec<i32> = vec![];
    let mut values: Vec<i32> = vec![];
    sort(&mut keys, &mut values).unwrap();
    sort_desc(&mut keys, &mut values).unwrap();
    assert!(keys.is_empty());
}

#[test]
fn test_singleton() {
    let mut keys = vec![7];
    let mut values = vec![1];
    sort(&mut keys, &mut values).unwrap();
    assert_eq!((keys, values), (vec![7], vec![1]));
}

#[test]
fn test_basic_descending_longs() {
    let mut keys = vec![100i64, 50, 200, 50];
    let mut values = vec![1, 2, 3, 4];

    sort_desc(&mut keys, &mut values).unwrap();

    assert_eq!(keys, vec![200, 100, 50, 50]);
    assert_eq!(&values[..2], &[3, 1]);
    let mut tail = [values[2], values[3]];
    tail.sort_unstable();
    assert_eq!(tail, [2, 4]);
}

#[test]
fn test_random_matches_reference() {
    let mut rng = StdRng::seed_from_u64(20);
    let mut keys: Vec<i32> = (0..20).map(|_| rng.random_range(0..i32::MAX)).collect();
    let mut values: Vec<i32> = (0..20).collect();
    let expected = sorted_pairs(&keys, &values);
    let mut expected_keys = keys.clone();
    expected_keys.sort_unstable();

    sort(&mut keys, &mut values).unwrap();

    assert_eq!(keys, expected_keys);
    assert_eq!(sorted_pairs(&keys, &values), expected);
}

#[test]
fn test_descending_crosses_insertion_cutoff() {
    // Lengths either side of the cutoff take different paths.
    let mut rng = StdRng::seed_from_u64(7);
    for len in 0..40 {
        let mut keys: Vec<i64> = (0..len).map(|_| rng.random_range(0..1_000)).collect();
        let mut values: Vec<i32> = (0..len as i32).collect();
        let expected = sorted_pairs(&keys, &values);

        sort_desc(&mut keys, &mut values).unwrap();

        assert!(keys.windows(2).all(|w| w[0] >= w[1]), "len {len}: {keys:?}");
        assert_eq!(sorted_pairs(&keys, &values), expected);
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut keys: Vec<u32> = (0..10_000).map(|_| rng.random_range(0..100)).collect();
    let mut values: Vec<u32> = (0..10_000).collect();

    sort(&mut keys, &mut values).unwrap();
    let (once_keys, once_values) = (keys.clone(), values.clone());
    sort(&mut keys, &mut values).unwrap();

    // Radix passes are stable, so re-sorting sorted input moves nothing.
    assert_eq!(keys, once_keys);
    assert_eq!(values, once_values);
}

#[test]
fn test_sub_range_isolation() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut keys: Vec<i32> = (0..1_000).map(|_| rng.random_range(0..1 << 30)).collect();
    let mut values: Vec<i32> = (0..1_000).collect();
    let (original_keys, original_values) = (keys.clone(), values.clone());

    sort_range(&mut keys, &mut values, 100, 500).unwrap();

    assert_eq!(&keys[..100], &original_keys[..100]);
    assert_eq!(&keys[600..], &original_keys[600..]);
    assert_eq!(&values[..100], &original_values[..100]);
    assert_eq!(&values[600..], &original_values[600..]);
    assert!(keys[100..600].windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(
        sorted_pairs(&keys[100..600], &values[100..600]),
        sorted_pairs(&original_keys[100..600], &original_values[100..600])
    );
}

#[test]
fn test_workspace_equivalence() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut workspace = Workspace::<i64, i32>::new(0);

    for _ in 0..50 {
        let len = rng.random_range(0..5_000);
        let keys: Vec<i64> = (0..len).map(|_| rng.random_range(0..1 << 31)).collect();
        let values: Vec<i32> = (0..len as i32).collect();

        let (mut a_keys, mut a_values) = (keys.clone(), values.clone());
        sort_desc(&mut a_keys, &mut a_values).unwrap();

        workspace.reserve_for(len);
        let (mut b_keys, mut b_values) = (keys, values);
        sort_desc_with(&mut b_keys, &mut b_values, &mut workspace).unwrap();

        assert_eq!(a_keys, b_keys);
        assert_eq!(a_values, b_values);
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let len = rng.random_range(0..200);
        let mut keys: Vec<u64> = (0..len).map(|_| rng.random_range(0..u32::MAX as u64)).collect();
        let mut values: Vec<u32> = (0..len as u32).collect();
        let expected = sorted_pairs(&keys, &values);

        if rng.random_bool(0.5) {
            sort(&mut keys, &mut values).unwrap();
            assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        } else {
            sort_desc(&mut keys, &mut values).unwrap();
            assert!(keys.windows(2).all(|w| w[0] >= w[1]));
        }
        assert_eq!(sorted_pairs(&keys, &values), expected);
    }
}

#[test]
fn test_edge_cases() {
    // 1. All same
    let mut keys = vec![42; 100];
    let mut values: Vec<i32> = (0..100).collect();
    sort(&mut keys, &mut values).unwrap();
    assert_eq!(values, (0..100).collect::<Vec<_>>());

    // 2. Reversed
    let mut keys: Vec<i32> = (0..100).rev().collect();
    let mut values = keys.clone();
    sort(&mut keys, &mut values).unwrap();
    assert_eq!(keys, (0..100).collect::<Vec<_>>());
    assert_eq!(keys, values);

    // 3. Sorted, descending
    let mut keys: Vec<i64> = (0..100).rev().collect();
    let mut values: Vec<i64> = keys.clone();
    sort_desc(&mut keys, &mut values).unwrap();
    assert_eq!(keys, (0..100).rev().collect::<Vec<_>>());
    assert_eq!(keys, values);

    // 4. Extremes of the supported domain
    let mut keys = vec![i32::MAX, 0, 1 << 24, 255, 256];
    let mut values = vec![0, 1, 2, 3, 4];
    sort(&mut keys, &mut values).unwrap();
    assert_eq!(keys, vec![0, 255, 256, 1 << 24, i32::MAX]);
    assert_eq!(values, vec![1, 3, 4, 2, 0]);
}

#[test]
fn test_low32_boundary_for_long_keys() {
    // Default mode only examines bits 0-31: keys differing above that tie.
    let mut keys = vec![1i64 << 32, 1];
    let mut values = vec![0, 1];
    sort_range_with(
        &mut keys,
        &mut values,
        0,
        2,
        &SortConfig::for_keys::<i64>(Direction::Ascending),
        None,
    )
    .unwrap();
    assert_eq!(keys, vec![1 << 32, 1]);

    let config =
        SortConfig::for_keys::<i64>(Direction::Ascending).with_digit_passes(DigitPasses::Full);
    sort_range_with(&mut keys, &mut values, 0, 2, &config, None).unwrap();
    assert_eq!(keys, vec![1, 1 << 32]);
    assert_eq!(values, vec![1, 0]);
}

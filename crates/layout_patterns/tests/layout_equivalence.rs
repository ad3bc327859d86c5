//! Property-based tests for layout equivalence and merge correctness.
//!
//! Every pattern must produce the same result on AOS and SOA, through the
//! facade and through the raw variants, for arbitrary record contents.

use std::collections::BTreeSet;

use layout_core::generators::generate_sequential;
use layout_core::{ColumnStore, Record, RecordStore, RowStore};
use layout_patterns::{
    compute_collect, compute_discard, compute_into, conditional_transform, filter_copy,
    linear_search, merge_sorted, merge_sorted_elementwise, raw, read_sum, write_increment,
};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = Record> {
    (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(a, b, c)| Record::new(a, b, c))
}

/// Small-valued records so `a < b` and `a == target` both occur often.
fn dense_record_strategy() -> impl Strategy<Value = Record> {
    (-20i32..20, -20i32..20, any::<i32>()).prop_map(|(a, b, c)| Record::new(a, b, c))
}

fn both_layouts(records: &[Record]) -> (RowStore, ColumnStore) {
    (
        RowStore::from_records(records.to_vec()),
        ColumnStore::from_records(records),
    )
}

/// Splits a set of distinct keys into two disjoint sorted stores.
fn split_sorted(keys: &BTreeSet<i32>, mask: &[bool]) -> (Vec<Record>, Vec<Record>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, &key) in keys.iter().enumerate() {
        let record = Record::new(key, i as i32, -(i as i32));
        if mask.get(i).copied().unwrap_or(false) {
            left.push(record);
        } else {
            right.push(record);
        }
    }
    (left, right)
}

#[test]
fn test_sequential_scenario_all_patterns() {
    let (aos, soa) = generate_sequential(5);

    assert_eq!(read_sum(&aos), 45);
    assert_eq!(read_sum(&soa), 45);
    assert_eq!(raw::aos::read_sum(&aos), 45);
    assert_eq!(raw::soa::read_sum(&soa), 45);

    assert_eq!(linear_search(&aos, 2), 2);
    assert_eq!(raw::soa::linear_search(&soa, 2), 2);
    assert_eq!(linear_search(&soa, 5), 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property test: scalar and buffer patterns agree across layouts.
    #[test]
    fn prop_read_and_compute_agree(records in prop::collection::vec(record_strategy(), 0..300)) {
        let (aos, soa) = both_layouts(&records);

        let sum = read_sum(&aos);
        prop_assert_eq!(read_sum(&soa), sum);
        prop_assert_eq!(raw::aos::read_sum(&aos), sum);
        prop_assert_eq!(raw::soa::read_sum(&soa), sum);

        prop_assert_eq!(compute_discard(&aos), compute_discard(&soa));

        let mut expected = vec![0; records.len()];
        compute_into(&aos, &mut expected);
        let mut out = vec![0; records.len()];
        compute_into(&soa, &mut out);
        prop_assert_eq!(&out, &expected);
        raw::aos::compute_into(&aos, &mut out);
        prop_assert_eq!(&out, &expected);
        raw::soa::compute_into(&soa, &mut out);
        prop_assert_eq!(&out, &expected);
        prop_assert_eq!(compute_collect(&soa), expected);

        let mut transformed_aos = vec![0; records.len()];
        let mut transformed_soa = vec![0; records.len()];
        conditional_transform(&aos, &mut transformed_aos);
        conditional_transform(&soa, &mut transformed_soa);
        prop_assert_eq!(transformed_aos, transformed_soa);
    }

    /// Property test: k write passes add (k, 2k, 3k) modulo i32 range.
    #[test]
    fn prop_write_k_times(
        records in prop::collection::vec(record_strategy(), 0..100),
        k in 1usize..6,
    ) {
        let (mut aos, mut soa) = both_layouts(&records);
        let (mut raw_aos, mut raw_soa) = both_layouts(&records);
        for _ in 0..k {
            write_increment(&mut aos);
            write_increment(&mut soa);
            raw::aos::write_increment(&mut raw_aos);
            raw::soa::write_increment(&mut raw_soa);
        }

        let k = k as i32;
        let expected: Vec<Record> = records
            .iter()
            .map(|r| Record::new(
                r.a.wrapping_add(k),
                r.b.wrapping_add(2 * k),
                r.c.wrapping_add(3 * k),
            ))
            .collect();

        prop_assert_eq!(aos.to_records(), expected.clone());
        prop_assert_eq!(soa.to_records(), expected.clone());
        prop_assert_eq!(raw_aos.to_records(), expected.clone());
        prop_assert_eq!(raw_soa.to_records(), expected);
    }

    /// Property test: search returns the first match or the length.
    #[test]
    fn prop_search_first_match(
        records in prop::collection::vec(dense_record_strategy(), 0..200),
        target in -25i32..25,
    ) {
        let (aos, soa) = both_layouts(&records);
        let expected = records
            .iter()
            .position(|r| r.a == target)
            .unwrap_or(records.len());

        prop_assert_eq!(linear_search(&aos, target), expected);
        prop_assert_eq!(linear_search(&soa, target), expected);
        prop_assert_eq!(raw::aos::linear_search(&aos, target), expected);
        prop_assert_eq!(raw::soa::linear_search(&soa, target), expected);
    }

    /// Property test: filter keeps exactly the `a < b` subsequence in order.
    #[test]
    fn prop_filter_subsequence(records in prop::collection::vec(dense_record_strategy(), 0..200)) {
        let (aos, soa) = both_layouts(&records);
        let expected: Vec<Record> = records.iter().copied().filter(|r| r.a < r.b).collect();

        prop_assert_eq!(filter_copy(&aos).to_records(), expected.clone());
        prop_assert_eq!(filter_copy(&soa).to_records(), expected.clone());
        prop_assert_eq!(raw::aos::filter_copy(&aos).to_records(), expected.clone());
        let raw_soa = raw::soa::filter_copy(&soa);
        prop_assert!(raw_soa.check_invariants().is_ok());
        prop_assert_eq!(raw_soa.to_records(), expected);
    }

    /// Property test: merge of disjoint sorted inputs is their sorted union.
    #[test]
    fn prop_merge_sorted_union(
        keys in prop::collection::btree_set(any::<i32>(), 0..200),
        mask in prop::collection::vec(any::<bool>(), 200),
    ) {
        let (left, right) = split_sorted(&keys, &mask);
        let (left_aos, left_soa) = both_layouts(&left);
        let (right_aos, right_soa) = both_layouts(&right);

        let merged = merge_sorted(&left_soa, &right_soa);
        prop_assert_eq!(merged.len(), left.len() + right.len());
        prop_assert!(merged.a().windows(2).all(|w| w[0] < w[1]));

        let expected: Vec<i32> = keys.iter().copied().collect();
        prop_assert_eq!(merged.a(), expected.as_slice());

        let records = merged.to_records();
        prop_assert_eq!(merge_sorted(&left_aos, &right_aos).to_records(), records.clone());
        prop_assert_eq!(merge_sorted_elementwise(&left_soa, &right_soa).to_records(), records.clone());
        prop_assert_eq!(merge_sorted_elementwise(&left_aos, &right_aos).to_records(), records.clone());
        prop_assert_eq!(raw::aos::merge_sorted(&left_aos, &right_aos).to_records(), records.clone());
        prop_assert_eq!(raw::soa::merge_sorted(&left_soa, &right_soa).to_records(), records);
    }

    /// Property test: merging with an empty input returns the other input.
    #[test]
    fn prop_merge_with_empty(keys in prop::collection::btree_set(any::<i32>(), 0..100)) {
        let records: Vec<Record> = keys.iter().map(|&k| Record::new(k, 0, 1)).collect();
        let (aos, soa) = both_layouts(&records);
        let (empty_aos, empty_soa) = both_layouts(&[]);

        prop_assert_eq!(merge_sorted(&aos, &empty_aos), aos.clone());
        prop_assert_eq!(merge_sorted(&empty_soa, &soa), soa.clone());
        prop_assert_eq!(raw::aos::merge_sorted(&empty_aos, &aos), aos);
        prop_assert_eq!(raw::soa::merge_sorted(&soa, &empty_soa), soa);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property test: equal keys across inputs keep input 1 first.
    #[test]
    fn prop_merge_stable_on_ties(
        keys in prop::collection::btree_set(-50i32..50, 0..40),
        shared in prop::collection::vec(any::<bool>(), 40),
    ) {
        // Each input is strictly increasing on its own; some keys occur in both.
        let left: Vec<Record> = keys.iter().map(|&k| Record::new(k, 1, 0)).collect();
        let right: Vec<Record> = keys
            .iter()
            .enumerate()
            .filter(|(i, _)| shared.get(*i).copied().unwrap_or(false))
            .map(|(_, &k)| Record::new(k, 2, 0))
            .collect();
        let (left_aos, left_soa) = both_layouts(&left);
        let (right_aos, right_soa) = both_layouts(&right);

        for merged in [
            merge_sorted(&left_aos, &right_aos).to_records(),
            merge_sorted(&left_soa, &right_soa).to_records(),
            raw::aos::merge_sorted(&left_aos, &right_aos).to_records(),
            raw::soa::merge_sorted(&left_soa, &right_soa).to_records(),
        ] {
            prop_assert_eq!(merged.len(), left.len() + right.len());
            for w in merged.windows(2) {
                prop_assert!(w[0].a <= w[1].a);
                if w[0].a == w[1].a {
                    prop_assert_eq!((w[0].b, w[1].b), (1, 2));
                }
            }
        }
    }
}

//! Property tests for merge ordering, overwrite and deduplication rules.

use std::collections::HashSet;

use proptest::prelude::*;
use record_merge::prelude::*;

fn value() -> impl Strategy<Value = record_merge::Value> {
    prop_oneof![
        any::<i64>().prop_map(record_merge::Value::from),
        "[a-z]{0,6}".prop_map(record_merge::Value::from),
        prop::collection::vec(("[a-z]{1,3}", "[a-z]{0,3}"), 0..3).prop_map(|pairs| {
            record_merge::Value::Map(pairs.into_iter().collect())
        }),
    ]
}

/// A record with an id drawn from `ids` plus a few other fields.
fn record_with_ids(ids: &'static [&'static str]) -> impl Strategy<Value = Record> {
    (
        prop::sample::select(ids),
        prop::collection::vec((prop::sample::select(FIELDS), value()), 0..4),
    )
        .prop_map(|(id, fields)| {
            let mut record = Record::with_id(id);
            for (field, value) in fields {
                record.insert(field, value);
            }
            record
        })
}

fn collection(ids: &'static [&'static str]) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_with_ids(ids), 0..8)
}

/// Drop later duplicates after folding them into the first occurrence.
fn dedup(records: &[Record]) -> Vec<Record> {
    let mut out: Vec<Record> = Vec::new();
    for record in records {
        match out.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => existing.overlay(record),
            None => out.push(record.clone()),
        }
    }
    out
}

fn with_unique_ids(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.id().cloned()))
        .collect()
}

const FIELDS: &[&str] = &["name", "age", "marks", "info"];
const SHARED: &[&str] = &["1", "2", "3", "4"];
const LEFT: &[&str] = &["a1", "a2", "a3", "a4", "a5"];
const RIGHT: &[&str] = &["b1", "b2", "b3", "b4", "b5"];

proptest! {
    #[test]
    fn matches_naive_fold(a in collection(SHARED), b in collection(SHARED)) {
        let expected = dedup(&[a.clone(), b.clone()].concat());
        prop_assert_eq!(merge(&a, &b).unwrap(), expected);
    }

    #[test]
    fn disjoint_ids_concatenate(a in collection(LEFT), b in collection(RIGHT)) {
        let (a, b) = (with_unique_ids(a), with_unique_ids(b));
        let merged = merge(&a, &b).unwrap();

        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert_eq!(merged, [a, b].concat());
    }

    #[test]
    fn empty_side_is_identity(a in collection(LEFT)) {
        let a = with_unique_ids(a);
        prop_assert_eq!(&merge(&a, &[]).unwrap(), &a);
        prop_assert_eq!(&merge(&[], &a).unwrap(), &a);
    }

    #[test]
    fn self_merge_deduplicates(a in collection(SHARED)) {
        let merged = merge(&a, &a).unwrap();
        prop_assert_eq!(merged, dedup(&a));
    }

    #[test]
    fn second_values_win(a in collection(SHARED), b in collection(SHARED)) {
        let merged = merge(&a, &b).unwrap();
        for record in &b {
            let out = merged.iter().find(|r| r.id() == record.id()).unwrap();
            for (field, _) in record {
                let last = b
                    .iter()
                    .filter(|r| r.id() == record.id())
                    .filter_map(|r| r.get(field))
                    .last();
                prop_assert_eq!(out.get(field), last);
            }
        }
    }

    #[test]
    fn output_ids_are_unique_and_come_from_inputs(
        a in collection(SHARED),
        b in collection(SHARED)
    ) {
        let merged = merge(&a, &b).unwrap();
        let input_ids: HashSet<_> = a.iter().chain(&b).map(|r| r.id().cloned()).collect();
        let mut seen = HashSet::new();

        for record in &merged {
            prop_assert!(input_ids.contains(&record.id().cloned()));
            prop_assert!(seen.insert(record.id().cloned()));
        }
        prop_assert_eq!(seen.len(), input_ids.len());
    }

    #[test]
    fn merge_all_is_chained_merge(
        a in collection(SHARED),
        b in collection(SHARED),
        c in collection(SHARED)
    ) {
        let chained = merge(&merge(&a, &b).unwrap(), &c).unwrap();
        prop_assert_eq!(merge_all(&[&a[..], &b[..], &c[..]]).unwrap(), chained);
    }
}

#[test]
fn nested_map_is_overwritten_not_merged() {
    let first = vec![record! { "id" => "3", "extra_info" => [("hello", "world")] }];
    let second = vec![record! { "id" => "3", "extra_info" => [("bye", "moon")] }];

    let merged = merge(&first, &second).unwrap();
    assert_eq!(
        merged,
        [record! { "id" => "3", "extra_info" => [("bye", "moon")] }]
    );
}

#[test]
fn first_collection_ids_come_before_new_ones() {
    let first = vec![record! { "id" => "1", "name" => "John", "age" => 20 }];
    let second = vec![
        record! { "id" => "2", "marks" => 80 },
        record! { "id" => "1", "marks" => 70 },
    ];

    let merged = merge(&first, &second).unwrap();
    assert_eq!(
        merged,
        [
            record! { "id" => "1", "name" => "John", "age" => 20, "marks" => 70 },
            record! { "id" => "2", "marks" => 80 },
        ]
    );
}

#[test]
fn missing_id_error_message() {
    let err = merge(&[record! { "id" => "1" }], &[record! { "marks" => 80 }]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "record 0 of the second collection has no 'id' field"
    );
}

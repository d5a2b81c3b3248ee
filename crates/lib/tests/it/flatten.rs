//! Flatten integration tests

use polyfold::{
    flatten::{Depth, flatten, flatten_with_reduce, fold_leaves},
    structure::Value,
};
use proptest::prelude::*;

use crate::helpers::*;

fn sample() -> Vec<Value> {
    // [1, [2, 3], [4, [5, 6]]]
    vec![
        Value::Int(1),
        ints(&[2, 3]),
        Value::List(vec![Value::Int(4), ints(&[5, 6])]),
    ]
}

#[test]
fn test_one_level() {
    let out = flatten(&sample(), Depth::Levels(1));
    assert_eq!(
        out,
        vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4), ints(&[5, 6])]
    );
}

#[test]
fn test_unbounded() {
    let out = flatten(&sample(), Depth::Unbounded);
    assert_eq!(Value::List(out), ints(&[1, 2, 3, 4, 5, 6]));
}

#[test]
fn test_zero_levels_is_shallow_copy() {
    assert_eq!(flatten(&sample(), Depth::Levels(0)), sample());
}

#[test]
fn test_maps_are_leaves() {
    let input = vec![map_of([("xs", ints(&[1, 2]))]), ints(&[3])];
    let out = flatten(&input, Depth::Unbounded);
    assert_eq!(out, vec![map_of([("xs", ints(&[1, 2]))]), Value::Int(3)]);
}

#[test]
fn test_law_holds_for_every_depth() {
    let input = vec![
        nested_list(4, Value::from("deep")),
        Value::List(vec![]),
        Value::List(vec![ints(&[1]), Value::Null, nested_list(2, Value::Bool(true))]),
    ];

    for levels in 0..6 {
        let depth = Depth::Levels(levels);
        assert_eq!(flatten(&input, depth), flatten_with_reduce(&input, depth));
    }
    assert_eq!(
        flatten(&input, Depth::Unbounded),
        flatten_with_reduce(&input, Depth::Unbounded)
    );
}

#[test]
fn test_very_deep_input() {
    let input = vec![nested_list(200_000, Value::Int(7))];

    assert_eq!(flatten(&input, Depth::Unbounded), vec![Value::Int(7)]);
    assert_eq!(fold_leaves(&input, 0, |count, _| count + 1), 1);

    for value in input {
        dismantle(value);
    }
}

#[test]
fn test_fold_leaves_counts_text() {
    let input = vec![
        Value::from("a"),
        Value::List(vec![Value::from("bb"), ints(&[1])]),
    ];
    let chars = fold_leaves(&input, 0, |acc, leaf| acc + leaf.as_text().map_or(0, str::len));
    assert_eq!(chars, 3);
}

proptest! {
    #![proptest_config(property_config())]

    #[test]
    fn test_flatten_matches_fold_definition(
        seq in prop::collection::vec(arb_value(), 0..6),
        levels in 0usize..6
    ) {
        let depth = Depth::Levels(levels);
        prop_assert_eq!(flatten(&seq, depth), flatten_with_reduce(&seq, depth));
        prop_assert_eq!(
            flatten(&seq, Depth::Unbounded),
            flatten_with_reduce(&seq, Depth::Unbounded)
        );
    }

    #[test]
    fn test_unbounded_flatten_yields_the_leaves(seq in prop::collection::vec(arb_value(), 0..6)) {
        let flat = flatten(&seq, Depth::Unbounded);
        prop_assert!(flat.iter().all(|item| item.as_list().is_none()));

        let leaves = fold_leaves(&seq, Vec::new(), |mut acc, leaf| {
            acc.push(leaf.clone());
            acc
        });
        prop_assert_eq!(flat, leaves);
    }
}

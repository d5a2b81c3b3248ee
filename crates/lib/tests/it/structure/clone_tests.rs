use polyfold::{
    config::{CloneOptions, FunctionPolicy},
    structure::{Value, deep_clone, deep_clone_with, resolve_mut},
};
use proptest::prelude::*;

use crate::helpers::*;

fn record_without_functions() -> Value {
    let mut record = user_record();
    record.as_map_mut().unwrap().shift_remove("greet");
    record
}

#[test]
fn test_clone_equals_input() {
    let original = record_without_functions();
    assert_eq!(deep_clone(&original).unwrap(), original);
}

#[test]
fn test_mutating_clone_leaves_original() {
    let original = record_without_functions();
    let mut copy = deep_clone(&original).unwrap();

    let tags = copy.as_map_mut().unwrap()["tags"].as_list_mut().unwrap();
    tags[1].as_map_mut().unwrap()["label"] = Value::from("looms");
    tags.push(Value::from("poetry"));

    assert_eq!(original.get_path("tags.1.label"), Some(&Value::from("engines")));
    assert_eq!(original.get_path("tags").and_then(Value::as_list).map(Vec::len), Some(2));
}

#[test]
fn test_mutating_original_leaves_clone() {
    let mut original = record_without_functions();
    let copy = deep_clone(&original).unwrap();

    original.as_map_mut().unwrap()["address"]
        .as_map_mut()
        .unwrap()
        .insert("city".to_string(), Value::from("Bath"));

    assert_eq!(copy.get_path("address.city"), Some(&Value::from("London")));
}

#[test]
fn test_clone_is_idempotent() {
    let original = user_record();
    let once = deep_clone(&original).unwrap();
    let twice = deep_clone(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_functions_dropped_by_default() {
    let copy = deep_clone(&user_record()).unwrap();
    assert_eq!(copy.get_path("greet"), None);
    assert_eq!(copy.get_path("name"), Some(&Value::from("Ada")));

    let list = Value::List(vec![Value::Int(1), Value::Function(add_n("f", 1))]);
    assert_eq!(deep_clone(&list).unwrap(), Value::List(vec![Value::Int(1), Value::Null]));

    let root = Value::Function(add_n("f", 1));
    assert_eq!(deep_clone(&root).unwrap(), Value::Undefined);
}

#[test]
fn test_functions_shared_on_request() {
    let original = user_record();
    let options = CloneOptions::new().with_functions(FunctionPolicy::Share);
    let copy = deep_clone_with(&original, &options).unwrap();

    assert_eq!(copy, original);
    let greet = copy.get_path("greet").and_then(Value::as_function).unwrap();
    assert_eq!(greet.call(&[]), 0);
}

#[test]
fn test_primitives_clone_to_themselves() {
    for value in [
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::Int(-3),
        Value::Float(2.5),
        Value::from("text"),
    ] {
        assert_eq!(deep_clone(&value).unwrap(), value);
    }
}

#[test]
fn test_depth_limit() {
    let options = CloneOptions::new().with_max_depth(8);

    let shallow = nested_list(8, Value::Int(1));
    assert_eq!(deep_clone_with(&shallow, &options).unwrap(), shallow);

    let deep = nested_list(9, Value::Int(1));
    let err = deep_clone_with(&deep, &options).unwrap_err();
    assert!(err.is_depth_limit());

    let err: polyfold::Error = err.into();
    assert!(err.is_depth_limit());
}

#[test]
fn test_deep_input_clones_without_limit() {
    let deep = nested_list(5_000, Value::Int(1));
    let copy = deep_clone(&deep).unwrap();

    let mut levels = 0;
    let mut cursor = &copy;
    while let Value::List(items) = cursor {
        levels += 1;
        cursor = &items[0];
    }
    assert_eq!(levels, 5_000);

    dismantle(deep);
    dismantle(copy);
}

/// Replaces the node at one of `value`'s paths, or the whole value when that
/// node is undefined and cannot be reached.
fn overwrite_somewhere(value: &mut Value, pick: prop::sample::Index) {
    let paths = all_paths(value);
    let target = pick.get(&paths).clone();
    match resolve_mut(value, &target) {
        Ok(slot) => *slot = Value::from("mutated"),
        Err(_) => *value = Value::from("mutated"),
    }
}

proptest! {
    #![proptest_config(property_config())]

    #[test]
    fn test_clone_equals_input_and_is_idempotent(original in arb_value()) {
        let once = deep_clone(&original).unwrap();
        prop_assert_eq!(&once, &original);
        prop_assert_eq!(deep_clone(&once).unwrap(), once);
    }

    #[test]
    fn test_mutating_clone_never_reaches_input(
        original in arb_value(),
        pick in any::<prop::sample::Index>()
    ) {
        let snapshot = original.clone();
        let mut copy = deep_clone(&original).unwrap();

        overwrite_somewhere(&mut copy, pick);

        prop_assert_eq!(&original, &snapshot);
        prop_assert_ne!(&copy, &original);
    }

    #[test]
    fn test_mutating_input_never_reaches_clone(
        original in arb_value(),
        pick in any::<prop::sample::Index>()
    ) {
        let mut original = original;
        let copy = deep_clone(&original).unwrap();
        let snapshot = original.clone();

        overwrite_somewhere(&mut original, pick);

        prop_assert_eq!(&copy, &snapshot);
    }
}

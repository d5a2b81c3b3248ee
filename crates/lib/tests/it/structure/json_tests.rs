use polyfold::{
    flatten::{Depth, flatten},
    structure::{Value, deep_clone, json_clone, resolve, to_json},
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_parse_then_resolve() {
    let parsed: serde_json::Value =
        serde_json::from_str(r#"{"user":{"roles":[{"name":"admin"},{"name":"dev"}]}}"#).unwrap();
    let root = Value::from(parsed);

    assert_eq!(resolve(&root, path("user.roles.1.name")), Ok(&Value::from("dev")));
}

#[test]
fn test_deep_clone_agrees_with_json_clone_on_plain_data() {
    let root = Value::from(json!({
        "id": 7,
        "scores": [1.5, 2.5],
        "meta": { "active": true, "note": null },
    }));

    assert_eq!(deep_clone(&root).unwrap(), json_clone(&root));
}

#[test]
fn test_json_clone_drops_functions_like_deep_clone() {
    let root = user_record();
    assert_eq!(json_clone(&root), deep_clone(&root).unwrap());
    assert_eq!(to_json(&root)["greet"], serde_json::Value::Null);
    assert!(to_json(&root).get("greet").is_none());
}

#[test]
fn test_flatten_json_arrays() {
    let nested = json!([1, [2, 3], [4, [5, 6]]]);
    let items = nested.as_array().unwrap();

    assert_eq!(flatten(items, Depth::Levels(1)), json!([1, 2, 3, 4, [5, 6]]).as_array().unwrap().clone());
    assert_eq!(flatten(items, Depth::Unbounded), json!([1, 2, 3, 4, 5, 6]).as_array().unwrap().clone());
}

#[test]
fn test_serialize_value() {
    let root = map_of([("list", ints(&[1, 2])), ("skip", Value::Undefined)]);
    assert_eq!(serde_json::to_string(&root).unwrap(), r#"{"list":[1,2]}"#);
}

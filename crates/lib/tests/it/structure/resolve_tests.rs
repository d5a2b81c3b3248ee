use polyfold::{
    Error,
    structure::{MissReason, PathBuf, PathError, Segment, Value, resolve, resolve_mut, resolve_recursive},
};
use proptest::prelude::*;

use crate::helpers::*;

#[test]
fn test_resolve_nested_map() {
    let root = abc();
    assert_eq!(resolve(&root, path("a.b.c")), Ok(&Value::Int(42)));
    assert_eq!(resolve(&root, path("a.b")), Ok(&map_of([("c", Value::Int(42))])));
}

#[test]
fn test_resolve_miss_reports_segment() {
    let root = abc();
    let miss = resolve(&root, path("a.x.c")).unwrap_err();

    assert_eq!(miss.segment, "x");
    assert_eq!(miss.position, 1);
    assert_eq!(miss.reason, MissReason::Absent);
    assert_eq!(miss.to_string(), "property 'x' at position 1 is not defined");
}

#[test]
fn test_resolve_through_primitive() {
    let root = abc();
    let miss = resolve(&root, path("a.b.c.d")).unwrap_err();

    assert_eq!(miss.segment, "d");
    assert_eq!(miss.reason, MissReason::NotIndexable { found: "int" });
}

#[test]
fn test_empty_path_is_root() {
    let root = user_record();
    assert_eq!(resolve(&root, PathBuf::new()), Ok(&root));
    assert_eq!(resolve(&root, path("")), Ok(&root));
}

#[test]
fn test_list_indices() {
    let root = user_record();
    assert_eq!(resolve(&root, path("tags.0")), Ok(&Value::from("math")));
    assert_eq!(resolve(&root, path("tags.1.label")), Ok(&Value::from("engines")));

    // Out of range and non-canonical indices miss rather than error.
    assert!(resolve(&root, path("tags.2")).is_err());
    assert!(resolve(&root, path("tags.01")).is_err());
    assert!(resolve(&root, path("tags.first")).is_err());
}

#[test]
fn test_null_is_a_value_undefined_is_not() {
    let root = map_of([("present", Value::Null), ("missing", Value::Undefined)]);

    assert_eq!(resolve(&root, path("present")), Ok(&Value::Null));
    let miss = resolve(&root, path("missing")).unwrap_err();
    assert_eq!(miss.reason, MissReason::Absent);
}

#[test]
fn test_iterative_and_recursive_agree() {
    let root = user_record();
    let paths = [
        "",
        "name",
        "address.city",
        "address.zip",
        "address.zip.code",
        "tags.1.label",
        "tags.7",
        "greet",
        "greet.call",
        "nope.deeper",
    ];

    for dotted in paths {
        let p = path(dotted);
        assert_eq!(resolve(&root, &p), resolve_recursive(&root, &p), "path '{dotted}'");
    }
}

#[test]
fn test_resolve_mut_edits_in_place() {
    let mut root = user_record();

    *resolve_mut(&mut root, path("address.city")).unwrap() = Value::from("Paris");
    assert_eq!(root.get_path("address.city"), Some(&Value::from("Paris")));

    let miss = resolve_mut(&mut root, path("address.country")).unwrap_err();
    assert_eq!(miss.segment, "country");
}

#[test]
fn test_malformed_paths() {
    let err = "a..b".parse::<PathBuf>().unwrap_err();
    assert!(err.is_empty_segment());
    assert_eq!(
        err,
        PathError::EmptySegment {
            path: "a..b".to_string(),
            position: 1,
        }
    );

    assert!(Segment::new("").is_err());
    assert!(Segment::new("a.b").is_err());
}

#[test]
fn test_built_paths_match_parsed() {
    let built = PathBuf::new().push(Segment::new("tags").unwrap()).push(1usize);
    assert_eq!(built, path("tags.1"));
    assert_eq!(built.to_string(), "tags.1");
}

#[test]
fn test_miss_propagates_as_crate_error() {
    fn city(root: &Value) -> polyfold::Result<String> {
        let found = resolve(root, "address.city".parse::<PathBuf>()?)?;
        Ok(String::try_from(found)?)
    }

    assert_eq!(city(&user_record()).unwrap(), "London");

    let err: Error = city(&abc()).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "resolve");
}

#[test]
fn test_typed_reads_relative_to_a_base_path() {
    let root = map_of([(
        "account",
        map_of([
            ("owner", Value::from("Ada")),
            ("balance", Value::Float(12.5)),
            ("visits", Value::Int(3)),
            ("active", Value::Bool(true)),
        ]),
    )]);
    let base = path("account");
    let read = |field: &str| resolve(&root, base.clone().join(&path(field)));

    let owner = <&str>::try_from(read("owner").unwrap()).unwrap();
    let balance = f64::try_from(read("balance").unwrap()).unwrap();
    let visits = i64::try_from(read("visits").unwrap()).unwrap();
    let active = bool::try_from(read("active").unwrap()).unwrap();
    assert_eq!((owner, balance, visits, active), ("Ada", 12.5, 3, true));

    // Integers widen to f64; nothing else converts across types.
    assert_eq!(f64::try_from(read("visits").unwrap()).unwrap(), 3.0);
    let err = bool::try_from(read("owner").unwrap()).unwrap_err();
    assert!(err.is_type_error());
    assert!(<&str>::try_from(read("active").unwrap()).is_err());

    let leaf = base.clone().join(&path("owner"));
    assert_eq!(leaf.parent(), Some(base));
    assert_eq!(resolve(&root, leaf.parent().unwrap()).map(Value::is_container), Ok(true));
    assert_eq!(PathBuf::new().parent(), None);
}

proptest! {
    #![proptest_config(property_config())]

    #[test]
    fn test_resolvers_agree_on_generated_paths(
        root in arb_value(),
        pick in any::<prop::sample::Index>(),
        extra in prop::collection::vec(arb_segment(), 0..3)
    ) {
        let paths = all_paths(&root);
        let existing = pick.get(&paths).clone();

        // A path taken from the tree hits unless it ends on an undefined slot.
        match resolve(&root, &existing) {
            Ok(found) => prop_assert!(existing.is_empty() || !found.is_undefined()),
            Err(miss) => prop_assert_eq!(miss.reason, MissReason::Absent),
        }
        prop_assert_eq!(resolve(&root, &existing), resolve_recursive(&root, &existing));

        let mut extended = existing;
        for segment in extra {
            extended = extended.try_push(segment).unwrap();
        }
        prop_assert_eq!(resolve(&root, &extended), resolve_recursive(&root, &extended));
    }
}

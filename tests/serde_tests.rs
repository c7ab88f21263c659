#![cfg(feature = "serde")]

//! Integration tests for serde support in seqkit.
//!
//! `Nested` uses the untagged representation, so plain JSON arrays of mixed
//! depth map onto it without any wrapper objects.

use rstest::rstest;
use seqkit::sequence::{Nested, flatten, flatten_deep};

// =============================================================================
// Nested Deserialization Tests
// =============================================================================

#[rstest]
fn test_nested_from_mixed_depth_json() {
    let nested: Vec<Nested<i32>> = serde_json::from_str("[1, [2, [3]]]").unwrap();

    assert_eq!(
        nested,
        vec![
            Nested::Value(1),
            Nested::List(vec![Nested::Value(2), Nested::List(vec![Nested::Value(3)])]),
        ]
    );
    assert_eq!(flatten_deep(&nested), vec![1, 2, 3]);
}

#[rstest]
fn test_flatten_deep_from_json_scenario() {
    let nested: Vec<Nested<i32>> =
        serde_json::from_str("[[1], 2, [3, [[4]], 5], [[6, 7], 8], [[9]]]").unwrap();

    assert_eq!(flatten_deep(&nested), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[rstest]
fn test_flatten_one_level_from_json() {
    let nested: Vec<Nested<i32>> = serde_json::from_str("[1, [2, 3, [4]]]").unwrap();
    let expected: Vec<Nested<i32>> = serde_json::from_str("[1, 2, 3, [4]]").unwrap();

    assert_eq!(flatten(&nested), expected);
}

#[rstest]
fn test_nested_of_strings() {
    let nested: Vec<Nested<String>> = serde_json::from_str(r#"["a", ["b", ["c"]], []]"#).unwrap();
    assert_eq!(flatten_deep(&nested), vec!["a", "b", "c"]);
}

#[rstest]
fn test_nested_rejects_mismatched_leaf_type() {
    let result: Result<Vec<Nested<i32>>, _> = serde_json::from_str(r#"[1, ["two"]]"#);
    assert!(result.is_err());
}

// =============================================================================
// Nested Serialization Tests
// =============================================================================

#[rstest]
fn test_nested_serializes_as_plain_arrays() {
    let nested = vec![
        Nested::Value(1),
        Nested::List(vec![Nested::Value(2), Nested::List(vec![])]),
    ];

    assert_eq!(serde_json::to_string(&nested).unwrap(), "[1,[2,[]]]");
}

#[rstest]
fn test_nested_json_roundtrip() {
    let nested = Nested::List(vec![
        Nested::Value(1.5),
        Nested::List(vec![Nested::Value(2.5)]),
    ]);
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Nested<f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(nested, restored);
    assert_eq!(restored.depth(), 2);
}

use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Fields};
use arrowpatch::{cast_field_types, cast_scalar_types};

fn int64_to_float64(data_type: &DataType) -> Option<DataType> {
    match data_type {
        DataType::Int64 => Some(DataType::Float64),
        _ => None,
    }
}

// A scalar leaf is offered to the mapper directly.
#[test]
fn leaf_is_mapped() {
    assert_eq!(
        cast_scalar_types(&DataType::Int64, &int64_to_float64),
        Some(DataType::Float64)
    );
}

// A leaf the mapper declines is reported as no change.
#[test]
fn unchanged_leaf_returns_none() {
    assert_eq!(cast_scalar_types(&DataType::Utf8, &int64_to_float64), None);
}

// A struct with no matching leaf is reported as no change.
#[test]
fn struct_without_matching_leaf_returns_none() {
    let fields = Fields::from(vec![
        Field::new("a", DataType::Utf8, true),
        Field::new("b", DataType::Int32, false),
    ]);
    assert_eq!(
        cast_scalar_types(&DataType::Struct(fields), &int64_to_float64),
        None
    );
}

// A matching leaf nested two structs deep is rewritten.
#[test]
fn nested_struct_rewrites_deep_leaf() {
    let inner = Fields::from(vec![Field::new("x", DataType::Int64, true)]);
    let outer = Fields::from(vec![Field::new("s", DataType::Struct(inner), false)]);

    let rewritten = cast_scalar_types(&DataType::Struct(outer), &int64_to_float64).unwrap();
    match rewritten {
        DataType::Struct(fields) => match fields[0].data_type() {
            DataType::Struct(inner) => {
                assert_eq!(inner[0].data_type(), &DataType::Float64);
            }
            other => panic!("expected struct, got {other:?}"),
        },
        other => panic!("expected struct, got {other:?}"),
    }
}

// Children the mapper leaves alone keep their field handles.
#[test]
fn unchanged_children_keep_their_handles() {
    let untouched = Arc::new(Field::new("name", DataType::Utf8, true));
    let fields = Fields::from(vec![
        Arc::new(Field::new("id", DataType::Int64, false)),
        Arc::clone(&untouched),
    ]);

    let rewritten = cast_field_types(&fields, &int64_to_float64).unwrap();
    assert_eq!(rewritten[0].data_type(), &DataType::Float64);
    assert!(Arc::ptr_eq(&rewritten[1], &untouched));
}

// A rewritten child keeps its name, nullability, and metadata.
#[test]
fn rewritten_child_keeps_field_attributes() {
    let metadata = HashMap::from([("unit".to_owned(), "rows".to_owned())]);
    let fields = Fields::from(vec![
        Field::new("id", DataType::Int64, true).with_metadata(metadata.clone()),
    ]);

    let rewritten = cast_field_types(&fields, &int64_to_float64).unwrap();
    assert_eq!(rewritten[0].name(), "id");
    assert!(rewritten[0].is_nullable());
    assert_eq!(rewritten[0].metadata(), &metadata);
    assert_eq!(rewritten[0].data_type(), &DataType::Float64);
}

// An empty field list is reported as no change.
#[test]
fn empty_field_list_returns_none() {
    assert_eq!(cast_field_types(&Fields::empty(), &int64_to_float64), None);
}

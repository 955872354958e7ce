//! Generic scalar-type rewriting over Arrow type trees.

use std::sync::Arc;

use arrow::datatypes::{DataType, FieldRef, Fields};

/// Rewrite the scalar leaves of a (possibly nested) [`DataType`] tree.
///
/// `Struct` nodes are walked recursively; every other variant is treated as
/// a leaf and offered to `mapper`. A mapper returning `None` leaves the leaf
/// untouched.
///
/// Returns `None` when no leaf changed, so callers can keep the original
/// type and whatever allocation backs it instead of rebuilding an identical
/// tree. Unchanged struct children are carried over as the same
/// [`FieldRef`] handles; rewritten children keep their name, nullability,
/// and metadata.
pub fn cast_scalar_types<F>(data_type: &DataType, mapper: &F) -> Option<DataType>
where
    F: Fn(&DataType) -> Option<DataType>,
{
    match data_type {
        DataType::Struct(fields) => cast_field_types(fields, mapper).map(DataType::Struct),
        leaf => mapper(leaf),
    }
}

/// Rewrite the types of a field list the way [`cast_scalar_types`] rewrites
/// the children of a `Struct` node.
///
/// This is the entry point for the flat case: a schema's top-level field
/// list is exactly the payload of the synthetic struct type wrapping it.
/// `None` means no field changed.
pub fn cast_field_types<F>(fields: &Fields, mapper: &F) -> Option<Fields>
where
    F: Fn(&DataType) -> Option<DataType>,
{
    let mut changed = false;
    let rewritten: Vec<FieldRef> = fields
        .iter()
        .map(|field| match cast_scalar_types(field.data_type(), mapper) {
            Some(data_type) => {
                changed = true;
                Arc::new(field.as_ref().clone().with_data_type(data_type))
            }
            None => Arc::clone(field),
        })
        .collect();
    changed.then(|| Fields::from(rewritten))
}

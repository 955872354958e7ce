//! Schema and record batch patching against a cast configuration.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Date64Array, Float64Builder, Int64Array, UInt64Array};
use arrow::datatypes::{DataType, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::config::CastConfig;
use crate::error::PatchError;
use crate::type_cast::cast_field_types;

// ---------------------------------------------------------------------------
// Schema patching
// ---------------------------------------------------------------------------

/// Compute the schema a consumer should see for `schema` under `config`.
///
/// Runs once per result stream. When no cast applies the input handle is
/// returned as-is (same `Arc`, no allocation); otherwise the rewritten field
/// list is combined with the *original* schema metadata, which a cast never
/// alters. The rewrite descends into `Struct` fields, so nested scalar types
/// are renamed in the declared schema even though batch patching only
/// rebuilds top-level columns.
pub fn patch_schema(schema: &SchemaRef, config: &CastConfig) -> SchemaRef {
    // Has no cast?
    if !config.has_any_cast() {
        return Arc::clone(schema);
    }

    let mapper = |data_type: &DataType| match data_type {
        DataType::Timestamp(_, _) if config.cast_timestamp_to_date64.unwrap_or(false) => {
            Some(DataType::Date64)
        }
        DataType::Int64 | DataType::UInt64 if config.cast_bigint_to_double.unwrap_or(false) => {
            Some(DataType::Float64)
        }
        _ => None,
    };

    match cast_field_types(schema.fields(), &mapper) {
        Some(fields) => Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone())),
        None => Arc::clone(schema),
    }
}

// ---------------------------------------------------------------------------
// Record batch patching
// ---------------------------------------------------------------------------

macro_rules! bigint_to_double {
    ($column:expr, $array:ty) => {{
        let array = $column
            .as_any()
            .downcast_ref::<$array>()
            .expect(concat!("bigint column downcasts to ", stringify!($array)));
        let mut builder = Float64Builder::with_capacity(array.len());
        for value in array.iter() {
            builder.append_option(value.map(|v| v as f64));
        }
        Arc::new(builder.finish()) as ArrayRef
    }};
}

/// Patch `batch` so its columns conform to `schema`, the target schema
/// produced by [`patch_schema`] for the stream this batch belongs to.
///
/// When the batch already carries `schema` (same `Arc`) the batch is
/// returned as-is and no column is touched. Otherwise only the columns an
/// enabled cast applies to are rebuilt; every other column is shared with
/// the input by reference.
///
/// # Errors
///
/// [`PatchError::ColumnRebuild`] if a timestamp column's array data cannot
/// be reinterpreted as `Date64`, and [`PatchError::BatchAssembly`] if the
/// patched columns do not line up with `schema`. The latter includes the
/// case where a cast renamed a type *nested* inside a struct column, whose
/// data this layer does not rebuild.
pub fn patch_record_batch(
    batch: &RecordBatch,
    schema: &SchemaRef,
    config: &CastConfig,
) -> Result<RecordBatch, PatchError> {
    // Schema the same?
    if Arc::ptr_eq(batch.schema_ref(), schema) {
        return Ok(batch.clone());
    }

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(batch.num_columns());
    for (field, column) in batch.schema_ref().fields().iter().zip(batch.columns()) {
        columns.push(patch_column(field.name(), column, config)?);
    }

    RecordBatch::try_new(Arc::clone(schema), columns)
        .map_err(|source| PatchError::BatchAssembly { source })
}

fn patch_column(
    name: &str,
    column: &ArrayRef,
    config: &CastConfig,
) -> Result<ArrayRef, PatchError> {
    match column.data_type() {
        DataType::Int64 if config.cast_bigint_to_double.unwrap_or(false) => {
            Ok(bigint_to_double!(column, Int64Array))
        }
        DataType::UInt64 if config.cast_bigint_to_double.unwrap_or(false) => {
            Ok(bigint_to_double!(column, UInt64Array))
        }
        DataType::Timestamp(_, _) if config.cast_timestamp_to_date64.unwrap_or(false) => {
            timestamp_to_date64(name, column)
        }
        _ => Ok(Arc::clone(column)),
    }
}

/// Reinterpret a timestamp column as `Date64` without copying.
///
/// Both types are signed 64-bit values counting from the epoch, so the value
/// buffer, null bitmap, null count, and offset carry over as-is. Time units
/// are reinterpreted, not converted.
fn timestamp_to_date64(name: &str, column: &ArrayRef) -> Result<ArrayRef, PatchError> {
    let data = column
        .to_data()
        .into_builder()
        .data_type(DataType::Date64)
        .build()
        .map_err(|source| PatchError::ColumnRebuild {
            field: name.to_owned(),
            target: DataType::Date64,
            source,
        })?;
    Ok(Arc::new(Date64Array::from(data)))
}

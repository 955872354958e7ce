//! Error types for the patching layer.

use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use thiserror::Error;

/// Errors produced while patching record batches to a target schema.
///
/// Every variant wraps an [`ArrowError`] from the underlying columnar
/// machinery; this layer adds context but no failure semantics of its own.
#[derive(Debug, Error)]
pub enum PatchError {
    /// An error the upstream batch source produced before this layer ran.
    #[error(transparent)]
    Upstream(#[from] ArrowError),

    /// A column's array data could not be rebuilt under its target type.
    #[error("failed to rebuild column '{field}' as {target}: {source}")]
    ColumnRebuild {
        field: String,
        target: DataType,
        #[source]
        source: ArrowError,
    },

    /// The patched column list did not assemble against the target schema
    /// (arity, row count, or type mismatch).
    #[error("failed to assemble patched record batch: {source}")]
    BatchAssembly {
        #[source]
        source: ArrowError,
    },
}

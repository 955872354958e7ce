//! Consumer-side scalar type patching for Arrow query results.
//!
//! Some hosts cannot faithfully represent every scalar type a query engine
//! produces; a JavaScript embedder, for example, has no native 64-bit
//! integer. This crate patches a result stream *after* the engine has
//! materialized it: the declared schema and the affected columns are
//! rewritten to a representation the host can consume, and everything else
//! is shared with the original, untouched.
//!
//! Two cast rules exist, switched on independently via [`CastConfig`]:
//! 1. `Int64`/`UInt64` columns presented as `Float64`.
//! 2. `Timestamp` columns presented as `Date64`, a bit-level
//!    reinterpretation of the same 64-bit values; time units are not
//!    converted.
//!
//! The entry points mirror how a result stream is consumed:
//! - [`patch_schema`] once per stream, to compute the target schema;
//! - [`patch_record_batch`] once per batch, against that target schema;
//! - [`PatchedBatches`] to wrap both around any batch iterator.
//!
//! When no cast applies, every function returns its input handles unchanged;
//! no buffer is copied on the fast path.
//!
//! # Typical Flow
//! ```rust
//! use std::sync::Arc;
//!
//! use arrow::array::{ArrayRef, Int64Array};
//! use arrow::datatypes::{DataType, Field, Schema};
//! use arrow::record_batch::RecordBatch;
//! use arrowpatch::{patch_record_batch, patch_schema, CastConfig};
//!
//! let config = CastConfig {
//!     cast_bigint_to_double: Some(true),
//!     ..CastConfig::default()
//! };
//!
//! let schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Int64, true)]));
//! let batch = RecordBatch::try_new(
//!     Arc::clone(&schema),
//!     vec![Arc::new(Int64Array::from(vec![Some(1), None, Some(3)])) as ArrayRef],
//! )
//! .unwrap();
//!
//! let target = patch_schema(&schema, &config);
//! assert_eq!(target.field(0).data_type(), &DataType::Float64);
//!
//! let patched = patch_record_batch(&batch, &target, &config).unwrap();
//! assert_eq!(patched.num_rows(), 3);
//! ```

pub mod config;
pub mod error;
pub mod patch;
pub mod reader;
pub mod type_cast;

/// Re-export of [`config::CastConfig`].
pub use config::CastConfig;
/// Re-export of [`error::PatchError`].
pub use error::PatchError;
/// Re-exports from [`patch`].
pub use patch::{patch_record_batch, patch_schema};
/// Re-export of [`reader::PatchedBatches`].
pub use reader::PatchedBatches;
/// Re-exports from [`type_cast`].
pub use type_cast::{cast_field_types, cast_scalar_types};

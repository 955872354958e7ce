//! Stream-level patching for record batch sources.

use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::config::CastConfig;
use crate::error::PatchError;
use crate::patch::{patch_record_batch, patch_schema};

/// Iterator adapter that applies a [`CastConfig`] to every batch of a
/// result stream.
///
/// The target schema is computed once, up front, from the source schema;
/// each incoming batch is then patched against it. When the configuration
/// enables no cast the adapter degenerates to pass-through: the stored
/// schema is the source schema handle itself, so every batch takes the
/// identity fast path and nothing is copied.
pub struct PatchedBatches<I> {
    source: I,
    schema: SchemaRef,
    config: CastConfig,
}

impl<I> PatchedBatches<I>
where
    I: Iterator<Item = Result<RecordBatch, ArrowError>>,
{
    /// Wrap `source`, whose batches carry `schema`, patching under `config`.
    pub fn new(source: I, schema: &SchemaRef, config: CastConfig) -> Self {
        Self {
            source,
            schema: patch_schema(schema, &config),
            config,
        }
    }

    /// The schema every emitted batch conforms to.
    ///
    /// Available before the first batch, so callers can announce the stream
    /// shape to their consumer up front.
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }
}

impl<I> Iterator for PatchedBatches<I>
where
    I: Iterator<Item = Result<RecordBatch, ArrowError>>,
{
    type Item = Result<RecordBatch, PatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch = match self.source.next()? {
            Ok(batch) => batch,
            Err(e) => return Some(Err(PatchError::Upstream(e))),
        };
        Some(patch_record_batch(&batch, &self.schema, &self.config))
    }
}

//! Cast configuration declared by the consumer of a result stream.

/// Scalar cast rules a consumer requests for a query result stream.
///
/// Each flag is tri-state: `None` means the rule was never configured and
/// behaves exactly like `Some(false)`. The distinction matters to callers
/// that merge configuration from several sources before patching starts;
/// the patchers themselves only ask whether a flag resolves to `true`.
///
/// With the `serde` feature enabled the struct deserializes with
/// `#[serde(default)]`, so keys absent from the payload come out as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CastConfig {
    /// Present `Int64` and `UInt64` columns as `Float64`.
    pub cast_bigint_to_double: Option<bool>,
    /// Present `Timestamp` columns as `Date64`.
    pub cast_timestamp_to_date64: Option<bool>,
}

impl CastConfig {
    /// True if at least one cast rule resolves to enabled.
    ///
    /// [`patch_schema`](crate::patch_schema) uses this as its short-circuit:
    /// when false, patching returns the input handles without allocating.
    pub fn has_any_cast(&self) -> bool {
        self.cast_bigint_to_double.unwrap_or(false)
            || self.cast_timestamp_to_date64.unwrap_or(false)
    }
}

//! Adapters for emitting masked values through `slog`.
//!
//! This module connects the walker with `slog` by providing a
//! [`slog::Value`] implementation that serializes masked output as
//! structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the masked tree,
//!   not from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented
//!   as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or define which patterns count as sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{options::MaskOptions, walk::hide_pii_serialize};

/// A masked JSON tree ready for structured `slog` output.
#[derive(Clone, Debug)]
pub struct MaskedJson(JsonValue);

impl MaskedJson {
    /// Wraps an already-masked JSON value.
    #[must_use]
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// The masked JSON tree.
    #[must_use]
    pub fn value(&self) -> &JsonValue {
        &self.0
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.0.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for ergonomic slog logging of masked values as JSON.
///
/// Calling `slog_masked_json` serializes the value, masks the resulting
/// tree with default [`MaskOptions`], and stores the result as a
/// `serde_json::Value`. The original (unmasked) value is never serialized
/// into the log record.
///
/// # Example
///
/// ```ignore
/// use hide_pii::slog::SlogMaskedExt;
///
/// info!(logger, "request"; "payload" => payload.slog_masked_json());
/// ```
pub trait SlogMaskedExt: Serialize {
    /// Masks `self` and returns a `slog::Value` that serializes as
    /// structured JSON.
    ///
    /// If serializing `self` fails, the returned value stores a JSON string
    /// describing the failure instead.
    fn slog_masked_json(&self) -> MaskedJson {
        let masked = hide_pii_serialize(self, &MaskOptions::default()).unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize value for masking: {err}"))
        });
        MaskedJson::new(masked)
    }
}

impl<T> SlogMaskedExt for T where T: Serialize {}

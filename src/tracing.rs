//! Adapters for emitting masked values through `tracing`.
//!
//! [`TracingMaskedExt`] wraps any `Serialize` value as a display string
//! containing its masked JSON rendering. It works with any tracing
//! subscriber; the output is a flat string, not structured data.
//!
//! # Example
//!
//! ```ignore
//! use hide_pii::tracing::TracingMaskedExt;
//!
//! tracing::info!(payload = %payload.tracing_masked());
//! ```

use serde::Serialize;
use tracing::field::{DisplayValue, display};

use crate::{options::MaskOptions, walk::hide_pii_serialize};

/// Extension trait for logging masked values as display strings.
///
/// Serialization failures are represented as placeholder strings rather
/// than propagated as errors, so logging never fails.
pub trait TracingMaskedExt {
    /// Masks `self` and wraps the JSON rendering for `tracing` logging.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: Serialize,
{
    fn tracing_masked(&self) -> DisplayValue<String> {
        let text = match hide_pii_serialize(self, &MaskOptions::default()) {
            Ok(masked) => masked.to_string(),
            Err(err) => format!("Failed to serialize value for masking: {err}"),
        };
        display(text)
    }
}

//! Recursive PII masking for JSON-shaped data.
//!
//! Given an arbitrary value (primitive, object, or array, arbitrarily
//! nested), [`hide_pii`] produces a structurally identical copy in which
//! personally-identifiable or secret-looking content has been replaced or
//! obfuscated. It is intended for sanitizing log payloads, error reports,
//! or telemetry before they leave a process boundary.
//!
//! The crate separates:
//! - **Pattern catalog** ([`PatternKind`]): fixed detectors for emails,
//!   credit card numbers, secret/token assignments, database connection
//!   strings, and IPv4 addresses.
//! - **String masker** ([`mask_str`]): applies the detectors in a fixed
//!   order with partial-reveal rules tuned per pattern.
//! - **Structural walker** ([`hide_pii`]): recursively copies the value
//!   tree, redacting wholesale under sensitive key names and masking
//!   string leaves in place.
//!
//! What this crate does not do:
//! - semantic PII classification or locale-aware formats
//! - Luhn validation of card numbers
//! - guarantee zero false negatives or positives — it is a best-effort
//!   heuristic redactor
//!
//! # Example
//!
//! ```
//! use hide_pii::{MaskOptions, hide_pii};
//! use serde_json::json;
//!
//! let report = json!({
//!     "user": {"email": "alex.smith@gmail.com", "api_key": "123-456"},
//!     "servers": ["10.0.0.1"],
//! });
//! let masked = hide_pii(&report, &MaskOptions::default());
//! assert_eq!(masked, json!({
//!     "user": {"email": "al*****@gmail.com", "api_key": "[REDACTED]"},
//!     "servers": ["********"],
//! }));
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod mask;
mod options;
mod pattern;
mod walk;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use mask::mask_str;
pub use options::{MASK_CHAR, MaskOptions, REDACTED_PLACEHOLDER};
pub use pattern::PatternKind;
pub use walk::{hide_pii, hide_pii_default, hide_pii_serialize};
#[cfg(feature = "slog")]
pub use slog::{MaskedJson, SlogMaskedExt};
#[cfg(feature = "tracing")]
pub use tracing::TracingMaskedExt;

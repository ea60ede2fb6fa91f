//! Recursive structural traversal over JSON-shaped data.
//!
//! [`hide_pii`] is the crate entry point. It walks an arbitrarily nested
//! [`serde_json::Value`] and rebuilds it from scratch, deciding per entry
//! whether to redact wholesale (by key name) or recurse and mask in place.
//!
//! Key-based redaction is checked before recursion and short-circuits it: a
//! field literally named `password` must never leak its internal structure,
//! so even a nested object under a sensitive key collapses to the
//! placeholder. Array indices are never sensitive keys; arrays are always
//! walked element by element.
//!
//! The input is an owned JSON tree, so circular structures are
//! unrepresentable and the walk needs no cycle guard. Depth is bounded only
//! by the input's actual nesting.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{mask::mask_str, options::MaskOptions};

/// Key-name fragments that mark an object entry as sensitive. Matching is
/// case-insensitive and unanchored: `user_password` and `AccessToken` both
/// qualify.
const SENSITIVE_KEY_MARKERS: [&str; 5] = ["password", "token", "secret", "key", "pwd"];

fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SENSITIVE_KEY_MARKERS.iter().any(|marker| key.contains(marker))
}

/// Produces a masked copy of `data`.
///
/// Containers keep their variant and entry order; string leaves pass through
/// [`mask_str`]; entries under sensitive keys become the configured
/// placeholder. Non-container input (including a top-level `Null`, number,
/// or boolean) is coerced to text and masked, so it comes back as a JSON
/// string — a deliberate API contract, not a bug. `Null` coerces to the
/// empty string.
///
/// The input is never mutated and the output never aliases its containers.
///
/// ```
/// use hide_pii::{MaskOptions, hide_pii};
/// use serde_json::json;
///
/// let payload = json!({
///     "username": "dev_user",
///     "password": "super-secret",
///     "email": "dev@test.local",
/// });
/// let masked = hide_pii(&payload, &MaskOptions::default());
/// assert_eq!(masked, json!({
///     "username": "dev_user",
///     "password": "[REDACTED]",
///     "email": "de*****@test.local",
/// }));
/// ```
#[must_use]
pub fn hide_pii(data: &Value, options: &MaskOptions) -> Value {
    match data {
        Value::Null => Value::String(mask_str("", options.mask_char())),
        Value::Bool(value) => Value::String(mask_str(&value.to_string(), options.mask_char())),
        Value::Number(value) => Value::String(mask_str(&value.to_string(), options.mask_char())),
        Value::String(value) => Value::String(mask_str(value, options.mask_char())),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| hide_pii(item, options)).collect())
        }
        Value::Object(entries) => {
            let mut masked = Map::with_capacity(entries.len());
            for (key, value) in entries {
                let entry = if is_sensitive_key(key) {
                    Value::String(options.placeholder().to_owned())
                } else {
                    hide_pii(value, options)
                };
                masked.insert(key.clone(), entry);
            }
            Value::Object(masked)
        }
    }
}

/// [`hide_pii`] with default [`MaskOptions`].
#[must_use]
pub fn hide_pii_default(data: &Value) -> Value {
    hide_pii(data, &MaskOptions::default())
}

/// Serializes `data` to a JSON tree and masks it.
///
/// This is the bridge for arbitrary `Serialize` types; it is the only
/// fallible operation in the crate, and the error can only come from
/// serialization itself — masking is total.
pub fn hide_pii_serialize<T>(data: &T, options: &MaskOptions) -> serde_json::Result<Value>
where
    T: Serialize + ?Sized,
{
    Ok(hide_pii(&serde_json::to_value(data)?, options))
}

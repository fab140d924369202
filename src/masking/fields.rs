//! Bulk masking of named string fields in JSON values.
//!
//! These transforms consume the value and return it; anything not named in
//! `fields`, not a string, or not the expected shape passes through
//! untouched. Nested values that are not replaced are moved, never cloned.

use serde_json::Value;

use super::mask::{mask_encrypted_with, DEFAULT_REPLACEMENT};

/// Masks the named string fields of a JSON object with the default
/// replacement.
///
/// Non-object values are returned unchanged.
#[must_use]
pub fn mask_fields_in_object(value: Value, fields: &[&str]) -> Value {
    mask_fields_in_object_with(value, fields, DEFAULT_REPLACEMENT)
}

/// Masks the named string fields of a JSON object.
///
/// For each name in `fields` that is present and holds a string, the string
/// is masked with [`mask_encrypted_with`]. Missing fields, unlisted fields,
/// and fields holding non-string values are left as they are. Non-object
/// values are returned unchanged.
#[must_use]
pub fn mask_fields_in_object_with(mut value: Value, fields: &[&str], replacement: &str) -> Value {
    if let Value::Object(map) = &mut value {
        for &field in fields {
            if let Some(Value::String(text)) = map.get_mut(field) {
                *text = mask_encrypted_with(text, replacement);
            }
        }
    }
    value
}

/// Masks the named string fields of every object in a JSON array with the
/// default replacement.
///
/// Non-array values are returned unchanged.
#[must_use]
pub fn mask_fields_in_array(value: Value, fields: &[&str]) -> Value {
    mask_fields_in_array_with(value, fields, DEFAULT_REPLACEMENT)
}

/// Masks the named string fields of every object in a JSON array.
///
/// Each element goes through [`mask_fields_in_object_with`], so non-object
/// elements pass through unchanged. Order and length are preserved.
#[must_use]
pub fn mask_fields_in_array_with(value: Value, fields: &[&str], replacement: &str) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| mask_fields_in_object_with(item, fields, replacement))
                .collect(),
        ),
        other => other,
    }
}

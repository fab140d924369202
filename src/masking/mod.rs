//! Masking, analysis, and field-level transforms.
//!
//! This module ties the layers together:
//!
//! - **`mask`**: string substitution and export formatting
//! - **`analyze`**: positional analysis, reports, and validation
//! - **`fields`**: bulk masking of named fields in JSON objects/arrays
//!
//! The range predicates live in `crate::classify`.

#[cfg(feature = "analysis")]
mod analyze;
#[cfg(feature = "fields")]
mod fields;
mod mask;

#[cfg(feature = "analysis")]
pub use analyze::{
    analyze_text, encrypted_positions, validate, EncryptedPosition, EncryptionRate, TextAnalysis,
    ValidateError,
};
#[cfg(feature = "fields")]
pub use fields::{
    mask_fields_in_array, mask_fields_in_array_with, mask_fields_in_object,
    mask_fields_in_object_with,
};
pub use mask::{
    mask_encrypted, mask_encrypted_with, to_export_format, ExportConfig, DEFAULT_REPLACEMENT,
};

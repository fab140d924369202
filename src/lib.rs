//! Detection and masking of reserved-range Unicode characters.
//!
//! Some pipelines embed ciphertext inside otherwise plain strings by mapping
//! encrypted characters into reserved Unicode code-point ranges: the BMP
//! Private Use Area and a narrow band of rarely used precomposed Hangul
//! syllables. This crate treats membership in those ranges as the marker for
//! "this character is encrypted content" and builds everything on that single
//! predicate:
//!
//! - **Classification**: is this character, or any character of this string,
//!   inside a reserved range ([`is_encrypted_char`], [`is_encrypted`]).
//! - **Masking**: replace marked characters for display or export
//!   ([`mask_encrypted`], [`to_export_format`]).
//! - **Analysis**: counts, positions, rates, and validation of partially
//!   encrypted text ([`analyze_text`], [`validate`]).
//! - **Field masking**: bulk masking of named string fields in JSON objects
//!   and arrays ([`mask_fields_in_object`], [`mask_fields_in_array`]).
//!
//! What this crate does not do:
//! - perform encryption or decryption (range membership is a marker, not a
//!   cryptographic property)
//! - perform I/O or logging (the `slog` feature provides adapters; the host
//!   owns the logger)
//! - mutate its inputs (string operations return new `String`s; JSON
//!   operations consume and return the value)
//!
//! The two code-point ranges are process-wide constants; there is no runtime
//! configuration and no shared mutable state, so every operation is safe to
//! call concurrently without coordination.

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
    clippy::cargo_common_metadata,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod classify;
mod masking;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use classify::{
    count_encrypted_chars, is_encrypted, is_encrypted_char, starts_encrypted, CodePointRange,
    PRIVATE_USE_AREA, RARE_SYLLABLES,
};
pub use masking::{
    mask_encrypted, mask_encrypted_with, to_export_format, ExportConfig, DEFAULT_REPLACEMENT,
};

#[cfg(feature = "analysis")]
pub use masking::{
    analyze_text, encrypted_positions, validate, EncryptedPosition, EncryptionRate, TextAnalysis,
    ValidateError,
};

#[cfg(feature = "fields")]
pub use masking::{
    mask_fields_in_array, mask_fields_in_array_with, mask_fields_in_object,
    mask_fields_in_object_with,
};

//! Adapters for emitting masked text and analysis reports through `slog`.
//!
//! This module connects the masking operations with `slog` by providing
//! `slog::Value` implementations so hosts can log strings that may carry
//! encrypted characters without leaking them.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from [`mask_encrypted`],
//!   never the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented
//!   as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which fields a host should log.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::{mask_encrypted, TextAnalysis};

/// A `slog::Value` that logs a string with its encrypted characters masked.
///
/// ## Example
/// ```ignore
/// use unimask::slog::Masked;
///
/// info!(logger, "lookup"; "name" => Masked(&record.name));
/// ```
#[derive(Clone, Copy)]
pub struct Masked<'a>(pub &'a str);

impl SlogValue for Masked<'_> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &mask_encrypted(self.0))
    }
}

/// A `slog::Value` that emits an owned analysis report as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support.
///
/// This type does not return serialization errors to `slog`; if converting
/// the report into a JSON value fails, it falls back to a JSON string value.
pub struct AnalysisJson {
    value: JsonValue,
}

impl AnalysisJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for AnalysisJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts an analysis report into a `slog::Value` that logs as JSON.
///
/// ## Example
/// ```ignore
/// use unimask::slog::IntoAnalysisJson;
///
/// let analysis = unimask::analyze_text(&payload);
/// info!(logger, "scan"; "analysis" => analysis.into_analysis_json());
/// ```
pub trait IntoAnalysisJson {
    /// Returns a `slog::Value` that serializes the report as structured JSON.
    ///
    /// If converting the report into `serde_json::Value` fails, the returned
    /// value stores a JSON string with the message
    /// `"Failed to serialize analysis"`.
    #[must_use]
    fn into_analysis_json(self) -> AnalysisJson;
}

impl IntoAnalysisJson for TextAnalysis {
    fn into_analysis_json(self) -> AnalysisJson {
        let json_value = serde_json::to_value(self)
            .unwrap_or_else(|_| JsonValue::String("Failed to serialize analysis".to_string()));
        AnalysisJson::new(json_value)
    }
}

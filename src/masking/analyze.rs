//! Positional analysis, reports, and validation.
//!
//! Analysis is read-only: every function takes a borrowed string and returns
//! a newly built snapshot. Reports serialize to JSON when the `slog` feature
//! is enabled.

use std::fmt;

use thiserror::Error;

use crate::classify::{count_encrypted_chars, is_encrypted_char};

/// A single encrypted character found during a scan.
///
/// Records are ordered by ascending index and are not deduplicated: a
/// character that appears twice yields two records.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
pub struct EncryptedPosition {
    /// Zero-based character index within the scanned string.
    pub index: usize,
    /// The encrypted character itself.
    pub ch: char,
    /// The code point as uppercase hex with a `0x` prefix, e.g. `"0xE000"`.
    pub code_point: String,
}

/// Share of encrypted characters in a string.
///
/// Upstream consumers receive either a bare number or a formatted string for
/// this field, depending on how the report was produced:
///
/// - [`EncryptionRate::Number`] carries the bare `0` reported for empty
///   input.
/// - [`EncryptionRate::Percent`] carries the two-decimal percentage with a
///   trailing `%` (or the literal `"0%"`) reported for everything else.
///
/// The two shapes are kept distinct on purpose; serialization is untagged so
/// the JSON output preserves the number-vs-string split. Callers that want a
/// uniform view should match on the variant rather than rely on one shape.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize), serde(untagged))]
pub enum EncryptionRate {
    /// Bare numeric rate, only ever `0`, reported for empty input.
    Number(u32),
    /// Formatted percentage such as `"42.86%"`, or `"0%"` for a zero total.
    Percent(String),
}

impl EncryptionRate {
    fn zero() -> Self {
        Self::Number(0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_counts(encrypted: usize, total: usize) -> Self {
        if total > 0 {
            let rate = encrypted as f64 / total as f64 * 100.0;
            Self::Percent(format!("{rate:.2}%"))
        } else {
            Self::Percent("0%".to_string())
        }
    }

    /// Returns the formatted percentage, or `None` for the bare-number shape.
    #[must_use]
    pub fn as_percent(&self) -> Option<&str> {
        match self {
            Self::Percent(percent) => Some(percent),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for EncryptionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Percent(percent) => f.write_str(percent),
        }
    }
}

/// Snapshot of a string's encryption makeup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
pub struct TextAnalysis {
    /// Whether at least one encrypted character was found.
    pub is_encrypted: bool,
    /// Total number of characters scanned.
    pub total_chars: usize,
    /// Number of characters inside a reserved range.
    pub encrypted_chars: usize,
    /// Number of characters outside both ranges.
    pub plain_chars: usize,
    /// Share of encrypted characters; see [`EncryptionRate`].
    pub encryption_rate: EncryptionRate,
    /// One record per encrypted character, in index order.
    pub positions: Vec<EncryptedPosition>,
}

impl TextAnalysis {
    fn empty() -> Self {
        Self {
            is_encrypted: false,
            total_chars: 0,
            encrypted_chars: 0,
            plain_chars: 0,
            encryption_rate: EncryptionRate::zero(),
            positions: Vec::new(),
        }
    }
}

/// Reasons a string fails [`validate`].
///
/// The three reasons are mutually exclusive; exactly one applies to any
/// rejected input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    /// The input was empty.
    #[error("text is empty or malformed")]
    EmptyOrMalformed,
    /// No character fell inside a reserved range.
    #[error("text contains no encrypted characters")]
    NoEncryptedContent,
    /// Every character fell inside a reserved range.
    #[error("text is entirely encrypted; likely not a valid partially-encrypted text")]
    FullyEncrypted,
}

/// Locates every encrypted character in `text`.
///
/// Returns an empty vector for empty input. Indices count characters, not
/// bytes.
#[must_use]
pub fn encrypted_positions(text: &str) -> Vec<EncryptedPosition> {
    text.chars()
        .enumerate()
        .filter(|(_, ch)| is_encrypted_char(*ch))
        .map(|(index, ch)| EncryptedPosition {
            index,
            ch,
            code_point: format!("0x{:X}", ch as u32),
        })
        .collect()
}

/// Builds a full [`TextAnalysis`] for `text`.
///
/// Empty input yields the all-zero report with the bare-number rate shape
/// (see [`EncryptionRate`]) and no positions.
#[must_use]
pub fn analyze_text(text: &str) -> TextAnalysis {
    if text.is_empty() {
        return TextAnalysis::empty();
    }

    let encrypted_chars = count_encrypted_chars(text);
    let total_chars = text.chars().count();
    let plain_chars = total_chars - encrypted_chars;

    TextAnalysis {
        is_encrypted: encrypted_chars > 0,
        total_chars,
        encrypted_chars,
        plain_chars,
        encryption_rate: EncryptionRate::from_counts(encrypted_chars, total_chars),
        positions: encrypted_positions(text),
    }
}

/// Checks that `text` looks like valid partially encrypted text.
///
/// Valid text contains at least one encrypted character and at least one
/// plain character. On success the full analysis is returned so callers do
/// not pay for a second scan.
pub fn validate(text: &str) -> Result<TextAnalysis, ValidateError> {
    if text.is_empty() {
        return Err(ValidateError::EmptyOrMalformed);
    }

    let analysis = analyze_text(text);

    if !analysis.is_encrypted {
        return Err(ValidateError::NoEncryptedContent);
    }

    // At least some plain text must remain alongside the encrypted runs.
    if analysis.plain_chars == 0 {
        return Err(ValidateError::FullyEncrypted);
    }

    Ok(analysis)
}

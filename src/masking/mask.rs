//! String substitution for encrypted characters.
//!
//! Masking is a pure string transformation. It does not analyze, validate, or
//! make decisions about what counts as encrypted beyond the range predicate.

use std::borrow::Cow;

use crate::classify::is_encrypted_char;

/// Replacement used when the caller does not supply one.
pub const DEFAULT_REPLACEMENT: &str = "*";

/// Number of times the replacement is emitted for a collapsed run.
const RUN_MARKER_REPEAT: usize = 2;

/// Replaces every encrypted character with [`DEFAULT_REPLACEMENT`].
///
/// Plain characters pass through unchanged; empty input yields an empty
/// string.
#[must_use]
pub fn mask_encrypted(text: &str) -> String {
    mask_encrypted_with(text, DEFAULT_REPLACEMENT)
}

/// Replaces every encrypted character with `replacement`.
///
/// The replacement may be any string, including one longer than a single
/// character; its length is not enforced, so the output can be longer than
/// the input even though every plain character is preserved in place.
#[must_use]
pub fn mask_encrypted_with(text: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_encrypted_char(ch) {
            result.push_str(replacement);
        } else {
            result.push(ch);
        }
    }
    result
}

/// Configuration for [`to_export_format`].
///
/// Defaults to replacing each encrypted character with `"*"` while keeping
/// the character count unchanged.
///
/// ```rust
/// use unimask::{to_export_format, ExportConfig};
///
/// let config = ExportConfig::new()
///     .with_replacement("#")
///     .with_preserve_length(false);
/// assert_eq!(to_export_format("ab\u{E000}\u{E001}cd", &config), "ab##cd");
/// ```
// Use `Cow` so callers can provide borrowed or owned replacements.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// String substituted for encrypted characters.
    replacement: Cow<'static, str>,
    /// Whether each encrypted character maps to one replacement, or runs
    /// collapse to a fixed marker.
    preserve_length: bool,
}

impl ExportConfig {
    /// Constructs the default configuration: `"*"`, length preserved.
    #[must_use]
    pub fn new() -> Self {
        Self {
            replacement: Cow::Borrowed(DEFAULT_REPLACEMENT),
            preserve_length: true,
        }
    }

    /// Uses a specific replacement string.
    #[must_use]
    pub fn with_replacement<P>(mut self, replacement: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.replacement = replacement.into();
        self
    }

    /// Chooses between per-character replacement (`true`) and run collapsing
    /// (`false`).
    #[must_use]
    pub fn with_preserve_length(mut self, preserve_length: bool) -> Self {
        self.preserve_length = preserve_length;
        self
    }

    /// Returns the configured replacement string.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Returns whether length preservation is enabled.
    #[must_use]
    pub fn preserve_length(&self) -> bool {
        self.preserve_length
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `text` for export targets such as CSV or spreadsheets.
///
/// With `preserve_length` enabled this is exactly
/// [`mask_encrypted_with`]: one replacement per encrypted character.
///
/// With `preserve_length` disabled, each maximal run of consecutive
/// encrypted characters collapses to the replacement emitted exactly twice,
/// regardless of the run's length. Plain characters are copied verbatim and
/// end the current run.
#[must_use]
pub fn to_export_format(text: &str, config: &ExportConfig) -> String {
    if config.preserve_length {
        return mask_encrypted_with(text, &config.replacement);
    }

    let marker = config.replacement.repeat(RUN_MARKER_REPEAT);
    let mut result = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if is_encrypted_char(ch) {
            if !in_run {
                result.push_str(&marker);
                in_run = true;
            }
        } else {
            result.push(ch);
            in_run = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{mask_encrypted, mask_encrypted_with, to_export_format, ExportConfig};

    #[test]
    fn masks_each_encrypted_char() {
        assert_eq!(mask_encrypted("ab\u{E000}cd"), "ab*cd");
        assert_eq!(mask_encrypted("\u{E000}\u{E001}"), "**");
        assert_eq!(mask_encrypted("plain"), "plain");
        assert_eq!(mask_encrypted(""), "");
    }

    #[test]
    fn custom_replacement_is_not_length_checked() {
        assert_eq!(mask_encrypted_with("a\u{E000}b", "<x>"), "a<x>b");
        assert_eq!(mask_encrypted_with("a\u{E000}b", ""), "ab");
    }

    #[test]
    fn masking_is_idempotent_with_plain_replacement() {
        let text = "ab\u{E000}\u{CF70}cd";
        let once = mask_encrypted(text);
        assert_eq!(mask_encrypted(&once), once);
    }

    #[test]
    fn mask_length_invariant() {
        let text = "ab\u{E000}c\u{F8FF}\u{D7A3}d";
        let replacement = "##";
        let masked = mask_encrypted_with(text, replacement);
        let encrypted = crate::classify::count_encrypted_chars(text);
        let plain = text.chars().count() - encrypted;
        assert_eq!(
            masked.chars().count(),
            encrypted * replacement.chars().count() + plain
        );
    }

    #[test]
    fn export_defaults_match_plain_masking() {
        let text = "ab\u{E000}\u{E001}cd";
        let config = ExportConfig::default();
        assert_eq!(to_export_format(text, &config), mask_encrypted(text));
    }

    #[test]
    fn export_collapses_runs_to_double_marker() {
        let config = ExportConfig::new().with_preserve_length(false);
        assert_eq!(
            to_export_format("\u{E000}\u{E001}\u{E002}xy", &config),
            "**xy"
        );
        // Two separate runs each get their own marker.
        assert_eq!(
            to_export_format("a\u{E000}b\u{E001}\u{E002}c", &config),
            "a**b**c"
        );
        // A single encrypted character still doubles.
        assert_eq!(to_export_format("a\u{E000}b", &config), "a**b");
    }

    #[test]
    fn export_marker_doubles_custom_replacement() {
        let config = ExportConfig::new()
            .with_replacement("##")
            .with_preserve_length(false);
        assert_eq!(to_export_format("a\u{E000}\u{E001}b", &config), "a####b");
    }

    #[test]
    fn export_passes_plain_text_through() {
        let config = ExportConfig::new().with_preserve_length(false);
        assert_eq!(to_export_format("plain", &config), "plain");
        assert_eq!(to_export_format("", &config), "");
    }

    #[test]
    fn export_config_accessors() {
        let config = ExportConfig::new().with_replacement("#");
        assert_eq!(config.replacement(), "#");
        assert!(config.preserve_length());
    }
}

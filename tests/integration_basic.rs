//! End-to-end tests for the public masking API.
//!
//! These tests exercise the integration of:
//! - range classification,
//! - string masking and export formatting, and
//! - analysis and validation over the same inputs.

use unimask::{
    analyze_text, count_encrypted_chars, encrypted_positions, is_encrypted, is_encrypted_char,
    mask_encrypted, mask_encrypted_with, starts_encrypted, to_export_format, validate,
    EncryptionRate, ExportConfig, ValidateError, DEFAULT_REPLACEMENT,
};

#[test]
fn test_detects_pua_characters() {
    let text = "\u{E000}\u{E001}";
    assert!(is_encrypted(text));
    assert_eq!(count_encrypted_chars(text), 2);

    let analysis = analyze_text(text);
    assert_eq!(analysis.total_chars, 2);
    assert_eq!(analysis.encrypted_chars, 2);
    assert_eq!(analysis.plain_chars, 0);
    assert_eq!(analysis.encryption_rate.as_percent(), Some("100.00%"));
}

#[test]
fn test_detects_rare_syllable_characters() {
    assert!(is_encrypted_char('\u{CF70}'));
    assert!(is_encrypted_char('\u{D7A3}'));
    assert!(is_encrypted("plain \u{CF71} text"));
    assert_eq!(count_encrypted_chars("\u{CF70}a\u{D7A3}"), 2);
}

#[test]
fn test_masks_with_default_replacement() {
    assert_eq!(mask_encrypted("ab\u{E000}cd"), "ab*cd");
    assert_eq!(DEFAULT_REPLACEMENT, "*");
}

#[test]
fn test_masks_with_custom_replacement() {
    assert_eq!(mask_encrypted_with("ab\u{E000}cd", "[?]"), "ab[?]cd");
}

#[test]
fn test_export_format_preserving_length() {
    let config = ExportConfig::new();
    assert_eq!(
        to_export_format("ab\u{E000}\u{E001}cd", &config),
        "ab**cd"
    );
}

#[test]
fn test_export_format_collapses_runs() {
    let config = ExportConfig::new().with_preserve_length(false);
    assert_eq!(
        to_export_format("\u{E000}\u{E001}\u{E002}xy", &config),
        "**xy"
    );
}

#[test]
fn test_positions_agree_with_masking() {
    let text = "a\u{E000}b\u{F8FF}c\u{CF70}";
    let positions = encrypted_positions(text);
    assert_eq!(positions.len(), count_encrypted_chars(text));

    let masked: Vec<char> = mask_encrypted(text).chars().collect();
    for position in &positions {
        assert_eq!(masked[position.index], '*');
    }
}

#[test]
fn test_validate_accepts_partially_encrypted() {
    let analysis = validate("order-\u{E000}\u{E001}-shipped").expect("should validate");
    assert_eq!(analysis.encrypted_chars, 2);
    assert!(analysis.plain_chars > 0);
}

#[test]
fn test_validate_rejects_plain_and_empty() {
    assert_eq!(
        validate("plain text, no special chars"),
        Err(ValidateError::NoEncryptedContent)
    );
    assert_eq!(validate(""), Err(ValidateError::EmptyOrMalformed));
}

#[test]
fn test_validate_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(ValidateError::FullyEncrypted);
    assert_eq!(
        err.to_string(),
        "text is entirely encrypted; likely not a valid partially-encrypted text"
    );
}

#[test]
fn test_empty_input_defaults() {
    assert!(!is_encrypted(""));
    assert!(!starts_encrypted(""));
    assert_eq!(count_encrypted_chars(""), 0);
    assert_eq!(mask_encrypted(""), "");
    assert!(encrypted_positions("").is_empty());
    assert_eq!(analyze_text("").encryption_rate, EncryptionRate::Number(0));
}

#[test]
fn test_masking_is_idempotent() {
    let text = "secret: \u{E123}\u{CF99} end";
    let once = mask_encrypted(text);
    let twice = mask_encrypted(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_length_invariant_across_replacements() {
    let text = "ab\u{E000}c\u{D7A3}\u{F8FF}d";
    for replacement in ["*", "", "##", "mask"] {
        let masked = mask_encrypted_with(text, replacement);
        let encrypted = count_encrypted_chars(text);
        let plain = text.chars().count() - encrypted;
        assert_eq!(
            masked.chars().count(),
            encrypted * replacement.chars().count() + plain,
            "replacement {replacement:?}"
        );
    }
}

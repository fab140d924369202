//! Range membership: "which characters count as encrypted?"
//!
//! Everything else in the crate is built on the predicates defined here. A
//! character counts as encrypted when its code point falls inside one of two
//! fixed, inclusive ranges:
//!
//! - [`PRIVATE_USE_AREA`]: the BMP Private Use Area, `U+E000..=U+F8FF`.
//! - [`RARE_SYLLABLES`]: rarely used precomposed Hangul syllables,
//!   `U+CF70..=U+D7A3`.
//!
//! The ranges do not overlap and are process-wide constants. No other ranges
//! are recognized.

/// An inclusive range of Unicode scalar values.
///
/// Both bounds are part of the range. Ranges are plain data; the crate only
/// ever uses the two constants defined in this module, but the type is public
/// so callers can inspect them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodePointRange {
    low: u32,
    high: u32,
}

impl CodePointRange {
    /// Constructs an inclusive range from `low` to `high`.
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn low(self) -> u32 {
        self.low
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn high(self) -> u32 {
        self.high
    }

    /// Returns `true` when `ch`'s code point lies inside the range,
    /// inclusive on both ends.
    #[must_use]
    pub const fn contains(self, ch: char) -> bool {
        let code_point = ch as u32;
        code_point >= self.low && code_point <= self.high
    }
}

/// The BMP Private Use Area, `U+E000..=U+F8FF`.
pub const PRIVATE_USE_AREA: CodePointRange = CodePointRange::new(0xE000, 0xF8FF);

/// Rarely used precomposed Hangul syllables, `U+CF70..=U+D7A3`.
pub const RARE_SYLLABLES: CodePointRange = CodePointRange::new(0xCF70, 0xD7A3);

/// All ranges whose members count as encrypted.
const ENCRYPTED_RANGES: [CodePointRange; 2] = [PRIVATE_USE_AREA, RARE_SYLLABLES];

/// Returns `true` when `ch` falls inside one of the reserved ranges.
///
/// This is the primitive every other operation composes.
#[must_use]
pub fn is_encrypted_char(ch: char) -> bool {
    ENCRYPTED_RANGES.iter().any(|range| range.contains(ch))
}

/// Classifies the first character of `text`.
///
/// Returns `false` for empty input. Only the first scalar value is inspected;
/// when callers pass a longer string the remainder is deliberately ignored
/// rather than rejected, matching the single-character contract loosely.
#[must_use]
pub fn starts_encrypted(text: &str) -> bool {
    text.chars().next().is_some_and(is_encrypted_char)
}

/// Returns `true` when `text` contains at least one encrypted character.
///
/// Scans left to right and stops at the first match. Empty input is not
/// encrypted.
#[must_use]
pub fn is_encrypted(text: &str) -> bool {
    text.chars().any(is_encrypted_char)
}

/// Counts the encrypted characters in `text`.
///
/// Always scans the whole string. Empty input counts zero.
#[must_use]
pub fn count_encrypted_chars(text: &str) -> usize {
    text.chars().filter(|ch| is_encrypted_char(*ch)).count()
}

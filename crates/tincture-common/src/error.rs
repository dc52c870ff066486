//! Error types shared across Tincture crates.

use thiserror::Error;

/// Why a hexadecimal color string was rejected by the strict parser.
///
/// The lenient parser never produces this; it substitutes a default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexColorError {
    /// Only the 3-digit (`rgb`) and 6-digit (`rrggbb`) forms exist.
    #[error("hex color must have 3 or 6 digits, found {len}")]
    InvalidLength {
        /// Number of characters in the rejected input.
        len: usize,
    },
    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit {digit:?} at position {index}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character index of `digit` in the input.
        index: usize,
    },
}

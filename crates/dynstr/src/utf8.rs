//! UTF-8 lead-byte classification and character counting.
//!
//! [`count_chars`] is lenient: it trusts the length claimed by each lead byte
//! and never looks at continuation bytes. Invalid bytes count as one unit
//! each. The result is the number of detected lead positions, which equals
//! the number of Unicode scalar values only for well-formed input. Use
//! [`count_chars_strict`] when malformed input must be reported.

use crate::DynStrError;

/// The role a single byte plays in a UTF-8 encoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadByte {
    /// `0xxxxxxx`: a complete one-byte sequence.
    Ascii,
    /// `110xxxxx`: starts a two-byte sequence.
    Two,
    /// `1110xxxx`: starts a three-byte sequence.
    Three,
    /// `11110xxx`: starts a four-byte sequence.
    Four,
    /// `10xxxxxx`: a continuation byte, never valid in lead position.
    Continuation,
    /// `11111xxx`: never appears in UTF-8.
    Invalid,
}

impl LeadByte {
    /// Classifies `byte` by its high bits.
    #[must_use]
    pub const fn classify(byte: u8) -> Self {
        match byte.leading_ones() {
            0 => LeadByte::Ascii,
            1 => LeadByte::Continuation,
            2 => LeadByte::Two,
            3 => LeadByte::Three,
            4 => LeadByte::Four,
            _ => LeadByte::Invalid,
        }
    }

    /// Encoded sequence length announced by this lead byte, or `None` for
    /// bytes that cannot start a sequence.
    #[must_use]
    pub const fn sequence_len(self) -> Option<usize> {
        match self {
            LeadByte::Ascii => Some(1),
            LeadByte::Two => Some(2),
            LeadByte::Three => Some(3),
            LeadByte::Four => Some(4),
            LeadByte::Continuation | LeadByte::Invalid => None,
        }
    }
}

/// Length in bytes of the UTF-8 sequence started by `byte`.
///
/// Only the lead byte is inspected.
///
/// ```rust
/// use dynstr::utf8::lead_byte_len;
///
/// assert_eq!(lead_byte_len(b'A'), Some(1));
/// assert_eq!(lead_byte_len(0xE2), Some(3));
/// assert_eq!(lead_byte_len(0xFF), None);
/// ```
#[inline]
#[must_use]
pub const fn lead_byte_len(byte: u8) -> Option<usize> {
    LeadByte::classify(byte).sequence_len()
}

/// Counts characters in `bytes` by walking lead bytes.
///
/// An invalid lead byte counts as one unit and the walk moves on by one byte.
/// A valid lead byte counts once and the walk skips the length it claims,
/// whatever the skipped bytes are. A sequence cut short by the end of `bytes`
/// still counts once. Zero bytes are ordinary one-byte units.
#[must_use]
pub fn count_chars(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        pos += lead_byte_len(bytes[pos]).unwrap_or(1);
        count += 1;
    }
    count
}

/// Counts Unicode scalar values in `bytes`, rejecting malformed UTF-8.
///
/// # Errors
///
/// Returns [`DynStrError::InvalidUtf8`] with the length of the longest valid
/// prefix when `bytes` is not well-formed UTF-8.
pub fn count_chars_strict(bytes: &[u8]) -> Result<usize, DynStrError> {
    match core::str::from_utf8(bytes) {
        Ok(text) => Ok(text.chars().count()),
        Err(err) => Err(DynStrError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }),
    }
}

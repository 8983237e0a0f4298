//! Binary rendering of byte sequences.

use core::fmt;

/// Formats bytes as space-separated groups of eight binary digits.
///
/// Handy for seeing which UTF-8 lead-byte pattern a byte matches.
///
/// ```rust
/// use dynstr::Bits;
///
/// assert_eq!(Bits("é".as_bytes()).to_string(), "11000011 10101001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits<'a>(
    /// Bytes to render.
    pub &'a [u8],
);

impl fmt::Display for Bits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.0.iter();
        if let Some(first) = bytes.next() {
            write!(f, "{first:08b}")?;
        }
        for byte in bytes {
            write!(f, " {byte:08b}")?;
        }
        Ok(())
    }
}

//! A growable byte string with an explicit lifecycle, and a lenient UTF-8
//! character counter.
//!
//! [`DynStr`] keeps a trailing terminator byte for terminated-string
//! consumers, tracks its length explicitly and grows by amortized doubling
//! (see [`GrowthPolicy`]). The [`utf8`] module classifies lead bytes and
//! counts characters without rejecting malformed input.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bits;
mod dyn_str;
mod error;
mod options;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use bits::Bits;
pub use dyn_str::{DynStr, Inspection};
pub use error::DynStrError;
pub use options::{DynStrOptions, GrowthPolicy};
pub use utf8::{LeadByte, count_chars, count_chars_strict, lead_byte_len};

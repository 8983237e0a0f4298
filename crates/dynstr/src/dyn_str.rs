//! Growable byte string with an explicit release step.
//!
//! Overview
//! - [`DynStr`] owns one contiguous region holding the payload followed by a
//!   single `0` terminator, so the content can be handed to consumers that
//!   expect terminated strings (see [`DynStr::as_c_str`]). The terminator is
//!   never part of the logical content.
//! - `capacity` is the logical region size chosen by the
//!   [`GrowthPolicy`](crate::GrowthPolicy). It is tracked separately from the
//!   backing `Vec`'s capacity so the policy is observable regardless of
//!   allocator rounding. The backing `Vec` always has at least `capacity`
//!   bytes reserved.
//! - Every successful operation leaves `capacity >= len + 1`.
//!
//! Lifecycle
//! - A `DynStr` is live from construction until [`DynStr::release`]. Release
//!   frees the region and is idempotent. Appending to or inspecting a released
//!   buffer returns [`DynStrError::Released`]; a released buffer comes back to
//!   life only by assigning a freshly constructed value.
//! - Dropping a live buffer frees its region; there is nothing to release by
//!   hand.
//!
//! Allocation
//! - All reservations go through `Vec::try_reserve_exact`. A failed
//!   reservation returns [`DynStrError::AllocationFailure`] and leaves the
//!   buffer exactly as it was.
//!
//! Aliasing
//! - Appending a buffer to itself cannot be expressed: [`DynStr::append`]
//!   takes `&mut self` and `&DynStr`, which the borrow checker refuses to
//!   alias. A `DynStr` is `Send` and `Sync` like the `Vec` it wraps; mutation
//!   needs `&mut`, so callers sharing one across threads must serialize access
//!   themselves.

use alloc::vec::Vec;
use core::{ffi::CStr, fmt};

use bstr::{BStr, ByteSlice};
use tracing::{debug, trace};

use crate::{
    DynStrError,
    options::DynStrOptions,
    utf8,
};

/// A growable, exclusively owned byte string.
///
/// ```rust
/// use dynstr::DynStr;
///
/// let mut name = DynStr::new("Phillip").unwrap();
/// let hobby = DynStr::new(" Programs").unwrap();
/// name.append(&hobby).unwrap();
///
/// assert_eq!(name.as_bytes().unwrap(), b"Phillip Programs");
/// assert_eq!(name.len(), 16);
/// assert_eq!(name.capacity(), 17);
/// ```
pub struct DynStr {
    /// Payload plus terminator; `None` once released.
    data: Option<Vec<u8>>,
    capacity: usize,
    reallocations: usize,
    options: DynStrOptions,
}

/// A read-only snapshot of a live [`DynStr`].
///
/// The [`Display`](fmt::Display) rendering prints the content (lossily, for
/// bytes that are not UTF-8), the length and the capacity on three lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection<'a> {
    /// Payload bytes, terminator excluded.
    pub content: &'a BStr,
    /// Number of payload bytes.
    pub length: usize,
    /// Logical region size, terminator included.
    pub capacity: usize,
}

impl fmt::Display for Inspection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "String: {}", self.content)?;
        writeln!(f, "Length: {}", self.length)?;
        write!(f, "Capacity: {}", self.capacity)
    }
}

fn allocation_failure(requested: usize) -> DynStrError {
    debug!(requested, "allocation failed");
    DynStrError::AllocationFailure { requested }
}

impl DynStr {
    /// Creates a buffer holding a copy of `source` with the default options.
    ///
    /// Exactly `source.len() + 1` bytes are reserved.
    ///
    /// # Errors
    ///
    /// Returns [`DynStrError::AllocationFailure`] if the region cannot be
    /// allocated.
    pub fn new(source: impl AsRef<[u8]>) -> Result<Self, DynStrError> {
        Self::with_options(source, DynStrOptions::default())
    }

    /// Creates a buffer holding a copy of `source` that grows according to
    /// `options`.
    ///
    /// # Errors
    ///
    /// Returns [`DynStrError::AllocationFailure`] if the region cannot be
    /// allocated.
    pub fn with_options(
        source: impl AsRef<[u8]>,
        options: DynStrOptions,
    ) -> Result<Self, DynStrError> {
        let source = source.as_ref();
        let capacity = source
            .len()
            .checked_add(1)
            .ok_or_else(|| allocation_failure(usize::MAX))?;

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| allocation_failure(capacity))?;
        data.extend_from_slice(source);
        data.push(0);

        trace!(length = source.len(), capacity, "constructed buffer");
        Ok(Self {
            data: Some(data),
            capacity,
            reallocations: 0,
            options,
        })
    }

    /// Frees the region and resets length and capacity to zero.
    ///
    /// Releasing an already released buffer does nothing.
    pub fn release(&mut self) {
        if let Some(data) = self.data.take() {
            trace!(length = data.len() - 1, capacity = self.capacity, "released buffer");
        }
        self.capacity = 0;
        self.reallocations = 0;
    }

    /// Appends a copy of `src`'s payload.
    ///
    /// When the result no longer fits, the region is reallocated to the size
    /// picked by the buffer's [`GrowthPolicy`](crate::GrowthPolicy).
    ///
    /// # Errors
    ///
    /// - [`DynStrError::Released`] if either buffer was released.
    /// - [`DynStrError::AllocationFailure`] if growing fails; `self` is left
    ///   unchanged.
    pub fn append(&mut self, src: &DynStr) -> Result<(), DynStrError> {
        let bytes = src.payload("append")?;
        self.extend(bytes, "append")
    }

    /// Appends a copy of `bytes`. Same growth and failure behavior as
    /// [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), DynStrError> {
        self.extend(bytes, "append_bytes")
    }

    /// Appends the UTF-8 encoding of `unit`.
    ///
    /// The result, capacity included, is identical to appending a buffer
    /// constructed from `unit` alone.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn push(&mut self, unit: char) -> Result<(), DynStrError> {
        let mut encoded = [0; 4];
        self.extend(unit.encode_utf8(&mut encoded).as_bytes(), "push")
    }

    /// Appends a single raw byte.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn push_byte(&mut self, unit: u8) -> Result<(), DynStrError> {
        self.extend(&[unit], "push_byte")
    }

    /// Returns the content, length and capacity of a live buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DynStrError::Released`] after [`release`](Self::release).
    pub fn inspect(&self) -> Result<Inspection<'_>, DynStrError> {
        let content = self.payload("inspect")?;
        Ok(Inspection {
            content: content.as_bstr(),
            length: content.len(),
            capacity: self.capacity,
        })
    }

    /// Payload bytes, terminator excluded.
    ///
    /// # Errors
    ///
    /// Returns [`DynStrError::Released`] after [`release`](Self::release).
    pub fn as_bytes(&self) -> Result<&[u8], DynStrError> {
        self.payload("as_bytes")
    }

    /// Payload as a byte string.
    ///
    /// # Errors
    ///
    /// Returns [`DynStrError::Released`] after [`release`](Self::release).
    pub fn as_bstr(&self) -> Result<&BStr, DynStrError> {
        self.payload("as_bstr").map(|bytes| bytes.as_bstr())
    }

    /// Payload as a terminated string, for APIs that scan for the terminator.
    ///
    /// # Errors
    ///
    /// - [`DynStrError::Released`] after [`release`](Self::release).
    /// - [`DynStrError::InteriorNul`] if the payload contains a zero byte,
    ///   since a terminated view would silently drop everything after it.
    pub fn as_c_str(&self) -> Result<&CStr, DynStrError> {
        let data = self.storage("as_c_str")?;
        let length = data.len() - 1;
        let position = data.find_byte(0).unwrap_or(length);
        if position < length {
            return Err(DynStrError::InteriorNul { position });
        }
        CStr::from_bytes_with_nul(data).map_err(|_| DynStrError::InteriorNul { position })
    }

    /// Number of payload bytes; zero once released.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.len() - 1)
    }

    /// Whether the payload is empty. A released buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical region size, terminator included; zero once released.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether [`release`](Self::release) has been called.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.data.is_none()
    }

    /// Number of growth reallocations since construction.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Options the buffer was constructed with.
    #[must_use]
    pub fn options(&self) -> DynStrOptions {
        self.options
    }

    /// Counts characters with the lenient walk of [`utf8::count_chars`].
    ///
    /// # Errors
    ///
    /// Returns [`DynStrError::Released`] after [`release`](Self::release).
    pub fn char_count(&self) -> Result<usize, DynStrError> {
        self.payload("char_count").map(utf8::count_chars)
    }

    /// Counts characters with [`utf8::count_chars_strict`].
    ///
    /// # Errors
    ///
    /// - [`DynStrError::Released`] after [`release`](Self::release).
    /// - [`DynStrError::InvalidUtf8`] if the payload is not well-formed.
    pub fn char_count_strict(&self) -> Result<usize, DynStrError> {
        self.payload("char_count_strict").and_then(utf8::count_chars_strict)
    }

    fn storage(&self, operation: &'static str) -> Result<&[u8], DynStrError> {
        self.data.as_deref().ok_or_else(|| {
            debug!(operation, "rejected use of released buffer");
            DynStrError::Released { operation }
        })
    }

    fn payload(&self, operation: &'static str) -> Result<&[u8], DynStrError> {
        self.storage(operation).map(|data| &data[..data.len() - 1])
    }

    /// Makes room for `additional` more payload bytes, growing per the policy
    /// when they do not fit. Nothing changes on failure.
    fn reserve_for(
        &mut self,
        additional: usize,
        operation: &'static str,
    ) -> Result<&mut Vec<u8>, DynStrError> {
        let Some(data) = self.data.as_mut() else {
            debug!(operation, "rejected use of released buffer");
            return Err(DynStrError::Released { operation });
        };

        let required = data
            .len()
            .checked_add(additional)
            .ok_or_else(|| allocation_failure(usize::MAX))?;

        if required > self.capacity {
            let capacity = self.options.growth.next_capacity(self.capacity, required);
            data.try_reserve_exact(capacity - data.len())
                .map_err(|_| allocation_failure(capacity))?;
            trace!(
                from = self.capacity,
                to = capacity,
                policy = ?self.options.growth,
                "grew buffer"
            );
            self.capacity = capacity;
            self.reallocations += 1;
        }
        Ok(data)
    }

    fn extend(&mut self, bytes: &[u8], operation: &'static str) -> Result<(), DynStrError> {
        let data = self.reserve_for(bytes.len(), operation)?;
        // Overwrite the old terminator with the new payload.
        data.pop();
        data.extend_from_slice(bytes);
        data.push(0);
        Ok(())
    }
}

impl fmt::Debug for DynStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.as_deref() {
            Some(data) => f
                .debug_struct("DynStr")
                .field("content", &data[..data.len() - 1].as_bstr())
                .field("length", &(data.len() - 1))
                .field("capacity", &self.capacity)
                .finish(),
            None => f.write_str("DynStr(<released>)"),
        }
    }
}

impl TryFrom<&str> for DynStr {
    type Error = DynStrError;

    fn try_from(source: &str) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}

impl TryFrom<&[u8]> for DynStr {
    type Error = DynStrError;

    fn try_from(source: &[u8]) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}

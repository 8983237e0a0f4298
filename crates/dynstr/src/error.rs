use thiserror::Error;

/// Errors surfaced by [`DynStr`](crate::DynStr) operations and the strict
/// UTF-8 counter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynStrError {
    /// The allocator could not satisfy a reservation of `requested` bytes.
    #[error("allocation of {requested} bytes failed")]
    AllocationFailure {
        /// Total bytes the failed reservation asked for.
        requested: usize,
    },
    /// The buffer was used after [`DynStr::release`](crate::DynStr::release).
    #[error("`{operation}` called on a released buffer")]
    Released {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// The payload holds a zero byte, so it has no terminated-string view.
    #[error("payload contains a nul byte at offset {position}")]
    InteriorNul {
        /// Offset of the first zero byte.
        position: usize,
    },
    /// Strict counting found a malformed sequence.
    #[error("invalid UTF-8 after {valid_up_to} valid bytes")]
    InvalidUtf8 {
        /// Length of the longest well-formed prefix.
        valid_up_to: usize,
    },
}

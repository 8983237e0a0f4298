/// How a [`DynStr`](crate::DynStr) picks its new capacity when an append no
/// longer fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Double the current capacity, or take the exact requirement when
    /// doubling is not enough.
    ///
    /// Appending `n` bytes one at a time reallocates `O(log n)` times.
    #[default]
    Doubling,
    /// Grow to exactly `length + 1` bytes on every append that does not fit.
    ///
    /// Keeps the region tight at the cost of one reallocation per growing
    /// append.
    Exact,
}

impl GrowthPolicy {
    /// Capacity to reallocate to when `required` bytes (payload plus
    /// terminator) no longer fit in `current`.
    #[must_use]
    pub const fn next_capacity(self, current: usize, required: usize) -> usize {
        match self {
            GrowthPolicy::Doubling => {
                let doubled = current.saturating_mul(2);
                if doubled < required { required } else { doubled }
            }
            GrowthPolicy::Exact => required,
        }
    }
}

/// Configuration options for a [`DynStr`](crate::DynStr).
///
/// # Examples
///
/// ```rust
/// use dynstr::{DynStr, DynStrOptions, GrowthPolicy};
///
/// let options = DynStrOptions {
///     growth: GrowthPolicy::Exact,
/// };
/// let mut s = DynStr::with_options("ab", options).unwrap();
/// s.append_bytes(b"cd").unwrap();
/// assert_eq!(s.capacity(), 5);
/// ```
///
/// # Default
///
/// [`GrowthPolicy::Doubling`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynStrOptions {
    /// Growth policy applied whenever an append exceeds the capacity.
    pub growth: GrowthPolicy,
}

#[cfg(test)]
mod tests {
    use super::GrowthPolicy;

    #[test]
    fn doubling_takes_floor_when_doubling_is_short() {
        assert_eq!(GrowthPolicy::Doubling.next_capacity(8, 9), 16);
        assert_eq!(GrowthPolicy::Doubling.next_capacity(2, 10), 10);
        assert_eq!(GrowthPolicy::Doubling.next_capacity(0, 1), 1);
    }

    #[test]
    fn exact_always_takes_requirement() {
        assert_eq!(GrowthPolicy::Exact.next_capacity(8, 9), 9);
        assert_eq!(GrowthPolicy::Exact.next_capacity(100, 101), 101);
    }

    #[test]
    fn doubling_saturates() {
        assert_eq!(
            GrowthPolicy::Doubling.next_capacity(usize::MAX / 2 + 1, 3),
            usize::MAX
        );
    }
}

use alloc::vec::Vec;

use super::arbitrary::Op;
use crate::{DynStr, DynStrError};

/// Number of cases each property runs.
pub(crate) fn test_count() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Applies `op` to `buf` and mirrors it onto `model`.
pub(crate) fn apply(buf: &mut DynStr, model: &mut Vec<u8>, op: &Op) -> Result<(), DynStrError> {
    match op {
        Op::Append(bytes) => {
            let src = DynStr::new(bytes)?;
            buf.append(&src)?;
            model.extend_from_slice(bytes);
        }
        Op::Push(unit) => {
            buf.push(*unit)?;
            let mut encoded = [0; 4];
            model.extend_from_slice(unit.encode_utf8(&mut encoded).as_bytes());
        }
        Op::PushByte(byte) => {
            buf.push_byte(*byte)?;
            model.push(*byte);
        }
    }
    Ok(())
}

/// Number of bits needed to represent `n`.
pub(crate) fn bit_len(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

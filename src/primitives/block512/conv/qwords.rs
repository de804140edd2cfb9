//! Conversions between `Block512` and 64-bit word arrays.

use crate::primitives::block512::Block512;

/// Converts a `Block512` into eight 64-bit words, word 0 least significant.
impl From<Block512> for [u64; 8] {
    fn from(value: Block512) -> Self {
        value.0
    }
}

/// Converts eight 64-bit words into a `Block512`, word 0 least significant.
impl From<[u64; 8]> for Block512 {
    fn from(value: [u64; 8]) -> Self {
        Block512(value)
    }
}

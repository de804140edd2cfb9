//! Conversions between `Block512` and little-endian byte representations.

use crate::primitives::block512::Block512;

/// Converts a `Block512` into a 64-byte array.
///
/// Byte 0 of the output is the least significant byte of the integer.
impl From<Block512> for [u8; 64] {
    fn from(value: Block512) -> Self {
        let mut out = [0u8; 64];

        for (chunk, word) in out.chunks_exact_mut(8).zip(value.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        out
    }
}

/// Converts a 64-byte array into a `Block512`.
///
/// The input's byte 0 becomes the least significant byte of the integer —
/// this is how a message block is loaded per GOST R 34.11-2018.
impl From<[u8; 64]> for Block512 {
    fn from(value: [u8; 64]) -> Self {
        let mut out = [0u64; 8];

        for (o, chunk) in out.iter_mut().zip(value.chunks_exact(8)) {
            *o = u64::from_le_bytes(chunk.try_into().unwrap());
        }

        Block512(out)
    }
}

impl Block512 {
    /// Returns the block as a little-endian 64-byte array.
    pub fn to_le_bytes(self) -> [u8; 64] {
        self.into()
    }

    /// Builds a block from a little-endian 64-byte array.
    pub fn from_le_bytes(bytes: [u8; 64]) -> Self {
        bytes.into()
    }
}

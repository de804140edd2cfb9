//! 512-bit little-endian integer primitive
//!
//! This module defines a fixed-size 512-bit unsigned integer type
//! (`Block512`) used by the Streebog hash core.
//!
//! `Block512` is **little-endian**: byte 0 is the least significant byte of
//! the integer. This matches GOST R 34.11-2018, which treats a message block
//! as a little-endian 512-bit number — the first byte of the message is the
//! least significant byte of the block.
//!
//! The internal representation is eight 64-bit words, word 0 holding the
//! least significant 64 bits. This keeps the hot transforms (`X`, `S`, `P`,
//! `L`) working on native-width integers instead of re-deriving byte offsets
//! on every call.

/// Fixed-size 512-bit unsigned integer, little-endian.
///
/// Word `i` holds bits `[64*i, 64*i + 64)` of the integer; within a word,
/// the byte at position `b` (`0..=7`) holds bits `[8*b, 8*b + 8)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block512(pub(crate) [u64; 8]);

impl Block512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; 8]);

    /// Returns a block whose every byte equals `byte`.
    ///
    /// Used to build the Streebog IVs: the all-zero vector and the
    /// all-`0x01` vector.
    pub const fn splat(byte: u8) -> Self {
        let word = u64::from_le_bytes([byte; 8]);
        Self([word; 8])
    }

    /// Returns the underlying little-endian words, word 0 least significant.
    pub const fn words(&self) -> &[u64; 8] {
        &self.0
    }

    /// Builds a block directly from little-endian words, word 0 least
    /// significant.
    pub const fn from_words(words: [u64; 8]) -> Self {
        Self(words)
    }
}

impl Default for Block512 {
    fn default() -> Self {
        Self::ZERO
    }
}

//! Safe, owned-type entry points: one-shot functions and incremental
//! wrapper structs around [`HashState`].

use crate::hash::streebog::state::{DigestSize, HashState};

/// Computes the 256-bit Streebog digest of `input` in one call.
pub fn streebog256(input: &[u8]) -> [u8; 32] {
    Streebog256::new().chain(input).finalize()
}

/// Computes the 512-bit Streebog digest of `input` in one call.
pub fn streebog512(input: &[u8]) -> [u8; 64] {
    Streebog512::new().chain(input).finalize()
}

/// Incremental Streebog hasher producing a 256-bit digest.
///
/// `finalize` consumes `self`, so feeding more bytes after finalisation is a
/// compile error rather than a runtime contract violation.
pub struct Streebog256(HashState);

impl Streebog256 {
    pub fn new() -> Self {
        Streebog256(HashState::new(DigestSize::Bit256))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0
            .update(data)
            .expect("Streebog256::update called on a fresh, non-finalized hasher");
    }

    fn chain(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    pub fn finalize(mut self) -> [u8; 32] {
        self.0
            .finalize()
            .expect("Streebog256::finalize called exactly once on a fresh hasher");

        let mut out = [0u8; 32];
        self.0
            .digest(&mut out)
            .expect("digest follows finalize unconditionally");
        out
    }
}

impl Default for Streebog256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental Streebog hasher producing a 512-bit digest.
pub struct Streebog512(HashState);

impl Streebog512 {
    pub fn new() -> Self {
        Streebog512(HashState::new(DigestSize::Bit512))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0
            .update(data)
            .expect("Streebog512::update called on a fresh, non-finalized hasher");
    }

    fn chain(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    pub fn finalize(mut self) -> [u8; 64] {
        self.0
            .finalize()
            .expect("Streebog512::finalize called exactly once on a fresh hasher");

        let mut out = [0u8; 64];
        self.0
            .digest(&mut out)
            .expect("digest follows finalize unconditionally");
        out
    }
}

impl Default for Streebog512 {
    fn default() -> Self {
        Self::new()
    }
}

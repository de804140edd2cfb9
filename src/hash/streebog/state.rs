//! The incremental hashing state machine: buffering, Stage-2 absorption,
//! and Stage-3 finalisation.

use crate::hash::streebog::compress::g;
use crate::hash::streebog::consts::{IV_256, IV_512, ZERO_512};
use crate::primitives::Block512;

/// Digest width Streebog can be configured for.
///
/// Replaces the raw `size ∈ {256, 512}` integer from the low-level contract
/// with a type that cannot hold an invalid value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DigestSize {
    Bit256,
    Bit512,
}

impl DigestSize {
    fn iv(self) -> Block512 {
        match self {
            DigestSize::Bit256 => IV_256,
            DigestSize::Bit512 => IV_512,
        }
    }
}

/// `HashState` is either absorbing message bytes or finalized; there is no
/// third state and no way to observe a digest before finalisation or to
/// feed more bytes after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    Absorbing,
    Finalized,
}

/// Error returned by the raw, contract-checked entry points.
///
/// The typed wrappers in [`super::core`] make `InvalidDigestSize` and
/// digest-before-finalize unrepresentable by construction; this enum exists
/// for the low-level surface described by the external interface contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreebogError {
    /// `init` was called with a size outside `{256, 512}`.
    InvalidDigestSize,
    /// `update` was called after `finalize`.
    AlreadyFinalized,
    /// `digest` was called before `finalize`.
    NotFinalized,
}

/// The `(h, N, Σ)` triple plus scratch buffer driving one hash computation.
#[derive(Clone)]
pub struct HashState {
    h: Block512,
    n: Block512,
    sigma: Block512,
    buf: [u8; 64],
    buffered: usize,
    size: DigestSize,
    stage: Stage,
}

impl HashState {
    /// `init(size)`: `h ← IV(size); N ← 0; Σ ← 0; b ← 0`. Enters `Absorbing`.
    pub fn new(size: DigestSize) -> Self {
        HashState {
            h: size.iv(),
            n: Block512::ZERO,
            sigma: Block512::ZERO,
            buf: [0u8; 64],
            buffered: 0,
            size,
            stage: Stage::Absorbing,
        }
    }

    /// Raw entry point matching the low-level `init(state, size)` contract:
    /// a size outside `{256, 512}` is a programmer error.
    pub fn try_new(size: u32) -> Result<Self, StreebogError> {
        match size {
            256 => Ok(Self::new(DigestSize::Bit256)),
            512 => Ok(Self::new(DigestSize::Bit512)),
            _ => Err(StreebogError::InvalidDigestSize),
        }
    }

    /// Absorbs `data`, buffering it into 64-byte blocks and compressing
    /// each full block (Stage 2) as it fills.
    pub fn update(&mut self, mut data: &[u8]) -> Result<(), StreebogError> {
        if self.stage == Stage::Finalized {
            return Err(StreebogError::AlreadyFinalized);
        }

        if self.buffered > 0 {
            let room = 64 - self.buffered;
            let take = room.min(data.len());
            self.buf[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < 64 {
                return Ok(());
            }

            self.absorb_block(self.buf);
            self.buffered = 0;
        }

        while data.len() >= 64 {
            let mut block = [0u8; 64];
            block.copy_from_slice(&data[..64]);
            self.absorb_block(block);
            data = &data[64..];
        }

        self.buf[..data.len()].copy_from_slice(data);
        self.buffered = data.len();

        Ok(())
    }

    /// Absorbs one full 64-byte block: `h ← G_N(h, m, N); N += 512; Σ += m`.
    fn absorb_block(&mut self, block: [u8; 64]) {
        let m = Block512::from_le_bytes(block);
        self.h = g(self.h, self.n, m);
        self.n = self.n + block_bit_count(512);
        self.sigma = self.sigma + m;
    }

    /// Stage-3 finalisation: pads the trailing `b` bytes, absorbs the final
    /// block, then folds in `N` and `Σ`. Transitions to `Finalized`.
    pub fn finalize(&mut self) -> Result<(), StreebogError> {
        if self.stage == Stage::Finalized {
            return Err(StreebogError::AlreadyFinalized);
        }

        let b = self.buffered;
        let mut padded = [0u8; 64];
        padded[..b].copy_from_slice(&self.buf[..b]);
        padded[b] = 0x01;

        let m = Block512::from_le_bytes(padded);
        self.h = g(self.h, self.n, m);
        self.n = self.n + block_bit_count((b as u64) * 8);
        self.sigma = self.sigma + m;

        self.h = g(self.h, ZERO_512, self.n);
        self.h = g(self.h, ZERO_512, self.sigma);

        self.stage = Stage::Finalized;
        Ok(())
    }

    /// Writes the digest (32 or 64 bytes depending on `size`) to `out`.
    ///
    /// `h` is held little-endian internally; the digest is the
    /// most-significant bytes of `h` read as a big-endian 512-bit integer,
    /// i.e. the byte array reversed (and truncated for the 256-bit variant).
    pub fn digest(&self, out: &mut [u8]) -> Result<(), StreebogError> {
        if self.stage != Stage::Finalized {
            return Err(StreebogError::NotFinalized);
        }

        let le = self.h.to_le_bytes();
        let len = match self.size {
            DigestSize::Bit512 => 64,
            DigestSize::Bit256 => 32,
        };

        for (o, b) in out[..len].iter_mut().zip(le.iter().rev()) {
            *o = *b;
        }

        Ok(())
    }
}

/// Builds the `from_u64(x)` Block512 the state machine needs for `N`:
/// limb 0 holds `x`, limbs 1..7 are zero.
fn block_bit_count(bits: u64) -> Block512 {
    let mut words = [0u64; 8];
    words[0] = bits;
    Block512::from_words(words)
}

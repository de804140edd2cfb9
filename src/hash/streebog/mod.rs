//! Streebog (GOST R 34.11-2018), a 256- or 512-bit cryptographic hash.
//!
//! The compression core is built from four primitive transforms — `X`, `S`,
//! `P`, `L` — fused into a single precomputed table (`consts::T`) for the
//! hot path, a 12-round key schedule (`schedule::e`), the block compression
//! function (`compress::g`), and an incremental state machine
//! ([`state::HashState`]) that handles buffering, full-block absorption, and
//! final padding. [`core`] exposes the safe, owned-type surface applications
//! actually use.

mod compress;
mod consts;
mod core;
mod schedule;
mod state;
mod transforms;

pub use core::{Streebog256, Streebog512, streebog256, streebog512};
pub use state::{DigestSize, HashState, StreebogError};

//! 512-bit little-endian integer primitive
//!
//! This module defines the `Block512` type, the fixed-size 512-bit integer
//! Streebog's compression core operates on.
//!
//! GOST R 34.11-2018 treats a message block as a little-endian 512-bit
//! number, so byte 0 of a block is its least significant byte. This is a
//! low-level, dependency-free primitive exposing only what the hash core
//! needs: XOR, mod-2⁵¹² addition, and conversions to/from bytes and 64-bit
//! words.

mod conv;
mod core;
mod ops;

/// Fixed-size 512-bit little-endian integer.
pub use core::Block512;

//! Hash algorithms exposed by the crate.
//!
//! Currently ships Streebog (GOST R 34.11-2018), a pure-Rust implementation.

pub mod streebog;

/// Re-export of the Streebog convenience functions and incremental hashers.
pub use streebog::{DigestSize, Streebog256, Streebog512, StreebogError, streebog256, streebog512};

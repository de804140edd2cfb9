//! Fixed-size integer primitives used by the hashing core.
//!
//! Exposes `Block512`, a little-endian 512-bit integer used by the Streebog
//! hash core — see [`block512`] for the module-by-module split (`core` for
//! the struct and constants, `ops` for `Xor`/`add_le`, `conv` for byte/qword
//! views).

pub mod block512;

pub use block512::Block512;

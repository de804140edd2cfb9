//! Cryptographic hash primitives for Nebula
//!
//! This crate provides a low-level implementation of Streebog
//! (GOST R 34.11-2018), used throughout the Nebula ecosystem wherever a
//! GOST-conformant digest is required.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are designed to be dependency-free, explicit in their semantics, and
//! suitable for security-critical code.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions. Currently ships Streebog
//!   (GOST R 34.11-2018) in both its 256-bit and 512-bit digest forms, as
//!   one-shot functions and as an incremental hasher.
//!
//! - `primitives`
//!   Fixed-size, low-level cryptographic primitives — `Block512`, the
//!   little-endian 512-bit integer Streebog's compression core operates on.
//!   Explicit, predictable semantics; no heap allocation.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal cryptographic needs.

pub mod hash;
pub mod primitives;

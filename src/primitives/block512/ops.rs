//! Arithmetic and bitwise operations for `Block512`
//!
//! Only the operations the Streebog core actually needs are implemented:
//! `XOR` (the `X` transform and key whitening) and addition modulo 2⁵¹²
//! (the `N` and `Σ` accumulators). `Block512` is not a general-purpose
//! big-integer type.

use crate::primitives::block512::Block512;
use std::ops::{Add, BitXor};

/// Bitwise XOR between two 512-bit values. This is the Streebog `X` transform.
impl BitXor for Block512 {
    type Output = Block512;

    fn bitxor(self, rhs: Block512) -> Self::Output {
        let mut out = [0u64; 8];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        Block512(out)
    }
}

/// Addition modulo 2⁵¹², word 0 least significant.
///
/// Used for the `N` (processed-bit-count) and `Σ` (block-sum) accumulators,
/// both of which the standard defines as little-endian mod-2⁵¹² addition.
impl Add for Block512 {
    type Output = Block512;

    fn add(self, rhs: Block512) -> Self::Output {
        let mut out = [0u64; 8];
        let mut carry = 0u128;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let sum = a as u128 + b as u128 + carry;
            *o = sum as u64;
            carry = sum >> 64;
        }

        Block512(out)
    }
}

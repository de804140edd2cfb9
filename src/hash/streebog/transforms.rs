//! The `X`, `S`, `P`, `L` transforms and their fused form.
//!
//! `S`, `P`, and `L` are never evaluated separately by the compression
//! core — only the fused `lps_fused` is on the hot path, driven by the
//! precomputed table in [`super::consts`]. `X` is a plain XOR. `s`, `p`, and
//! `l` below are the standalone, byte-at-a-time forms of the same three
//! steps, kept for the observational-equivalence contract against
//! `lps_fused` (`l(p(s(a))) == lps_fused(a)` for every `a`) rather than for
//! use on the hot path.

use crate::hash::streebog::consts::{A, PI, T, TAU};
use crate::primitives::Block512;

/// `X(a, k) = a ⊕ k`.
pub(super) fn x(a: Block512, k: Block512) -> Block512 {
    a ^ k
}

/// `S(a)`: substitutes every byte of `a` through the `PI` S-box
/// independently, position by position.
pub(super) fn s(a: Block512) -> Block512 {
    let bytes: [u8; 64] = a.to_le_bytes();
    let mut out = [0u8; 64];

    for (o, &b) in out.iter_mut().zip(bytes.iter()) {
        *o = PI[b as usize];
    }

    Block512::from_le_bytes(out)
}

/// `P(a)`: moves the byte at position `k` to position `TAU[k]`.
pub(super) fn p(a: Block512) -> Block512 {
    let bytes: [u8; 64] = a.to_le_bytes();
    let mut out = [0u8; 64];

    for (k, &b) in bytes.iter().enumerate() {
        out[TAU[k]] = b;
    }

    Block512::from_le_bytes(out)
}

/// `L(a)`: a GF(2)-linear transform applied independently to each 64-bit
/// word of `a`. For word `w`, byte `o` within that word, and each set bit
/// `t` of that byte, the output is XORed with `A[8*o + t]`.
pub(super) fn l(a: Block512) -> Block512 {
    let words = *a.words();
    let mut out = [0u64; 8];

    for (slot, &word) in out.iter_mut().zip(words.iter()) {
        let mut acc = 0u64;

        for o in 0..8 {
            let byte = (word >> (8 * o)) as u8;
            for t in 0..8 {
                if (byte >> t) & 1 == 1 {
                    acc ^= A[8 * o + t];
                }
            }
        }

        *slot = acc;
    }

    Block512::from_words(out)
}

/// The fused `L ∘ P ∘ S` transform.
///
/// For each output qword `m`, XORs together one lookup per input qword:
/// `out[m] = ⊕_{i=0..7} T[i][byte m of in[i]]`. This is the addressing
/// scheme the precomputed table in [`super::consts`] was built for.
pub(super) fn lps_fused(a: Block512) -> Block512 {
    let words = *a.words();
    let mut out = [0u64; 8];

    for (i, &word) in words.iter().enumerate() {
        let table = &T[i];
        for (m, slot) in out.iter_mut().enumerate() {
            let byte = (word >> (8 * m)) as u8;
            *slot ^= table[byte as usize];
        }
    }

    Block512::from_words(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitmix64(state: &mut u64) -> u64 {
        *state = state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = *state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn random_block(seed: &mut u64) -> Block512 {
        let mut words = [0u64; 8];
        for w in &mut words {
            *w = splitmix64(seed);
        }
        Block512::from_words(words)
    }

    /// `lps_fused` is only valid as a fused shortcut if it agrees with the
    /// sequential `L(P(S(·)))` it claims to replace.
    #[test]
    fn lps_fused_matches_sequential_l_p_s() {
        let mut seed = 0x5152_5354_5556_5758u64;

        for _ in 0..256 {
            let a = random_block(&mut seed);
            assert_eq!(lps_fused(a), l(p(s(a))));
        }
    }

    #[test]
    fn lps_fused_matches_sequential_l_p_s_on_zero_and_basis_vectors() {
        assert_eq!(lps_fused(Block512::ZERO), l(p(s(Block512::ZERO))));

        for byte_index in 0..64 {
            let mut bytes = [0u8; 64];
            bytes[byte_index] = 0xa5;
            let a = Block512::from_le_bytes(bytes);
            assert_eq!(lps_fused(a), l(p(s(a))));
        }
    }

    #[test]
    fn s_is_a_byte_wise_bijection() {
        let mut seen = [false; 256];
        for b in 0u8..=255 {
            let mut bytes = [0u8; 64];
            bytes[0] = b;
            let out: [u8; 64] = s(Block512::from_le_bytes(bytes)).to_le_bytes();
            assert!(!seen[out[0] as usize], "PI is not injective at byte {b}");
            seen[out[0] as usize] = true;
        }
    }

    #[test]
    fn p_permutes_without_losing_or_duplicating_bytes() {
        let mut bytes = [0u8; 64];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let out: [u8; 64] = p(Block512::from_le_bytes(bytes)).to_le_bytes();

        let mut seen = [false; 64];
        for &b in out.iter() {
            assert!(!seen[b as usize], "TAU duplicated byte {b}");
            seen[b as usize] = true;
        }
    }

    #[test]
    fn l_is_linear_over_xor() {
        let mut seed = 0x1234_5678_9abc_def0u64;
        assert_eq!(l(Block512::ZERO), Block512::ZERO);

        for _ in 0..64 {
            let a = random_block(&mut seed);
            let b = random_block(&mut seed);
            assert_eq!(l(a ^ b), l(a) ^ l(b));
        }
    }
}

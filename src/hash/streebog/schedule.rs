//! The twelve-round key schedule and block cipher `E(K, m)`.

use crate::hash::streebog::consts::C;
use crate::hash::streebog::transforms::{lps_fused, x};
use crate::primitives::Block512;

/// Generates the full round-key sequence `K_1..=K_13` from `K_1 = k`.
///
/// `K_{i+1} = LPS(K_i ⊕ C_i)` for `i = 1..=12`. `e` below consumes this
/// sequence; it is also the thing under test for the schedule's
/// determinism property (same `k` always regenerates the same thirteen
/// keys).
pub(super) fn round_keys(k: Block512) -> [Block512; 13] {
    let mut keys = [Block512::ZERO; 13];
    keys[0] = k;

    for (i, c) in C.iter().enumerate() {
        keys[i + 1] = lps_fused(x(keys[i], *c));
    }

    keys
}

/// Encrypts `m` under `k` with Streebog's internal 12-round cipher.
///
/// Each round applies the fused `LPS` to the running state and then
/// whitens it with the next round key from [`round_keys`].
pub(super) fn e(k: Block512, m: Block512) -> Block512 {
    let keys = round_keys(k);
    let mut state = x(keys[0], m);

    for key in &keys[1..] {
        state = lps_fused(state);
        state = x(*key, state);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference `K_1..=K_13` for a fixed sample `K`, computed independently
    /// from `T`/`C` and checked against `round_keys`' output — the schedule
    /// must regenerate the same thirteen keys every time for the same `k`.
    #[test]
    fn round_keys_matches_reference_table() {
        let k = Block512::from_words([
            0x0001020304050607,
            0x08090a0b0c0d0e0f,
            0x1011121314151617,
            0x18191a1b1c1d1e1f,
            0x2021222324252627,
            0x28292a2b2c2d2e2f,
            0x3031323334353637,
            0x38393a3b3c3d3e3f,
        ]);

        let expected: [Block512; 13] = [
            Block512::from_words([
                0x0001020304050607, 0x08090a0b0c0d0e0f, 0x1011121314151617, 0x18191a1b1c1d1e1f,
                0x2021222324252627, 0x28292a2b2c2d2e2f, 0x3031323334353637, 0x38393a3b3c3d3e3f,
            ]),
            Block512::from_words([
                0x708d9ff3328eed81, 0x67a3138fed408e76, 0x6ce117084fa6d876, 0x347663837615d7e9,
                0x6784ca10cf92c199, 0x354dd08e3d3fe35b, 0x5491b02c282d2e63, 0x20e112cb0717e910,
            ]),
            Block512::from_words([
                0x3d00ba78c288e601, 0x33ff479963ed9942, 0x041f04e82ded35e4, 0xd6605f59418fd082,
                0x9fd68dc0554f06ac, 0xdcd37c31493442d0, 0x76e7e39b033d3218, 0xc4b1b3010ccac009,
            ]),
            Block512::from_words([
                0x6b31460864e8ac01, 0x246f713eb15b08e3, 0x5413be8514345d83, 0xa16bf0eca047943c,
                0xbbc57e2efb121fa5, 0x1ca6620471902d4f, 0xb53c53772f66956c, 0x2906124ea427f8c8,
            ]),
            Block512::from_words([
                0xc82901921e72b3af, 0x173e4c6cf01a207b, 0x0cc19d4ec4fa1f6c, 0x15a68295826fe726,
                0xa5e1693168abd4cb, 0x494a1686be688764, 0xd5f76ec90cad1197, 0x059c970af1e7b088,
            ]),
            Block512::from_words([
                0x96f081d551073e5d, 0xc14b076c8d7795b0, 0xa218cb83ee120ede, 0xca6dbad698412085,
                0x1e5658d39611b2ad, 0x1b9b8b92e5e5c4d0, 0xaf636840c81e95ab, 0xeb887d6914fbdb92,
            ]),
            Block512::from_words([
                0x32136c95b006042f, 0x0dbbb5c7f03f7855, 0xc091748e5d70fd27, 0xac75894f3d8e9106,
                0xe72031d24fcdd0d7, 0xc47f10df3a650d43, 0xb6057d89e0f74b51, 0x826b936c8727d56f,
            ]),
            Block512::from_words([
                0x8e9ac98af1e8ecdd, 0x32faca469bdb9541, 0x138c29025d5ff784, 0x954a6f611bc5afe2,
                0xbd32f5dd1672fe9a, 0x9858edbe007ebd01, 0x446071a7478e460e, 0x1deb980f2f15e3aa,
            ]),
            Block512::from_words([
                0xfbddc55d3ee28f31, 0x884dc63eb19e4f2d, 0x886634451916747a, 0x895ae8ab5e373991,
                0xffe2593311896b05, 0xcc93eca0154525dc, 0x10dce5a8347f387e, 0xe34565c40b42e986,
            ]),
            Block512::from_words([
                0x8982fea97ed1f4d0, 0x859c8b3fcc22a930, 0x48920ddb785e306a, 0xd535bcc74a2a4727,
                0x2089b80dd0b2b091, 0xf0b1ad177b0e448f, 0xadd006f3a1eb800a, 0x1d9d70d23e48b006,
            ]),
            Block512::from_words([
                0xc48a3020868bfda7, 0x6ef8cb2af219cc50, 0x2503c6302a4bb2b3, 0xaa42abc0f20a0089,
                0x09c9eec2ce941166, 0x37d953ccceb0f9c5, 0xe975d566fd829d1b, 0x3b597e7672e1c3e2,
            ]),
            Block512::from_words([
                0x4545a83141a192cb, 0x0b414e98b5ed5ca8, 0x4596491b4ee95431, 0xcebe151cc9164ee4,
                0x71672f41ce9bff3b, 0xef06ccad1f1f363c, 0x6fdf1c68fc79e93c, 0x9eef99913e4de232,
            ]),
            Block512::from_words([
                0x44841c00937874db, 0xc8c5be4f2b64a761, 0x6469c0f66a7386db, 0x1ea859a9ec0ca8b8,
                0x495b0619ca6a3b13, 0x7040020dd724864b, 0xf8b4f1b556a8272a, 0xb1b3635da7424572,
            ]),
        ];

        assert_eq!(round_keys(k), expected);

        // Determinism: regenerating from the same k gives the same sequence.
        assert_eq!(round_keys(k), round_keys(k));
    }
}

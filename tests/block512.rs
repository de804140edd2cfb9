use cryptography::primitives::Block512;

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

#[test]
fn zero_is_identity_for_xor() {
    let mut seed = 1;
    for _ in 0..16 {
        let a = random_block(&mut seed);
        assert_eq!(a ^ Block512::ZERO, a);
    }
}

#[test]
fn xor_is_its_own_inverse() {
    let mut seed = 2;
    for _ in 0..16 {
        let a = random_block(&mut seed);
        let b = random_block(&mut seed);
        assert_eq!(a ^ b ^ b, a);
    }
}

#[test]
fn add_le_is_commutative_and_associative() {
    let mut seed = 3;
    for _ in 0..32 {
        let a = random_block(&mut seed);
        let b = random_block(&mut seed);
        let c = random_block(&mut seed);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }
}

#[test]
fn add_le_zero_is_identity() {
    let mut seed = 4;
    for _ in 0..16 {
        let a = random_block(&mut seed);
        assert_eq!(a + Block512::ZERO, a);
    }
}

#[test]
fn add_le_wraps_mod_2_512() {
    let max = Block512::from_words([u64::MAX; 8]);
    let one = Block512::from_words([1, 0, 0, 0, 0, 0, 0, 0]);

    assert_eq!(max + one, Block512::ZERO);
}

#[test]
fn splat_fills_every_byte() {
    let b = Block512::splat(0x01);
    let bytes: [u8; 64] = b.to_le_bytes();
    assert!(bytes.iter().all(|&x| x == 0x01));
}

#[test]
fn le_byte_round_trip() {
    let mut bytes = [0u8; 64];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = (i * 3 + 1) as u8;
    }

    let block = Block512::from_le_bytes(bytes);
    assert_eq!(block.to_le_bytes(), bytes);
}

#[test]
fn first_message_byte_is_least_significant() {
    // byte 0 of the LE encoding must land in word 0's low byte, per the
    // little-endian convention the hash state is built on.
    let mut bytes = [0u8; 64];
    bytes[0] = 0x42;

    let block = Block512::from_le_bytes(bytes);
    assert_eq!(block.words()[0] & 0xFF, 0x42);
    assert_eq!(block.words()[0], 0x42);
}

#[test]
fn qword_round_trip() {
    let words = [1u64, 2, 3, 4, 5, 6, 7, 8];
    let block = Block512::from_words(words);
    assert_eq!(*block.words(), words);
}

#[test]
fn default_is_zero() {
    assert_eq!(Block512::default(), Block512::ZERO);
}

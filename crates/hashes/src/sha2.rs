//! SHA-2 family (FIPS 180-4 / RFC 6234).
//!
//! Two word widths share one structure: SHA-224/256 run 64 rounds over
//! 32-bit words and 64-byte blocks, SHA-384/512 run 80 rounds over 64-bit
//! words and 128-byte blocks. The truncated variants (224, 384) differ from
//! their parents only in the initial state and in how many leading bytes of
//! the final state are emitted. The round constants are the fractional parts
//! of the cube roots of the first 64 (or 80) primes; the initial states come
//! from the square roots of the first 8 primes (or, for the truncated
//! variants, of the 9th through 16th primes).

use crate::digest::Digest;
use crate::error::DigestError;
use crate::pad::{LengthEncoding, pad_message};

const BLOCK_LEN_32: usize = 64;
const BLOCK_LEN_64: usize = 128;
const ROUNDS_32: usize = 64;
const ROUNDS_64: usize = 80;

#[rustfmt::skip]
const K32: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[rustfmt::skip]
const K64: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

const SHA224_INIT: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939,
    0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

const SHA256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const SHA384_INIT: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

const SHA512_INIT: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

pub(crate) fn sha224(input: &[u8]) -> Result<Digest, DigestError> {
    hash32(input, SHA224_INIT, 28)
}

pub(crate) fn sha256(input: &[u8]) -> Result<Digest, DigestError> {
    hash32(input, SHA256_INIT, 32)
}

pub(crate) fn sha384(input: &[u8]) -> Result<Digest, DigestError> {
    hash64(input, SHA384_INIT, 48)
}

pub(crate) fn sha512(input: &[u8]) -> Result<Digest, DigestError> {
    hash64(input, SHA512_INIT, 64)
}

fn hash32(input: &[u8], init: [u32; 8], digest_len: usize) -> Result<Digest, DigestError> {
    let padded = pad_message(input, BLOCK_LEN_32, LengthEncoding::BigEndian64)?;

    let mut state = init;
    for block in padded.chunks_exact(BLOCK_LEN_32) {
        compress32(&mut state, block);
    }

    Ok(Digest::from_be_words_u32(&state, digest_len))
}

fn hash64(input: &[u8], init: [u64; 8], digest_len: usize) -> Result<Digest, DigestError> {
    let padded = pad_message(input, BLOCK_LEN_64, LengthEncoding::BigEndian128)?;

    let mut state = init;
    for block in padded.chunks_exact(BLOCK_LEN_64) {
        compress64(&mut state, block);
    }

    Ok(Digest::from_be_words_u64(&state, digest_len))
}

// Schedule sigmas and round functions, 32-bit family.

#[inline]
fn ssigma0_32(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn ssigma1_32(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline]
fn bsigma0_32(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn bsigma1_32(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn choice_32(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn majority_32(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

// Schedule sigmas and round functions, 64-bit family. Same shapes as the
// 32-bit family with the rotation and shift amounts FIPS 180-4 assigns to
// 64-bit words.

#[inline]
fn ssigma0_64(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline]
fn ssigma1_64(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline]
fn bsigma0_64(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline]
fn bsigma1_64(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline]
fn choice_64(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline]
fn majority_64(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Folds one 64-byte block into the running state (SHA-224/256).
fn compress32(state: &mut [u32; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN_32);

    // Message schedule: 16 big-endian block words, expanded to 64 by the
    // w[t] = s1(w[t-2]) + w[t-7] + s0(w[t-15]) + w[t-16] recurrence.
    let mut w = [0u32; ROUNDS_32];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..ROUNDS_32 {
        w[t] = ssigma1_32(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssigma0_32(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..ROUNDS_32 {
        let t1 = h
            .wrapping_add(bsigma1_32(e))
            .wrapping_add(choice_32(e, f, g))
            .wrapping_add(K32[t])
            .wrapping_add(w[t]);
        let t2 = bsigma0_32(a).wrapping_add(majority_32(a, b, c));
        (a, b, c, d, e, f, g, h) = (t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g);
    }

    for (word, folded) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(folded);
    }
}

/// Folds one 128-byte block into the running state (SHA-384/512).
fn compress64(state: &mut [u64; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN_64);

    let mut w = [0u64; ROUNDS_64];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_be_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
    }
    for t in 16..ROUNDS_64 {
        w[t] = ssigma1_64(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssigma0_64(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..ROUNDS_64 {
        let t1 = h
            .wrapping_add(bsigma1_64(e))
            .wrapping_add(choice_64(e, f, g))
            .wrapping_add(K64[t])
            .wrapping_add(w[t]);
        let t2 = bsigma0_64(a).wrapping_add(majority_64(a, b, c));
        (a, b, c, d, e, f, g, h) = (t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g);
    }

    for (word, folded) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(folded);
    }
}

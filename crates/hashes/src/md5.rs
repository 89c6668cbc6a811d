//! MD5 (RFC 1321).
//!
//! 64 rounds over 512-bit blocks, split into four quadrants of 16 rounds.
//! Each quadrant selects a different nonlinear function of the three trailing
//! state words and a different message-word indexing rule; the additive
//! constants are the integer parts of `2^32 * abs(sin(i + 1))` and the
//! rotation amounts repeat in groups of four per quadrant.

use crate::digest::Digest;
use crate::error::DigestError;
use crate::pad::{LengthEncoding, pad_message};

const BLOCK_LEN: usize = 64;
const DIGEST_LEN: usize = 16;

const INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Integer parts of `2^32 * abs(sin(i + 1))` for rounds 0..64 (RFC 1321 §3.4).
#[rustfmt::skip]
const SINES: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-round left-rotation amounts (RFC 1321 §3.4).
#[rustfmt::skip]
const SHIFTS: [u32; 64] = [
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    5,  9, 14, 20,  5,  9, 14, 20,  5,  9, 14, 20,  5,  9, 14, 20,
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

pub(crate) fn hash(input: &[u8]) -> Result<Digest, DigestError> {
    let padded = pad_message(input, BLOCK_LEN, LengthEncoding::LittleEndian64)?;

    let mut state = INIT;
    for block in padded.chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
    }

    Ok(Digest::from_le_words_u32(&state, DIGEST_LEN))
}

/// Folds one 64-byte block into the running state.
fn compress(state: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    // MD5 has no schedule expansion: the 16 little-endian block words are
    // re-read throughout the 64 rounds under quadrant-specific indexing.
    let mut m = [0u32; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, g) = round_selector(i, b, c, d);
        let mixed = a
            .wrapping_add(f)
            .wrapping_add(SINES[i])
            .wrapping_add(m[g]);
        let rotated = b.wrapping_add(mixed.rotate_left(SHIFTS[i]));
        (a, b, c, d) = (d, rotated, b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Selects the nonlinear function value and message-word index for round `i`,
/// keyed by the round quadrant (`i / 16`).
#[inline]
fn round_selector(i: usize, b: u32, c: u32, d: u32) -> (u32, usize) {
    match i >> 4 {
        0 => ((b & c) | (!b & d), i),
        1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
        2 => (b ^ c ^ d, (3 * i + 5) % 16),
        _ => (c ^ (b | !d), (7 * i) % 16),
    }
}

//! Message preprocessing: padding and length encoding.
//!
//! Every supported algorithm shares the same Merkle–Damgård padding shape: a
//! single `0x80` marker byte, a zero fill, and the original message length in
//! bits as a fixed-width trailer occupying the final bytes of the last block.
//! Only the trailer width and byte order differ between algorithms.

use crate::error::DigestError;

/// How the bit-length trailer is encoded into the padded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthEncoding {
    /// 64-bit little-endian bit count (MD5, 64-byte blocks).
    LittleEndian64,
    /// 64-bit big-endian bit count (SHA-224/256, 64-byte blocks).
    BigEndian64,
    /// 128-bit big-endian bit count (SHA-384/512, 128-byte blocks).
    BigEndian128,
}

impl LengthEncoding {
    /// Width of the length field in bytes.
    pub(crate) const fn field_len(self) -> usize {
        match self {
            Self::LittleEndian64 | Self::BigEndian64 => 8,
            Self::BigEndian128 => 16,
        }
    }
}

/// Produces the padded message for `input`.
///
/// The output length is always an exact multiple of `block_len`, and a
/// zero-length input still yields exactly one padded block. Allocation is the
/// only failure mode: the buffer is reserved up front with
/// [`Vec::try_reserve_exact`] so an out-of-memory condition surfaces as
/// [`DigestError::Alloc`] instead of aborting the process.
pub(crate) fn pad_message(
    input: &[u8],
    block_len: usize,
    encoding: LengthEncoding,
) -> Result<Vec<u8>, DigestError> {
    let field_len = encoding.field_len();
    debug_assert!(field_len < block_len);

    // Bytes written before the length trailer: the message plus the marker.
    let marked_len = input.len() + 1;
    let zero_fill = (2 * block_len - field_len - marked_len % block_len) % block_len;
    let total_len = marked_len + zero_fill + field_len;

    let mut padded = Vec::new();
    padded
        .try_reserve_exact(total_len)
        .map_err(|_| DigestError::Alloc {
            requested: total_len,
        })?;

    padded.extend_from_slice(input);
    padded.push(0x80);
    padded.resize(marked_len + zero_fill, 0);

    let bit_len = (input.len() as u64).wrapping_mul(8);
    match encoding {
        LengthEncoding::LittleEndian64 => padded.extend_from_slice(&bit_len.to_le_bytes()),
        LengthEncoding::BigEndian64 => padded.extend_from_slice(&bit_len.to_be_bytes()),
        LengthEncoding::BigEndian128 => {
            let bit_len = (input.len() as u128) * 8;
            padded.extend_from_slice(&bit_len.to_be_bytes());
        }
    }

    debug_assert_eq!(padded.len(), total_len);
    debug_assert_eq!(padded.len() % block_len, 0);
    Ok(padded)
}

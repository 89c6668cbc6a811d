use core::fmt;

/// Length in bytes of the longest supported digest (SHA-512).
pub const MAX_DIGEST_LEN: usize = 64;

/// A completed digest.
///
/// The value is a fixed-capacity buffer sized for the longest supported
/// digest; the actual length is fixed per algorithm at dispatch time
/// (16/28/32/48/64 bytes), so no heap allocation is involved. The truncated
/// variants (SHA-224, SHA-384) keep the leading bytes of their parent state.
#[derive(Clone, Copy)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_LEN],
    len: usize,
}

impl Digest {
    /// Serializes 32-bit state words in little-endian order (MD5).
    pub(crate) fn from_le_words_u32(words: &[u32], len: usize) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        debug_assert!(len <= words.len() * 4);
        Self { bytes, len }
    }

    /// Serializes 32-bit state words in big-endian order, keeping the first
    /// `len` bytes (SHA-224/256).
    pub(crate) fn from_be_words_u32(words: &[u32], len: usize) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        debug_assert!(len <= words.len() * 4);
        Self { bytes, len }
    }

    /// Serializes 64-bit state words in big-endian order, keeping the first
    /// `len` bytes (SHA-384/512).
    pub(crate) fn from_be_words_u64(words: &[u64], len: usize) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        debug_assert!(len <= words.len() * 8);
        Self { bytes, len }
    }

    /// The digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; present for API completeness alongside [`Self::len`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Digest {}

/// Renders the digest as lowercase hex, the form printed by the CLI.
impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

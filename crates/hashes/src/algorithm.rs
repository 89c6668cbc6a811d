use core::fmt;

/// Identifies one of the supported digest algorithms.
///
/// The variant is the whole algorithm descriptor visible to callers: it knows
/// its wire name, output length, and block size. The round constants, initial
/// states, and compression routines are `const` data private to the
/// per-algorithm modules and are dispatched through [`crate::digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD5 (RFC 1321): 128-bit digest, 64-byte blocks, little-endian words.
    Md5,
    /// SHA-224 (RFC 6234): truncated SHA-256, 224-bit digest.
    Sha224,
    /// SHA-256 (RFC 6234): 256-bit digest, 64-byte blocks.
    Sha256,
    /// SHA-384 (RFC 6234): truncated SHA-512, 384-bit digest.
    Sha384,
    /// SHA-512 (RFC 6234): 512-bit digest, 128-byte blocks.
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, in CLI listing order.
    pub const ALL: [Self; 5] = [
        Self::Md5,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Resolves a lowercase command-line name to an algorithm.
    ///
    /// Returns `None` for unrecognised names; reporting that as a usage error
    /// is the caller's concern.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "md5" => Some(Self::Md5),
            "sha224" => Some(Self::Sha224),
            "sha256" => Some(Self::Sha256),
            "sha384" => Some(Self::Sha384),
            "sha512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// The lowercase name accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// The uppercase name used in `ALG(source)= digest` output lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }

    /// Digest length in bytes (16, 28, 32, 48, or 64).
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Block size in bytes: 64 for MD5 and the 32-bit SHA-2 family, 128 for
    /// the 64-bit SHA-2 family.
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Self::Md5 | Self::Sha224 | Self::Sha256 => 64,
            Self::Sha384 | Self::Sha512 => 128,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

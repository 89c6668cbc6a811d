#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod algorithm;
mod digest;
mod error;
mod md5;
mod pad;
mod sha2;

pub use algorithm::Algorithm;
pub use digest::{Digest, MAX_DIGEST_LEN};
pub use error::DigestError;

/// Computes the digest of `input` under the selected algorithm.
///
/// The input is treated as a single fully materialized message: it is padded,
/// split into blocks, and folded through the algorithm's compression function
/// in one synchronous pass. Each call owns a private padded buffer and hash
/// state; nothing is shared or reused between calls.
///
/// The only failure mode is [`DigestError::Alloc`], raised when the padded
/// message buffer cannot be allocated. A zero-length input is valid for every
/// algorithm and produces the standard empty-message digest.
pub fn digest(algorithm: Algorithm, input: &[u8]) -> Result<Digest, DigestError> {
    match algorithm {
        Algorithm::Md5 => md5::hash(input),
        Algorithm::Sha224 => sha2::sha224(input),
        Algorithm::Sha256 => sha2::sha256(input),
        Algorithm::Sha384 => sha2::sha384(input),
        Algorithm::Sha512 => sha2::sha512(input),
    }
}

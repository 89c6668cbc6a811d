use thiserror::Error;

/// Errors raised by the hashing engine.
///
/// The core is pure computation over in-memory buffers, so the only fallible
/// step is obtaining the padded-message buffer. A failed digest never returns
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// The preprocessor could not allocate the padded message buffer.
    #[error("failed to allocate {requested} bytes for the padded message")]
    Alloc {
        /// Number of bytes the preprocessor attempted to reserve.
        requested: usize,
    },
}

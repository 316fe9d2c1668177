//! SigHash cache error types

use thiserror::Error;

/// Errors raised while building cached sighash digests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigHashError {
    /// The personalized hash primitive rejected its input
    #[error("hash computation failed for personalization {tag:?}: {reason}")]
    HashComputationFailure {
        /// Personalization tag as passed to the primitive (lossy UTF-8)
        tag: String,
        reason: String,
    },
}

impl SigHashError {
    /// Build a [`SigHashError::HashComputationFailure`] from raw tag bytes
    pub fn hash_failure(tag: &[u8], reason: impl Into<String>) -> Self {
        SigHashError::HashComputationFailure {
            tag: String::from_utf8_lossy(tag).into_owned(),
            reason: reason.into(),
        }
    }
}

/// Result type for sighash cache operations
pub type Result<T> = std::result::Result<T, SigHashError>;

//! Error types for signature scheme lookup and operations.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use thiserror::Error;

/// Errors reported by a [`SchemeProvider`](crate::SchemeProvider) or a
/// [`SignatureScheme`](crate::SignatureScheme) handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// The algorithm is known but its backend was not compiled in.
    #[error("{0} was not enabled at compile-time")]
    NotEnabled(String),

    /// No algorithm is registered under this name.
    #[error("Unknown signature algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A caller-supplied buffer has the wrong size.
    #[error("Invalid {what} buffer length: expected {expected}, got {actual}")]
    InvalidBufferLength {
        /// Which buffer was rejected.
        what: &'static str,
        /// Length the scheme requires.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Signing failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Key or signature decoding failed during verification
    #[error("Verification failed: {0}")]
    Verification(String),

    /// Verification completed and rejected the signature.
    #[error("Signature rejected")]
    SignatureRejected,
}

impl SchemeError {
    /// True for the lookup errors that mean "this algorithm cannot be benchmarked here".
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SchemeError::NotEnabled(_) | SchemeError::UnknownAlgorithm(_))
    }
}

/// A specialized Result type for scheme operations.
pub type Result<T> = std::result::Result<T, SchemeError>;

//! The buffer-oriented signature interface and the default provider.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use tracing::{debug, instrument};

use crate::algorithm::{Algorithm, Family};
use crate::error::{Result, SchemeError};

/// An open handle to one signature parameter set.
///
/// Operations write into caller-owned buffers sized from the `*_len` methods,
/// so the same buffers can be reused across many calls. Handles are released
/// by dropping them.
pub trait SignatureScheme {
    /// Name the handle was opened as, in canonical form.
    fn name(&self) -> &str;

    /// Public key length in bytes.
    fn public_key_len(&self) -> usize;

    /// Secret key length in bytes.
    fn secret_key_len(&self) -> usize;

    /// Maximum signature length in bytes.
    fn signature_len(&self) -> usize;

    /// Generate a fresh keypair into `public_key` and `secret_key`.
    ///
    /// # Errors
    /// Returns an error if a buffer has the wrong length or the backend fails.
    fn keypair(&mut self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<()>;

    /// Sign `message` with `secret_key`, writing the signature into the front
    /// of `signature`. Returns the signature length.
    ///
    /// # Errors
    /// Returns an error if the key cannot be decoded, `signature` is too
    /// short, or the backend fails.
    fn sign(&mut self, signature: &mut [u8], message: &[u8], secret_key: &[u8]) -> Result<usize>;

    /// Check `signature` over `message` against `public_key`.
    ///
    /// # Errors
    /// Returns [`SchemeError::SignatureRejected`] if the signature does not
    /// verify, or another error if an input cannot be decoded.
    fn verify(&mut self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()>;
}

/// Source of signature handles, looked up by name.
pub trait SchemeProvider {
    /// Open a handle for `name`.
    ///
    /// # Errors
    /// Returns [`SchemeError::UnknownAlgorithm`] or [`SchemeError::NotEnabled`]
    /// when the algorithm cannot be used in this build.
    fn open(&self, name: &str) -> Result<Box<dyn SignatureScheme>>;
}

/// Provider backed by the compiled-in signature crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Library;

impl Library {
    /// Create the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Algorithms this build can open.
    #[must_use]
    pub fn enabled_algorithms(&self) -> Vec<Algorithm> {
        Algorithm::ALL.into_iter().filter(Algorithm::is_enabled).collect()
    }

    /// Open a handle for a resolved algorithm.
    ///
    /// # Errors
    /// Returns [`SchemeError::NotEnabled`] if the algorithm's family was not compiled in.
    #[instrument(level = "debug", skip(self), fields(algorithm = %algorithm))]
    pub fn open_algorithm(&self, algorithm: Algorithm) -> Result<Box<dyn SignatureScheme>> {
        let handle: Box<dyn SignatureScheme> = match algorithm.family() {
            #[cfg(feature = "ml-dsa")]
            Family::MlDsa => Box::new(crate::ml_dsa::MlDsa::new(algorithm)?),
            #[cfg(feature = "fn-dsa")]
            Family::FnDsa => Box::new(crate::fn_dsa::FnDsa::new(algorithm)?),
            #[cfg(feature = "slh-dsa")]
            Family::SlhDsa => Box::new(crate::slh_dsa::SlhDsa::new(algorithm)?),
            #[allow(unreachable_patterns)]
            _ => return Err(SchemeError::NotEnabled(algorithm.name().to_string())),
        };
        debug!(
            public_key_len = handle.public_key_len(),
            secret_key_len = handle.secret_key_len(),
            signature_len = handle.signature_len(),
            "opened signature handle"
        );
        Ok(handle)
    }
}

impl SchemeProvider for Library {
    fn open(&self, name: &str) -> Result<Box<dyn SignatureScheme>> {
        let algorithm = Algorithm::from_name(name)
            .ok_or_else(|| SchemeError::UnknownAlgorithm(name.to_string()))?;
        self.open_algorithm(algorithm)
    }
}

/// Reject a buffer whose length differs from what the scheme requires.
#[cfg_attr(not(any(feature = "ml-dsa", feature = "fn-dsa", feature = "slh-dsa")), allow(dead_code))]
pub(crate) fn check_len(what: &'static str, buffer: &[u8], expected: usize) -> Result<()> {
    if buffer.len() == expected {
        Ok(())
    } else {
        Err(SchemeError::InvalidBufferLength { what, expected, actual: buffer.len() })
    }
}

/// Copy `src` into `dst`, which must be exactly as long.
#[cfg_attr(not(any(feature = "ml-dsa", feature = "slh-dsa")), allow(dead_code))]
pub(crate) fn copy_exact(what: &'static str, dst: &mut [u8], src: &[u8]) -> Result<()> {
    check_len(what, dst, src.len())?;
    dst.copy_from_slice(src);
    Ok(())
}

/// Copy a produced signature into the front of `dst` and return its length.
#[cfg_attr(not(any(feature = "ml-dsa", feature = "slh-dsa")), allow(dead_code))]
pub(crate) fn write_signature(dst: &mut [u8], signature: &[u8]) -> Result<usize> {
    let actual = dst.len();
    let out = dst.get_mut(..signature.len()).ok_or(SchemeError::InvalidBufferLength {
        what: "signature",
        expected: signature.len(),
        actual,
    })?;
    out.copy_from_slice(signature);
    Ok(signature.len())
}

/// View a slice as a fixed-size array, as the FIPS crates expect.
#[cfg_attr(not(any(feature = "ml-dsa", feature = "slh-dsa")), allow(dead_code))]
pub(crate) fn fixed<const N: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_e| SchemeError::InvalidBufferLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}

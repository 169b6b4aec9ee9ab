#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! FN-DSA (Falcon) backend
//!
//! Wraps Thomas Pornin's `fn-dsa` crate. That crate already works on caller
//! buffers, so keys are generated straight into the benchmark's buffers and
//! signatures are written in place.
//!
//! Security Levels:
//! - FN-DSA-512: ~128-bit security (Level I)
//! - FN-DSA-1024: ~256-bit security (Level V)

use fn_dsa::{
    DOMAIN_NONE, FN_DSA_LOGN_512, FN_DSA_LOGN_1024, HASH_ID_RAW, KeyPairGenerator as _,
    KeyPairGeneratorStandard, SigningKey as _, SigningKeyStandard, VerifyingKey as _,
    VerifyingKeyStandard, sign_key_size, signature_size, vrfy_key_size,
};
use rand::rngs::OsRng;
use tracing::instrument;

use crate::algorithm::Algorithm;
use crate::error::{Result, SchemeError};
use crate::scheme::{SignatureScheme, check_len};

/// FN-DSA security level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FnDsaSecurityLevel {
    /// FN-DSA-512 (~128-bit security)
    #[default]
    Level512,
    /// FN-DSA-1024 (~256-bit security)
    Level1024,
}

impl FnDsaSecurityLevel {
    /// Security level for a registry algorithm, if it is an FN-DSA one.
    #[must_use]
    pub const fn from_algorithm(algorithm: Algorithm) -> Option<Self> {
        match algorithm {
            Algorithm::FnDsa512 => Some(Self::Level512),
            Algorithm::FnDsa1024 => Some(Self::Level1024),
            _ => None,
        }
    }

    /// Registry entry for this level
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Level512 => Algorithm::FnDsa512,
            Self::Level1024 => Algorithm::FnDsa1024,
        }
    }

    /// Get the logn parameter used by the `fn-dsa` crate
    #[must_use]
    pub fn to_logn(&self) -> u32 {
        match self {
            Self::Level512 => FN_DSA_LOGN_512,
            Self::Level1024 => FN_DSA_LOGN_1024,
        }
    }
}

/// An FN-DSA signature handle.
///
/// Owns the key-pair generator and the RNG used for keygen and signing.
pub struct FnDsa {
    security_level: FnDsaSecurityLevel,
    generator: KeyPairGeneratorStandard,
    rng: OsRng,
}

impl std::fmt::Debug for FnDsa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDsa").field("security_level", &self.security_level).finish()
    }
}

impl FnDsa {
    /// Open a handle for an FN-DSA algorithm.
    ///
    /// # Errors
    /// Returns [`SchemeError::UnknownAlgorithm`] if `algorithm` is not an FN-DSA level.
    pub fn new(algorithm: Algorithm) -> Result<Self> {
        let security_level = FnDsaSecurityLevel::from_algorithm(algorithm)
            .ok_or_else(|| SchemeError::UnknownAlgorithm(algorithm.name().to_string()))?;
        Ok(Self { security_level, generator: KeyPairGeneratorStandard::default(), rng: OsRng })
    }
}

impl SignatureScheme for FnDsa {
    fn name(&self) -> &str {
        self.security_level.algorithm().name()
    }

    fn public_key_len(&self) -> usize {
        vrfy_key_size(self.security_level.to_logn())
    }

    fn secret_key_len(&self) -> usize {
        sign_key_size(self.security_level.to_logn())
    }

    fn signature_len(&self) -> usize {
        signature_size(self.security_level.to_logn())
    }

    #[instrument(level = "trace", skip_all, fields(security_level = ?self.security_level))]
    fn keypair(&mut self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<()> {
        check_len("public key", public_key, self.public_key_len())?;
        check_len("secret key", secret_key, self.secret_key_len())?;
        let logn = self.security_level.to_logn();
        self.generator.keygen(logn, &mut self.rng, secret_key, public_key);
        Ok(())
    }

    #[instrument(level = "trace", skip_all, fields(security_level = ?self.security_level, message_len = message.len()))]
    fn sign(&mut self, signature: &mut [u8], message: &[u8], secret_key: &[u8]) -> Result<usize> {
        check_len("secret key", secret_key, self.secret_key_len())?;
        let sig_len = self.signature_len();
        let actual = signature.len();
        let out = signature.get_mut(..sig_len).ok_or(SchemeError::InvalidBufferLength {
            what: "signature",
            expected: sig_len,
            actual,
        })?;

        let mut sk = SigningKeyStandard::decode(secret_key).ok_or_else(|| {
            SchemeError::Signing(format!("failed to decode {} signing key", self.name()))
        })?;
        sk.sign(&mut self.rng, &DOMAIN_NONE, &HASH_ID_RAW, message, out);
        Ok(sig_len)
    }

    #[instrument(level = "trace", skip_all, fields(security_level = ?self.security_level, signature_len = signature.len()))]
    fn verify(&mut self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()> {
        check_len("public key", public_key, self.public_key_len())?;
        let vk = VerifyingKeyStandard::decode(public_key).ok_or_else(|| {
            SchemeError::Verification(format!("failed to decode {} verifying key", self.name()))
        })?;
        if vk.verify(signature, &DOMAIN_NONE, &HASH_ID_RAW, message) {
            Ok(())
        } else {
            Err(SchemeError::SignatureRejected)
        }
    }
}

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # ML-DSA (FIPS 204) backend
//!
//! Wraps the `fips204` crate. Keys and signatures cross the
//! [`SignatureScheme`] boundary as raw FIPS 204 encodings, so every `sign` and
//! `verify` call decodes its key from bytes before use.
//!
//! | Parameter Set | Public Key | Secret Key | Signature | NIST Level |
//! |---------------|------------|------------|-----------|------------|
//! | ML-DSA-44     | 1312       | 2560       | 2420      | 2          |
//! | ML-DSA-65     | 1952       | 4032       | 3309      | 3          |
//! | ML-DSA-87     | 2592       | 4896       | 4627      | 5          |
//!
//! Signing uses an empty context string.

use fips204::traits::{SerDes, Signer, Verifier};
use tracing::instrument;

use crate::algorithm::Algorithm;
use crate::error::{Result, SchemeError};
use crate::scheme::{SignatureScheme, check_len, copy_exact, fixed, write_signature};

const CONTEXT: &[u8] = &[];

/// ML-DSA parameter sets for different security levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlDsaParameterSet {
    /// ML-DSA-44: NIST Level 2 security
    MlDsa44,
    /// ML-DSA-65: NIST Level 3 security
    MlDsa65,
    /// ML-DSA-87: NIST Level 5 security
    MlDsa87,
}

impl MlDsaParameterSet {
    /// Parameter set for a registry algorithm, if it is an ML-DSA one.
    #[must_use]
    pub const fn from_algorithm(algorithm: Algorithm) -> Option<Self> {
        match algorithm {
            Algorithm::MlDsa44 => Some(Self::MlDsa44),
            Algorithm::MlDsa65 => Some(Self::MlDsa65),
            Algorithm::MlDsa87 => Some(Self::MlDsa87),
            _ => None,
        }
    }

    /// Registry entry for this parameter set
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::MlDsa44 => Algorithm::MlDsa44,
            Self::MlDsa65 => Algorithm::MlDsa65,
            Self::MlDsa87 => Algorithm::MlDsa87,
        }
    }
}

/// Expands `$body` once per parameter set with `$params` bound to the matching
/// `fips204` module.
macro_rules! with_params {
    ($set:expr, $params:ident => $body:expr) => {
        match $set {
            MlDsaParameterSet::MlDsa44 => {
                use fips204::ml_dsa_44 as $params;
                $body
            }
            MlDsaParameterSet::MlDsa65 => {
                use fips204::ml_dsa_65 as $params;
                $body
            }
            MlDsaParameterSet::MlDsa87 => {
                use fips204::ml_dsa_87 as $params;
                $body
            }
        }
    };
}

/// An ML-DSA signature handle
#[derive(Debug, Clone, Copy)]
pub struct MlDsa {
    parameter_set: MlDsaParameterSet,
}

impl MlDsa {
    /// Open a handle for an ML-DSA algorithm.
    ///
    /// # Errors
    /// Returns [`SchemeError::UnknownAlgorithm`] if `algorithm` is not an ML-DSA parameter set.
    pub fn new(algorithm: Algorithm) -> Result<Self> {
        let parameter_set = MlDsaParameterSet::from_algorithm(algorithm)
            .ok_or_else(|| SchemeError::UnknownAlgorithm(algorithm.name().to_string()))?;
        Ok(Self { parameter_set })
    }
}

impl SignatureScheme for MlDsa {
    fn name(&self) -> &str {
        self.parameter_set.algorithm().name()
    }

    fn public_key_len(&self) -> usize {
        with_params!(self.parameter_set, params => params::PK_LEN)
    }

    fn secret_key_len(&self) -> usize {
        with_params!(self.parameter_set, params => params::SK_LEN)
    }

    fn signature_len(&self) -> usize {
        with_params!(self.parameter_set, params => params::SIG_LEN)
    }

    #[instrument(level = "trace", skip_all, fields(parameter_set = ?self.parameter_set))]
    fn keypair(&mut self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<()> {
        with_params!(self.parameter_set, params => {
            check_len("public key", public_key, params::PK_LEN)?;
            check_len("secret key", secret_key, params::SK_LEN)?;
            let (pk, sk) = params::try_keygen().map_err(|e| {
                SchemeError::KeyGeneration(format!("{}: {}", self.name(), e))
            })?;
            copy_exact("public key", public_key, &pk.into_bytes())?;
            copy_exact("secret key", secret_key, &sk.into_bytes())
        })
    }

    #[instrument(level = "trace", skip_all, fields(parameter_set = ?self.parameter_set, message_len = message.len()))]
    fn sign(&mut self, signature: &mut [u8], message: &[u8], secret_key: &[u8]) -> Result<usize> {
        with_params!(self.parameter_set, params => {
            let sk = params::PrivateKey::try_from_bytes(fixed("secret key", secret_key)?)
                .map_err(|e| {
                    SchemeError::Signing(format!("failed to decode {} secret key: {}", self.name(), e))
                })?;
            let sig = sk
                .try_sign(message, CONTEXT)
                .map_err(|e| SchemeError::Signing(format!("{}: {}", self.name(), e)))?;
            write_signature(signature, &sig)
        })
    }

    #[instrument(level = "trace", skip_all, fields(parameter_set = ?self.parameter_set, signature_len = signature.len()))]
    fn verify(&mut self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()> {
        with_params!(self.parameter_set, params => {
            let pk = params::PublicKey::try_from_bytes(fixed("public key", public_key)?)
                .map_err(|e| {
                    SchemeError::Verification(format!(
                        "failed to decode {} public key: {}",
                        self.name(),
                        e
                    ))
                })?;
            let sig: [u8; params::SIG_LEN] = fixed("signature", signature)?;
            if pk.verify(message, &sig, CONTEXT) {
                Ok(())
            } else {
                Err(SchemeError::SignatureRejected)
            }
        })
    }
}

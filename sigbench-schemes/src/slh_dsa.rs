#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SLH-DSA (FIPS 205) backend, SHAKE "small" parameter sets.
//!
//! Wraps the `fips205` crate. Signing is hedged (randomized) with an empty
//! context string. These sets are orders of magnitude slower to sign than the
//! lattice schemes and are not part of the reference plan.

use fips205::traits::{SerDes, Signer, Verifier};
use tracing::instrument;

use crate::algorithm::Algorithm;
use crate::error::{Result, SchemeError};
use crate::scheme::{SignatureScheme, check_len, copy_exact, fixed, write_signature};

const CONTEXT: &[u8] = &[];

/// SLH-DSA parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlhDsaParameterSet {
    /// SLH-DSA-SHAKE-128s
    Shake128s,
    /// SLH-DSA-SHAKE-192s
    Shake192s,
    /// SLH-DSA-SHAKE-256s
    Shake256s,
}

impl SlhDsaParameterSet {
    /// Parameter set for a registry algorithm, if it is an SLH-DSA one.
    #[must_use]
    pub const fn from_algorithm(algorithm: Algorithm) -> Option<Self> {
        match algorithm {
            Algorithm::SlhDsaShake128s => Some(Self::Shake128s),
            Algorithm::SlhDsaShake192s => Some(Self::Shake192s),
            Algorithm::SlhDsaShake256s => Some(Self::Shake256s),
            _ => None,
        }
    }

    /// Registry entry for this parameter set
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Shake128s => Algorithm::SlhDsaShake128s,
            Self::Shake192s => Algorithm::SlhDsaShake192s,
            Self::Shake256s => Algorithm::SlhDsaShake256s,
        }
    }
}

macro_rules! with_params {
    ($set:expr, $params:ident => $body:expr) => {
        match $set {
            SlhDsaParameterSet::Shake128s => {
                use fips205::slh_dsa_shake_128s as $params;
                $body
            }
            SlhDsaParameterSet::Shake192s => {
                use fips205::slh_dsa_shake_192s as $params;
                $body
            }
            SlhDsaParameterSet::Shake256s => {
                use fips205::slh_dsa_shake_256s as $params;
                $body
            }
        }
    };
}

/// An SLH-DSA signature handle
#[derive(Debug, Clone, Copy)]
pub struct SlhDsa {
    parameter_set: SlhDsaParameterSet,
}

impl SlhDsa {
    /// Open a handle for an SLH-DSA algorithm.
    ///
    /// # Errors
    /// Returns [`SchemeError::UnknownAlgorithm`] if `algorithm` is not an SLH-DSA parameter set.
    pub fn new(algorithm: Algorithm) -> Result<Self> {
        let parameter_set = SlhDsaParameterSet::from_algorithm(algorithm)
            .ok_or_else(|| SchemeError::UnknownAlgorithm(algorithm.name().to_string()))?;
        Ok(Self { parameter_set })
    }
}

impl SignatureScheme for SlhDsa {
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
            let sk_bytes: [u8; params::SK_LEN] = fixed("secret key", secret_key)?;
            let sk = params::PrivateKey::try_from_bytes(&sk_bytes).map_err(|e| {
                SchemeError::Signing(format!("failed to decode {} secret key: {}", self.name(), e))
            })?;
            let sig = sk
                .try_sign(message, CONTEXT, true)
                .map_err(|e| SchemeError::Signing(format!("{}: {}", self.name(), e)))?;
            write_signature(signature, &sig)
        })
    }

    #[instrument(level = "trace", skip_all, fields(parameter_set = ?self.parameter_set, signature_len = signature.len()))]
    fn verify(&mut self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()> {
        with_params!(self.parameter_set, params => {
            let sig: [u8; params::SIG_LEN] = fixed("signature", signature)?;
            let pk_bytes: [u8; params::PK_LEN] = fixed("public key", public_key)?;
            let pk = params::PublicKey::try_from_bytes(&pk_bytes).map_err(|e| {
                SchemeError::Verification(format!(
                    "failed to decode {} public key: {}",
                    self.name(),
                    e
                ))
            })?;
            if pk.verify(message, &sig, CONTEXT) {
                Ok(())
            } else {
                Err(SchemeError::SignatureRejected)
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slh_dsa_shake_128s_roundtrip() -> Result<()> {
        let algorithm = Algorithm::SlhDsaShake128s;
        let mut scheme = SlhDsa::new(algorithm)?;
        assert_eq!(scheme.public_key_len(), algorithm.public_key_len());
        assert_eq!(scheme.secret_key_len(), algorithm.secret_key_len());
        assert_eq!(scheme.signature_len(), algorithm.signature_len());

        let mut pk = vec![0u8; scheme.public_key_len()];
        let mut sk = vec![0u8; scheme.secret_key_len()];
        let mut sig = vec![0u8; scheme.signature_len()];
        scheme.keypair(&mut pk, &mut sk)?;

        let message = [0xABu8; 32];
        let len = scheme.sign(&mut sig, &message, &sk)?;
        assert_eq!(len, algorithm.signature_len());
        scheme.verify(&message, &sig[..len], &pk)?;
        assert_eq!(scheme.verify(b"other", &sig[..len], &pk), Err(SchemeError::SignatureRejected));
        Ok(())
    }

    #[test]
    fn test_slh_dsa_lengths_match_registry() {
        for algorithm in
            [Algorithm::SlhDsaShake128s, Algorithm::SlhDsaShake192s, Algorithm::SlhDsaShake256s]
        {
            let scheme = SlhDsa::new(algorithm).expect("SLH-DSA set");
            assert_eq!(scheme.name(), algorithm.name());
            assert_eq!(scheme.public_key_len(), algorithm.public_key_len());
            assert_eq!(scheme.secret_key_len(), algorithm.secret_key_len());
            assert_eq!(scheme.signature_len(), algorithm.signature_len());
        }
    }

    #[test]
    fn test_slh_dsa_rejects_truncated_signature() {
        let mut scheme = SlhDsa::new(Algorithm::SlhDsaShake128s).expect("SLH-DSA set");
        let pk = vec![0u8; scheme.public_key_len()];
        let err = scheme.verify(b"m", &[0u8; 16], &pk).expect_err("signature too short");
        assert_eq!(
            err,
            SchemeError::InvalidBufferLength { what: "signature", expected: 7856, actual: 16 }
        );
    }
}

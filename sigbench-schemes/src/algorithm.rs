//! Registry of the signature algorithms sigbench knows about.
//!
//! Every algorithm is listed here whether or not its backend was compiled in,
//! so lookups can tell "unknown name" apart from "not enabled at compile-time".

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;
use std::str::FromStr;

use crate::error::SchemeError;

/// Signature scheme family, one per backend crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// ML-DSA (FIPS 204), backed by `fips204`
    MlDsa,
    /// FN-DSA (FIPS 206 draft, Falcon), backed by `fn-dsa`
    FnDsa,
    /// SLH-DSA (FIPS 205), backed by `fips205`
    SlhDsa,
}

impl Family {
    /// Cargo feature that compiles this family in.
    #[must_use]
    pub const fn feature(&self) -> &'static str {
        match self {
            Family::MlDsa => "ml-dsa",
            Family::FnDsa => "fn-dsa",
            Family::SlhDsa => "slh-dsa",
        }
    }

    /// Whether this family's backend is part of the current build.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Family::MlDsa => cfg!(feature = "ml-dsa"),
            Family::FnDsa => cfg!(feature = "fn-dsa"),
            Family::SlhDsa => cfg!(feature = "slh-dsa"),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::MlDsa => write!(f, "ML-DSA"),
            Family::FnDsa => write!(f, "FN-DSA"),
            Family::SlhDsa => write!(f, "SLH-DSA"),
        }
    }
}

/// A concrete signature parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// ML-DSA-44 (Dilithium2), NIST level 2
    MlDsa44,
    /// ML-DSA-65 (Dilithium3), NIST level 3
    MlDsa65,
    /// ML-DSA-87 (Dilithium5), NIST level 5
    MlDsa87,
    /// FN-DSA-512 (Falcon-512), NIST level 1
    FnDsa512,
    /// FN-DSA-1024 (Falcon-1024), NIST level 5
    FnDsa1024,
    /// SLH-DSA-SHAKE-128s, NIST level 1
    SlhDsaShake128s,
    /// SLH-DSA-SHAKE-192s, NIST level 3
    SlhDsaShake192s,
    /// SLH-DSA-SHAKE-256s, NIST level 5
    SlhDsaShake256s,
}

impl Algorithm {
    /// Every registered algorithm, in listing order.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::MlDsa44,
        Algorithm::MlDsa65,
        Algorithm::MlDsa87,
        Algorithm::FnDsa512,
        Algorithm::FnDsa1024,
        Algorithm::SlhDsaShake128s,
        Algorithm::SlhDsaShake192s,
        Algorithm::SlhDsaShake256s,
    ];

    /// Canonical name, as written to reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::MlDsa44 => "ML-DSA-44",
            Algorithm::MlDsa65 => "ML-DSA-65",
            Algorithm::MlDsa87 => "ML-DSA-87",
            Algorithm::FnDsa512 => "FN-DSA-512",
            Algorithm::FnDsa1024 => "FN-DSA-1024",
            Algorithm::SlhDsaShake128s => "SLH-DSA-SHAKE-128s",
            Algorithm::SlhDsaShake192s => "SLH-DSA-SHAKE-192s",
            Algorithm::SlhDsaShake256s => "SLH-DSA-SHAKE-256s",
        }
    }

    /// Pre-standard names accepted on lookup.
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Algorithm::MlDsa44 => &["Dilithium2"],
            Algorithm::MlDsa65 => &["Dilithium3"],
            Algorithm::MlDsa87 => &["Dilithium5"],
            Algorithm::FnDsa512 => &["Falcon-512"],
            Algorithm::FnDsa1024 => &["Falcon-1024"],
            Algorithm::SlhDsaShake128s | Algorithm::SlhDsaShake192s | Algorithm::SlhDsaShake256s => {
                &[]
            }
        }
    }

    /// Backend family
    #[must_use]
    pub const fn family(&self) -> Family {
        match self {
            Algorithm::MlDsa44 | Algorithm::MlDsa65 | Algorithm::MlDsa87 => Family::MlDsa,
            Algorithm::FnDsa512 | Algorithm::FnDsa1024 => Family::FnDsa,
            Algorithm::SlhDsaShake128s | Algorithm::SlhDsaShake192s | Algorithm::SlhDsaShake256s => {
                Family::SlhDsa
            }
        }
    }

    /// NIST security category
    #[must_use]
    pub const fn nist_security_level(&self) -> u8 {
        match self {
            Algorithm::FnDsa512 | Algorithm::SlhDsaShake128s => 1,
            Algorithm::MlDsa44 => 2,
            Algorithm::MlDsa65 | Algorithm::SlhDsaShake192s => 3,
            Algorithm::MlDsa87 | Algorithm::FnDsa1024 | Algorithm::SlhDsaShake256s => 5,
        }
    }

    /// Public key size in bytes
    #[must_use]
    pub const fn public_key_len(&self) -> usize {
        match self {
            Algorithm::MlDsa44 => 1312,
            Algorithm::MlDsa65 => 1952,
            Algorithm::MlDsa87 => 2592,
            Algorithm::FnDsa512 => 897,
            Algorithm::FnDsa1024 => 1793,
            Algorithm::SlhDsaShake128s => 32,
            Algorithm::SlhDsaShake192s => 48,
            Algorithm::SlhDsaShake256s => 64,
        }
    }

    /// Secret key size in bytes
    #[must_use]
    pub const fn secret_key_len(&self) -> usize {
        match self {
            Algorithm::MlDsa44 => 2560,
            Algorithm::MlDsa65 => 4032,
            Algorithm::MlDsa87 => 4896,
            Algorithm::FnDsa512 => 1281,
            Algorithm::FnDsa1024 => 2305,
            Algorithm::SlhDsaShake128s => 64,
            Algorithm::SlhDsaShake192s => 96,
            Algorithm::SlhDsaShake256s => 128,
        }
    }

    /// Maximum signature size in bytes
    #[must_use]
    pub const fn signature_len(&self) -> usize {
        match self {
            Algorithm::MlDsa44 => 2420,
            Algorithm::MlDsa65 => 3309,
            Algorithm::MlDsa87 => 4627,
            Algorithm::FnDsa512 => 666,
            Algorithm::FnDsa1024 => 1280,
            Algorithm::SlhDsaShake128s => 7856,
            Algorithm::SlhDsaShake192s => 16224,
            Algorithm::SlhDsaShake256s => 29792,
        }
    }

    /// Whether the backend for this algorithm is compiled in.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.family().is_enabled()
    }

    /// Look up an algorithm by canonical name or alias, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Algorithm> {
        let name = name.trim();
        Self::ALL.into_iter().find(|algorithm| {
            algorithm.name().eq_ignore_ascii_case(name)
                || algorithm.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| SchemeError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_canonical_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
        }
    }

    #[test]
    fn test_lookup_by_legacy_alias() {
        assert_eq!(Algorithm::from_name("Dilithium2"), Some(Algorithm::MlDsa44));
        assert_eq!(Algorithm::from_name("Dilithium3"), Some(Algorithm::MlDsa65));
        assert_eq!(Algorithm::from_name("Dilithium5"), Some(Algorithm::MlDsa87));
        assert_eq!(Algorithm::from_name("Falcon-512"), Some(Algorithm::FnDsa512));
        assert_eq!(Algorithm::from_name("Falcon-1024"), Some(Algorithm::FnDsa1024));
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(Algorithm::from_name("  ml-dsa-65 "), Some(Algorithm::MlDsa65));
        assert_eq!(Algorithm::from_name("falcon-512"), Some(Algorithm::FnDsa512));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Algorithm::from_name("Rainbow-I"), None);
        let err = "Rainbow-I".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SchemeError::UnknownAlgorithm("Rainbow-I".to_string()));
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_families_and_levels() {
        assert_eq!(Algorithm::MlDsa44.family(), Family::MlDsa);
        assert_eq!(Algorithm::FnDsa1024.family(), Family::FnDsa);
        assert_eq!(Algorithm::SlhDsaShake192s.family(), Family::SlhDsa);

        assert_eq!(Algorithm::MlDsa44.nist_security_level(), 2);
        assert_eq!(Algorithm::FnDsa512.nist_security_level(), 1);
        assert_eq!(Algorithm::SlhDsaShake256s.nist_security_level(), 5);
    }

    #[test]
    fn test_feature_names() {
        assert_eq!(Family::MlDsa.feature(), "ml-dsa");
        assert_eq!(Family::FnDsa.feature(), "fn-dsa");
        assert_eq!(Family::SlhDsa.feature(), "slh-dsa");
        assert_eq!(Family::MlDsa.is_enabled(), cfg!(feature = "ml-dsa"));
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(Algorithm::SlhDsaShake128s.to_string(), "SLH-DSA-SHAKE-128s");
        assert_eq!(Family::FnDsa.to_string(), "FN-DSA");
    }
}

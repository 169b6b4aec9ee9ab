#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # sigbench Signature Schemes
//!
//! A small, buffer-oriented view of post-quantum signature schemes, opened by
//! name. Callers size their own public key, secret key and signature buffers
//! from the handle, then call `keypair`, `sign` and `verify` as many times as
//! they like on the same buffers.
//!
//! ## Backends
//!
//! | Family  | Crate     | Feature   | Parameter sets                         |
//! |---------|-----------|-----------|----------------------------------------|
//! | ML-DSA  | `fips204` | `ml-dsa`  | ML-DSA-44, ML-DSA-65, ML-DSA-87        |
//! | FN-DSA  | `fn-dsa`  | `fn-dsa`  | FN-DSA-512, FN-DSA-1024                |
//! | SLH-DSA | `fips205` | `slh-dsa` | SLH-DSA-SHAKE-128s, -192s, -256s       |
//!
//! Every algorithm is known to the registry regardless of features. Opening
//! one whose feature is off fails with [`SchemeError::NotEnabled`]; an
//! unregistered name fails with [`SchemeError::UnknownAlgorithm`].
//!
//! ## Example
//!
//! ```no_run
//! use sigbench_schemes::{Library, SchemeProvider};
//!
//! let mut scheme = Library::new().open("ML-DSA-44")?;
//! let mut pk = vec![0u8; scheme.public_key_len()];
//! let mut sk = vec![0u8; scheme.secret_key_len()];
//! let mut sig = vec![0u8; scheme.signature_len()];
//!
//! let message = [0xABu8; 32];
//! scheme.keypair(&mut pk, &mut sk)?;
//! let sig_len = scheme.sign(&mut sig, &message, &sk)?;
//! scheme.verify(&message, &sig[..sig_len], &pk)?;
//! # Ok::<(), sigbench_schemes::SchemeError>(())
//! ```

pub mod algorithm;
pub mod error;
pub mod scheme;

#[cfg(feature = "fn-dsa")]
pub mod fn_dsa;
#[cfg(feature = "ml-dsa")]
pub mod ml_dsa;
#[cfg(feature = "slh-dsa")]
pub mod slh_dsa;

pub use algorithm::{Algorithm, Family};
pub use error::{Result, SchemeError};
pub use scheme::{Library, SchemeProvider, SignatureScheme};

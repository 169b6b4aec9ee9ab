//! Integration tests for opening schemes by name and reusing buffers across
//! repeated operations.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

use sigbench_schemes::{Algorithm, Library, SchemeError, SchemeProvider, SignatureScheme};

const MESSAGE: [u8; 32] = [0xAB; 32];

struct Buffers {
    public_key: Vec<u8>,
    secret_key: Vec<u8>,
    signature: Vec<u8>,
}

impl Buffers {
    fn for_scheme(scheme: &dyn SignatureScheme) -> Self {
        Self {
            public_key: vec![0u8; scheme.public_key_len()],
            secret_key: vec![0u8; scheme.secret_key_len()],
            signature: vec![0u8; scheme.signature_len()],
        }
    }
}

fn lattice_algorithms() -> Vec<Algorithm> {
    Library::new()
        .enabled_algorithms()
        .into_iter()
        .filter(|a| a.family() != sigbench_schemes::Family::SlhDsa)
        .collect()
}

#[test]
fn test_reused_buffers_hold_last_iteration_output() {
    let library = Library::new();
    for algorithm in lattice_algorithms() {
        let mut scheme = library.open(algorithm.name()).unwrap();
        let mut buffers = Buffers::for_scheme(scheme.as_ref());

        scheme.keypair(&mut buffers.public_key, &mut buffers.secret_key).unwrap();
        let first_pk = buffers.public_key.clone();
        scheme.keypair(&mut buffers.public_key, &mut buffers.secret_key).unwrap();
        assert_ne!(first_pk, buffers.public_key, "{algorithm}: keygen should overwrite in place");

        let len = scheme.sign(&mut buffers.signature, &MESSAGE, &buffers.secret_key).unwrap();
        scheme.verify(&MESSAGE, &buffers.signature[..len], &buffers.public_key).unwrap();

        // The first public key no longer matches the secret key in the buffer.
        assert_eq!(
            scheme.verify(&MESSAGE, &buffers.signature[..len], &first_pk),
            Err(SchemeError::SignatureRejected),
            "{algorithm}"
        );
    }
}

#[test]
fn test_legacy_names_open_the_same_scheme() {
    let library = Library::new();
    for (legacy, canonical) in [
        ("Dilithium2", "ML-DSA-44"),
        ("Dilithium3", "ML-DSA-65"),
        ("Dilithium5", "ML-DSA-87"),
        ("Falcon-512", "FN-DSA-512"),
    ] {
        match library.open(legacy) {
            Ok(scheme) => assert_eq!(scheme.name(), canonical),
            Err(err) => assert_eq!(err, SchemeError::NotEnabled(canonical.to_string())),
        }
    }
}

#[test]
fn test_unavailable_errors_are_flagged() {
    let err = Library::new().open("Picnic-L1").err().unwrap();
    assert!(err.is_unavailable());
    assert!(!SchemeError::SignatureRejected.is_unavailable());
    assert_eq!(err.to_string(), "Unknown signature algorithm: Picnic-L1");
    assert_eq!(
        SchemeError::NotEnabled("FN-DSA-512".into()).to_string(),
        "FN-DSA-512 was not enabled at compile-time"
    );
}

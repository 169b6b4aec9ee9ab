//! Scriptable in-memory signature provider for session tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::cast_possible_truncation)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use sigbench_schemes::{SchemeError, SchemeProvider, SignatureScheme};

/// Behaviour of one fake algorithm.
#[derive(Debug, Clone)]
pub struct FakeAlgorithm {
    pub name: String,
    pub public_key_len: usize,
    pub secret_key_len: usize,
    pub signature_len: usize,
    /// Length `sign` reports; may be shorter than `signature_len`.
    pub produced_len: usize,
    /// 1-based call number on which the operation fails.
    pub keygen_fails_at: Option<usize>,
    pub sign_fails_at: Option<usize>,
    pub verify_fails_at: Option<usize>,
    /// Sleep inside every keygen call.
    pub keygen_delay: Duration,
}

impl FakeAlgorithm {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            public_key_len: 16,
            secret_key_len: 32,
            signature_len: 48,
            produced_len: 40,
            keygen_fails_at: None,
            sign_fails_at: None,
            verify_fails_at: None,
            keygen_delay: Duration::ZERO,
        }
    }
}

/// What the fake saw, shared with the test after the session ends.
#[derive(Debug, Default)]
pub struct CallLog {
    pub opened: Vec<String>,
    pub keygen_calls: usize,
    pub sign_calls: usize,
    pub verify_calls: usize,
    /// Secret key passed to the last `sign` call.
    pub last_signing_key: Vec<u8>,
    /// Signature passed to the last `verify` call.
    pub last_verified_signature: Vec<u8>,
    /// Public key passed to the last `verify` call.
    pub last_verifying_key: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct FakeProvider {
    algorithms: Vec<FakeAlgorithm>,
    disabled: Vec<String>,
    pub log: Rc<RefCell<CallLog>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, fake: FakeAlgorithm) -> Self {
        self.algorithms.push(fake);
        self
    }

    /// Names that exist but report "not enabled".
    pub fn with_disabled(mut self, name: &str) -> Self {
        self.disabled.push(name.to_string());
        self
    }
}

impl SchemeProvider for FakeProvider {
    fn open(&self, name: &str) -> sigbench_schemes::Result<Box<dyn SignatureScheme>> {
        if self.disabled.iter().any(|d| d == name) {
            return Err(SchemeError::NotEnabled(name.to_string()));
        }
        let fake = self
            .algorithms
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SchemeError::UnknownAlgorithm(name.to_string()))?;
        self.log.borrow_mut().opened.push(name.to_string());
        Ok(Box::new(FakeScheme { fake: fake.clone(), log: Rc::clone(&self.log) }))
    }
}

/// Keys are filled with the keygen call number, signatures with the sign
/// call number, so tests can tell which iteration produced a buffer.
struct FakeScheme {
    fake: FakeAlgorithm,
    log: Rc<RefCell<CallLog>>,
}

impl SignatureScheme for FakeScheme {
    fn name(&self) -> &str {
        &self.fake.name
    }

    fn public_key_len(&self) -> usize {
        self.fake.public_key_len
    }

    fn secret_key_len(&self) -> usize {
        self.fake.secret_key_len
    }

    fn signature_len(&self) -> usize {
        self.fake.signature_len
    }

    fn keypair(&mut self, public_key: &mut [u8], secret_key: &mut [u8]) -> sigbench_schemes::Result<()> {
        if !self.fake.keygen_delay.is_zero() {
            std::thread::sleep(self.fake.keygen_delay);
        }
        let mut log = self.log.borrow_mut();
        log.keygen_calls += 1;
        if self.fake.keygen_fails_at == Some(log.keygen_calls) {
            return Err(SchemeError::KeyGeneration("scripted failure".to_string()));
        }
        public_key.fill(log.keygen_calls as u8);
        secret_key.fill(log.keygen_calls as u8);
        Ok(())
    }

    fn sign(
        &mut self,
        signature: &mut [u8],
        _message: &[u8],
        secret_key: &[u8],
    ) -> sigbench_schemes::Result<usize> {
        let mut log = self.log.borrow_mut();
        log.sign_calls += 1;
        log.last_signing_key = secret_key.to_vec();
        if self.fake.sign_fails_at == Some(log.sign_calls) {
            return Err(SchemeError::Signing("scripted failure".to_string()));
        }
        signature[..self.fake.produced_len].fill(log.sign_calls as u8);
        Ok(self.fake.produced_len)
    }

    fn verify(
        &mut self,
        _message: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> sigbench_schemes::Result<()> {
        let mut log = self.log.borrow_mut();
        log.verify_calls += 1;
        log.last_verified_signature = signature.to_vec();
        log.last_verifying_key = public_key.to_vec();
        if self.fake.verify_fails_at == Some(log.verify_calls) {
            return Err(SchemeError::SignatureRejected);
        }
        Ok(())
    }
}

/// Timing fields of a data row, checked for exactly four decimals.
pub fn timings(line: &str) -> [f64; 3] {
    let fields: Vec<&str> = line.split(',').collect();
    assert_eq!(fields.len(), 5, "row {line:?} should have five fields");
    let mut out = [0.0_f64; 3];
    for (slot, field) in out.iter_mut().zip(&fields[2..]) {
        let (_, decimals) = field.split_once('.').expect("timing has a decimal point");
        assert_eq!(decimals.len(), 4, "timing {field:?} should have four decimals");
        *slot = field.parse().unwrap();
        assert!(slot.is_finite() && *slot >= 0.0);
    }
    out
}

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransceiver and crypto setup so
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};

use crate::constants::{AES_BLOCK_LEN, TAM1_CHALLENGE_LEN, TAM1_CONSTANT, TAM1_TRND_LEN};
use crate::crypto::{MemoryKeyStore, RandomSource};
use crate::session::{SessionBuilder, TagSession};
use crate::transport::MockTransceiver;
use crate::types::KeyType;
use crate::utils::{reverse, reversed};
use crate::Result;

/// Deterministic random source: repeats `pattern` forever.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct FixedRandom {
    pattern: Vec<u8>,
    pos: usize,
}

impl FixedRandom {
    /// Random source that repeats `pattern`.
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.pattern.is_empty() {
            buf.fill(0);
            return Ok(());
        }
        for b in buf.iter_mut() {
            *b = self.pattern[self.pos % self.pattern.len()];
            self.pos += 1;
        }
        Ok(())
    }
}

/// Build a MockTransceiver pre-seeded with the given responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransceiver {
    let mut mock = MockTransceiver::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Session over a MockTransceiver seeded with `responses`.
#[doc(hidden)]
pub fn mock_session(responses: Vec<Vec<u8>>) -> TagSession<MockTransceiver> {
    TagSession::new(mock_with_responses(responses))
}

/// Session with a fixed random pattern and one AES-128 key stored under
/// `(key_no, 0)`. Uses the software backend.
#[doc(hidden)]
pub fn tam1_session(
    key_no: u16,
    key: &[u8; AES_BLOCK_LEN],
    random: &[u8],
) -> Result<TagSession<MockTransceiver>> {
    let store = MemoryKeyStore::new().with_key(key_no, 0, key, KeyType::Aes128)?;
    SessionBuilder::new()
        .with_transceiver(MockTransceiver::new())
        .with_random(Box::new(FixedRandom::new(random)))
        .with_key_store(Box::new(store))
        .build()
}

/// What a genuine tag answers to a TAM1 request, in wire order, for the
/// key as it is kept in the key store of a software backend session.
#[doc(hidden)]
pub fn tam1_tag_response(
    stored_key: &[u8; AES_BLOCK_LEN],
    challenge: &[u8; TAM1_CHALLENGE_LEN],
    trnd: &[u8; TAM1_TRND_LEN],
) -> Vec<u8> {
    tam1_tag_response_with_constant(stored_key, challenge, trnd, TAM1_CONSTANT)
}

/// Same as `tam1_tag_response` with an arbitrary trailing constant.
#[doc(hidden)]
pub fn tam1_tag_response_with_constant(
    stored_key: &[u8; AES_BLOCK_LEN],
    challenge: &[u8; TAM1_CHALLENGE_LEN],
    trnd: &[u8; TAM1_TRND_LEN],
    constant: [u8; 2],
) -> Vec<u8> {
    let mut plain = Vec::with_capacity(AES_BLOCK_LEN);
    plain.extend_from_slice(challenge);
    plain.extend_from_slice(trnd);
    plain.extend_from_slice(&constant);
    reverse(&mut plain);

    let mut key = *stored_key;
    reverse(&mut key);
    let cipher = Aes128::new(GenericArray::from_slice(&key));
    let mut block = aes::Block::clone_from_slice(&plain);
    cipher.encrypt_block(&mut block);
    reversed(&block)
}

// libvicc/src/session/auth.rs

//! Tag authentication (ISO/IEC 29167-10 TAM1).
//!
//! `challenge` sends a fresh nonce; the tag computes its answer silently
//! and `read_buffer` collects it. The answer, once byte-reversed and
//! decrypted, must be `IChallenge (10) || TRnd (4) || C_TAM1 (2)`.

use log::{debug, warn};
use zeroize::Zeroizing;

use crate::constants::{AES_BLOCK_LEN, TAM1_CHALLENGE_LEN, TAM1_CONSTANT, TAM1_TRND_LEN};
use crate::protocol::Command;
use crate::session::{AuthBackend, TagSession};
use crate::transport::Transceiver;
use crate::types::{CipherMode, KeyType, OptionFlag};
use crate::utils::{reverse, Hex};
use crate::{Error, Result};

/// Interrogator challenge handed back to the caller. The session does not
/// keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthChallenge([u8; TAM1_CHALLENGE_LEN]);

impl AuthChallenge {
    /// Wrap a nonce obtained earlier.
    pub fn from_bytes(bytes: [u8; TAM1_CHALLENGE_LEN]) -> Self {
        Self(bytes)
    }

    /// The nonce as sent to the tag.
    pub fn as_bytes(&self) -> &[u8; TAM1_CHALLENGE_LEN] {
        &self.0
    }
}

/// Parameters for verifying a TAM1 answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tam1Verification {
    /// Key number in the key store
    pub key_no: u16,
    /// Key version in the key store
    pub key_version: u16,
    /// Nonce returned by `challenge`
    pub challenge: AuthChallenge,
}

impl<T: Transceiver> TagSession<T> {
    /// Send a TAM1 challenge for key `key_no_card` of the tag and return the
    /// nonce that was sent. The tag does not answer a challenge, so a
    /// timeout is the expected outcome.
    pub fn challenge(&mut self, key_no_card: u8) -> Result<AuthChallenge> {
        let challenge = self.fresh_challenge()?;
        let cmd = Command::Challenge {
            key_no: key_no_card,
            challenge: *challenge.as_bytes(),
        };
        match self.execute(&cmd, OptionFlag::Off, false) {
            Err(Error::Timeout) => {}
            Ok(resp) => warn!("tag answered a challenge with {} bytes", resp.len()),
            Err(e) => return Err(e),
        }
        Ok(challenge)
    }

    /// Fetch the response buffer of the last challenge.
    ///
    /// Without verification the response is returned byte-reversed
    /// (natural order). With verification the answer is decrypted and
    /// checked; on success the response is returned in wire order.
    pub fn read_buffer(&mut self, verify: Option<&Tam1Verification>) -> Result<Vec<u8>> {
        let key = verify
            .map(|v| self.tam1_key(v.key_no, v.key_version))
            .transpose()?;

        let mut resp = self.execute(&Command::ReadBuffer, OptionFlag::Off, false)?;
        reverse(&mut resp);

        if let (Some(v), Some(key)) = (verify, key) {
            self.verify_tam1(&key, &resp, &v.challenge)?;
            reverse(&mut resp);
        }
        Ok(resp)
    }

    /// One-shot TAM1 authenticate: the tag answers immediately. Returns the
    /// tag random number of a verified answer.
    pub fn authenticate_tam1(
        &mut self,
        key_no_card: u8,
        key_no: u16,
        key_version: u16,
    ) -> Result<[u8; TAM1_TRND_LEN]> {
        let key = self.tam1_key(key_no, key_version)?;
        let challenge = self.fresh_challenge()?;
        let cmd = Command::Authenticate {
            key_no: key_no_card,
            challenge: *challenge.as_bytes(),
        };
        let mut resp = self.execute(&cmd, OptionFlag::Off, false)?;
        reverse(&mut resp);
        self.verify_tam1(&key, &resp, &challenge)
    }

    fn fresh_challenge(&mut self) -> Result<AuthChallenge> {
        let mut nonce = [0u8; TAM1_CHALLENGE_LEN];
        self.rng.fill(&mut nonce)?;
        Ok(AuthChallenge(nonce))
    }

    /// Key bytes as the cipher expects them.
    fn tam1_key(&self, key_no: u16, key_version: u16) -> Result<Zeroizing<Vec<u8>>> {
        let stored = self.key_store.get_key(key_no, key_version)?;
        if stored.key_type() != KeyType::Aes128 {
            return Err(Error::KeyType(format!(
                "TAM1 requires an AES-128 key, key {} v{} is {:?}",
                key_no,
                key_version,
                stored.key_type()
            )));
        }
        let mut bytes = Zeroizing::new(stored.as_bytes().to_vec());
        if self.config.auth_backend == AuthBackend::Software {
            reverse(&mut bytes);
        }
        Ok(bytes)
    }

    /// Check a natural-order TAM1 answer and return TRnd.
    fn verify_tam1(
        &mut self,
        key: &[u8],
        answer: &[u8],
        challenge: &AuthChallenge,
    ) -> Result<[u8; TAM1_TRND_LEN]> {
        let block = answer.get(..AES_BLOCK_LEN).ok_or(Error::InvalidLength {
            expected: AES_BLOCK_LEN,
            actual: answer.len(),
        })?;

        self.cipher.load_key(key, KeyType::Aes128)?;
        let mut plain = Zeroizing::new(self.cipher.decrypt(CipherMode::Ecb, block)?);
        if plain.len() != AES_BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: AES_BLOCK_LEN,
                actual: plain.len(),
            });
        }
        reverse(&mut plain);

        let (echo, rest) = plain.split_at(TAM1_CHALLENGE_LEN);
        let (trnd, constant) = rest.split_at(TAM1_TRND_LEN);

        if constant != TAM1_CONSTANT {
            debug!("TAM1 constant mismatch: {}", Hex(constant));
            return Err(Error::Authentication("C_TAM1 constant mismatch".into()));
        }
        if echo != challenge.as_bytes() {
            debug!("TAM1 challenge echo mismatch: {}", Hex(echo));
            return Err(Error::Authentication("challenge echo mismatch".into()));
        }

        let mut out = [0u8; TAM1_TRND_LEN];
        out.copy_from_slice(trnd);
        debug!("TAM1 verified, TRnd {}", Hex(&out));
        Ok(out)
    }
}

// libvicc/src/crypto/cipher.rs

//! Symmetric cipher used to verify tag responses.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

use crate::constants::AES_BLOCK_LEN;
use crate::types::{CipherMode, KeyType};
use crate::{Error, Result};

/// Symmetric block cipher primitive. A key must be loaded before use.
pub trait SymmetricCipher {
    /// Load a key; replaces any previously loaded key.
    fn load_key(&mut self, key: &[u8], key_type: KeyType) -> Result<()>;

    /// Decrypt `input`, a non-empty multiple of the block size.
    fn decrypt(&mut self, mode: CipherMode, input: &[u8]) -> Result<Vec<u8>>;

    /// Encrypt `input`, a non-empty multiple of the block size.
    fn encrypt(&mut self, mode: CipherMode, input: &[u8]) -> Result<Vec<u8>>;
}

enum LoadedKey {
    Aes128(Box<Aes128>),
    Aes192(Box<Aes192>),
    Aes256(Box<Aes256>),
}

impl LoadedKey {
    fn decrypt_block(&self, block: &mut Block) {
        match self {
            LoadedKey::Aes128(c) => c.decrypt_block(block),
            LoadedKey::Aes192(c) => c.decrypt_block(block),
            LoadedKey::Aes256(c) => c.decrypt_block(block),
        }
    }

    fn encrypt_block(&self, block: &mut Block) {
        match self {
            LoadedKey::Aes128(c) => c.encrypt_block(block),
            LoadedKey::Aes192(c) => c.encrypt_block(block),
            LoadedKey::Aes256(c) => c.encrypt_block(block),
        }
    }
}

/// AES in software (RustCrypto `aes`).
#[derive(Default)]
pub struct SoftwareAes {
    key: Option<LoadedKey>,
}

impl SoftwareAes {
    /// Cipher with no key loaded.
    pub fn new() -> Self {
        Self::default()
    }

    fn loaded(&self) -> Result<&LoadedKey> {
        self.key
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("no key loaded".into()))
    }
}

impl std::fmt::Debug for SoftwareAes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftwareAes")
            .field("key_loaded", &self.key.is_some())
            .finish()
    }
}

fn check_block_aligned(input: &[u8]) -> Result<()> {
    if input.is_empty() || input.len() % AES_BLOCK_LEN != 0 {
        return Err(Error::InvalidParameter(format!(
            "cipher input must be a non-zero multiple of {AES_BLOCK_LEN} bytes, got {}",
            input.len()
        )));
    }
    Ok(())
}

impl SymmetricCipher for SoftwareAes {
    fn load_key(&mut self, key: &[u8], key_type: KeyType) -> Result<()> {
        let bad_len = |_| Error::InvalidLength {
            expected: key_type.key_len(),
            actual: key.len(),
        };
        let loaded = match key_type {
            KeyType::Aes128 => LoadedKey::Aes128(Box::new(
                Aes128::new_from_slice(key).map_err(bad_len)?,
            )),
            KeyType::Aes192 => LoadedKey::Aes192(Box::new(
                Aes192::new_from_slice(key).map_err(bad_len)?,
            )),
            KeyType::Aes256 => LoadedKey::Aes256(Box::new(
                Aes256::new_from_slice(key).map_err(bad_len)?,
            )),
            other => return Err(Error::KeyType(format!("{other:?} not supported by AES"))),
        };
        self.key = Some(loaded);
        Ok(())
    }

    fn decrypt(&mut self, mode: CipherMode, input: &[u8]) -> Result<Vec<u8>> {
        let CipherMode::Ecb = mode;
        check_block_aligned(input)?;
        let key = self.loaded()?;
        let mut out = Vec::with_capacity(input.len());
        for chunk in input.chunks(AES_BLOCK_LEN) {
            let mut block = Block::clone_from_slice(chunk);
            key.decrypt_block(&mut block);
            out.extend_from_slice(&block);
        }
        Ok(out)
    }

    fn encrypt(&mut self, mode: CipherMode, input: &[u8]) -> Result<Vec<u8>> {
        let CipherMode::Ecb = mode;
        check_block_aligned(input)?;
        let key = self.loaded()?;
        let mut out = Vec::with_capacity(input.len());
        for chunk in input.chunks(AES_BLOCK_LEN) {
            let mut block = Block::clone_from_slice(chunk);
            key.encrypt_block(&mut block);
            out.extend_from_slice(&block);
        }
        Ok(out)
    }
}

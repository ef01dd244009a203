// libvicc/src/crypto/keystore.rs

//! Key storage addressed by key number and version.

use std::collections::HashMap;

use zeroize::Zeroizing;

use crate::types::KeyType;
use crate::{Error, Result};

/// Key material handed out by a key store. Wiped on drop.
#[derive(Clone)]
pub struct StoredKey {
    bytes: Zeroizing<Vec<u8>>,
    key_type: KeyType,
}

impl StoredKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: Vec<u8>, key_type: KeyType) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
            key_type,
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The key's algorithm.
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }
}

impl std::fmt::Debug for StoredKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredKey")
            .field("key_type", &self.key_type)
            .field("length", &self.bytes.len())
            .finish()
    }
}

/// Key store lookup by key number and version.
pub trait KeyStore {
    /// Look up a key. Missing entries are `Error::KeyNotFound`.
    fn get_key(&self, key_no: u16, key_version: u16) -> Result<StoredKey>;
}

/// In-memory key store.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyStore {
    keys: HashMap<(u16, u16), StoredKey>,
}

impl MemoryKeyStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a key; the length must match the key type.
    pub fn insert(
        &mut self,
        key_no: u16,
        key_version: u16,
        bytes: &[u8],
        key_type: KeyType,
    ) -> Result<()> {
        if bytes.len() != key_type.key_len() {
            return Err(Error::InvalidLength {
                expected: key_type.key_len(),
                actual: bytes.len(),
            });
        }
        self.keys
            .insert((key_no, key_version), StoredKey::new(bytes.to_vec(), key_type));
        Ok(())
    }

    /// Builder style `insert`.
    pub fn with_key(
        mut self,
        key_no: u16,
        key_version: u16,
        bytes: &[u8],
        key_type: KeyType,
    ) -> Result<Self> {
        self.insert(key_no, key_version, bytes, key_type)?;
        Ok(self)
    }
}

impl KeyStore for MemoryKeyStore {
    fn get_key(&self, key_no: u16, key_version: u16) -> Result<StoredKey> {
        self.keys
            .get(&(key_no, key_version))
            .cloned()
            .ok_or(Error::KeyNotFound {
                key_no,
                key_version,
            })
    }
}

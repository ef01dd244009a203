// libvicc/src/session/builder.rs

//! Builder for `TagSession`.

use crate::crypto::{KeyStore, MemoryKeyStore, OsRandom, RandomSource, SoftwareAes, SymmetricCipher};
use crate::session::{AuthBackend, SessionConfig, TagSession};
use crate::transport::Transceiver;
use crate::{Error, Result};

/// Helper to construct a TagSession with optional collaborators.
/// Unset collaborators fall back to `OsRandom`, an empty `MemoryKeyStore`
/// and `SoftwareAes`.
pub struct SessionBuilder<T: Transceiver> {
    transceiver: Option<T>,
    rng: Option<Box<dyn RandomSource>>,
    key_store: Option<Box<dyn KeyStore>>,
    cipher: Option<Box<dyn SymmetricCipher>>,
    config: SessionConfig,
}

impl<T: Transceiver> Default for SessionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transceiver> SessionBuilder<T> {
    /// Empty builder.
    pub fn new() -> Self {
        Self {
            transceiver: None,
            rng: None,
            key_store: None,
            cipher: None,
            config: SessionConfig::default(),
        }
    }

    /// Transceiver the session drives (required).
    pub fn with_transceiver(mut self, transceiver: T) -> Self {
        self.transceiver = Some(transceiver);
        self
    }

    /// Random source for challenges and password masks.
    pub fn with_random(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Key store for TAM1 verification.
    pub fn with_key_store(mut self, key_store: Box<dyn KeyStore>) -> Self {
        self.key_store = Some(key_store);
        self
    }

    /// Cipher for TAM1 verification.
    pub fn with_cipher(mut self, cipher: Box<dyn SymmetricCipher>) -> Self {
        self.cipher = Some(cipher);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable chained multi-block reads.
    pub fn chaining(mut self, enabled: bool) -> Self {
        self.config.chaining = enabled;
        self
    }

    /// Response bytes per chained sub-transfer. Must be non-zero.
    pub fn transfer_budget(mut self, bytes: usize) -> Self {
        self.config.transfer_budget = bytes;
        self
    }

    /// Answer fast reads at the upper data rate.
    pub fn fast_data_rate(mut self, enabled: bool) -> Self {
        self.config.fast_data_rate = enabled;
        self
    }

    /// Backend that verifies TAM1 responses.
    pub fn auth_backend(mut self, backend: AuthBackend) -> Self {
        self.config.auth_backend = backend;
        self
    }

    /// Consume the builder. Requires a transceiver.
    pub fn build(self) -> Result<TagSession<T>> {
        let transceiver = self
            .transceiver
            .ok_or(Error::MissingCollaborator("transceiver"))?;
        if self.config.transfer_budget == 0 {
            return Err(Error::InvalidParameter(
                "transfer budget must be non-zero".into(),
            ));
        }
        Ok(TagSession::from_parts(
            transceiver,
            self.rng.unwrap_or_else(|| Box::new(OsRandom)),
            self.key_store
                .unwrap_or_else(|| Box::new(MemoryKeyStore::new())),
            self.cipher.unwrap_or_else(|| Box::new(SoftwareAes::new())),
            self.config,
        ))
    }
}

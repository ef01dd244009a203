// libvicc/src/session/mod.rs

//! Command session bound to one transceiver.
//!
//! Every command runs the same pipeline: the Option bit (and timing, for
//! commands that need it) is written to the transceiver, the frame is
//! encoded and exchanged, write-alike commands with Option ON collect their
//! response through an EOF, and tag error responses are translated last.

use log::{debug, trace};

use crate::crypto::{KeyStore, MemoryKeyStore, OsRandom, RandomSource, SoftwareAes, SymmetricCipher};
use crate::protocol::{Command, compute_error_code};
use crate::transport::Transceiver;
use crate::types::{ConfigKey, ExchangeMode, OperatingMode, OptionFlag};
use crate::utils::Hex;
use crate::Result;

pub mod auth;
pub mod builder;
pub mod chaining;
pub mod config;
pub mod operations;
pub mod options;
pub mod write_alike;

pub use auth::{AuthChallenge, Tam1Verification};
pub use builder::SessionBuilder;
pub use chaining::ReadKind;
pub use config::{AuthBackend, SessionConfig};
pub use options::fast_rx_data_rate;

/// Session handle. Owns the transceiver and the crypto collaborators; one
/// command is in flight at a time.
pub struct TagSession<T: Transceiver = Box<dyn Transceiver>> {
    transceiver: T,
    rng: Box<dyn RandomSource>,
    key_store: Box<dyn KeyStore>,
    cipher: Box<dyn SymmetricCipher>,
    config: SessionConfig,
}

impl<T: Transceiver> TagSession<T> {
    /// Create a session with default collaborators and configuration.
    pub fn new(transceiver: T) -> Self {
        Self::from_parts(
            transceiver,
            Box::new(OsRandom),
            Box::new(MemoryKeyStore::new()),
            Box::new(SoftwareAes::new()),
            SessionConfig::default(),
        )
    }

    pub(crate) fn from_parts(
        transceiver: T,
        rng: Box<dyn RandomSource>,
        key_store: Box<dyn KeyStore>,
        cipher: Box<dyn SymmetricCipher>,
        config: SessionConfig,
    ) -> Self {
        Self {
            transceiver,
            rng,
            key_store,
            cipher,
            config,
        }
    }

    /// Borrow the transceiver.
    pub fn transceiver(&self) -> &T {
        &self.transceiver
    }

    /// Mutably borrow the transceiver.
    pub fn transceiver_mut(&mut self) -> &mut T {
        &mut self.transceiver
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Give the transceiver back, dropping the session.
    pub fn into_transceiver(self) -> T {
        self.transceiver
    }

    /// Operating mode reported by the transceiver. Unknown values read as ISO.
    pub fn operating_mode(&self) -> Result<OperatingMode> {
        let raw = self.transceiver.get_config(ConfigKey::OperatingMode)?;
        Ok(if raw == OperatingMode::Nfc as u16 {
            OperatingMode::Nfc
        } else {
            OperatingMode::Iso
        })
    }

    /// Single exchange with the transceiver, logged at trace level.
    pub(crate) fn transceive(&mut self, mode: ExchangeMode, frame: &[u8]) -> Result<Vec<u8>> {
        trace!("tx {:?}: {}", mode, Hex(frame));
        let result = self.transceiver.exchange(mode, frame);
        match &result {
            Ok(resp) => trace!("rx: {}", Hex(resp)),
            Err(e) => trace!("rx error: {}", e),
        }
        result
    }

    /// Run one command through the full pipeline and return the response
    /// payload (without the response flags byte).
    pub fn execute(
        &mut self,
        cmd: &Command,
        option: OptionFlag,
        update_timing: bool,
    ) -> Result<Vec<u8>> {
        self.apply_option(option, update_timing)?;
        let frame = cmd.encode();
        debug!("command {:#04x} option={:?}", cmd.opcode(), option);
        let result = self.transceive(ExchangeMode::Default, &frame);
        self.finish(result, option.is_on() && cmd.is_write_alike())
    }

    /// Like `execute`, but the frame goes out in two parts: `header` is
    /// buffered and `payload` completes the exchange.
    pub(crate) fn execute_buffered(
        &mut self,
        opcode: u8,
        header: &[u8],
        payload: &[u8],
        option: OptionFlag,
        write_alike: bool,
    ) -> Result<Vec<u8>> {
        self.apply_option(option, write_alike)?;
        debug!(
            "command {:#04x} option={:?} (buffered, {} data bytes)",
            opcode,
            option,
            payload.len()
        );
        self.transceive(ExchangeMode::BufferFirst, header)?;
        let result = self.transceive(ExchangeMode::BufferLast, payload);
        self.finish(result, option.is_on() && write_alike)
    }

    fn finish(&mut self, result: Result<Vec<u8>>, solicit_eof: bool) -> Result<Vec<u8>> {
        let result = if solicit_eof {
            self.write_alike_handling(result)
        } else {
            result
        };
        compute_error_code(&self.transceiver, result)
    }
}

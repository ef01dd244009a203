// libvicc/src/transport/traits.rs

//! The `Transceiver` trait the session drives.

use crate::constants::UID_LEN;
use crate::types::{ConfigKey, EofKind, ExchangeMode};
use crate::{Error, Result};

/// Transceiver trait abstracts the physical exchange away from the command
/// engine. Implementations own the request flags byte, timing and data rate
/// settings reachable through `get_config`/`set_config`.
///
/// `exchange` returns the tag response without the response flags byte. A
/// response with the error flag set is reported as `Error::Iso15693` and the
/// tag's error code is made available under `ConfigKey::AdditionalInfo`.
pub trait Transceiver {
    /// Send a frame (or buffer part of it, depending on `mode`) and return
    /// the response. Buffering modes return an empty response.
    fn exchange(&mut self, mode: ExchangeMode, data: &[u8]) -> Result<Vec<u8>>;

    /// Send a bare end-of-frame to collect a deferred response.
    fn send_eof(&mut self, kind: EofKind) -> Result<Vec<u8>>;

    /// Read a protocol parameter
    fn get_config(&self, key: ConfigKey) -> Result<u16>;

    /// Write a protocol parameter
    fn set_config(&mut self, key: ConfigKey, value: u16) -> Result<()>;

    /// UID of the activated tag in wire (LSB first) order. The default
    /// implementation reports that no tag has been activated.
    fn serial_no(&self) -> Result<[u8; UID_LEN]> {
        Err(Error::Transceiver("no tag activated".into()))
    }
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn exchange(&mut self, mode: ExchangeMode, data: &[u8]) -> Result<Vec<u8>> {
        (**self).exchange(mode, data)
    }

    fn send_eof(&mut self, kind: EofKind) -> Result<Vec<u8>> {
        (**self).send_eof(kind)
    }

    fn get_config(&self, key: ConfigKey) -> Result<u16> {
        (**self).get_config(key)
    }

    fn set_config(&mut self, key: ConfigKey, value: u16) -> Result<()> {
        (**self).set_config(key, value)
    }

    fn serial_no(&self) -> Result<[u8; UID_LEN]> {
        (**self).serial_no()
    }
}

// libvicc/src/types.rs

//! Small value types shared across the crate.

use crate::Error;
use crate::constants::{OPTION_OFF, OPTION_ON, UID_LEN};
use std::convert::TryFrom;

/// Per-call Option intent. Only OFF/ON exist on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionFlag {
    /// OPTION bit cleared
    #[default]
    Off,
    /// OPTION bit set
    On,
}

impl OptionFlag {
    /// True for `On`.
    pub fn is_on(self) -> bool {
        self == OptionFlag::On
    }
}

impl TryFrom<u8> for OptionFlag {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            OPTION_OFF => Ok(OptionFlag::Off),
            OPTION_ON => Ok(OptionFlag::On),
            other => Err(Error::InvalidParameter(format!(
                "option must be {OPTION_OFF} or {OPTION_ON}, got {other}"
            ))),
        }
    }
}

impl From<bool> for OptionFlag {
    fn from(on: bool) -> Self {
        if on { OptionFlag::On } else { OptionFlag::Off }
    }
}

/// UID - Newtype Pattern (8 バイト, MSB first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    /// From MSB-first bytes.
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build from the LSB-first order the tag transmits.
    pub fn from_wire(bytes: [u8; UID_LEN]) -> Self {
        let mut b = bytes;
        crate::utils::reverse(&mut b);
        Self(b)
    }

    /// MSB-first bytes.
    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    /// LSB-first bytes as transmitted.
    pub fn to_wire(&self) -> [u8; UID_LEN] {
        let mut b = self.0;
        crate::utils::reverse(&mut b);
        b
    }

    /// Lowercase hex, MSB first.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; UID_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: UID_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Rx/Tx data rates as stored behind `ConfigKey::RxDataRate`/`TxDataRate`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataRate {
    /// 26.48 kbps
    Kbps26 = 0x0001,
    /// 52.97 kbps
    Kbps53 = 0x0002,
    /// 105.94 kbps
    Kbps106 = 0x0003,
    /// 211.88 kbps
    Kbps212 = 0x0004,
}

impl DataRate {
    /// Config value.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Parse a config value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0001 => Some(Self::Kbps26),
            0x0002 => Some(Self::Kbps53),
            0x0003 => Some(Self::Kbps106),
            0x0004 => Some(Self::Kbps212),
            _ => None,
        }
    }
}

/// Operating mode of the reader library.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatingMode {
    /// ISO/IEC 15693
    #[default]
    Iso = 0x0000,
    /// NFC Forum Type 5
    Nfc = 0x0001,
}

/// Keys of the typed configuration accessor exposed by the transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Request flags byte sent ahead of every command
    Flags,
    /// Tag-reported error code of the last error response
    AdditionalInfo,
    /// Response timeout in microseconds
    TimeoutUs,
    /// Tag to reader data rate
    RxDataRate,
    /// Reader to tag data rate
    TxDataRate,
    /// `OperatingMode` value
    OperatingMode,
}

/// How a frame is handed to the transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeMode {
    /// Send and wait for the response
    Default,
    /// Buffer the bytes as the first part of a multi-part frame
    BufferFirst,
    /// Append the bytes to the buffered part, then exchange
    BufferLast,
}

/// End-of-frame variants used to solicit a deferred tag response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofKind {
    /// Plain EOF after a write-alike command
    WriteAlike,
    /// EOF sent with the longer programming wait
    WriteAlikeWithWait,
}

/// Key types a key store can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    /// AES, 128-bit key
    Aes128,
    /// AES, 192-bit key
    Aes192,
    /// AES, 256-bit key
    Aes256,
    /// Single DES
    Des,
    /// Two key triple DES
    TwoK3Des,
}

impl KeyType {
    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            KeyType::Aes128 => 16,
            KeyType::Aes192 => 24,
            KeyType::Aes256 => 32,
            KeyType::Des => 8,
            KeyType::TwoK3Des => 16,
        }
    }
}

/// Block cipher modes of operation. TAM1 only needs single-block ECB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// Electronic codebook, each block on its own
    Ecb,
}

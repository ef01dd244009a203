// libvicc/src/error.rs

//! Error type shared by every layer of the crate.

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument rejected before any I/O
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Caller buffer too small for the result
    #[error("buffer overflow: capacity {capacity}, required {required}")]
    BufferOverflow { capacity: usize, required: usize },

    /// Response or argument of unexpected length
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Builder was missing a required part
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    // Exchange-level outcomes reported by the transceiver
    /// No answer within the configured timeout
    #[error("operation timed out")]
    Timeout,

    /// CRC or parity error on reception
    #[error("integrity error (crc/parity)")]
    Integrity,

    /// Several tags answered at once
    #[error("collision detected")]
    Collision,

    /// Malformed frame on reception
    #[error("framing error")]
    Framing,

    /// Response that does not fit the command
    #[error("protocol error")]
    Protocol,

    /// Tag answered with its error flag set; the code sits in
    /// `ConfigKey::AdditionalInfo` until translated.
    #[error("iso15693 error response")]
    Iso15693,

    /// Transceiver specific failure
    #[error("transceiver error: {0}")]
    Transceiver(String),

    /// The random source could not produce bytes
    #[error("random source failed: {0}")]
    Random(String),

    // Tag-reported error codes
    /// Tag code 0x01
    #[error("command not supported")]
    CommandNotSupported,

    /// Tag code 0x02
    #[error("command not recognized")]
    CommandNotRecognized,

    /// Tag code 0x03
    #[error("option not supported")]
    OptionNotSupported,

    /// Tag code 0x0F
    #[error("no information given")]
    NoInformation,

    /// Tag code 0x10
    #[error("block not available")]
    BlockNotAvailable,

    /// Tag code 0x11 (also 0xB5)
    #[error("block locked")]
    BlockLocked,

    /// Tag code 0x12
    #[error("block content could not be changed")]
    ContentChangeFailure,

    /// Tag code 0x13
    #[error("block programming failed")]
    BlockProgrammingFailure,

    /// Tag code 0x14
    #[error("block could not be locked")]
    BlockNotLocked,

    /// Tag code 0x15
    #[error("block protected")]
    BlockProtected,

    /// Tag code 0x40
    #[error("generic cryptographic error")]
    CryptoError,

    /// Tag code in the custom range 0xA0..=0xDF
    #[error("custom command error: code={code:#04x}")]
    CustomCommand { code: u8 },

    // Authentication
    /// Tag response failed verification
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Key type not usable for the operation
    #[error("unsupported key type: {0}")]
    KeyType(String),

    /// Key store has no such key
    #[error("key not found: key_no={key_no}, version={key_version}")]
    KeyNotFound { key_no: u16, key_version: u16 },
}

/// Crate wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for the errors the write-alike handler treats as transient
    /// reception noise.
    pub fn is_transient_frame_error(&self) -> bool {
        matches!(self, Error::Integrity | Error::Collision | Error::Framing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_overflow_display() {
        let err = Error::BufferOverflow {
            capacity: 8,
            required: 12,
        };
        let s = format!("{}", err);
        assert!(s.contains("capacity 8"));
        assert!(s.contains("required 12"));
    }

    #[test]
    fn custom_command_display() {
        let err = Error::CustomCommand { code: 0xA5 };
        let s = format!("{}", err);
        assert!(s.contains("0xa5"));
        assert!(s.contains("custom command"));
    }

    #[test]
    fn transient_frame_errors() {
        assert!(Error::Integrity.is_transient_frame_error());
        assert!(Error::Collision.is_transient_frame_error());
        assert!(Error::Framing.is_transient_frame_error());
        assert!(!Error::Timeout.is_transient_frame_error());
        assert!(!Error::Protocol.is_transient_frame_error());
    }

    #[test]
    fn random_display() {
        let err = Error::Random("entropy unavailable".into());
        let s = format!("{}", err);
        assert!(s.contains("random source failed"));
        assert!(!s.contains("transceiver"));
    }

    #[test]
    fn key_not_found_display() {
        let err = Error::KeyNotFound {
            key_no: 3,
            key_version: 0,
        };
        assert!(format!("{}", err).contains("key_no=3"));
    }
}

// libvicc/src/protocol/status.rs
//! Translation of tag-reported error responses into the crate error type.

use log::debug;

use crate::constants::CUSTOM_ERROR_RANGE;
use crate::transport::Transceiver;
use crate::types::ConfigKey;
use crate::{Error, Result};

/// Additional-info codes with a dedicated error. Looked up before the
/// custom range, so entries inside 0xA0..=0xDF take precedence.
pub const ERROR_CODE_TABLE: &[(u8, Error)] = &[
    (0x01, Error::CommandNotSupported),
    (0x02, Error::CommandNotRecognized),
    (0x03, Error::OptionNotSupported),
    (0x0F, Error::NoInformation),
    (0x10, Error::BlockNotAvailable),
    (0x11, Error::BlockLocked),
    (0x12, Error::ContentChangeFailure),
    (0x13, Error::BlockProgrammingFailure),
    (0x14, Error::BlockNotLocked),
    (0x15, Error::BlockProtected),
    (0x40, Error::CryptoError),
    (0xB5, Error::BlockLocked),
];

/// Map a raw additional-info byte to an error.
pub fn map_additional_info(code: u8) -> Error {
    if let Some((_, err)) = ERROR_CODE_TABLE.iter().find(|(c, _)| *c == code) {
        return err.clone();
    }
    if CUSTOM_ERROR_RANGE.contains(&code) {
        return Error::CustomCommand { code };
    }
    Error::Protocol
}

/// Normalize the outcome of an exchange. Only the ISO15693 error sentinel is
/// rewritten; the tag's error byte is fetched from the transceiver config.
pub fn compute_error_code<C, T>(transceiver: &C, result: Result<T>) -> Result<T>
where
    C: Transceiver + ?Sized,
{
    match result {
        Err(Error::Iso15693) => {
            let add_info = transceiver.get_config(ConfigKey::AdditionalInfo)?;
            let err = map_additional_info((add_info & 0x00ff) as u8);
            debug!("tag error response: add_info={:#04x} -> {}", add_info, err);
            Err(err)
        }
        other => other,
    }
}

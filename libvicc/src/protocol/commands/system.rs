// libvicc/src/protocol/commands/system.rs

//! Encoders for commands without a block address.

use crate::protocol::opcodes;

/// Encode WriteAFI (0x27)
pub fn encode_write_afi(afi: u8) -> Vec<u8> {
    vec![opcodes::WRITE_AFI, afi]
}

/// Encode WriteDSFID (0x29)
pub fn encode_write_dsfid(dsfid: u8) -> Vec<u8> {
    vec![opcodes::WRITE_DSFID, dsfid]
}

/// Encode ExtendedGetSystemInformation (0x3B). `info_params` selects which
/// optional fields the tag returns.
pub fn encode_extended_get_system_information(info_params: u8) -> Vec<u8> {
    vec![opcodes::EXTENDED_GET_SYSTEM_INFORMATION, info_params]
}

/// Encode ParameterSelect (0x1B)
pub fn encode_parameter_select(parameters: u8) -> Vec<u8> {
    vec![opcodes::PARAMETER_SELECT, parameters]
}

// libvicc/src/protocol/commands/custom.rs
//! NXP custom command encoders. Every frame starts with the opcode followed
//! by the IC manufacturer code.

use crate::constants::{BLOCK_SIZE, NXP_MFG_CODE};

/// Password identifiers used by Set/Write/Lock password.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordId {
    /// Read password
    Read = 0x01,
    /// Write password
    Write = 0x02,
    /// Privacy password
    Privacy = 0x04,
    /// Destroy password
    Destroy = 0x08,
    /// EAS/AFI password
    EasAfi = 0x10,
}

/// Opcode + manufacturer code, no parameters
pub fn encode_custom(opcode: u8) -> Vec<u8> {
    vec![opcode, NXP_MFG_CODE]
}

/// Opcode + manufacturer code + parameters
pub fn encode_custom_with(opcode: u8, params: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + params.len());
    buf.push(opcode);
    buf.push(NXP_MFG_CODE);
    buf.extend_from_slice(params);
    buf
}

/// EAS alarm; a non-empty mask is sent as its bit length followed by the
/// mask bytes.
pub fn encode_eas_alarm(opcode: u8, id_mask: &[u8]) -> Vec<u8> {
    if id_mask.is_empty() {
        return encode_custom(opcode);
    }
    let mut params = Vec::with_capacity(1 + id_mask.len());
    params.push((id_mask.len() * 8) as u8);
    params.extend_from_slice(id_mask);
    encode_custom_with(opcode, &params)
}

/// Custom block range (ReadConfig / ReadSRAM): address + (count - 1)
pub fn encode_custom_range(opcode: u8, first_block: u8, count: u16) -> Vec<u8> {
    encode_custom_with(opcode, &[first_block, count.saturating_sub(1) as u8])
}

/// Custom single block write (WriteConfig)
pub fn encode_custom_block_write(opcode: u8, block: u8, data: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut params = Vec::with_capacity(1 + BLOCK_SIZE);
    params.push(block);
    params.extend_from_slice(data);
    encode_custom_with(opcode, &params)
}

/// XOR a 32-bit password with the 16-bit random number returned by
/// GetRandomNumber, as SetPassword/Destroy/EnablePrivacy expect it.
pub fn xor_password(password: [u8; 4], random: [u8; 2]) -> [u8; 4] {
    [
        password[0] ^ random[0],
        password[1] ^ random[1],
        password[2] ^ random[0],
        password[3] ^ random[1],
    ]
}

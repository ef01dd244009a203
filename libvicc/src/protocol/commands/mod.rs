// libvicc/src/protocol/commands/mod.rs

//! Command frames, built without any I/O.

pub mod auth;
pub mod block;
pub mod custom;
pub mod system;

pub use auth::encode_tam1;
pub use block::{
    encode_lock_block, encode_range, encode_read_single, encode_write_multiple,
    encode_write_multiple_header, encode_write_single,
};
pub use custom::{PasswordId, xor_password};

use crate::constants::{BLOCK_SIZE, TAM1_CHALLENGE_LEN};
use crate::protocol::opcodes;

/// High-level Command enum. New commands should be added here and
/// their per-family encoder placed in `protocol::commands::<family>.rs`.
///
/// Block numbers are `u16` throughout; standard variants only emit the low
/// byte. Counts are actual block counts and are framed as `count - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stay Quiet
    StayQuiet,
    /// Select
    Select,
    /// Reset To Ready
    ResetToReady,
    /// Read Single Block
    ReadSingleBlock { block: u16 },
    /// Extended Read Single Block
    ExtendedReadSingleBlock { block: u16 },
    /// Write Single Block
    WriteSingleBlock { block: u16, data: [u8; BLOCK_SIZE] },
    /// Extended Write Single Block
    ExtendedWriteSingleBlock { block: u16, data: [u8; BLOCK_SIZE] },
    /// Lock Block
    LockBlock { block: u16 },
    /// Extended Lock Block
    ExtendedLockBlock { block: u16 },
    /// Read Multiple Blocks
    ReadMultipleBlocks { first_block: u16, count: u16 },
    /// Extended Read Multiple Blocks
    ExtendedReadMultipleBlocks { first_block: u16, count: u16 },
    /// Fast Read Multiple Blocks
    FastReadMultipleBlocks { first_block: u16, count: u16 },
    /// Fast Extended Read Multiple Blocks
    FastExtendedReadMultipleBlocks { first_block: u16, count: u16 },
    /// Get Multiple Block Security Status
    GetMultipleBlockSecurityStatus { first_block: u16, count: u16 },
    /// Extended Get Multiple Block Security Status
    ExtendedGetMultipleBlockSecurityStatus { first_block: u16, count: u16 },
    /// Write Multiple Blocks
    WriteMultipleBlocks { first_block: u16, count: u16, data: Vec<u8> },
    /// Extended Write Multiple Blocks
    ExtendedWriteMultipleBlocks { first_block: u16, count: u16, data: Vec<u8> },
    /// Write AFI
    WriteAfi { afi: u8 },
    /// Lock AFI
    LockAfi,
    /// Write DSFID
    WriteDsfid { dsfid: u8 },
    /// Lock DSFID
    LockDsfid,
    /// Get System Information
    GetSystemInformation,
    /// Extended Get System Information
    ExtendedGetSystemInformation { info_params: u8 },
    /// Parameter Request
    ParameterRequest,
    /// Parameter Select
    ParameterSelect { parameters: u8 },
    /// ISO 29167-10 TAM1 one-shot authenticate
    Authenticate { key_no: u8, challenge: [u8; TAM1_CHALLENGE_LEN] },
    /// Challenge
    Challenge { key_no: u8, challenge: [u8; TAM1_CHALLENGE_LEN] },
    /// Read Buffer
    ReadBuffer,
    /// Set EAS
    SetEas,
    /// Reset EAS
    ResetEas,
    /// Lock EAS
    LockEas,
    /// EAS Alarm
    EasAlarm { id_mask: Vec<u8> },
    /// Password Protect EAS/AFI
    PasswordProtectEasAfi,
    /// Write EAS ID
    WriteEasId { eas_id: u16 },
    /// Get NXP System Information
    GetNxpSystemInformation,
    /// Get Random Number
    GetRandomNumber,
    /// Set Password
    SetPassword { pwd_id: PasswordId, xor_password: [u8; 4] },
    /// Write Password
    WritePassword { pwd_id: PasswordId, password: [u8; 4] },
    /// Lock Password
    LockPassword { pwd_id: PasswordId },
    /// Protect Page
    ProtectPage { page_no: u8, protection_status: u8 },
    /// Lock Page Protection Condition
    LockPageProtectionCondition { page_no: u8 },
    /// Destroy
    Destroy { xor_password: [u8; 4] },
    /// Enable Privacy
    EnablePrivacy { xor_password: [u8; 4] },
    /// Password Protection 64-bit
    PasswordProtection64Bit,
    /// Read Signature
    ReadSignature,
    /// Read Config
    ReadConfig { block: u8, count: u16 },
    /// Write Config
    WriteConfig { block: u8, data: [u8; BLOCK_SIZE] },
    /// Pick Random ID
    PickRandomId,
    /// Read TT
    ReadTt,
    /// Read SRAM
    ReadSram { first_block: u8, count: u16 },
    /// Write SRAM
    WriteSram { first_block: u8, count: u16, data: Vec<u8> },
}

impl Command {
    /// Return the command code.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::StayQuiet => opcodes::STAY_QUIET,
            Self::Select => opcodes::SELECT,
            Self::ResetToReady => opcodes::RESET_TO_READY,
            Self::ReadSingleBlock { .. } => opcodes::READ_SINGLE_BLOCK,
            Self::ExtendedReadSingleBlock { .. } => opcodes::EXTENDED_READ_SINGLE_BLOCK,
            Self::WriteSingleBlock { .. } => opcodes::WRITE_SINGLE_BLOCK,
            Self::ExtendedWriteSingleBlock { .. } => opcodes::EXTENDED_WRITE_SINGLE_BLOCK,
            Self::LockBlock { .. } => opcodes::LOCK_BLOCK,
            Self::ExtendedLockBlock { .. } => opcodes::EXTENDED_LOCK_BLOCK,
            Self::ReadMultipleBlocks { .. } => opcodes::READ_MULTIPLE_BLOCKS,
            Self::ExtendedReadMultipleBlocks { .. } => opcodes::EXTENDED_READ_MULTIPLE_BLOCKS,
            Self::FastReadMultipleBlocks { .. } => opcodes::FAST_READ_MULTIPLE_BLOCKS,
            Self::FastExtendedReadMultipleBlocks { .. } => {
                opcodes::FAST_EXTENDED_READ_MULTIPLE_BLOCKS
            }
            Self::GetMultipleBlockSecurityStatus { .. } => {
                opcodes::GET_MULTIPLE_BLOCK_SECURITY_STATUS
            }
            Self::ExtendedGetMultipleBlockSecurityStatus { .. } => {
                opcodes::EXTENDED_GET_MULTIPLE_BLOCK_SECURITY_STATUS
            }
            Self::WriteMultipleBlocks { .. } => opcodes::WRITE_MULTIPLE_BLOCKS,
            Self::ExtendedWriteMultipleBlocks { .. } => opcodes::EXTENDED_WRITE_MULTIPLE_BLOCKS,
            Self::WriteAfi { .. } => opcodes::WRITE_AFI,
            Self::LockAfi => opcodes::LOCK_AFI,
            Self::WriteDsfid { .. } => opcodes::WRITE_DSFID,
            Self::LockDsfid => opcodes::LOCK_DSFID,
            Self::GetSystemInformation => opcodes::GET_SYSTEM_INFORMATION,
            Self::ExtendedGetSystemInformation { .. } => opcodes::EXTENDED_GET_SYSTEM_INFORMATION,
            Self::ParameterRequest => opcodes::PARAMETER_REQUEST,
            Self::ParameterSelect { .. } => opcodes::PARAMETER_SELECT,
            Self::Authenticate { .. } => opcodes::AUTHENTICATE,
            Self::Challenge { .. } => opcodes::CHALLENGE,
            Self::ReadBuffer => opcodes::READ_BUFFER,
            Self::SetEas => opcodes::SET_EAS,
            Self::ResetEas => opcodes::RESET_EAS,
            Self::LockEas => opcodes::LOCK_EAS,
            Self::EasAlarm { .. } => opcodes::EAS_ALARM,
            Self::PasswordProtectEasAfi => opcodes::PASSWORD_PROTECT_EAS_AFI,
            Self::WriteEasId { .. } => opcodes::WRITE_EAS_ID,
            Self::GetNxpSystemInformation => opcodes::GET_NXP_SYSTEM_INFORMATION,
            Self::GetRandomNumber => opcodes::GET_RANDOM_NUMBER,
            Self::SetPassword { .. } => opcodes::SET_PASSWORD,
            Self::WritePassword { .. } => opcodes::WRITE_PASSWORD,
            Self::LockPassword { .. } => opcodes::LOCK_PASSWORD,
            Self::ProtectPage { .. } => opcodes::PROTECT_PAGE,
            Self::LockPageProtectionCondition { .. } => opcodes::LOCK_PAGE_PROTECTION_CONDITION,
            Self::Destroy { .. } => opcodes::DESTROY,
            Self::EnablePrivacy { .. } => opcodes::ENABLE_PRIVACY,
            Self::PasswordProtection64Bit => opcodes::PASSWORD_PROTECTION_64BIT,
            Self::ReadSignature => opcodes::READ_SIGNATURE,
            Self::ReadConfig { .. } => opcodes::READ_CONFIG,
            Self::WriteConfig { .. } => opcodes::WRITE_CONFIG,
            Self::PickRandomId => opcodes::PICK_RANDOM_ID,
            Self::ReadTt => opcodes::READ_TT,
            Self::ReadSram { .. } => opcodes::READ_SRAM,
            Self::WriteSram { .. } => opcodes::WRITE_SRAM,
        }
    }

    /// Commands whose completion is solicited with an EOF when the Option
    /// flag is set (writes, locks, protection changes).
    pub fn is_write_alike(&self) -> bool {
        matches!(
            self,
            Self::WriteSingleBlock { .. }
                | Self::ExtendedWriteSingleBlock { .. }
                | Self::LockBlock { .. }
                | Self::ExtendedLockBlock { .. }
                | Self::WriteMultipleBlocks { .. }
                | Self::ExtendedWriteMultipleBlocks { .. }
                | Self::WriteAfi { .. }
                | Self::LockAfi
                | Self::WriteDsfid { .. }
                | Self::LockDsfid
                | Self::SetEas
                | Self::ResetEas
                | Self::LockEas
                | Self::PasswordProtectEasAfi
                | Self::WriteEasId { .. }
                | Self::WritePassword { .. }
                | Self::LockPassword { .. }
                | Self::ProtectPage { .. }
                | Self::LockPageProtectionCondition { .. }
                | Self::Destroy { .. }
                | Self::EnablePrivacy { .. }
                | Self::PasswordProtection64Bit
                | Self::WriteConfig { .. }
        )
    }

    /// Encode the command into the raw frame (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        let op = self.opcode();
        match self {
            Self::ReadSingleBlock { block } => encode_read_single(*block, false),
            Self::ExtendedReadSingleBlock { block } => encode_read_single(*block, true),
            Self::WriteSingleBlock { block, data } => encode_write_single(*block, data, false),
            Self::ExtendedWriteSingleBlock { block, data } => {
                encode_write_single(*block, data, true)
            }
            Self::LockBlock { block } => encode_lock_block(*block, false),
            Self::ExtendedLockBlock { block } => encode_lock_block(*block, true),
            Self::ReadMultipleBlocks { first_block, count }
            | Self::ExtendedReadMultipleBlocks { first_block, count }
            | Self::FastReadMultipleBlocks { first_block, count }
            | Self::FastExtendedReadMultipleBlocks { first_block, count }
            | Self::GetMultipleBlockSecurityStatus { first_block, count }
            | Self::ExtendedGetMultipleBlockSecurityStatus { first_block, count } => {
                encode_range(op, *first_block, *count)
            }
            Self::WriteMultipleBlocks {
                first_block,
                count,
                data,
            } => encode_write_multiple(*first_block, *count, data, false),
            Self::ExtendedWriteMultipleBlocks {
                first_block,
                count,
                data,
            } => encode_write_multiple(*first_block, *count, data, true),
            Self::WriteAfi { afi } => system::encode_write_afi(*afi),
            Self::WriteDsfid { dsfid } => system::encode_write_dsfid(*dsfid),
            Self::ExtendedGetSystemInformation { info_params } => {
                system::encode_extended_get_system_information(*info_params)
            }
            Self::ParameterSelect { parameters } => system::encode_parameter_select(*parameters),
            Self::Authenticate { key_no, challenge } | Self::Challenge { key_no, challenge } => {
                encode_tam1(op, *key_no, challenge)
            }
            Self::EasAlarm { id_mask } => custom::encode_eas_alarm(op, id_mask),
            Self::WriteEasId { eas_id } => custom::encode_custom_with(op, &eas_id.to_le_bytes()),
            Self::SetPassword {
                pwd_id,
                xor_password,
            } => {
                let mut params = vec![*pwd_id as u8];
                params.extend_from_slice(xor_password);
                custom::encode_custom_with(op, &params)
            }
            Self::WritePassword { pwd_id, password } => {
                let mut params = vec![*pwd_id as u8];
                params.extend_from_slice(password);
                custom::encode_custom_with(op, &params)
            }
            Self::LockPassword { pwd_id } => custom::encode_custom_with(op, &[*pwd_id as u8]),
            Self::ProtectPage {
                page_no,
                protection_status,
            } => custom::encode_custom_with(op, &[*page_no, *protection_status]),
            Self::LockPageProtectionCondition { page_no } => {
                custom::encode_custom_with(op, &[*page_no])
            }
            Self::Destroy { xor_password } | Self::EnablePrivacy { xor_password } => {
                custom::encode_custom_with(op, xor_password)
            }
            Self::ReadConfig { block, count } => custom::encode_custom_range(op, *block, *count),
            Self::WriteConfig { block, data } => {
                custom::encode_custom_block_write(op, *block, data)
            }
            Self::ReadSram { first_block, count } => {
                custom::encode_custom_range(op, *first_block, *count)
            }
            Self::WriteSram {
                first_block,
                count,
                data,
            } => {
                let mut buf = custom::encode_custom_range(op, *first_block, *count);
                buf.extend_from_slice(data);
                buf
            }
            Self::SetEas
            | Self::ResetEas
            | Self::LockEas
            | Self::PasswordProtectEasAfi
            | Self::GetNxpSystemInformation
            | Self::GetRandomNumber
            | Self::PasswordProtection64Bit
            | Self::ReadSignature
            | Self::PickRandomId
            | Self::ReadTt => custom::encode_custom(op),
            Self::StayQuiet
            | Self::Select
            | Self::ResetToReady
            | Self::LockAfi
            | Self::LockDsfid
            | Self::GetSystemInformation
            | Self::ParameterRequest
            | Self::ReadBuffer => vec![op],
        }
    }
}

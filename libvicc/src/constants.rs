// libvicc/src/constants.rs
//! Common protocol constants used across the crate

/// Size of a user memory block in bytes
pub const BLOCK_SIZE: usize = 4;

/// Size of a block when its security status byte is interleaved (Option ON)
pub const BLOCK_SIZE_WITH_SECURITY: usize = BLOCK_SIZE + 1;

/// Addressable block range for standard (8-bit addressed) commands
pub const MAX_STANDARD_BLOCKS: u32 = 256;

/// Addressable block range for extended (16-bit addressed) commands.
/// Library ceiling, the wire field would allow 65536.
pub const MAX_EXTENDED_BLOCKS: u32 = 512;

/// Default number of response bytes a single chained sub-transfer may carry
pub const DEFAULT_TRANSFER_BUDGET: usize = 240;

/// IC manufacturer code inserted after every NXP custom opcode
pub const NXP_MFG_CODE: u8 = 0x04;

/// Timeout used when Option is ON (tag answers on EOF only)
pub const TIMEOUT_SHORT_US: u16 = 324;

/// Timeout used when Option is OFF (tag answers after programming)
pub const TIMEOUT_LONG_US: u16 = 20_000;

/// Option value accepted by the flag controller: OFF
pub const OPTION_OFF: u8 = 0x00;

/// Option value accepted by the flag controller: ON
pub const OPTION_ON: u8 = 0x01;

/// Custom command error range reported in the additional-info byte
pub const CUSTOM_ERROR_RANGE: std::ops::RangeInclusive<u8> = 0xA0..=0xDF;

/// Cryptographic suite identifier for AES (ISO/IEC 29167-10)
pub const CSI_AES: u8 = 0x00;

/// TAM1 message header: tag authentication, custom data in clear
pub const TAM1_CLEAR_CUSTOM_DATA: u8 = 0x00;

/// Constant C_TAM1 the tag places in every TAM1 response
pub const TAM1_CONSTANT: [u8; 2] = [0x96, 0xC5];

/// Length of the interrogator challenge (IChallenge_TAM1)
pub const TAM1_CHALLENGE_LEN: usize = 10;

/// Length of the tag random number (TRnd_TAM1)
pub const TAM1_TRND_LEN: usize = 4;

/// AES block / AES-128 key size
pub const AES_BLOCK_LEN: usize = 16;

/// Length of the NXP originality signature
pub const SIGNATURE_LEN: usize = 32;

/// Length of the tag UID
pub const UID_LEN: usize = 8;

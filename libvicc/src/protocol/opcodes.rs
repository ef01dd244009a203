// libvicc/src/protocol/opcodes.rs
//! Command codes (ISO/IEC 15693-3, ISO/IEC 29167-10 and NXP custom set)

/// Stay Quiet
pub const STAY_QUIET: u8 = 0x02;
/// Parameter Request
pub const PARAMETER_REQUEST: u8 = 0x1A;
/// Parameter Select
pub const PARAMETER_SELECT: u8 = 0x1B;

/// Read Single Block
pub const READ_SINGLE_BLOCK: u8 = 0x20;
/// Write Single Block
pub const WRITE_SINGLE_BLOCK: u8 = 0x21;
/// Lock Block
pub const LOCK_BLOCK: u8 = 0x22;
/// Read Multiple Blocks
pub const READ_MULTIPLE_BLOCKS: u8 = 0x23;
/// Write Multiple Blocks
pub const WRITE_MULTIPLE_BLOCKS: u8 = 0x24;
/// Select
pub const SELECT: u8 = 0x25;
/// Reset To Ready
pub const RESET_TO_READY: u8 = 0x26;
/// Write AFI
pub const WRITE_AFI: u8 = 0x27;
/// Lock AFI
pub const LOCK_AFI: u8 = 0x28;
/// Write DSFID
pub const WRITE_DSFID: u8 = 0x29;
/// Lock DSFID
pub const LOCK_DSFID: u8 = 0x2A;
/// Get System Information
pub const GET_SYSTEM_INFORMATION: u8 = 0x2B;
/// Get Multiple Block Security Status
pub const GET_MULTIPLE_BLOCK_SECURITY_STATUS: u8 = 0x2C;
/// Fast Read Multiple Blocks
pub const FAST_READ_MULTIPLE_BLOCKS: u8 = 0x2D;

/// Extended Read Single Block
pub const EXTENDED_READ_SINGLE_BLOCK: u8 = 0x30;
/// Extended Write Single Block
pub const EXTENDED_WRITE_SINGLE_BLOCK: u8 = 0x31;
/// Extended Lock Block
pub const EXTENDED_LOCK_BLOCK: u8 = 0x32;
/// Extended Read Multiple Blocks
pub const EXTENDED_READ_MULTIPLE_BLOCKS: u8 = 0x33;
/// Extended Write Multiple Blocks
pub const EXTENDED_WRITE_MULTIPLE_BLOCKS: u8 = 0x34;
/// Authenticate
pub const AUTHENTICATE: u8 = 0x35;
/// Challenge
pub const CHALLENGE: u8 = 0x39;
/// Read Buffer
pub const READ_BUFFER: u8 = 0x3A;
/// Extended Get System Information
pub const EXTENDED_GET_SYSTEM_INFORMATION: u8 = 0x3B;
/// Extended Get Multiple Block Security Status
pub const EXTENDED_GET_MULTIPLE_BLOCK_SECURITY_STATUS: u8 = 0x3C;
/// Fast Extended Read Multiple Blocks
pub const FAST_EXTENDED_READ_MULTIPLE_BLOCKS: u8 = 0x3D;

// NXP custom commands; the manufacturer code follows the opcode
/// Set EAS
pub const SET_EAS: u8 = 0xA2;
/// Reset EAS
pub const RESET_EAS: u8 = 0xA3;
/// Lock EAS
pub const LOCK_EAS: u8 = 0xA4;
/// EAS Alarm
pub const EAS_ALARM: u8 = 0xA5;
/// Password Protect EAS/AFI
pub const PASSWORD_PROTECT_EAS_AFI: u8 = 0xA6;
/// Write EAS ID
pub const WRITE_EAS_ID: u8 = 0xA7;
/// Get NXP System Information
pub const GET_NXP_SYSTEM_INFORMATION: u8 = 0xAB;
/// Get Random Number
pub const GET_RANDOM_NUMBER: u8 = 0xB2;
/// Set Password
pub const SET_PASSWORD: u8 = 0xB3;
/// Write Password
pub const WRITE_PASSWORD: u8 = 0xB4;
/// Lock Password
pub const LOCK_PASSWORD: u8 = 0xB5;
/// Protect Page
pub const PROTECT_PAGE: u8 = 0xB6;
/// Lock Page Protection Condition
pub const LOCK_PAGE_PROTECTION_CONDITION: u8 = 0xB7;
/// Destroy
pub const DESTROY: u8 = 0xB9;
/// Enable Privacy
pub const ENABLE_PRIVACY: u8 = 0xBA;
/// Password Protection 64-bit
pub const PASSWORD_PROTECTION_64BIT: u8 = 0xBB;
/// Read Signature
pub const READ_SIGNATURE: u8 = 0xBD;
/// Read Config
pub const READ_CONFIG: u8 = 0xC0;
/// Write Config
pub const WRITE_CONFIG: u8 = 0xC1;
/// Pick Random ID
pub const PICK_RANDOM_ID: u8 = 0xC2;
/// Read TT
pub const READ_TT: u8 = 0xC4;
/// Read SRAM
pub const READ_SRAM: u8 = 0xD2;
/// Write SRAM
pub const WRITE_SRAM: u8 = 0xD3;

/// First opcode of the custom range (manufacturer code required)
pub const CUSTOM_RANGE_START: u8 = 0xA0;

/// True for opcodes that must be followed by the IC manufacturer code.
pub fn is_custom(opcode: u8) -> bool {
    opcode >= CUSTOM_RANGE_START
}

/// True for the 16-bit addressed command variants.
pub fn is_extended(opcode: u8) -> bool {
    matches!(
        opcode,
        EXTENDED_READ_SINGLE_BLOCK
            | EXTENDED_WRITE_SINGLE_BLOCK
            | EXTENDED_LOCK_BLOCK
            | EXTENDED_READ_MULTIPLE_BLOCKS
            | EXTENDED_WRITE_MULTIPLE_BLOCKS
            | EXTENDED_GET_MULTIPLE_BLOCK_SECURITY_STATUS
            | FAST_EXTENDED_READ_MULTIPLE_BLOCKS
    )
}

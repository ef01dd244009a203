// libvicc/src/protocol/responses.rs
//! Decoders for the structured responses. Responses handed over by the
//! transceiver no longer carry the response flags byte.

use crate::protocol::parser;
use crate::types::Uid;
use crate::Result;

/// Information flag bits of (Extended)GetSystemInformation
pub mod info_flags {
    /// DSFID present
    pub const DSFID: u8 = 0x01;
    /// AFI present
    pub const AFI: u8 = 0x02;
    /// Memory size present
    pub const MEMORY_SIZE: u8 = 0x04;
    /// IC reference present
    pub const IC_REFERENCE: u8 = 0x08;
    /// Extended only: MOI / CSI list
    pub const CSI_LIST: u8 = 0x10;
    /// Extended only: supported command list
    pub const COMMAND_LIST: u8 = 0x20;
}

/// Decoded (Extended)GetSystemInformation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInformation {
    /// Information flags as reported
    pub info_flags: u8,
    /// Tag UID, MSB first
    pub uid: Uid,
    /// Data storage format identifier
    pub dsfid: Option<u8>,
    /// Application family identifier
    pub afi: Option<u8>,
    /// Number of blocks (decoded from the `n - 1` wire value)
    pub block_count: Option<u32>,
    /// Block size in bytes (decoded from the `n - 1` wire value)
    pub block_size: Option<u8>,
    /// IC reference
    pub ic_reference: Option<u8>,
    /// Supported command bitmap (extended only)
    pub command_list: Option<u32>,
    /// Cryptographic suite identifiers (extended only)
    pub csi_list: Vec<u8>,
}

impl SystemInformation {
    /// Layout: flags(1) + uid(8) + [dsfid] + [afi] + [blocks-1, size-1] + [ic ref]
    pub fn decode(data: &[u8]) -> Result<Self> {
        Self::decode_inner(data, false)
    }

    /// Extended layout: block count is 2 bytes LE, and command / CSI lists
    /// may follow the IC reference.
    pub fn decode_extended(data: &[u8]) -> Result<Self> {
        Self::decode_inner(data, true)
    }

    fn decode_inner(data: &[u8], extended: bool) -> Result<Self> {
        let info_flags = parser::byte_at(data, 0)?;
        let uid = parser::uid_at(data, 1)?;
        let mut off = 1 + crate::constants::UID_LEN;

        let mut info = SystemInformation {
            info_flags,
            uid,
            dsfid: None,
            afi: None,
            block_count: None,
            block_size: None,
            ic_reference: None,
            command_list: None,
            csi_list: Vec::new(),
        };

        if info_flags & info_flags::DSFID != 0 {
            info.dsfid = Some(parser::byte_at(data, off)?);
            off += 1;
        }
        if info_flags & info_flags::AFI != 0 {
            info.afi = Some(parser::byte_at(data, off)?);
            off += 1;
        }
        if info_flags & info_flags::MEMORY_SIZE != 0 {
            let blocks = if extended {
                let v = parser::le_u16_at(data, off)?;
                off += 2;
                v
            } else {
                let v = u16::from(parser::byte_at(data, off)?);
                off += 1;
                v
            };
            let size = parser::byte_at(data, off)? & 0x1f;
            off += 1;
            info.block_count = Some(u32::from(blocks) + 1);
            info.block_size = Some(size + 1);
        }
        if info_flags & info_flags::IC_REFERENCE != 0 {
            info.ic_reference = Some(parser::byte_at(data, off)?);
            off += 1;
        }
        if extended && info_flags & info_flags::COMMAND_LIST != 0 {
            info.command_list = Some(parser::le_u32_at(data, off)?);
            off += 4;
        }
        if extended && info_flags & info_flags::CSI_LIST != 0 {
            let n = parser::byte_at(data, off)? as usize;
            info.csi_list = parser::slice_at(data, off + 1, n)?.to_vec();
        }

        Ok(info)
    }
}

/// Decoded GetNXPSystemInformation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NxpSystemInformation {
    /// First block of the protected upper page
    pub protection_pointer: u8,
    /// Read/write protection of the two pages
    pub protection_condition: u8,
    /// AFI, EAS, DSFID and page protection lock bits
    pub lock_bits: u8,
    /// Supported feature bitmap
    pub feature_flags: u32,
}

impl NxpSystemInformation {
    /// Layout: pp pointer(1) + pp condition(1) + lock bits(1) + features(4 LE)
    pub fn decode(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, 7)?;
        Ok(Self {
            protection_pointer: data[0],
            protection_condition: data[1],
            lock_bits: data[2],
            feature_flags: parser::le_u32_at(data, 3)?,
        })
    }
}

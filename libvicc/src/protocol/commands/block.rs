// libvicc/src/protocol/commands/block.rs

//! Block addressed command encoders. Standard commands use one byte
//! addresses and counts, extended commands two bytes little-endian.

use crate::constants::BLOCK_SIZE;
use crate::protocol::opcodes;

/// Append a block address: 1 byte for standard commands, 2 bytes
/// little-endian for extended ones.
pub fn push_address(buf: &mut Vec<u8>, block: u16, extended: bool) {
    if extended {
        buf.extend_from_slice(&block.to_le_bytes());
    } else {
        buf.push(block as u8);
    }
}

/// Append a block count encoded as `count - 1`. Callers reject zero counts
/// before framing.
pub fn push_count(buf: &mut Vec<u8>, count: u16, extended: bool) {
    let encoded = count.saturating_sub(1);
    if extended {
        buf.extend_from_slice(&encoded.to_le_bytes());
    } else {
        buf.push(encoded as u8);
    }
}

/// Encode a single-block read (0x20 / 0x30)
pub fn encode_read_single(block: u16, extended: bool) -> Vec<u8> {
    let op = if extended {
        opcodes::EXTENDED_READ_SINGLE_BLOCK
    } else {
        opcodes::READ_SINGLE_BLOCK
    };
    let mut buf = vec![op];
    push_address(&mut buf, block, extended);
    buf
}

/// Encode a single-block write (0x21 / 0x31)
pub fn encode_write_single(block: u16, data: &[u8; BLOCK_SIZE], extended: bool) -> Vec<u8> {
    let op = if extended {
        opcodes::EXTENDED_WRITE_SINGLE_BLOCK
    } else {
        opcodes::WRITE_SINGLE_BLOCK
    };
    let mut buf = Vec::with_capacity(3 + BLOCK_SIZE);
    buf.push(op);
    push_address(&mut buf, block, extended);
    buf.extend_from_slice(data);
    buf
}

/// Encode a block lock (0x22 / 0x32)
pub fn encode_lock_block(block: u16, extended: bool) -> Vec<u8> {
    let op = if extended {
        opcodes::EXTENDED_LOCK_BLOCK
    } else {
        opcodes::LOCK_BLOCK
    };
    let mut buf = vec![op];
    push_address(&mut buf, block, extended);
    buf
}

/// Encode any range command: opcode + address + (count - 1).
/// Used for multiple-block reads, fast reads and security status queries.
pub fn encode_range(opcode: u8, first_block: u16, count: u16) -> Vec<u8> {
    let extended = opcodes::is_extended(opcode);
    let mut buf = Vec::with_capacity(5);
    buf.push(opcode);
    push_address(&mut buf, first_block, extended);
    push_count(&mut buf, count, extended);
    buf
}

/// Header part of a multiple-block write (everything but the data).
pub fn encode_write_multiple_header(first_block: u16, count: u16, extended: bool) -> Vec<u8> {
    let op = if extended {
        opcodes::EXTENDED_WRITE_MULTIPLE_BLOCKS
    } else {
        opcodes::WRITE_MULTIPLE_BLOCKS
    };
    encode_range(op, first_block, count)
}

/// Full multiple-block write frame (0x24 / 0x34)
pub fn encode_write_multiple(first_block: u16, count: u16, data: &[u8], extended: bool) -> Vec<u8> {
    let mut buf = encode_write_multiple_header(first_block, count, extended);
    buf.extend_from_slice(data);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_single_standard_and_extended() {
        assert_eq!(encode_read_single(0x12, false), vec![0x20, 0x12]);
        assert_eq!(encode_read_single(0x0112, true), vec![0x30, 0x12, 0x01]);
    }

    #[test]
    fn write_single_carries_data() {
        let p = encode_write_single(5, &[0xde, 0xad, 0xbe, 0xef], false);
        assert_eq!(p, vec![0x21, 0x05, 0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn range_encodes_count_minus_one() {
        assert_eq!(
            encode_range(opcodes::READ_MULTIPLE_BLOCKS, 4, 8),
            vec![0x23, 0x04, 0x07]
        );
        assert_eq!(
            encode_range(opcodes::EXTENDED_READ_MULTIPLE_BLOCKS, 0x0100, 0x0102),
            vec![0x33, 0x00, 0x01, 0x01, 0x01]
        );
        assert_eq!(
            encode_range(opcodes::GET_MULTIPLE_BLOCK_SECURITY_STATUS, 0, 256),
            vec![0x2C, 0x00, 0xFF]
        );
    }

    #[test]
    fn write_multiple_extended() {
        let data = [1u8; 8];
        let p = encode_write_multiple(0x0200, 2, &data, true);
        assert_eq!(&p[..5], &[0x34, 0x00, 0x02, 0x01, 0x00]);
        assert_eq!(&p[5..], &data);
    }
}

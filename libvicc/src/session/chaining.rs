// libvicc/src/session/chaining.rs

//! Multi-block reads, optionally split into bounded sub-transfers.

use log::{debug, trace};

use crate::constants::{
    BLOCK_SIZE, BLOCK_SIZE_WITH_SECURITY, MAX_EXTENDED_BLOCKS, MAX_STANDARD_BLOCKS,
};
use crate::protocol::{compute_error_code, encode_range, opcodes, RequestFlags};
use crate::session::{fast_rx_data_rate, TagSession};
use crate::transport::Transceiver;
use crate::types::{ConfigKey, ExchangeMode, OptionFlag};
use crate::{Error, Result};

/// Range read commands the chaining engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadKind {
    /// Read Multiple Blocks
    Multiple,
    /// Extended Read Multiple Blocks
    ExtendedMultiple,
    /// Fast Read Multiple Blocks
    FastMultiple,
    /// Fast Extended Read Multiple Blocks
    FastExtendedMultiple,
    /// Block security status, one byte per block
    SecurityStatus,
    /// Extended block security status
    ExtendedSecurityStatus,
}

impl ReadKind {
    /// Command code of the read.
    pub fn opcode(self) -> u8 {
        match self {
            ReadKind::Multiple => opcodes::READ_MULTIPLE_BLOCKS,
            ReadKind::ExtendedMultiple => opcodes::EXTENDED_READ_MULTIPLE_BLOCKS,
            ReadKind::FastMultiple => opcodes::FAST_READ_MULTIPLE_BLOCKS,
            ReadKind::FastExtendedMultiple => opcodes::FAST_EXTENDED_READ_MULTIPLE_BLOCKS,
            ReadKind::SecurityStatus => opcodes::GET_MULTIPLE_BLOCK_SECURITY_STATUS,
            ReadKind::ExtendedSecurityStatus => {
                opcodes::EXTENDED_GET_MULTIPLE_BLOCK_SECURITY_STATUS
            }
        }
    }

    /// Two byte addressing.
    pub fn is_extended(self) -> bool {
        matches!(
            self,
            ReadKind::ExtendedMultiple
                | ReadKind::FastExtendedMultiple
                | ReadKind::ExtendedSecurityStatus
        )
    }

    /// Answered at the fast data rate.
    pub fn is_fast(self) -> bool {
        matches!(self, ReadKind::FastMultiple | ReadKind::FastExtendedMultiple)
    }

    /// One byte per block instead of block data.
    pub fn is_security_status(self) -> bool {
        matches!(
            self,
            ReadKind::SecurityStatus | ReadKind::ExtendedSecurityStatus
        )
    }

    /// Upper bound of `block_no + num_blocks`.
    pub fn max_blocks(self) -> u32 {
        if self.is_extended() {
            MAX_EXTENDED_BLOCKS
        } else {
            MAX_STANDARD_BLOCKS
        }
    }

    /// Response bytes per block. With Option ON plain reads prefix every
    /// block with its security status byte.
    pub fn bytes_per_block(self, option: OptionFlag) -> usize {
        if self.is_security_status() {
            1
        } else if option.is_on() {
            BLOCK_SIZE_WITH_SECURITY
        } else {
            BLOCK_SIZE
        }
    }

    /// Reject empty and out-of-range requests.
    pub fn validate(self, block_no: u16, num_blocks: u16) -> Result<()> {
        check_range(block_no, num_blocks, self.max_blocks())
    }
}

/// Reject a zero count and ranges ending past `max_blocks`.
pub(crate) fn check_range(block_no: u16, num_blocks: u16, max_blocks: u32) -> Result<()> {
    if num_blocks == 0 {
        return Err(Error::InvalidParameter("block count must be non-zero".into()));
    }
    let end = u32::from(block_no) + u32::from(num_blocks);
    if end > max_blocks {
        return Err(Error::InvalidParameter(format!(
            "blocks {}..{} exceed the {} block range",
            block_no, end, max_blocks
        )));
    }
    Ok(())
}

/// Progress of one chained read.
#[derive(Debug)]
struct ChainCursor {
    next_block: u16,
    remaining: u16,
    bytes_per_block: usize,
    max_per_transfer: u16,
    accumulated: usize,
    expected: usize,
}

impl ChainCursor {
    fn new(block_no: u16, num_blocks: u16, bytes_per_block: usize, max_per_transfer: u16) -> Self {
        Self {
            next_block: block_no,
            remaining: num_blocks,
            bytes_per_block,
            max_per_transfer,
            accumulated: 0,
            expected: usize::from(num_blocks) * bytes_per_block,
        }
    }

    fn done(&self) -> bool {
        self.accumulated >= self.expected
    }

    fn next_count(&self) -> u16 {
        self.max_per_transfer.min(self.remaining)
    }

    fn advance(&mut self, blocks: u16, bytes: usize) {
        self.next_block = self.next_block.saturating_add(blocks);
        self.remaining = self.remaining.saturating_sub(blocks);
        self.accumulated += bytes;
    }
}

fn copy_into(out: &mut [u8], offset: usize, chunk: &[u8]) -> Result<()> {
    let end = offset + chunk.len();
    let capacity = out.len();
    let dst = out.get_mut(offset..end).ok_or(Error::BufferOverflow {
        capacity,
        required: end,
    })?;
    dst.copy_from_slice(chunk);
    Ok(())
}

impl<T: Transceiver> TagSession<T> {
    /// Read `num_blocks` blocks starting at `block_no` into `out` and return
    /// the number of bytes written.
    ///
    /// `out` must hold the full expected result (`num_blocks` times the
    /// bytes per block). With `update_timing` the Rx data rate is switched
    /// to the fast-command rate for the duration of the call.
    pub fn read_blocks_into(
        &mut self,
        kind: ReadKind,
        update_timing: bool,
        option: OptionFlag,
        block_no: u16,
        num_blocks: u16,
        out: &mut [u8],
    ) -> Result<usize> {
        kind.validate(block_no, num_blocks)?;
        let bytes_per_block = kind.bytes_per_block(option);
        let required = usize::from(num_blocks) * bytes_per_block;
        if out.len() < required {
            return Err(Error::BufferOverflow {
                capacity: out.len(),
                required,
            });
        }

        self.apply_option(option, false)?;

        let saved_rx = if update_timing {
            let previous = self.transceiver.get_config(ConfigKey::RxDataRate)?;
            let flags = RequestFlags::from_config(self.transceiver.get_config(ConfigKey::Flags)?);
            let rate = fast_rx_data_rate(flags, self.config.fast_data_rate);
            trace!("rx data rate {:#06x} -> {:?}", previous, rate);
            self.transceiver.set_config(ConfigKey::RxDataRate, rate.as_u16())?;
            Some(previous)
        } else {
            None
        };

        let result = if self.config.chaining {
            self.read_chained(kind, block_no, num_blocks, bytes_per_block, out)
        } else {
            self.read_once(kind, block_no, num_blocks, out)
        };

        if let Some(previous) = saved_rx {
            let restored = self.transceiver.set_config(ConfigKey::RxDataRate, previous);
            // a read error takes precedence over a failed restore
            if result.is_ok() {
                restored?;
            }
        }
        result
    }

    /// Owned-buffer variant of `read_blocks_into`.
    pub fn read_blocks(
        &mut self,
        kind: ReadKind,
        update_timing: bool,
        option: OptionFlag,
        block_no: u16,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        let mut out = vec![0u8; usize::from(num_blocks) * kind.bytes_per_block(option)];
        let len = self.read_blocks_into(kind, update_timing, option, block_no, num_blocks, &mut out)?;
        out.truncate(len);
        Ok(out)
    }

    fn read_once(
        &mut self,
        kind: ReadKind,
        block_no: u16,
        num_blocks: u16,
        out: &mut [u8],
    ) -> Result<usize> {
        let frame = encode_range(kind.opcode(), block_no, num_blocks);
        let result = self.transceive(ExchangeMode::Default, &frame);
        let resp = compute_error_code(&self.transceiver, result)?;
        copy_into(out, 0, &resp)?;
        Ok(resp.len())
    }

    fn read_chained(
        &mut self,
        kind: ReadKind,
        block_no: u16,
        num_blocks: u16,
        bytes_per_block: usize,
        out: &mut [u8],
    ) -> Result<usize> {
        let max_per_transfer = self.config.max_blocks_per_transfer(bytes_per_block);
        let mut cursor = ChainCursor::new(block_no, num_blocks, bytes_per_block, max_per_transfer);
        debug!(
            "chained read {:?}: {} blocks from {}, {} per transfer",
            kind, num_blocks, block_no, max_per_transfer
        );

        while !cursor.done() {
            let count = cursor.next_count();
            let frame = encode_range(kind.opcode(), cursor.next_block, count);
            let result = self.transceive(ExchangeMode::Default, &frame);
            let chunk = compute_error_code(&self.transceiver, result)?;

            let requested = usize::from(count) * cursor.bytes_per_block;
            if chunk.len() > requested {
                debug!("chunk of {} bytes exceeds the {} requested", chunk.len(), requested);
                return Err(Error::Protocol);
            }

            if kind.is_security_status() {
                copy_into(out, cursor.accumulated, &chunk)?;
                cursor.advance(chunk.len() as u16, chunk.len());
                if chunk.len() < requested {
                    // range ran past the tag's last block
                    debug!("short security status read: {} of {}", chunk.len(), requested);
                    break;
                }
            } else {
                if chunk.is_empty() || chunk.len() % cursor.bytes_per_block != 0 {
                    debug!("chunk of {} bytes is not whole blocks", chunk.len());
                    return Err(Error::Protocol);
                }
                copy_into(out, cursor.accumulated, &chunk)?;
                let blocks = (chunk.len() / cursor.bytes_per_block) as u16;
                cursor.advance(blocks, chunk.len());
            }
        }
        Ok(cursor.accumulated)
    }
}

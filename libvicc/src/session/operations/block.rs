// libvicc/src/session/operations/block.rs

//! Block read, write and lock commands.

use crate::constants::{BLOCK_SIZE, MAX_EXTENDED_BLOCKS, MAX_STANDARD_BLOCKS};
use crate::protocol::{encode_write_multiple_header, opcodes, Command};
use crate::session::chaining::check_range;
use crate::session::{ReadKind, TagSession};
use crate::transport::Transceiver;
use crate::types::OptionFlag;
use crate::{Error, Result};

fn check_write_data(num_blocks: u16, data: &[u8]) -> Result<()> {
    let expected = usize::from(num_blocks) * BLOCK_SIZE;
    if data.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

impl<T: Transceiver> TagSession<T> {
    /// Read one block. With Option ON the block security status byte
    /// precedes the data.
    pub fn read_single_block(&mut self, option: OptionFlag, block_no: u8) -> Result<Vec<u8>> {
        let cmd = Command::ReadSingleBlock {
            block: u16::from(block_no),
        };
        self.execute(&cmd, option, false)
    }

    /// Read one block by 16-bit address.
    pub fn extended_read_single_block(
        &mut self,
        option: OptionFlag,
        block_no: u16,
    ) -> Result<Vec<u8>> {
        check_range(block_no, 1, MAX_EXTENDED_BLOCKS)?;
        self.execute(&Command::ExtendedReadSingleBlock { block: block_no }, option, false)
    }

    /// Write one block.
    pub fn write_single_block(
        &mut self,
        option: OptionFlag,
        block_no: u8,
        data: &[u8; BLOCK_SIZE],
    ) -> Result<()> {
        let cmd = Command::WriteSingleBlock {
            block: u16::from(block_no),
            data: *data,
        };
        self.execute(&cmd, option, true)?;
        Ok(())
    }

    /// Write one block by 16-bit address.
    pub fn extended_write_single_block(
        &mut self,
        option: OptionFlag,
        block_no: u16,
        data: &[u8; BLOCK_SIZE],
    ) -> Result<()> {
        check_range(block_no, 1, MAX_EXTENDED_BLOCKS)?;
        let cmd = Command::ExtendedWriteSingleBlock {
            block: block_no,
            data: *data,
        };
        self.execute(&cmd, option, true)?;
        Ok(())
    }

    /// Permanently lock one block.
    pub fn lock_block(&mut self, option: OptionFlag, block_no: u8) -> Result<()> {
        let cmd = Command::LockBlock {
            block: u16::from(block_no),
        };
        self.execute(&cmd, option, true)?;
        Ok(())
    }

    /// Permanently lock one block by 16-bit address.
    pub fn extended_lock_block(&mut self, option: OptionFlag, block_no: u16) -> Result<()> {
        check_range(block_no, 1, MAX_EXTENDED_BLOCKS)?;
        self.execute(&Command::ExtendedLockBlock { block: block_no }, option, true)?;
        Ok(())
    }

    /// Read consecutive blocks, chained when the session allows it.
    pub fn read_multiple_blocks(
        &mut self,
        option: OptionFlag,
        block_no: u8,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        self.read_blocks(ReadKind::Multiple, false, option, u16::from(block_no), num_blocks)
    }

    /// Read consecutive blocks by 16-bit address.
    pub fn extended_read_multiple_blocks(
        &mut self,
        option: OptionFlag,
        block_no: u16,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        self.read_blocks(ReadKind::ExtendedMultiple, false, option, block_no, num_blocks)
    }

    /// Multiple block read answered at the fast data rate.
    pub fn fast_read_multiple_blocks(
        &mut self,
        option: OptionFlag,
        block_no: u8,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        self.read_blocks(ReadKind::FastMultiple, true, option, u16::from(block_no), num_blocks)
    }

    /// Extended multiple block read at the fast data rate.
    pub fn fast_extended_read_multiple_blocks(
        &mut self,
        option: OptionFlag,
        block_no: u16,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        self.read_blocks(ReadKind::FastExtendedMultiple, true, option, block_no, num_blocks)
    }

    /// One security status byte per block. May return fewer bytes than
    /// requested when the range runs past the end of the tag memory.
    pub fn get_multiple_block_security_status(
        &mut self,
        block_no: u8,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        self.read_blocks(
            ReadKind::SecurityStatus,
            false,
            OptionFlag::Off,
            u16::from(block_no),
            num_blocks,
        )
    }

    /// Block security status by 16-bit address.
    pub fn extended_get_multiple_block_security_status(
        &mut self,
        block_no: u16,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        self.read_blocks(
            ReadKind::ExtendedSecurityStatus,
            false,
            OptionFlag::Off,
            block_no,
            num_blocks,
        )
    }

    /// Write `num_blocks` consecutive blocks; `data` holds exactly
    /// `num_blocks * 4` bytes.
    pub fn write_multiple_blocks(
        &mut self,
        option: OptionFlag,
        block_no: u8,
        num_blocks: u16,
        data: &[u8],
    ) -> Result<()> {
        check_range(u16::from(block_no), num_blocks, MAX_STANDARD_BLOCKS)?;
        check_write_data(num_blocks, data)?;
        let header = encode_write_multiple_header(u16::from(block_no), num_blocks, false);
        self.execute_buffered(opcodes::WRITE_MULTIPLE_BLOCKS, &header, data, option, true)?;
        Ok(())
    }

    /// Write consecutive blocks by 16-bit address.
    pub fn extended_write_multiple_blocks(
        &mut self,
        option: OptionFlag,
        block_no: u16,
        num_blocks: u16,
        data: &[u8],
    ) -> Result<()> {
        check_range(block_no, num_blocks, MAX_EXTENDED_BLOCKS)?;
        check_write_data(num_blocks, data)?;
        let header = encode_write_multiple_header(block_no, num_blocks, true);
        self.execute_buffered(
            opcodes::EXTENDED_WRITE_MULTIPLE_BLOCKS,
            &header,
            data,
            option,
            true,
        )?;
        Ok(())
    }
}

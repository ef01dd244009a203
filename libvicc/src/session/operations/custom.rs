// libvicc/src/session/operations/custom.rs

//! NXP custom command wrappers.
//!
//! Password-carrying commands never send the password in clear: it is
//! XORed with a fresh random number obtained from the tag first.

use crate::constants::{BLOCK_SIZE, MAX_STANDARD_BLOCKS, SIGNATURE_LEN};
use crate::protocol::{
    opcodes, parser, xor_password, Command, NxpSystemInformation, PasswordId,
};
use crate::protocol::commands::custom::encode_custom_range;
use crate::session::TagSession;
use crate::session::chaining::check_range;
use crate::transport::Transceiver;
use crate::types::OptionFlag;
use crate::{Error, Result};

fn fixed<const N: usize>(resp: &[u8]) -> Result<[u8; N]> {
    parser::expect_len(resp, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(resp);
    Ok(out)
}

impl<T: Transceiver> TagSession<T> {
    /// Enable the EAS mode.
    pub fn set_eas(&mut self, option: OptionFlag) -> Result<()> {
        self.execute(&Command::SetEas, option, true)?;
        Ok(())
    }

    /// Disable the EAS mode.
    pub fn reset_eas(&mut self, option: OptionFlag) -> Result<()> {
        self.execute(&Command::ResetEas, option, true)?;
        Ok(())
    }

    /// Permanently lock the EAS mode.
    pub fn lock_eas(&mut self, option: OptionFlag) -> Result<()> {
        self.execute(&Command::LockEas, option, true)?;
        Ok(())
    }

    /// EAS alarm. An empty `id_mask` addresses every tag; the response is
    /// the EAS sequence (or EAS ID with Option ON).
    pub fn eas_alarm(&mut self, option: OptionFlag, id_mask: &[u8]) -> Result<Vec<u8>> {
        if id_mask.len() > 2 {
            return Err(Error::InvalidParameter(format!(
                "EAS ID mask is at most 2 bytes, got {}",
                id_mask.len()
            )));
        }
        let cmd = Command::EasAlarm {
            id_mask: id_mask.to_vec(),
        };
        self.execute(&cmd, option, false)
    }

    /// Require the EAS/AFI password for EAS and AFI changes.
    pub fn password_protect_eas_afi(&mut self, option: OptionFlag) -> Result<()> {
        self.execute(&Command::PasswordProtectEasAfi, option, true)?;
        Ok(())
    }

    /// Set the EAS ID reported by the EAS alarm.
    pub fn write_eas_id(&mut self, option: OptionFlag, eas_id: u16) -> Result<()> {
        self.execute(&Command::WriteEasId { eas_id }, option, true)?;
        Ok(())
    }

    /// Protection pointer, lock bits and feature flags.
    pub fn get_nxp_system_information(&mut self) -> Result<NxpSystemInformation> {
        let resp = self.execute(&Command::GetNxpSystemInformation, OptionFlag::Off, false)?;
        NxpSystemInformation::decode(&resp)
    }

    /// 16-bit random number used to mask passwords.
    pub fn get_random_number(&mut self) -> Result<[u8; 2]> {
        let resp = self.execute(&Command::GetRandomNumber, OptionFlag::Off, false)?;
        fixed(&resp)
    }

    /// Present a password to the tag.
    pub fn set_password(&mut self, pwd_id: PasswordId, password: [u8; 4]) -> Result<()> {
        let random = self.get_random_number()?;
        let cmd = Command::SetPassword {
            pwd_id,
            xor_password: xor_password(password, random),
        };
        self.execute(&cmd, OptionFlag::Off, false)?;
        Ok(())
    }

    /// Replace a password. The matching SetPassword must have succeeded.
    pub fn write_password(
        &mut self,
        option: OptionFlag,
        pwd_id: PasswordId,
        password: [u8; 4],
    ) -> Result<()> {
        self.execute(&Command::WritePassword { pwd_id, password }, option, true)?;
        Ok(())
    }

    /// Permanently lock a password.
    pub fn lock_password(&mut self, option: OptionFlag, pwd_id: PasswordId) -> Result<()> {
        self.execute(&Command::LockPassword { pwd_id }, option, true)?;
        Ok(())
    }

    /// Set the protection pointer and page protection status.
    pub fn protect_page(
        &mut self,
        option: OptionFlag,
        page_no: u8,
        protection_status: u8,
    ) -> Result<()> {
        let cmd = Command::ProtectPage {
            page_no,
            protection_status,
        };
        self.execute(&cmd, option, true)?;
        Ok(())
    }

    /// Permanently lock the page protection of `page_no`.
    pub fn lock_page_protection_condition(&mut self, option: OptionFlag, page_no: u8) -> Result<()> {
        self.execute(&Command::LockPageProtectionCondition { page_no }, option, true)?;
        Ok(())
    }

    /// Permanently disable the tag.
    pub fn destroy(&mut self, option: OptionFlag, password: [u8; 4]) -> Result<()> {
        let random = self.get_random_number()?;
        let cmd = Command::Destroy {
            xor_password: xor_password(password, random),
        };
        self.execute(&cmd, option, true)?;
        Ok(())
    }

    /// Enter privacy mode: the tag stays silent until the privacy password is presented.
    pub fn enable_privacy(&mut self, option: OptionFlag, password: [u8; 4]) -> Result<()> {
        let random = self.get_random_number()?;
        let cmd = Command::EnablePrivacy {
            xor_password: xor_password(password, random),
        };
        self.execute(&cmd, option, true)?;
        Ok(())
    }

    /// Combine the read and write passwords into one 64-bit password.
    pub fn password_protection_64bit(&mut self, option: OptionFlag) -> Result<()> {
        self.execute(&Command::PasswordProtection64Bit, option, true)?;
        Ok(())
    }

    /// NXP originality signature over the UID.
    pub fn read_signature(&mut self) -> Result<[u8; SIGNATURE_LEN]> {
        let resp = self.execute(&Command::ReadSignature, OptionFlag::Off, false)?;
        fixed(&resp)
    }

    /// Read configuration blocks.
    pub fn read_config(&mut self, block_no: u8, num_blocks: u16) -> Result<Vec<u8>> {
        check_custom_range(block_no, num_blocks)?;
        let cmd = Command::ReadConfig {
            block: block_no,
            count: num_blocks,
        };
        self.execute(&cmd, OptionFlag::Off, false)
    }

    /// Write one configuration block.
    pub fn write_config(
        &mut self,
        option: OptionFlag,
        block_no: u8,
        data: &[u8; BLOCK_SIZE],
    ) -> Result<()> {
        let cmd = Command::WriteConfig {
            block: block_no,
            data: *data,
        };
        self.execute(&cmd, option, true)?;
        Ok(())
    }

    /// Make the tag answer inventories with a random UID.
    pub fn pick_random_id(&mut self) -> Result<()> {
        self.execute(&Command::PickRandomId, OptionFlag::Off, false)?;
        Ok(())
    }

    /// Tamper detection status.
    pub fn read_tt(&mut self, option: OptionFlag) -> Result<Vec<u8>> {
        self.execute(&Command::ReadTt, option, false)
    }

    /// Read SRAM blocks.
    pub fn read_sram(
        &mut self,
        option: OptionFlag,
        block_no: u8,
        num_blocks: u16,
    ) -> Result<Vec<u8>> {
        check_custom_range(block_no, num_blocks)?;
        let cmd = Command::ReadSram {
            first_block: block_no,
            count: num_blocks,
        };
        self.execute(&cmd, option, false)
    }

    /// Write SRAM blocks; `data` holds exactly `num_blocks * 4` bytes.
    pub fn write_sram(
        &mut self,
        option: OptionFlag,
        block_no: u8,
        num_blocks: u16,
        data: &[u8],
    ) -> Result<()> {
        check_custom_range(block_no, num_blocks)?;
        let expected = usize::from(num_blocks) * BLOCK_SIZE;
        if data.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: data.len(),
            });
        }
        let header = encode_custom_range(opcodes::WRITE_SRAM, block_no, num_blocks);
        self.execute_buffered(opcodes::WRITE_SRAM, &header, data, option, false)?;
        Ok(())
    }
}

/// Custom range commands carry a one byte address and `count - 1`, so the
/// range must stay inside the standard block space.
fn check_custom_range(block_no: u8, num_blocks: u16) -> Result<()> {
    check_range(u16::from(block_no), num_blocks, MAX_STANDARD_BLOCKS)
}

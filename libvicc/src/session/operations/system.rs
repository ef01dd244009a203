// libvicc/src/session/operations/system.rs

//! State, AFI/DSFID and system information commands.

use log::debug;

use crate::protocol::{parser, Command, SystemInformation};
use crate::session::TagSession;
use crate::transport::Transceiver;
use crate::types::{OptionFlag, Uid};
use crate::{Error, Result};

impl<T: Transceiver> TagSession<T> {
    /// Send the tag to the quiet state. The tag never answers, so a
    /// timeout is success.
    pub fn stay_quiet(&mut self) -> Result<()> {
        match self.execute(&Command::StayQuiet, OptionFlag::Off, false) {
            Ok(_) | Err(Error::Timeout) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Put the addressed tag in the selected state.
    pub fn select(&mut self) -> Result<()> {
        self.execute(&Command::Select, OptionFlag::Off, false)?;
        Ok(())
    }

    /// Return the tag to the ready state.
    pub fn reset_to_ready(&mut self) -> Result<()> {
        self.execute(&Command::ResetToReady, OptionFlag::Off, false)?;
        Ok(())
    }

    /// Write the application family identifier.
    pub fn write_afi(&mut self, option: OptionFlag, afi: u8) -> Result<()> {
        self.execute(&Command::WriteAfi { afi }, option, true)?;
        Ok(())
    }

    /// Permanently lock the AFI.
    pub fn lock_afi(&mut self, option: OptionFlag) -> Result<()> {
        self.execute(&Command::LockAfi, option, true)?;
        Ok(())
    }

    /// Write the data storage format identifier.
    pub fn write_dsfid(&mut self, option: OptionFlag, dsfid: u8) -> Result<()> {
        self.execute(&Command::WriteDsfid { dsfid }, option, true)?;
        Ok(())
    }

    /// Permanently lock the DSFID.
    pub fn lock_dsfid(&mut self, option: OptionFlag) -> Result<()> {
        self.execute(&Command::LockDsfid, option, true)?;
        Ok(())
    }

    /// UID, DSFID, AFI, memory size and IC reference.
    pub fn get_system_information(&mut self) -> Result<SystemInformation> {
        let resp = self.execute(&Command::GetSystemInformation, OptionFlag::Off, false)?;
        let info = SystemInformation::decode(&resp)?;
        debug!("system information: uid={} flags={:#04x}", info.uid.to_hex(), info.info_flags);
        Ok(info)
    }

    /// `info_params` selects the fields the tag reports (see
    /// `protocol::responses::info_flags`).
    pub fn extended_get_system_information(&mut self, info_params: u8) -> Result<SystemInformation> {
        let cmd = Command::ExtendedGetSystemInformation { info_params };
        let resp = self.execute(&cmd, OptionFlag::Off, false)?;
        SystemInformation::decode_extended(&resp)
    }

    /// Data rates and framing options the tag supports.
    pub fn parameter_request(&mut self) -> Result<u8> {
        let resp = self.execute(&Command::ParameterRequest, OptionFlag::Off, false)?;
        parser::byte_at(&resp, 0)
    }

    /// Select data rates and framing options.
    pub fn parameter_select(&mut self, parameters: u8) -> Result<()> {
        self.execute(&Command::ParameterSelect { parameters }, OptionFlag::Off, false)?;
        Ok(())
    }

    /// UID of the activated tag, MSB first.
    pub fn serial_number(&self) -> Result<Uid> {
        Ok(Uid::from_wire(self.transceiver.serial_no()?))
    }
}

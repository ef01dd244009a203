// libvicc/src/session/options.rs

//! Option flag and timing control.

use log::trace;

use crate::constants::{TIMEOUT_LONG_US, TIMEOUT_SHORT_US};
use crate::protocol::RequestFlags;
use crate::session::TagSession;
use crate::transport::Transceiver;
use crate::types::{ConfigKey, DataRate, OptionFlag};
use crate::Result;

impl<T: Transceiver> TagSession<T> {
    /// Set or clear the OPTION request flag. `option` must be 0 or 1.
    /// With `update_timing` the response timeout follows the flag: short
    /// when ON, long when OFF.
    pub fn set_option_bit(&mut self, option: u8, update_timing: bool) -> Result<()> {
        let option = OptionFlag::try_from(option)?;
        self.apply_option(option, update_timing)
    }

    pub(crate) fn apply_option(&mut self, option: OptionFlag, update_timing: bool) -> Result<()> {
        let current = RequestFlags::from_config(self.transceiver.get_config(ConfigKey::Flags)?);
        let wanted = current.with_option(option.is_on());
        if wanted != current {
            trace!("request flags {:#04x} -> {:#04x}", current.bits(), wanted.bits());
            self.transceiver.set_config(ConfigKey::Flags, wanted.to_config())?;
        }

        if update_timing {
            let timeout = if option.is_on() {
                TIMEOUT_SHORT_US
            } else {
                TIMEOUT_LONG_US
            };
            self.transceiver.set_config(ConfigKey::TimeoutUs, timeout)?;
        }
        Ok(())
    }
}

/// Rx data rate a fast command answers with. DATA_RATE selects the 53/106
/// family, otherwise 26/212; `fast` picks the upper rate of the family.
pub fn fast_rx_data_rate(flags: RequestFlags, fast: bool) -> DataRate {
    match (flags.contains(RequestFlags::DATA_RATE), fast) {
        (true, false) => DataRate::Kbps53,
        (true, true) => DataRate::Kbps106,
        (false, false) => DataRate::Kbps26,
        (false, true) => DataRate::Kbps212,
    }
}

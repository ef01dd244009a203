// libvicc/src/protocol/flags.rs
//! ISO15693 request flags byte.
//!
//! Bits 1..4 are common to all requests; bits 5..8 change meaning with the
//! INVENTORY bit. The session keeps the current byte behind
//! `ConfigKey::Flags` and rewrites OPTION before each command.

use bitflags::bitflags;

bitflags! {
    /// Request flags (8 bits)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct RequestFlags: u8 {
        /// Tag answers on two subcarriers
        const TWO_SUB_CARRIERS = 0b0000_0001;

        /// High data rate
        const DATA_RATE = 0b0000_0010;

        /// Inventory request (changes meaning of bits 5..8)
        const INVENTORY = 0b0000_0100;

        /// Protocol format is extended
        const PROTOCOL_EXTENSION = 0b0000_1000;

        /// Only the tag in the selected state answers
        const SELECTED = 0b0001_0000;

        /// Request carries the UID of the addressed tag
        const ADDRESSED = 0b0010_0000;

        /// Command specific meaning (security status, wait for EOF)
        const OPTION = 0b0100_0000;

        /// Reserved for future use
        const RFU = 0b1000_0000;
    }
}

impl RequestFlags {
    /// Flags as stored behind the config accessor
    pub fn from_config(value: u16) -> Self {
        Self::from_bits_retain((value & 0x00ff) as u8)
    }

    /// Value for `ConfigKey::Flags`.
    pub fn to_config(self) -> u16 {
        u16::from(self.bits())
    }

    /// Return a copy with OPTION set or cleared.
    pub fn with_option(self, on: bool) -> Self {
        let mut f = self;
        f.set(Self::OPTION, on);
        f
    }
}

impl Default for RequestFlags {
    fn default() -> Self {
        // Addressed, high data rate: the usual single-tag configuration
        Self::DATA_RATE | Self::ADDRESSED
    }
}

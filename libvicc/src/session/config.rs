// libvicc/src/session/config.rs

//! Session configuration, fixed when the session is built.

use crate::constants::DEFAULT_TRANSFER_BUDGET;

/// Which crypto backend verifies TAM1 responses. The software backend
/// expects the stored key in reversed byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthBackend {
    /// Key stored in reversed byte order
    #[default]
    Software,
    /// Key material used as stored (secure access module style backends)
    SecureModule,
}

/// Runtime options of a `TagSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Split multi-block reads into bounded sub-transfers
    pub chaining: bool,
    /// Response bytes one chained sub-transfer may carry
    pub transfer_budget: usize,
    /// Fast commands answer at the upper rate of their data rate family
    pub fast_data_rate: bool,
    /// Backend that verifies TAM1 responses
    pub auth_backend: AuthBackend,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chaining: false,
            transfer_budget: DEFAULT_TRANSFER_BUDGET,
            fast_data_rate: false,
            auth_backend: AuthBackend::Software,
        }
    }
}

impl SessionConfig {
    /// Blocks one sub-transfer may request, never less than one.
    pub fn max_blocks_per_transfer(&self, bytes_per_block: usize) -> u16 {
        let n = self.transfer_budget / bytes_per_block.max(1);
        n.clamp(1, usize::from(u16::MAX)) as u16
    }
}

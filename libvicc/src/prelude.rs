// libvicc/src/prelude.rs

//! Common imports: `use libvicc::prelude::*;`

pub use crate::crypto::{KeyStore, MemoryKeyStore, RandomSource, SymmetricCipher};
pub use crate::protocol::{Command, NxpSystemInformation, PasswordId, RequestFlags, SystemInformation};
pub use crate::session::{
    AuthBackend, AuthChallenge, ReadKind, SessionBuilder, SessionConfig, Tam1Verification,
    TagSession,
};
pub use crate::transport::Transceiver;
pub use crate::{ConfigKey, DataRate, EofKind, Error, ExchangeMode, KeyType, OptionFlag, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, reverse, reversed};

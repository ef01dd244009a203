// libvicc/src/protocol/mod.rs

//! Wire level protocol: command frames, request flags, responses and tag status translation.

pub mod commands;
pub mod flags;
pub mod opcodes;
pub mod parser;
pub mod responses;
pub mod status;

pub use commands::*;
pub use flags::RequestFlags;
pub use responses::{NxpSystemInformation, SystemInformation};
pub use status::compute_error_code;

// libvicc/src/lib.rs

//! libvicc
//!
//! Pure Rust command engine for ISO15693 vicinity tags: command framing,
//! request flag and timing control, chained multi-block reads, tag error
//! translation and TAM1 tag authentication, on top of a pluggable
//! transceiver.
#![warn(missing_docs)]

pub mod constants;
pub mod crypto;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

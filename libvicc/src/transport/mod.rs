// libvicc/src/transport/mod.rs

//! Transceiver abstraction and its mock.

pub mod mock;
pub mod traits;

pub use mock::{MockReply, MockTransceiver};
pub use traits::Transceiver;

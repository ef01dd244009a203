// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"] mod common;`, so not every helper is used
// by every file.
#![allow(dead_code)]

pub mod fixtures;

use libvicc::session::{SessionBuilder, SessionConfig, TagSession};
use libvicc::transport::MockTransceiver;

/// Initialise env_logger once; repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Session over a fresh mock with chaining enabled and the given budget.
pub fn chained_session(transfer_budget: usize) -> TagSession<MockTransceiver> {
    SessionBuilder::new()
        .with_transceiver(MockTransceiver::new())
        .with_config(SessionConfig {
            chaining: true,
            transfer_budget,
            ..SessionConfig::default()
        })
        .build()
        .expect("mock session")
}

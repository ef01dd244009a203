//! Utilities for libvicc: small, reusable helpers used across the crate.

pub mod hex;
pub mod reverse;

pub use hex::*;
pub use reverse::{reverse, reversed};

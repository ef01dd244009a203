// libvicc/src/session/operations/mod.rs

//! Typed command wrappers on `TagSession`, grouped by command family.
//! Each wrapper picks the Option/timing parameters and runs the command
//! through `TagSession::execute` or the chaining engine.

pub mod block;
pub mod custom;
pub mod system;

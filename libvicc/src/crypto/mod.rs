// libvicc/src/crypto/mod.rs
//! Collaborators used by tag authentication: random source, key store and
//! symmetric cipher, each behind a trait so sessions can plug in hardware
//! backed implementations.

pub mod cipher;
pub mod keystore;
pub mod random;

pub use cipher::{SoftwareAes, SymmetricCipher};
pub use keystore::{KeyStore, MemoryKeyStore, StoredKey};
pub use random::{OsRandom, RandomSource};

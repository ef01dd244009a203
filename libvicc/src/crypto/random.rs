// libvicc/src/crypto/random.rs

//! Random number sources.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::{Error, Result};

/// Source of unpredictable bytes (challenges, password XOR masks).
pub trait RandomSource {
    /// Fill `buf` completely.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Random source backed by the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        fill_from(&mut OsRng, buf)
    }
}

fn fill_from<R: RngCore>(rng: &mut R, buf: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(buf).map_err(|e| Error::Random(e.to_string()))
}

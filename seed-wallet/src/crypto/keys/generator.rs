//! Generator derivation: seed -> private generator -> public generator
//!
//! The private generator is found by rejection sampling over
//! `SHA512Half(seed || be32(counter))`; the first candidate inside `(0, n)`
//! wins. The same bounded sampler also drives account key derivation.

use std::fmt;

use secp256k1::{PublicKey, Secp256k1, SecretKey};
use tracing::{error, trace};
use zeroize::Zeroize;

use crate::crypto::codec::SEED_LENGTH;
use crate::crypto::digest::sha512_half;
use crate::error::{Error, Result};

/// Highest counter the sampler will try before giving up.
///
/// The full 32-bit counter space is 2^32 attempts. With a correct hash the
/// first candidate is accepted with probability ~1 - 2^-128, so reaching
/// this bound means the hash or the curve order is broken.
pub const COUNTER_CEILING: u32 = u32::MAX;

/// Master secret scalar derived from a seed
#[derive(Clone, Copy)]
pub struct PrivateGenerator(SecretKey);

impl PrivateGenerator {
    pub fn secret_key(&self) -> &SecretKey {
        &self.0
    }

    /// Big-endian scalar bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.secret_bytes()
    }
}

impl fmt::Debug for PrivateGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateGenerator([REDACTED])")
    }
}

/// Master public point, `g·G`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicGenerator(PublicKey);

impl PublicGenerator {
    pub fn public_key(&self) -> &PublicKey {
        &self.0
    }

    /// Compressed SEC1 encoding; this is what account derivation hashes
    pub fn to_bytes(&self) -> [u8; 33] {
        self.0.serialize()
    }
}

/// Derive the private generator of a seed
pub fn derive_private_generator(seed: &[u8; SEED_LENGTH]) -> Result<PrivateGenerator> {
    let secret = sample_scalar(COUNTER_CEILING, |counter| {
        let mut candidate = sha512_half(&[&seed[..], &counter.to_be_bytes()[..]]);
        let accepted = SecretKey::from_slice(&candidate).ok();
        candidate.zeroize();
        accepted
    })?;

    Ok(PrivateGenerator(secret))
}

/// Derive the public generator, `g·G`
pub fn derive_public_generator(private_generator: &PrivateGenerator) -> PublicGenerator {
    let secp = Secp256k1::signing_only();
    PublicGenerator(PublicKey::from_secret_key(&secp, &private_generator.0))
}

/// Try counters `0..=ceiling` until `candidate` yields a valid scalar.
///
/// `candidate` returns `None` to reject a counter. Exhausting the range is
/// reported as [`Error::InternalDerivation`].
pub(crate) fn sample_scalar<F>(ceiling: u32, mut candidate: F) -> Result<SecretKey>
where
    F: FnMut(u32) -> Option<SecretKey>,
{
    for counter in 0..=ceiling {
        if let Some(scalar) = candidate(counter) {
            return Ok(scalar);
        }
        trace!(counter, "scalar candidate rejected");
    }

    error!(ceiling, "rejection sampling exhausted its counter space");
    Err(Error::InternalDerivation(format!(
        "no valid scalar after {} attempts",
        u64::from(ceiling) + 1
    )))
}

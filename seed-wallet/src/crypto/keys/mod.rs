//! Key derivation and management
//!
//! Seed -> private generator -> public generator -> per-account key pairs.

mod account;
mod generator;
mod key_pair;

pub use account::*;
pub use generator::{
    derive_private_generator, derive_public_generator, PrivateGenerator, PublicGenerator,
    COUNTER_CEILING,
};
pub use key_pair::*;

pub use secp256k1::ecdsa::Signature;
pub use secp256k1::{PublicKey, SecretKey};

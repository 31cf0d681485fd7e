//! Cryptographic primitives and operations
//!
//! This module provides the family-seed codec, the hash helpers it shares
//! with key derivation, and the generator/account key derivation itself.

pub mod codec;
pub mod digest;
pub mod keys;

pub use codec::*;
pub use keys::*;

//! Seed Wallet Core - deterministic family-seed key derivation
//!
//! This library turns one 16-byte seed into a reproducible family of
//! secp256k1 key pairs: a root ("generator") pair plus any number of
//! per-account pairs. It also provides the checksummed base-58 text form of
//! the seed and a (weak) passphrase-to-seed entry point.
//!
//! ```
//! use seed_wallet::{Seed, SeedCodec};
//!
//! let seed = Seed::from_base58_with("snoPBrXtMeMyMHUVTgbuqAfg1SUTb", SeedCodec::ripple()).unwrap();
//! let account = seed.key_pair(0).unwrap();
//! assert_eq!(
//!     account.public_key_hex(),
//!     "0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020"
//! );
//! ```

pub mod error;
pub mod crypto;
pub mod account;

// Re-export commonly used types for convenience
pub use account::{create_key_pair, Seed};
pub use crypto::codec::{CodecConfig, SeedCodec};
pub use crypto::keys::{AccountIndex, KeyPair};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Seed implementation

use std::fmt;

use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

use crate::crypto::codec::{SeedCodec, SEED_LENGTH};
use crate::crypto::digest::sha512_quarter;
use crate::crypto::keys::{
    derive_account_key_pair, derive_private_generator, derive_public_generator, AccountIndex,
    KeyPair, PrivateGenerator, PublicGenerator,
};
use crate::error::{Error, Result};

/// The 16-byte root secret of a wallet.
///
/// Every key pair of the wallet is a pure function of these bytes. The
/// bytes are wiped on drop and never appear in `Debug` output.
pub struct Seed {
    bytes: [u8; SEED_LENGTH],
    codec: SeedCodec,
}

impl Seed {
    /// Wrap raw seed bytes, using the standard family-seed codec
    pub fn new(bytes: [u8; SEED_LENGTH]) -> Self {
        Self::with_codec(bytes, SeedCodec::standard())
    }

    /// Wrap raw seed bytes with an explicit codec
    pub fn with_codec(bytes: [u8; SEED_LENGTH], codec: SeedCodec) -> Self {
        Self { bytes, codec }
    }

    /// Wrap a slice that must be exactly 16 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SEED_LENGTH] = bytes.try_into().map_err(|_| {
            Error::Format(format!(
                "seed must be {} bytes, got {}",
                SEED_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self::new(bytes))
    }

    /// Generate a new seed from the operating system's RNG
    pub fn random() -> Self {
        let mut bytes = [0u8; SEED_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        Self::new(bytes)
    }

    /// Derive a seed from a passphrase: the first 16 bytes of its SHA-512.
    ///
    /// There is no salt and no stretching, so anything guessable is
    /// brute-forceable. Use [`Seed::random`] when the seed must stay secret.
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self::new(sha512_quarter(&[passphrase.as_bytes()]))
    }

    /// Decode a family seed with the standard codec
    pub fn from_base58(text: &str) -> Result<Self> {
        Self::from_base58_with(text, SeedCodec::standard())
    }

    /// Decode a family seed with `codec`, which the seed then keeps
    pub fn from_base58_with(text: &str, codec: SeedCodec) -> Result<Self> {
        let bytes = codec.decode(text)?;
        Ok(Self::with_codec(bytes, codec))
    }

    /// Encode this seed with its codec
    pub fn to_base58(&self) -> String {
        self.codec.encode(&self.bytes)
    }

    /// Raw seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.bytes
    }

    pub fn codec(&self) -> &SeedCodec {
        &self.codec
    }

    /// The private/public generator pair of this seed
    pub fn generators(&self) -> Result<(PrivateGenerator, PublicGenerator)> {
        let private = derive_private_generator(&self.bytes)?;
        let public = derive_public_generator(&private);
        Ok((private, public))
    }

    /// Derive the key pair selected by `index`
    pub fn derive(&self, index: AccountIndex) -> Result<KeyPair> {
        create_key_pair(&self.bytes, index)
    }

    /// The generator pair as a key pair
    pub fn root_key_pair(&self) -> Result<KeyPair> {
        self.derive(AccountIndex::Root)
    }

    /// Key pair of account `account`
    pub fn key_pair(&self, account: u32) -> Result<KeyPair> {
        self.derive(AccountIndex::Account(account))
    }

    /// Key pair of account 0, the wallet's default account
    pub fn key_pair_default(&self) -> Result<KeyPair> {
        self.key_pair(0)
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .field("codec", &self.codec)
            .finish()
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Seed {}

/// Derive the key pair selected by `index` straight from raw seed bytes
pub fn create_key_pair(seed: &[u8; SEED_LENGTH], index: AccountIndex) -> Result<KeyPair> {
    let private = derive_private_generator(seed)?;
    let public = derive_public_generator(&private);
    derive_account_key_pair(&private, &public, index)
}

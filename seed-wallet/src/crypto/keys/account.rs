//! Per-account key derivation from the generator pair

use std::fmt;

use secp256k1::{Scalar, SecretKey};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroize;

use super::generator::{sample_scalar, PrivateGenerator, PublicGenerator, COUNTER_CEILING};
use super::key_pair::KeyPair;
use crate::crypto::digest::sha512_half;
use crate::error::Result;

/// Which key pair to derive from a seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountIndex {
    /// The generator pair itself
    Root,
    /// A derived sub-key
    Account(u32),
}

impl From<u32> for AccountIndex {
    fn from(index: u32) -> Self {
        Self::Account(index)
    }
}

impl fmt::Display for AccountIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Account(index) => write!(f, "{}", index),
        }
    }
}

/// Derive the secret scalar of account `account`.
///
/// `offset = SHA512Half(public_generator || be32(account) || be32(sub))` is
/// sampled into `(0, n)`, then `secret = offset + private_generator mod n`.
/// A zero sum counts as a rejection and moves on to the next `sub`.
pub fn derive_account_secret(
    private_generator: &PrivateGenerator,
    public_generator: &PublicGenerator,
    account: u32,
) -> Result<SecretKey> {
    let generator_bytes = public_generator.to_bytes();
    let account_bytes = account.to_be_bytes();

    sample_scalar(COUNTER_CEILING, |sub| {
        let mut candidate = sha512_half(&[
            &generator_bytes[..],
            &account_bytes[..],
            &sub.to_be_bytes()[..],
        ]);
        let offset = SecretKey::from_slice(&candidate).ok();
        candidate.zeroize();

        let tweak = Scalar::from(offset?);
        private_generator.secret_key().add_tweak(&tweak).ok()
    })
}

/// Derive the key pair selected by `index`.
///
/// [`AccountIndex::Root`] returns the generator pair unchanged.
pub fn derive_account_key_pair(
    private_generator: &PrivateGenerator,
    public_generator: &PublicGenerator,
    index: AccountIndex,
) -> Result<KeyPair> {
    let key_pair = match index {
        AccountIndex::Root => KeyPair::from_parts(
            *private_generator.secret_key(),
            *public_generator.public_key(),
        ),
        AccountIndex::Account(account) => {
            let secret = derive_account_secret(private_generator, public_generator, account)?;
            KeyPair::from_secret_key(secret)
        }
    };

    debug!(%index, "derived key pair");
    Ok(key_pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::digest::sha512_quarter;
    use crate::crypto::keys::generator::{derive_private_generator, derive_public_generator};

    fn generators() -> (PrivateGenerator, PublicGenerator) {
        let seed = sha512_quarter(&[&b"masterpassphrase"[..]]);
        let private = derive_private_generator(&seed).unwrap();
        let public = derive_public_generator(&private);
        (private, public)
    }

    #[test]
    fn test_account_zero_vector() {
        let (private, public) = generators();
        let pair = derive_account_key_pair(&private, &public, AccountIndex::Account(0)).unwrap();

        assert_eq!(
            hex::encode_upper(pair.secret_key_bytes().unwrap()),
            "1ACAAEDECE405B2A958212629E16F2EB46B153EEE94CDD350FDEFF52795525B7"
        );
        assert_eq!(
            pair.public_key_hex(),
            "0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020"
        );
    }

    #[test]
    fn test_account_one_vector() {
        let (private, public) = generators();
        let secret = derive_account_secret(&private, &public, 1).unwrap();
        assert_eq!(
            hex::encode_upper(secret.secret_bytes()),
            "1B1F05BB242256FD8A17FC9B723AB6856F4E100584F72569D0A55B56FE40F76B"
        );
    }

    #[test]
    fn test_root_is_generator_pair() {
        let (private, public) = generators();
        let root = derive_account_key_pair(&private, &public, AccountIndex::Root).unwrap();

        assert_eq!(root.secret_key_bytes(), Some(private.to_bytes()));
        assert_eq!(root.public_key_bytes(), public.to_bytes());
    }

    #[test]
    fn test_index_display() {
        assert_eq!(AccountIndex::Root.to_string(), "root");
        assert_eq!(AccountIndex::from(42).to_string(), "42");
    }
}

//! secp256k1 key pair with an optional secret

use std::fmt;

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use crate::error::{Error, Result};

/// A public point plus, when available, its secret scalar.
///
/// Root, account and public-only pairs are all this one type. Whenever a
/// secret is present the public key is `secret·G`.
#[derive(Clone)]
pub struct KeyPair {
    secret: Option<SecretKey>,
    public: PublicKey,
}

impl KeyPair {
    /// Create a key pair from a secret key, computing its public key
    pub fn from_secret_key(secret: SecretKey) -> Self {
        let secp = Secp256k1::signing_only();
        let public = PublicKey::from_secret_key(&secp, &secret);
        Self {
            secret: Some(secret),
            public,
        }
    }

    /// Create a public-only key pair
    pub fn from_public_key(public: PublicKey) -> Self {
        Self {
            secret: None,
            public,
        }
    }

    /// Create a public-only key pair from SEC1 bytes (33 or 65 bytes)
    pub fn from_public_bytes(bytes: &[u8]) -> Result<Self> {
        let public = PublicKey::from_slice(bytes)
            .map_err(|e| Error::InvalidInput(format!("Invalid public key: {}", e)))?;
        Ok(Self::from_public_key(public))
    }

    /// Pair a secret with a public key already known to be `secret·G`
    pub(crate) fn from_parts(secret: SecretKey, public: PublicKey) -> Self {
        debug_assert_eq!(
            PublicKey::from_secret_key(&Secp256k1::signing_only(), &secret),
            public
        );
        Self {
            secret: Some(secret),
            public,
        }
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Compressed SEC1 public key
    pub fn public_key_bytes(&self) -> [u8; 33] {
        self.public.serialize()
    }

    /// Upper-case hex of the compressed public key
    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key_bytes())
    }

    /// Big-endian secret scalar, if this pair has one
    pub fn secret_key_bytes(&self) -> Option<[u8; 32]> {
        self.secret.as_ref().map(SecretKey::secret_bytes)
    }

    /// Sign a 32-byte message digest; the result always has a low `s`
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Signature> {
        let secret = self.secret.as_ref().ok_or(Error::NoPrivateKey)?;

        let secp = Secp256k1::signing_only();
        let message = Message::from_digest(*digest);
        let mut signature = secp.sign_ecdsa(&message, secret);
        signature.normalize_s();

        Ok(signature)
    }

    /// Sign a digest and return the DER encoding
    pub fn sign_der(&self, digest: &[u8; 32]) -> Result<Vec<u8>> {
        Ok(self.sign(digest)?.serialize_der().to_vec())
    }

    /// Verify a signature over `digest` against the public key
    pub fn verify(&self, digest: &[u8; 32], signature: &Signature) -> bool {
        // libsecp256k1 only accepts low-s
        let mut signature = *signature;
        signature.normalize_s();

        let secp = Secp256k1::verification_only();
        let message = Message::from_digest(*digest);
        secp.verify_ecdsa(&message, &signature, &self.public).is_ok()
    }

    /// Verify a DER-encoded signature; malformed DER is simply invalid
    pub fn verify_der(&self, digest: &[u8; 32], der: &[u8]) -> bool {
        match Signature::from_der(der) {
            Ok(signature) => self.verify(digest, &signature),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public_key_hex())
            .field("secret", &self.secret.map(|_| "[REDACTED]"))
            .finish()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public == other.public && self.secret_key_bytes() == other.secret_key_bytes()
    }
}

impl Eq for KeyPair {}

//! Checksummed base-58 text encoding of raw seeds ("family seeds")
//!
//! A family seed is `version || seed || checksum` rendered in base-58, where
//! the checksum is the first four bytes of a double SHA-256 over
//! `version || seed`. The alphabet and version tag are plain configuration
//! carried by a [`SeedCodec`] value; there is no process-wide codec.

use std::fmt;

use bs58::Alphabet;
use serde::{Deserialize, Serialize};

use crate::crypto::digest::checksum;
use crate::error::{Error, Result};

/// Length of a raw seed in bytes
pub const SEED_LENGTH: usize = 16;

/// Version tag identifying a family seed
pub const FAMILY_SEED_VERSION: u8 = 0x21;

/// Digits and letters without `0 O I l`
pub const STANDARD_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The ledger's own dictionary, which makes family seeds start with `s`
pub const RIPPLE_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

const CHECKSUM_LENGTH: usize = 4;
const ENCODED_LENGTH: usize = 1 + SEED_LENGTH + CHECKSUM_LENGTH;

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// The 58 symbols, in digit order
    pub alphabet: String,
    /// One-byte tag prepended to the payload
    pub version: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            alphabet: STANDARD_ALPHABET.to_string(),
            version: FAMILY_SEED_VERSION,
        }
    }
}

/// Encoder/decoder for family seeds
#[derive(Clone)]
pub struct SeedCodec {
    alphabet: Alphabet,
    symbols: String,
    version: u8,
}

impl SeedCodec {
    /// Build a codec from configuration, validating the alphabet
    pub fn new(config: &CodecConfig) -> Result<Self> {
        let symbols: &[u8; 58] = config.alphabet.as_bytes().try_into().map_err(|_| {
            Error::Format(format!(
                "alphabet must have 58 symbols, got {} bytes",
                config.alphabet.len()
            ))
        })?;

        let alphabet = Alphabet::new(symbols)
            .map_err(|e| Error::Format(format!("invalid alphabet: {}", e)))?;

        Ok(Self {
            alphabet,
            symbols: config.alphabet.clone(),
            version: config.version,
        })
    }

    /// Family-seed codec over the standard alphabet
    pub fn standard() -> Self {
        Self {
            alphabet: *Alphabet::BITCOIN,
            symbols: STANDARD_ALPHABET.to_string(),
            version: FAMILY_SEED_VERSION,
        }
    }

    /// Family-seed codec over the ledger alphabet (`s...` strings)
    pub fn ripple() -> Self {
        Self {
            alphabet: *Alphabet::RIPPLE,
            symbols: RIPPLE_ALPHABET.to_string(),
            version: FAMILY_SEED_VERSION,
        }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn alphabet(&self) -> &str {
        &self.symbols
    }

    /// Encode a raw seed as checksummed base-58 text
    pub fn encode(&self, seed: &[u8; SEED_LENGTH]) -> String {
        let mut payload = Vec::with_capacity(ENCODED_LENGTH);
        payload.push(self.version);
        payload.extend_from_slice(seed);

        let check = checksum(&payload);
        payload.extend_from_slice(&check);

        let encoded = bs58::encode(&payload)
            .with_alphabet(&self.alphabet)
            .into_string();
        zeroize::Zeroize::zeroize(&mut payload);
        encoded
    }

    /// Decode checksummed base-58 text back into a raw seed
    pub fn decode(&self, text: &str) -> Result<[u8; SEED_LENGTH]> {
        let mut decoded = bs58::decode(text)
            .with_alphabet(&self.alphabet)
            .into_vec()
            .map_err(decode_error)?;

        let result = self.unpack(&decoded);
        zeroize::Zeroize::zeroize(&mut decoded);
        result
    }

    fn unpack(&self, decoded: &[u8]) -> Result<[u8; SEED_LENGTH]> {
        if decoded.len() != ENCODED_LENGTH {
            return Err(Error::Format(format!(
                "decoded length {} bytes, expected {}",
                decoded.len(),
                ENCODED_LENGTH
            )));
        }

        let (body, check) = decoded.split_at(1 + SEED_LENGTH);
        if checksum(body) != check {
            return Err(Error::Checksum("checksum does not match payload".to_string()));
        }

        if body[0] != self.version {
            return Err(Error::Format(format!(
                "unknown version tag 0x{:02x}",
                body[0]
            )));
        }

        let mut seed = [0u8; SEED_LENGTH];
        seed.copy_from_slice(&body[1..]);
        Ok(seed)
    }
}

impl Default for SeedCodec {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for SeedCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedCodec")
            .field("alphabet", &self.symbols)
            .field("version", &self.version)
            .finish()
    }
}

impl PartialEq for SeedCodec {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols && self.version == other.version
    }
}

impl Eq for SeedCodec {}

fn decode_error(err: bs58::decode::Error) -> Error {
    match err {
        bs58::decode::Error::InvalidCharacter { index, .. }
        | bs58::decode::Error::NonAsciiCharacter { index } => {
            Error::Format(format!("invalid base-58 character at position {}", index))
        }
        other => Error::Format(format!("base-58 decoding failed: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_seed() {
        let seed = hex_seed("DEDCE9CE67B451D852FD4E846FCDE31C");
        assert_eq!(SeedCodec::ripple().encode(&seed), "snoPBrXtMeMyMHUVTgbuqAfg1SUTb");
        assert_eq!(SeedCodec::standard().encode(&seed), "35oPB1XtMeMyMHCVTgbuqw7gsSCTb");
    }

    #[test]
    fn test_decode_known_seed() {
        let seed = SeedCodec::ripple().decode("snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap();
        assert_eq!(hex::encode_upper(seed), "DEDCE9CE67B451D852FD4E846FCDE31C");
    }

    #[test]
    fn test_zero_seed() {
        let codec = SeedCodec::standard();
        let encoded = codec.encode(&[0u8; 16]);
        assert_eq!(encoded, "32hJSU7sNBuApYnMAhbTtLKW6uoC3");
        assert_eq!(codec.decode(&encoded).unwrap(), [0u8; 16]);

        assert_eq!(SeedCodec::ripple().encode(&[0u8; 16]), "sp6JS7f14BuwFY8Mw6bTtLKWauoUs");
    }

    #[test]
    fn test_invalid_character() {
        let err = SeedCodec::standard().decode("32hJSU7sNBuApYnMAhb0tLKW6uoC3").unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("position 19"));
    }

    #[test]
    fn test_corrupted_last_character() {
        let err = SeedCodec::standard().decode("32hJSU7sNBuApYnMAhbTtLKW6uoC4").unwrap_err();
        assert!(err.is_checksum());
    }

    #[test]
    fn test_wrong_length() {
        let err = SeedCodec::standard().decode("1111").unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("length 4"));

        let err = SeedCodec::standard().decode("").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_unknown_version() {
        let other = SeedCodec::new(&CodecConfig {
            version: 0x00,
            ..CodecConfig::default()
        })
        .unwrap();
        let encoded = other.encode(&[7u8; 16]);

        let err = SeedCodec::standard().decode(&encoded).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_config_matches_presets() {
        let from_config = SeedCodec::new(&CodecConfig::default()).unwrap();
        assert_eq!(from_config, SeedCodec::standard());

        let ripple = SeedCodec::new(&CodecConfig {
            alphabet: RIPPLE_ALPHABET.to_string(),
            version: FAMILY_SEED_VERSION,
        })
        .unwrap();
        assert_eq!(ripple, SeedCodec::ripple());
    }

    #[test]
    fn test_invalid_alphabet() {
        let short = CodecConfig {
            alphabet: "abc".to_string(),
            ..CodecConfig::default()
        };
        assert!(SeedCodec::new(&short).unwrap_err().is_format());

        let duplicate = CodecConfig {
            alphabet: "1".repeat(58),
            ..CodecConfig::default()
        };
        assert!(SeedCodec::new(&duplicate).unwrap_err().is_format());
    }

    #[test]
    fn test_debug_shows_config() {
        let debug = format!("{:?}", SeedCodec::ripple());
        assert!(debug.contains("SeedCodec"));
        assert!(debug.contains("33"));
    }

    fn hex_seed(text: &str) -> [u8; 16] {
        let bytes = hex::decode(text).unwrap();
        let mut seed = [0u8; 16];
        seed.copy_from_slice(&bytes);
        seed
    }
}

//! Error types for the seed-wallet library

use thiserror::Error;

/// Custom error type for seed-wallet operations
///
/// Messages only ever carry a classification plus lengths or positions.
/// Seed bytes, generators and secret scalars never end up in here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed base-58 text, wrong decoded length or unknown version tag
    #[error("Format error: {0}")]
    Format(String),

    /// The embedded checksum does not match the decoded payload
    #[error("Checksum error: {0}")]
    Checksum(String),

    /// Signing was attempted on a public-only key pair
    #[error("No private key: key pair is public-only")]
    NoPrivateKey,

    /// The rejection sampler ran out of counters; indicates a defect
    #[error("Internal derivation error: {0}")]
    InternalDerivation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for malformed text, length or version problems
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// True when the text decoded but its checksum did not match
    pub fn is_checksum(&self) -> bool {
        matches!(self, Self::Checksum(_))
    }
}

/// Result type for seed-wallet operations
pub type Result<T> = std::result::Result<T, Error>;

//! CLI configuration

use std::str::FromStr;

use clap::ValueEnum;
use seed_wallet::SeedCodec;

/// Which base-58 dictionary family seeds are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlphabetChoice {
    /// Digits and letters without 0, O, I and l
    Standard,
    /// The ledger dictionary (seeds start with `s`)
    Ripple,
}

impl AlphabetChoice {
    pub fn codec(self) -> SeedCodec {
        match self {
            Self::Standard => SeedCodec::standard(),
            Self::Ripple => SeedCodec::ripple(),
        }
    }
}

impl FromStr for AlphabetChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "ripple" => Ok(Self::Ripple),
            other => Err(format!("unknown alphabet '{}'", other)),
        }
    }
}

/// Settings resolved from the environment; flags override them
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub alphabet: AlphabetChoice,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            alphabet: std::env::var("SEED_WALLET_ALPHABET")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(AlphabetChoice::Standard),
            log_filter: std::env::var("RUST_LOG")
                .or_else(|_| std::env::var("SEED_WALLET_LOG"))
                .unwrap_or_else(|_| "warn".to_string()),
        }
    }
}

impl CliConfig {
    /// Apply command-line overrides
    pub fn with_overrides(mut self, alphabet: Option<AlphabetChoice>, verbose: bool) -> Self {
        if let Some(alphabet) = alphabet {
            self.alphabet = alphabet;
        }
        if verbose {
            self.log_filter = "seed_wallet=debug,seed_wallet_cli=debug".to_string();
        }
        self
    }
}

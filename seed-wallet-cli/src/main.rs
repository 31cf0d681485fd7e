//! Seed Wallet CLI
//!
//! Command-line front end for family-seed key derivation: propose new seeds,
//! inspect and derive from existing ones, and sign or verify digests.

mod config;

use std::io::{self, BufRead};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seed_wallet::{AccountIndex, KeyPair, Seed, SeedCodec};

use crate::config::{AlphabetChoice, CliConfig};

#[derive(Parser)]
#[command(name = "seed-wallet")]
#[command(about = "Deterministic family-seed key derivation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base-58 dictionary for family seeds (env: SEED_WALLET_ALPHABET)
    #[arg(short, long, global = true, value_enum)]
    alphabet: Option<AlphabetChoice>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new seed and show its default account
    Propose {
        /// Derive the seed from a passphrase instead of the OS RNG (weak)
        #[arg(long)]
        passphrase: Option<String>,
    },
    /// Decode a family seed and show its raw bytes
    Inspect {
        /// Family seed, or `-` to read it from stdin
        seed: String,
    },
    /// Derive a key pair from a family seed
    Derive {
        /// Family seed, or `-` to read it from stdin
        seed: String,

        #[command(flatten)]
        target: Target,

        /// Also print the secret key
        #[arg(long)]
        show_secret: bool,
    },
    /// Sign a 32-byte digest with a derived key
    Sign {
        /// Family seed, or `-` to read it from stdin
        seed: String,

        #[command(flatten)]
        target: Target,

        /// Digest to sign, 64 hex characters
        #[arg(long)]
        digest: String,
    },
    /// Verify a DER signature against a public key
    Verify {
        /// Compressed or uncompressed public key, hex
        #[arg(long)]
        public: String,

        /// Signed digest, 64 hex characters
        #[arg(long)]
        digest: String,

        /// DER-encoded signature, hex
        #[arg(long)]
        signature: String,
    },
}

#[derive(Args)]
struct Target {
    /// Account index to derive
    #[arg(long, default_value_t = 0, conflicts_with = "root")]
    account: u32,

    /// Use the root (generator) key pair
    #[arg(long)]
    root: bool,
}

impl Target {
    fn index(&self) -> AccountIndex {
        if self.root {
            AccountIndex::Root
        } else {
            AccountIndex::Account(self.account)
        }
    }
}

#[derive(Serialize)]
struct Proposal {
    master_seed: String,
    master_seed_hex: String,
    public_key_hex: String,
}

#[derive(Serialize)]
struct Derived {
    account: String,
    public_key_hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret_key_hex: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::default().with_overrides(cli.alphabet, cli.verbose);

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    debug!(alphabet = ?config.alphabet, "configuration resolved");
    let codec = config.alphabet.codec();

    match cli.command {
        Commands::Propose { passphrase } => propose(passphrase.as_deref(), codec),
        Commands::Inspect { seed } => inspect(&seed, codec),
        Commands::Derive {
            seed,
            target,
            show_secret,
        } => derive(&seed, codec, target.index(), show_secret),
        Commands::Sign {
            seed,
            target,
            digest,
        } => sign(&seed, codec, target.index(), &digest),
        Commands::Verify {
            public,
            digest,
            signature,
        } => verify(&public, &digest, &signature),
    }
}

fn propose(passphrase: Option<&str>, codec: SeedCodec) -> Result<()> {
    let seed = match passphrase {
        Some(phrase) => {
            info!("deriving seed from passphrase; not suitable for real funds");
            Seed::with_codec(*Seed::from_passphrase(phrase).as_bytes(), codec)
        }
        None => Seed::with_codec(*Seed::random().as_bytes(), codec),
    };

    let key_pair = seed
        .key_pair_default()
        .context("failed to derive default account")?;

    print_json(&Proposal {
        master_seed: seed.to_base58(),
        master_seed_hex: hex::encode_upper(seed.as_bytes()),
        public_key_hex: key_pair.public_key_hex(),
    })
}

fn inspect(text: &str, codec: SeedCodec) -> Result<()> {
    let seed = read_seed(text, codec)?;
    println!("{}", hex::encode_upper(seed.as_bytes()));
    Ok(())
}

fn derive(text: &str, codec: SeedCodec, index: AccountIndex, show_secret: bool) -> Result<()> {
    let seed = read_seed(text, codec)?;
    let key_pair = seed
        .derive(index)
        .with_context(|| format!("failed to derive account {}", index))?;

    print_json(&Derived {
        account: index.to_string(),
        public_key_hex: key_pair.public_key_hex(),
        secret_key_hex: key_pair
            .secret_key_bytes()
            .filter(|_| show_secret)
            .map(hex::encode_upper),
    })
}

fn sign(text: &str, codec: SeedCodec, index: AccountIndex, digest: &str) -> Result<()> {
    let digest = parse_digest(digest)?;
    let seed = read_seed(text, codec)?;
    let key_pair = seed
        .derive(index)
        .with_context(|| format!("failed to derive account {}", index))?;

    let signature = key_pair.sign_der(&digest).context("signing failed")?;
    println!("{}", hex::encode_upper(signature));
    Ok(())
}

fn verify(public: &str, digest: &str, signature: &str) -> Result<()> {
    let public = hex::decode(public).context("public key is not valid hex")?;
    let key_pair = KeyPair::from_public_bytes(&public)?;
    let digest = parse_digest(digest)?;
    let signature = hex::decode(signature).context("signature is not valid hex")?;

    println!("{}", key_pair.verify_der(&digest, &signature));
    Ok(())
}

/// Decode a family seed given on the command line or, for `-`, on stdin
fn read_seed(text: &str, codec: SeedCodec) -> Result<Seed> {
    if text != "-" {
        return Seed::from_base58_with(text.trim(), codec).context("invalid family seed");
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read seed from stdin")?;
    Seed::from_base58_with(line.trim(), codec).context("invalid family seed")
}

fn parse_digest(text: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(text.trim()).context("digest is not valid hex")?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow!("digest must be 32 bytes, got {}", bytes.len()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Seed management
//!
//! This module provides the [`Seed`] entity: how a wallet's root secret is
//! created, encoded, restored and turned into key pairs.

mod seed;

pub use seed::*;

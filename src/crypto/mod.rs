//! Cryptographic primitives and operations
//!
//! This module provides mnemonic phrase handling and ed25519 keypair
//! derivation for wallet generation.

pub mod keys;
pub mod mnemonic;

pub use keys::*;
pub use mnemonic::*;

//! ed25519 keypair derivation and Solana-style key encoding

use ed25519_dalek::{SigningKey, VerifyingKey};

use crate::error::{Error, Result};

/// Seed material consumed per keypair.
pub const SEED_LENGTH: usize = 32;

/// Length of the exported secret key: the seed followed by the public key.
pub const SECRET_KEY_LENGTH: usize = 64;

/// An ed25519 keypair derived from 32 bytes of seed material.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl Keypair {
    /// Derive a keypair from exactly 32 bytes of seed material.
    ///
    /// Deterministic: identical seeds always yield identical keypairs.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let seed: [u8; SEED_LENGTH] = seed
            .try_into()
            .map_err(|_| Error::InvalidSeedLength(seed.len()))?;

        let signing_key = SigningKey::from_bytes(&seed);
        let verifying_key = VerifyingKey::from(&signing_key);

        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Get the account address: the public key encoded as base58.
    pub fn address(&self) -> String {
        bs58::encode(self.verifying_key.to_bytes()).into_string()
    }

    /// Get the 32 seed bytes the keypair was derived from.
    pub fn seed_bytes(&self) -> [u8; SEED_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// Get the 32-byte public key.
    pub fn public_key_bytes(&self) -> [u8; SEED_LENGTH] {
        self.verifying_key.to_bytes()
    }

    /// Export the secret key in the Solana wire convention: the seed
    /// concatenated with the public key, 64 bytes total.
    pub fn to_secret_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        let mut bytes = [0u8; SECRET_KEY_LENGTH];
        bytes[..SEED_LENGTH].copy_from_slice(&self.signing_key.to_bytes());
        bytes[SEED_LENGTH..].copy_from_slice(&self.verifying_key.to_bytes());
        bytes
    }
}

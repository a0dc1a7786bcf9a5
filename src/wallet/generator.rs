//! Seed generation and the wallet derivation pipeline

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::warn;

use crate::crypto::keys::{Keypair, SEED_LENGTH};
use crate::crypto::mnemonic::{generate_mnemonic, mnemonic_to_seed};
use crate::error::{Error, Result};
use crate::wallet::record::WalletRecord;

/// Produce 32 bytes of seed material, either stretched from a fresh
/// 24-word mnemonic or drawn directly from the system RNG.
///
/// In mnemonic mode the phrase that produced the seed is returned
/// alongside it; in random mode there is none.
pub fn generate_seed(use_mnemonic: bool) -> Result<([u8; SEED_LENGTH], Option<String>)> {
    let mut seed = [0u8; SEED_LENGTH];

    if use_mnemonic {
        let phrase = generate_mnemonic()?;
        let stretched = mnemonic_to_seed(&phrase, None)?;

        // BIP39 always yields 64 bytes; assert rather than assume before
        // truncating to the first 32.
        if stretched.len() < SEED_LENGTH {
            return Err(Error::SeedGeneration(format!(
                "stretched seed is {} bytes, need at least {}",
                stretched.len(),
                SEED_LENGTH
            )));
        }

        seed.copy_from_slice(&stretched[..SEED_LENGTH]);
        Ok((seed, Some(phrase)))
    } else {
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| Error::SeedGeneration(e.to_string()))?;
        Ok((seed, None))
    }
}

/// Run the full pipeline once: seed, keypair, encoded record.
pub fn generate_wallet(use_mnemonic: bool) -> Result<WalletRecord> {
    let (seed, mnemonic) = generate_seed(use_mnemonic)?;
    let keypair = Keypair::from_seed(&seed)?;
    Ok(WalletRecord::from_keypair(&keypair, mnemonic))
}

/// Generate `count` wallets, logging and skipping failed attempts.
///
/// Records preserve request order. An empty vector means every attempt
/// failed; callers should not persist in that case.
pub fn generate_batch(count: u32, use_mnemonic: bool) -> Result<Vec<WalletRecord>> {
    if count == 0 {
        return Err(Error::InvalidInput(
            "wallet count must be at least 1".to_string(),
        ));
    }

    let mut records = Vec::with_capacity(count as usize);
    for index in 1..=count {
        match generate_wallet(use_mnemonic) {
            Ok(record) => records.push(record),
            Err(e) => warn!(index, error = %e, "wallet generation failed, skipping"),
        }
    }

    Ok(records)
}

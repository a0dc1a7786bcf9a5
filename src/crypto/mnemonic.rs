//! Mnemonic phrase generation and handling

use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Error, Result};

/// Entropy drawn per phrase: 256 bits, which BIP39 maps to 24 words.
const ENTROPY_BYTES: usize = 32;

/// Number of words in a generated phrase.
pub const MNEMONIC_WORDS: usize = 24;

/// Generate a new random 24-word mnemonic phrase.
pub fn generate_mnemonic() -> Result<String> {
    let mut entropy = [0u8; ENTROPY_BYTES];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| Error::SeedGeneration(e.to_string()))?;

    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(mnemonic.to_string())
}

/// Validate a mnemonic phrase against the English wordlist and checksum
pub fn validate_mnemonic(phrase: &str) -> Result<()> {
    Mnemonic::parse_normalized(phrase)
        .map(|_| ())
        .map_err(|e| Error::Mnemonic(e.to_string()))
}

/// Stretch a mnemonic phrase and optional passphrase into the full
/// 64-byte BIP39 seed. Callers consume as much of it as they need.
pub fn mnemonic_to_seed(phrase: &str, passphrase: Option<&str>) -> Result<Vec<u8>> {
    let mnemonic = Mnemonic::parse_normalized(phrase)
        .map_err(|e| Error::Mnemonic(e.to_string()))?;

    let seed = mnemonic.to_seed(passphrase.unwrap_or(""));
    Ok(seed.to_vec())
}

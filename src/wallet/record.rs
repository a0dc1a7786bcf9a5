//! Credential record produced by one generation run

use serde::{Deserialize, Serialize};

use crate::crypto::keys::Keypair;

/// Mnemonic field value for wallets generated without a recovery phrase.
pub const NO_MNEMONIC: &str = "N/A (Random generation)";

/// The complete output of one wallet generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    /// Base58 account address
    pub address: String,
    /// Secret key (seed plus public key) encoded as base58
    pub private_key_base58: String,
    /// The same secret key bytes as lowercase hex
    pub private_key_hex: String,
    /// Recovery phrase, or [`NO_MNEMONIC`] for random generation
    pub mnemonic: String,
}

impl WalletRecord {
    /// Encode a keypair, and the phrase that produced it if any, into its
    /// displayable form. Pure transformation; both secret-key encodings
    /// decode back to the same 64 bytes.
    pub fn from_keypair(keypair: &Keypair, mnemonic: Option<String>) -> Self {
        let secret = keypair.to_secret_bytes();

        Self {
            address: keypair.address(),
            private_key_base58: bs58::encode(secret).into_string(),
            private_key_hex: hex::encode(secret),
            mnemonic: mnemonic.unwrap_or_else(|| NO_MNEMONIC.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::SECRET_KEY_LENGTH;

    #[test]
    fn test_record_encodings_agree() {
        let keypair = Keypair::from_seed(&[9u8; 32]).unwrap();
        let record = WalletRecord::from_keypair(&keypair, None);

        let from_base58 = bs58::decode(&record.private_key_base58).into_vec().unwrap();
        let from_hex = hex::decode(&record.private_key_hex).unwrap();

        assert_eq!(from_base58, keypair.to_secret_bytes());
        assert_eq!(from_hex, keypair.to_secret_bytes());
        assert_eq!(from_hex.len(), SECRET_KEY_LENGTH);
    }

    #[test]
    fn test_missing_mnemonic_becomes_sentinel() {
        let keypair = Keypair::from_seed(&[1u8; 32]).unwrap();

        let without = WalletRecord::from_keypair(&keypair, None);
        assert_eq!(without.mnemonic, NO_MNEMONIC);

        let with = WalletRecord::from_keypair(&keypair, Some("word list".to_string()));
        assert_eq!(with.mnemonic, "word list");
    }

    #[test]
    fn test_hex_is_lowercase_and_unprefixed() {
        let keypair = Keypair::from_seed(&[0xABu8; 32]).unwrap();
        let record = WalletRecord::from_keypair(&keypair, None);

        assert!(!record.private_key_hex.starts_with("0x"));
        assert_eq!(record.private_key_hex, record.private_key_hex.to_lowercase());
        assert_eq!(record.private_key_hex.len(), SECRET_KEY_LENGTH * 2);
    }
}

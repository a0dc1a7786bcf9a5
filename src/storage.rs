//! Batch persistence
//!
//! Wallets are written as one plain-text report in a single `fs::write`
//! call, so a failed write never leaves a truncated file behind.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Error, Result};
use crate::wallet::record::WalletRecord;

/// Warning placed at the top of every saved report.
pub const FILE_WARNING: &str =
    "WARNING: This file contains sensitive information. Keep it secure and do not share it.";

/// Write `records` to `solana_wallets_<timestamp>.txt` under `dir` and
/// return the absolute path of the new file.
pub fn save_wallets(records: &[WalletRecord], dir: &Path) -> Result<PathBuf> {
    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ");
    let path = dir.join(format!("solana_wallets_{timestamp}.txt"));

    let mut content = String::new();
    content.push_str(FILE_WARNING);
    content.push_str("\n\n");

    for (index, record) in records.iter().enumerate() {
        content.push_str(&format!("=== Wallet {} ===\n", index + 1));
        content.push_str(&format!("Address: {}\n", record.address));
        content.push_str(&format!(
            "Base58 PrivateKey: {}\n",
            record.private_key_base58
        ));
        content.push_str(&format!("PrivateKey (hex): {}\n", record.private_key_hex));
        content.push_str(&format!("Mnemonic: {}\n\n", record.mnemonic));
    }

    fs::write(&path, content).map_err(|e| Error::Storage(e.to_string()))?;

    path.canonicalize().map_err(|e| Error::Storage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::generate_wallet;

    #[test]
    fn test_save_wallets_writes_complete_report() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            generate_wallet(false).unwrap(),
            generate_wallet(true).unwrap(),
        ];

        let path = save_wallets(&records, dir.path()).unwrap();

        assert!(path.is_absolute());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("solana_wallets_"));
        assert!(name.ends_with(".txt"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(FILE_WARNING));
        assert!(content.contains("=== Wallet 1 ==="));
        assert!(content.contains("=== Wallet 2 ==="));
        for record in &records {
            assert!(content.contains(&format!("Address: {}", record.address)));
            assert!(content.contains(&format!(
                "Base58 PrivateKey: {}",
                record.private_key_base58
            )));
            assert!(content.contains(&format!("PrivateKey (hex): {}", record.private_key_hex)));
            assert!(content.contains(&format!("Mnemonic: {}", record.mnemonic)));
        }
    }

    #[test]
    fn test_save_wallets_fails_on_missing_directory() {
        let records = vec![generate_wallet(false).unwrap()];
        let missing = Path::new("/definitely/not/a/real/directory");

        let result = save_wallets(&records, missing);
        assert!(matches!(result, Err(Error::Storage(_))));
    }
}

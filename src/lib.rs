//! Solana wallet generator
//!
//! This library provides core functionality for generating Solana account
//! credentials, including mnemonic generation, mnemonic-to-seed stretching,
//! ed25519 keypair derivation, base58/hex credential encoding, and batch
//! persistence to a local report file.

pub mod cli;
pub mod crypto;
pub mod error;
pub mod storage;
pub mod wallet;

// Re-export commonly used types for convenience
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_crypto() {
        // This test will call into the crypto module
        let phrase = crate::crypto::mnemonic::generate_mnemonic().unwrap();
        assert!(!phrase.is_empty());
    }
}

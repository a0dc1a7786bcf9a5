//! Error types for the wallet generator

use thiserror::Error;

/// Custom error type for wallet generation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Mnemonic error
    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    /// Seed generation error
    #[error("Seed generation error: {0}")]
    SeedGeneration(String),

    /// Seed length contract violation
    #[error("Invalid seed length: expected 32 bytes, got {0}")]
    InvalidSeedLength(usize),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for wallet generation operations
pub type Result<T> = std::result::Result<T, Error>;

//! Wallet generation
//!
//! This module provides the credential record type and the
//! seed-to-keypair-to-record generation pipeline.

mod generator;
pub mod record;

pub use generator::*;
pub use record::*;

//! Interactive Solana wallet generator

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sol_wallet_gen::cli::{prompt_count, prompt_yes_no, StdinInput};
use sol_wallet_gen::storage::save_wallets;
use sol_wallet_gen::wallet::{generate_wallet, WalletRecord};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Solana Wallet Generator ===");

    let mut input = StdinInput;

    let count = prompt_count(
        &mut input,
        "How many wallet addresses do you want to generate? ",
    )?;
    let use_mnemonic = prompt_yes_no(
        &mut input,
        "Generate with mnemonic phrases? (y/n, default: y): ",
        Some(true),
    )?;

    println!(
        "\nGenerating {} Solana wallet{}...",
        count,
        if count > 1 { "s" } else { "" }
    );

    let mut wallets = Vec::with_capacity(count as usize);
    for index in 1..=count {
        match generate_wallet(use_mnemonic) {
            Ok(record) => {
                print_wallet(index, &record);
                wallets.push(record);
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "wallet generation failed");
                println!("Error generating wallet {index}: {e}");
                println!("Skipping to next wallet...");
            }
        }
    }

    if wallets.is_empty() {
        println!("No wallets were generated successfully.");
        return Ok(());
    }

    let mut file_path = None;
    let save = prompt_yes_no(
        &mut input,
        "\nDo you want to save these wallets to a text file? (y/n): ",
        None,
    )?;
    if save {
        match save_wallets(&wallets, Path::new(".")) {
            Ok(path) => {
                println!("Wallets saved to {}", path.display());
                file_path = Some(path);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save wallets");
                println!("Error saving wallets to file: {e}");
            }
        }
    }

    println!("\nWallet generation complete!");

    if let Some(path) = file_path {
        println!(
            "\nIMPORTANT: Your wallet information is saved in:\n{}",
            path.display()
        );
        println!("Keep this file secure and do not share it with anyone!");
    }

    Ok(())
}

fn print_wallet(index: u32, record: &WalletRecord) {
    println!("\n=== Wallet {index} ===");
    println!("Address: {}", record.address);
    println!("Base58 PrivateKey: {}", record.private_key_base58);
    println!("PrivateKey (hex): {}", record.private_key_hex);
    println!("Mnemonic: {}", record.mnemonic);
}

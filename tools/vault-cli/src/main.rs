//! Vault Command Line Tool
//!
//! Provides commands for working with Vault API payloads:
//! - canonicalize: Print the canonical string of a payload file
//! - sign: Compute the HMAC-SHA512 signature of a payload file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vault_core::SecretKey;
use vault_signing::{canonicalize_value, sign_canonical};

#[derive(Parser)]
#[command(name = "vault")]
#[command(version)]
#[command(about = "Vault Command Line Tool - Canonicalize and sign API payloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical string of a payload file
    #[command(about = "Output the canonical string representation")]
    Canonicalize {
        /// Path to the payload JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Sign a payload file
    #[command(about = "Compute the HMAC-SHA512 signature of a payload")]
    Sign {
        /// Path to the payload JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Secret key as hex
        #[arg(long, short, value_name = "HEX")]
        key: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { file } => handle_canonicalize(&file),
        Commands::Sign { file, key } => handle_sign(&file, &key),
    }
}

fn load_payload(file: &PathBuf) -> Result<serde_json::Value> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))
}

fn handle_canonicalize(file: &PathBuf) -> Result<()> {
    let payload = load_payload(file)?;

    let canonical =
        canonicalize_value(&payload).with_context(|| "Failed to canonicalize payload")?;

    println!("{}", canonical);

    Ok(())
}

fn handle_sign(file: &PathBuf, key_hex: &str) -> Result<()> {
    let payload = load_payload(file)?;
    let key = SecretKey::from_hex(key_hex).with_context(|| "Invalid secret key")?;

    let canonical =
        canonicalize_value(&payload).with_context(|| "Failed to canonicalize payload")?;

    println!("{}", sign_canonical(&canonical, &key));

    Ok(())
}

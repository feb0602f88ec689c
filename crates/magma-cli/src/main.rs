//! Command-line interface for `magma-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use magma_core::{Magma, MagmaKey, BLOCK_SIZE};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Magma block cipher CLI.
#[derive(Parser)]
#[command(
    name = "magma",
    version,
    author,
    about = "Magma (GOST R 34.12-2015) ECB encryption CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a block-aligned file.
    Enc {
        /// 256-bit key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (length must be a multiple of 8 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Fan the buffer out over this many parallel workers.
        #[arg(long)]
        jobs: Option<usize>,
    },
    /// Decrypt a block-aligned file.
    Dec {
        /// 256-bit key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (ciphertext, multiple of 8 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Fan the buffer out over this many parallel workers.
        #[arg(long)]
        jobs: Option<usize>,
    },
    /// Generate a random 256-bit key and print it as hex.
    GenKey {
        /// Optional RNG seed for reproducible keys.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and buffer, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
            jobs,
        } => cmd_crypt(&key_hex, &input, &output, jobs, true),
        Commands::Dec {
            key_hex,
            input,
            output,
            jobs,
        } => cmd_crypt(&key_hex, &input, &output, jobs, false),
        Commands::GenKey { seed } => cmd_gen_key(seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_crypt(
    key_hex: &str,
    input_path: &PathBuf,
    output_path: &PathBuf,
    jobs: Option<usize>,
    encrypt: bool,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let cipher = Magma::new(key);
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % BLOCK_SIZE != 0 {
        bail!("input length must be a multiple of 8 bytes");
    }
    let transformed = match (jobs, encrypt) {
        (Some(jobs), true) => cipher.encrypt_parallel(&data, jobs)?,
        (Some(jobs), false) => cipher.decrypt_parallel(&data, jobs)?,
        (None, true) => cipher.encrypt(&data)?,
        (None, false) => cipher.decrypt(&data)?,
    };
    fs::write(output_path, transformed)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_gen_key(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    println!("{}", hex::encode(key_bytes));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Magma::new(MagmaKey::from(key_bytes));

    let mut buffer = vec![0u8; 8 * BLOCK_SIZE];
    rng.fill_bytes(&mut buffer);
    let plaintext_hex = hex::encode(&buffer);

    let ciphertext = cipher.encrypt(&buffer)?;
    let parallel = cipher.encrypt_parallel(&buffer, 4)?;
    if parallel != ciphertext {
        bail!("parallel ciphertext diverged from sequential");
    }
    let decrypted = cipher.decrypt(&ciphertext)?;
    let decrypted_hex = hex::encode(&decrypted);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<MagmaKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 32 {
        bail!("Magma key must be 32 bytes (64 hex characters)");
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&bytes);
    Ok(MagmaKey::from(key))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

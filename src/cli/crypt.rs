//! Encryption and decryption (`cyrcipher encrypt|decrypt ...`).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use cyrcipher::{CipherKind, CipherProfile, WhitespacePolicy};
use log::info;
use serde::Serialize;

use crate::cli::common::CipherArg;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Arguments shared by `cyrcipher encrypt` and `cyrcipher decrypt`.
#[derive(Args, Debug)]
pub struct CryptArgs {
    /// Cipher to use (overrides the profile).
    #[arg(long, value_enum)]
    pub cipher: Option<CipherArg>,
    /// Key: letters for gronsfeld, a column count for route (overrides the profile).
    #[arg(long)]
    pub key: Option<String>,
    /// Load cipher and key from a JSON profile.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Input text (falls back to stdin if omitted).
    #[arg(long, conflicts_with = "from")]
    pub text: Option<String>,
    /// Read input from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Reject whitespace in the input instead of dropping it.
    #[arg(long)]
    pub strict_whitespace: bool,
    /// Emit a JSON record instead of the bare result.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CryptReport {
    cipher: CipherKind,
    direction: Direction,
    letters: usize,
    output: String,
}

/// Inline `--text` wins; otherwise read `--from` (a path, or `-` for stdin), else stdin.
fn read_input(args: &CryptArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.from {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read from stdin")?;
            Ok(input)
        }
    }
}

/// Merge the optional profile with command-line overrides.
fn resolve_profile(args: &CryptArgs) -> Result<CipherProfile> {
    let mut profile = match &args.profile {
        Some(path) => CipherProfile::load(path)?,
        None => {
            let cipher = args
                .cipher
                .ok_or_else(|| anyhow!("--cipher is required without --profile"))?;
            let key = args
                .key
                .clone()
                .ok_or_else(|| anyhow!("--key is required without --profile"))?;
            CipherProfile::new(cipher.into(), key)
        }
    };
    if let Some(cipher) = args.cipher {
        profile.cipher = cipher.into();
    }
    if let Some(key) = &args.key {
        profile.key = key.clone();
    }
    if args.strict_whitespace {
        profile.whitespace = WhitespacePolicy::Reject;
    }
    Ok(profile)
}

/// Execute an encrypt or decrypt command.
pub fn handle(direction: Direction, args: CryptArgs) -> Result<()> {
    let profile = resolve_profile(&args)?;
    let engine = profile.build()?;
    let input = read_input(&args)?;
    let output = match direction {
        Direction::Encrypt => engine.encrypt(&input)?,
        Direction::Decrypt => engine.decrypt(&input)?,
    };
    let letters = output.chars().count();
    info!("{} {:?}: {} letters", engine.name(), direction, letters);
    if args.json {
        let report = CryptReport {
            cipher: profile.cipher,
            direction,
            letters,
            output,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

//! Profile management (`cyrcipher profile ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use cyrcipher::{CipherProfile, WhitespacePolicy};

use crate::cli::common::CipherArg;

/// Profile subcommands.
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Validate a key and store it with its cipher in a JSON profile.
    Save(ProfileSaveArgs),
    /// Print a stored profile.
    Show(ProfileShowArgs),
}

/// Arguments for `cyrcipher profile save`.
#[derive(Args, Debug)]
pub struct ProfileSaveArgs {
    /// Destination file.
    pub path: PathBuf,
    #[arg(long, value_enum)]
    pub cipher: CipherArg,
    #[arg(long)]
    pub key: String,
    /// Reject whitespace in the input instead of dropping it.
    #[arg(long)]
    pub strict_whitespace: bool,
}

/// Arguments for `cyrcipher profile show`.
#[derive(Args, Debug)]
pub struct ProfileShowArgs {
    pub path: PathBuf,
}

pub fn handle(command: ProfileCommand) -> Result<()> {
    match command {
        ProfileCommand::Save(args) => save(args),
        ProfileCommand::Show(args) => show(args),
    }
}

fn save(args: ProfileSaveArgs) -> Result<()> {
    let mut profile = CipherProfile::new(args.cipher.into(), args.key);
    if args.strict_whitespace {
        profile.whitespace = WhitespacePolicy::Reject;
    }
    // Refuse to persist a key the engine would not accept.
    profile.build()?;
    profile.save(&args.path)?;
    println!("Saved {} profile to {}", profile.cipher, args.path.display());
    Ok(())
}

fn show(args: ProfileShowArgs) -> Result<()> {
    let profile = CipherProfile::load(&args.path)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

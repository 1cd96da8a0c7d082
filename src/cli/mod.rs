//! Command-line interface wiring for the `cyrcipher` binary.
//!
//! This module owns the clap definitions and delegates execution to the
//! submodule of each command family.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

pub mod alphabet;
pub mod common;
pub mod crypt;
pub mod profile;

/// Parsed CLI entrypoint for the `cyrcipher` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cyrcipher",
    version,
    about = "Gronsfeld and route-transposition ciphers for Russian text"
)]
pub struct Cli {
    /// Raise log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt open text.
    Encrypt(crypt::CryptArgs),
    /// Decrypt cipher text.
    Decrypt(crypt::CryptArgs),
    /// Print the alphabet with letter positions.
    Alphabet(alphabet::AlphabetArgs),
    #[command(subcommand)]
    Profile(profile::ProfileCommand),
}

/// Install the `env_logger` backend, defaulting to warnings only.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encrypt(args) => crypt::handle(crypt::Direction::Encrypt, args),
        Command::Decrypt(args) => crypt::handle(crypt::Direction::Decrypt, args),
        Command::Alphabet(args) => alphabet::handle(args),
        Command::Profile(cmd) => profile::handle(cmd),
    }
}

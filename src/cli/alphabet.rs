//! Alphabet listing (`cyrcipher alphabet`).

use anyhow::Result;
use clap::Args;
use cyrcipher::ALPHABET;

/// Arguments for `cyrcipher alphabet`.
#[derive(Args, Debug)]
pub struct AlphabetArgs {
    /// Print as a JSON array of `[position, letter]` pairs.
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: AlphabetArgs) -> Result<()> {
    if args.json {
        let pairs: Vec<(usize, char)> = ALPHABET.iter().copied().enumerate().collect();
        println!("{}", serde_json::to_string(&pairs)?);
        return Ok(());
    }
    for (idx, letter) in ALPHABET.iter().enumerate() {
        println!("{:>2} {}", idx, letter);
    }
    Ok(())
}

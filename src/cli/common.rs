//! Shared clap helper types for CLI commands.

use clap::ValueEnum;
use cyrcipher::CipherKind;

/// Cipher names accepted by `--cipher`.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CipherArg {
    Gronsfeld,
    Route,
}

impl From<CipherArg> for CipherKind {
    fn from(value: CipherArg) -> CipherKind {
        match value {
            CipherArg::Gronsfeld => CipherKind::Gronsfeld,
            CipherArg::Route => CipherKind::Route,
        }
    }
}

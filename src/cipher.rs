use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;
use crate::gronsfeld::Gronsfeld;
use crate::route::RouteTransposition;
use crate::validate::WhitespacePolicy;

/// Shared contract of every engine: an immutable key, string in, string out.
pub trait Cipher: Send + Sync {
    fn name(&self) -> &'static str;
    fn encrypt(&self, open_text: &str) -> Result<String, CipherError>;
    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError>;
}

/// Engines selectable by name from the CLI or a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Gronsfeld,
    Route,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Gronsfeld => write!(f, "gronsfeld"),
            CipherKind::Route => write!(f, "route"),
        }
    }
}

impl FromStr for CipherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gronsfeld" => Ok(CipherKind::Gronsfeld),
            "route" => Ok(CipherKind::Route),
            other => Err(format!("unknown cipher '{}'", other)),
        }
    }
}

/// Construct an engine of the given kind from its textual key.
pub fn build_cipher(
    kind: CipherKind,
    key: &str,
    whitespace: WhitespacePolicy,
) -> Result<Box<dyn Cipher>, CipherError> {
    Ok(match kind {
        CipherKind::Gronsfeld => Box::new(Gronsfeld::with_policy(key, whitespace)?),
        CipherKind::Route => Box::new(RouteTransposition::from_key_with_policy(key, whitespace)?),
    })
}

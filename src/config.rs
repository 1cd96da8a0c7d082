use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cipher::{Cipher, CipherKind, build_cipher};
use crate::validate::WhitespacePolicy;

/// Saved engine settings, stored as a small JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CipherProfile {
    pub cipher: CipherKind,
    pub key: String,
    #[serde(default)]
    pub whitespace: WhitespacePolicy,
}

impl CipherProfile {
    pub fn new<S: Into<String>>(cipher: CipherKind, key: S) -> Self {
        Self {
            cipher,
            key: key.into(),
            whitespace: WhitespacePolicy::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse profile {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Construct the engine this profile describes.
    pub fn build(&self) -> Result<Box<dyn Cipher>> {
        build_cipher(self.cipher, &self.key, self.whitespace)
            .with_context(|| format!("cannot build {} cipher from profile", self.cipher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_defaults_when_missing() {
        let profile: CipherProfile =
            serde_json::from_str(r#"{"cipher":"route","key":"4"}"#).unwrap();
        assert_eq!(profile, CipherProfile::new(CipherKind::Route, "4"));
    }

    #[test]
    fn serializes_lowercase_names() {
        let mut profile = CipherProfile::new(CipherKind::Gronsfeld, "КЛЮЧ");
        profile.whitespace = WhitespacePolicy::Reject;
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r#"{"cipher":"gronsfeld","key":"КЛЮЧ","whitespace":"reject"}"#
        );
    }

    #[test]
    fn build_surfaces_key_errors() {
        let profile = CipherProfile::new(CipherKind::Route, "ноль");
        let err = profile.build().err().unwrap();
        assert!(err.to_string().contains("route"));
        assert!(err.root_cause().to_string().starts_with("invalid key"));
    }
}

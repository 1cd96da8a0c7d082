//! Gronsfeld cipher: a Vigenère-style shift where each key letter is read as
//! its alphabet position.

use log::debug;

use crate::alphabet::Letter;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::validate::{Text, Validator, WhitespacePolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gronsfeld {
    key: Vec<usize>,
    validator: Validator,
}

impl Gronsfeld {
    /// Build an engine from a letter key such as `"БВГ"` (shifts `[1, 2, 3]`).
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Self::with_policy(key, WhitespacePolicy::default())
    }

    pub fn with_policy(key: &str, whitespace: WhitespacePolicy) -> Result<Self, CipherError> {
        let validator = Validator::new(whitespace);
        let key = validator.key(key)?.indices();
        debug!("gronsfeld engine ready, key schedule of {} shifts", key.len());
        Ok(Self { key, validator })
    }

    /// Per-position shifts, each in `0..ALPHABET_LEN`. Never empty.
    pub fn key_schedule(&self) -> &[usize] {
        &self.key
    }

    fn apply(&self, text: &Text, step: fn(Letter, usize) -> Letter) -> String {
        let letters = text
            .letters()
            .iter()
            .zip(self.key.iter().cycle())
            .map(|(&letter, &k)| step(letter, k))
            .collect();
        Text::from_letters(letters).to_string()
    }
}

impl Cipher for Gronsfeld {
    fn name(&self) -> &'static str {
        "gronsfeld"
    }

    fn encrypt(&self, open_text: &str) -> Result<String, CipherError> {
        let text = self.validator.open_text(open_text)?;
        debug!("gronsfeld encrypt, {} letters", text.len());
        Ok(self.apply(&text, Letter::shift))
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let text = self.validator.cipher_text(cipher_text)?;
        debug!("gronsfeld decrypt, {} letters", text.len());
        Ok(self.apply(&text, Letter::unshift))
    }
}

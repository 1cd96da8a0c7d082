//! Input normalization shared by keys, open text and cipher text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::Letter;
use crate::error::CipherError;

/// What to do with whitespace found in open text or cipher text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespacePolicy {
    /// Drop whitespace silently (the default).
    #[default]
    Strip,
    /// Treat whitespace like any other foreign character.
    Reject,
}

/// Validated, uppercase, letters-only text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(Vec<Letter>);

impl Text {
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alphabet positions of each letter, in order.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|l| l.index()).collect()
    }

    /// Rebuild text from alphabet positions; `None` if any position is out of range
    /// or the sequence is empty.
    pub fn from_indices(indices: &[usize]) -> Option<Self> {
        if indices.is_empty() {
            return None;
        }
        indices
            .iter()
            .map(|&i| Letter::from_index(i))
            .collect::<Option<Vec<_>>>()
            .map(Text)
    }

    pub(crate) fn from_letters(letters: Vec<Letter>) -> Self {
        Text(letters)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Which input is being validated; only affects error wording.
#[derive(Debug, Clone, Copy)]
enum Role {
    OpenText,
    CipherText,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::OpenText => "open text",
            Role::CipherText => "cipher text",
        }
    }
}

/// Case-folds and checks raw strings before they reach an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    whitespace: WhitespacePolicy,
}

impl Validator {
    pub fn new(whitespace: WhitespacePolicy) -> Self {
        Self { whitespace }
    }

    /// Validate a Gronsfeld key: letters of the alphabet only, any case, no whitespace.
    pub fn key(&self, raw: &str) -> Result<Text, CipherError> {
        if raw.is_empty() {
            return Err(CipherError::key("key is empty"));
        }
        let mut letters = Vec::with_capacity(raw.len());
        for ch in raw.chars().flat_map(char::to_uppercase) {
            match Letter::from_char(ch) {
                Some(letter) => letters.push(letter),
                None => {
                    return Err(CipherError::key(format!(
                        "key contains '{}' (U+{:04X}), only alphabet letters are allowed",
                        ch, ch as u32
                    )));
                }
            }
        }
        Ok(Text(letters))
    }

    /// Validate a route column count written as decimal digits.
    pub fn column_key(&self, raw: &str) -> Result<usize, CipherError> {
        let digits = raw.trim();
        if digits.is_empty() {
            return Err(CipherError::key("key is empty"));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(CipherError::key(format!(
                "key contains '{}' (U+{:04X}), only decimal digits are allowed",
                bad, bad as u32
            )));
        }
        let columns: usize = digits
            .parse()
            .map_err(|_| CipherError::key(format!("column count '{}' is too large", digits)))?;
        if columns == 0 {
            return Err(CipherError::key("column count must be at least 1"));
        }
        Ok(columns)
    }

    pub fn open_text(&self, raw: &str) -> Result<Text, CipherError> {
        self.text(raw, Role::OpenText)
    }

    pub fn cipher_text(&self, raw: &str) -> Result<Text, CipherError> {
        self.text(raw, Role::CipherText)
    }

    fn text(&self, raw: &str, role: Role) -> Result<Text, CipherError> {
        let mut letters = Vec::with_capacity(raw.len());
        for ch in raw.chars() {
            if ch.is_whitespace() && self.whitespace == WhitespacePolicy::Strip {
                continue;
            }
            for up in ch.to_uppercase() {
                match Letter::from_char(up) {
                    Some(letter) => letters.push(letter),
                    None => {
                        return Err(CipherError::text(format!(
                            "{} contains '{}' (U+{:04X}), only alphabet letters are allowed",
                            role.label(),
                            ch.escape_debug(),
                            ch as u32
                        )));
                    }
                }
            }
        }
        if letters.is_empty() {
            return Err(CipherError::text(format!("{} is empty", role.label())));
        }
        Ok(Text(letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_case_folded() {
        let key = Validator::default().key("бвГ").unwrap();
        assert_eq!(key.to_string(), "БВГ");
        assert_eq!(key.indices(), vec![1, 2, 3]);
    }

    #[test]
    fn key_rejects_empty_and_foreign() {
        let v = Validator::default();
        assert!(v.key("").unwrap_err().is_key_error());
        assert!(v.key("АБ В").unwrap_err().is_key_error());
        assert!(v.key("КЛЮЧ1").unwrap_err().is_key_error());
        assert!(v.key("KEY").unwrap_err().is_key_error());
    }

    #[test]
    fn column_key_accepts_digits_only() {
        let v = Validator::default();
        assert_eq!(v.column_key("3").unwrap(), 3);
        assert_eq!(v.column_key(" 12\n").unwrap(), 12);
        assert!(v.column_key("0").unwrap_err().is_key_error());
        assert!(v.column_key("-3").unwrap_err().is_key_error());
        assert!(v.column_key("три").unwrap_err().is_key_error());
        assert!(v.column_key("").unwrap_err().is_key_error());
        assert!(
            v.column_key("99999999999999999999999999")
                .unwrap_err()
                .is_key_error()
        );
    }

    #[test]
    fn text_strips_whitespace_by_default() {
        let text = Validator::default().open_text("привет мир\n").unwrap();
        assert_eq!(text.to_string(), "ПРИВЕТМИР");
    }

    #[test]
    fn text_rejects_whitespace_when_strict() {
        let v = Validator::new(WhitespacePolicy::Reject);
        let err = v.cipher_text("АБ ВГ").unwrap_err();
        assert!(err.is_text_error());
        assert!(err.message().starts_with("cipher text"));
    }

    #[test]
    fn text_rejects_digits_punctuation_and_empty() {
        let v = Validator::default();
        assert!(v.open_text("").unwrap_err().is_text_error());
        assert!(v.open_text("   ").unwrap_err().is_text_error());
        assert!(v.open_text("ПРИВЕТ!").unwrap_err().is_text_error());
        assert!(v.open_text("АБВ1").unwrap_err().is_text_error());
        assert!(v.open_text("HELLO").unwrap_err().is_text_error());
    }

    #[test]
    fn lowercase_yo_folds_to_uppercase_yo() {
        let text = Validator::default().open_text("ёлка").unwrap();
        assert_eq!(text.to_string(), "ЁЛКА");
    }

    #[test]
    fn indices_round_trip() {
        let text = Validator::default().open_text("ЯБЛОКО").unwrap();
        assert_eq!(Text::from_indices(&text.indices()), Some(text));
        assert_eq!(Text::from_indices(&[]), None);
        assert_eq!(Text::from_indices(&[40]), None);
    }
}

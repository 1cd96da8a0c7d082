use thiserror::Error;

/// Failure raised by the validator and both cipher engines.
///
/// There is one error type for the whole crate; the variant only says whether
/// the key or the text broke its contract, and the message says how.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid text: {0}")]
    InvalidText(String),
}

impl CipherError {
    pub(crate) fn key<S: Into<String>>(msg: S) -> Self {
        CipherError::InvalidKey(msg.into())
    }

    pub(crate) fn text<S: Into<String>>(msg: S) -> Self {
        CipherError::InvalidText(msg.into())
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            CipherError::InvalidKey(msg) | CipherError::InvalidText(msg) => msg,
        }
    }

    pub fn is_key_error(&self) -> bool {
        matches!(self, CipherError::InvalidKey(_))
    }

    pub fn is_text_error(&self) -> bool {
        matches!(self, CipherError::InvalidText(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_prefix_and_message() {
        let err = CipherError::key("key is empty");
        assert_eq!(err.to_string(), "invalid key: key is empty");
        assert_eq!(err.message(), "key is empty");
        assert!(err.is_key_error());
    }

    #[test]
    fn text_errors_are_distinct_from_key_errors() {
        let err = CipherError::text("text is empty");
        assert!(err.is_text_error());
        assert_ne!(err, CipherError::key("text is empty"));
    }
}

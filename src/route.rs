//! Route transposition: write the text into a grid row by row, read it back
//! column by column.

use log::debug;

use crate::alphabet::Letter;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::validate::{Text, Validator, WhitespacePolicy};

/// Number of occupied cells in each column of a row-major grid holding `len`
/// letters in `columns` columns. The first `len % columns` columns are one
/// taller than the rest when the last row is short. Columns past `len` would
/// stay empty and are left out, so the result never has more than `len` entries.
pub fn column_heights(len: usize, columns: usize) -> Vec<usize> {
    if columns == 0 {
        return Vec::new();
    }
    let full_rows = len / columns;
    let tail = len % columns;
    (0..columns.min(len))
        .map(|col| full_rows + usize::from(col < tail))
        .collect()
}

/// Reading order of the route: entry `k` is the open-text position of the
/// `k`-th cipher-text letter. Always a permutation of `0..len`.
pub fn route_permutation(len: usize, columns: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(len);
    for (col, height) in column_heights(len, columns).into_iter().enumerate() {
        order.extend((0..height).map(|row| row * columns + col));
    }
    order
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTransposition {
    columns: usize,
    validator: Validator,
}

impl RouteTransposition {
    pub fn new(columns: usize) -> Result<Self, CipherError> {
        Self::with_policy(columns, WhitespacePolicy::default())
    }

    pub fn with_policy(columns: usize, whitespace: WhitespacePolicy) -> Result<Self, CipherError> {
        if columns == 0 {
            return Err(CipherError::key("column count must be at least 1"));
        }
        debug!("route engine ready, {} columns", columns);
        Ok(Self {
            columns,
            validator: Validator::new(whitespace),
        })
    }

    /// Build from a decimal column count such as `"4"`.
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        Self::from_key_with_policy(key, WhitespacePolicy::default())
    }

    pub fn from_key_with_policy(
        key: &str,
        whitespace: WhitespacePolicy,
    ) -> Result<Self, CipherError> {
        let columns = Validator::new(whitespace).column_key(key)?;
        Self::with_policy(columns, whitespace)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Cipher for RouteTransposition {
    fn name(&self) -> &'static str {
        "route"
    }

    fn encrypt(&self, open_text: &str) -> Result<String, CipherError> {
        let text = self.validator.open_text(open_text)?;
        debug!("route encrypt, {} letters", text.len());
        let src = text.letters();
        let out: Vec<Letter> = route_permutation(src.len(), self.columns)
            .into_iter()
            .map(|pos| src[pos])
            .collect();
        Ok(Text::from_letters(out).to_string())
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let text = self.validator.cipher_text(cipher_text)?;
        debug!("route decrypt, {} letters", text.len());
        let src = text.letters();
        let mut out = src.to_vec();
        for (k, pos) in route_permutation(src.len(), self.columns)
            .into_iter()
            .enumerate()
        {
            out[pos] = src[k];
        }
        Ok(Text::from_letters(out).to_string())
    }
}

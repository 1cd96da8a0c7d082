use std::fmt;

/// Number of letters in [`ALPHABET`]; every shift is taken modulo this value.
pub const ALPHABET_LEN: usize = 33;

/// The Russian alphabet in dictionary order, uppercase, with Ё kept as its own letter.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// A single uppercase letter of [`ALPHABET`], stored as its 0-based position.
///
/// A `Letter` can only be built from a recognised character or an in-range
/// index, so converting it back to a `char` never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Look up an uppercase letter. No case folding happens here.
    pub fn from_char(ch: char) -> Option<Self> {
        // А..Я is one contiguous block; Ё sits outside it and takes slot 6.
        let idx = match ch {
            'А'..='Е' => ch as u32 - 'А' as u32,
            'Ё' => 6,
            'Ж'..='Я' => ch as u32 - 'Ж' as u32 + 7,
            _ => return None,
        };
        Some(Letter(idx as u8))
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        (idx < ALPHABET_LEN).then_some(Letter(idx as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        ALPHABET[self.index()]
    }

    /// Move forward by `by` positions, wrapping past Я back to А.
    pub fn shift(self, by: usize) -> Self {
        Letter(((self.index() + by % ALPHABET_LEN) % ALPHABET_LEN) as u8)
    }

    /// Exact inverse of [`Letter::shift`].
    pub fn unshift(self, by: usize) -> Self {
        Letter(((self.index() + ALPHABET_LEN - by % ALPHABET_LEN) % ALPHABET_LEN) as u8)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Position of `ch` in the alphabet, if it is an uppercase alphabet letter.
pub fn index_of(ch: char) -> Option<usize> {
    Letter::from_char(ch).map(Letter::index)
}

/// Letter at `idx`, for `idx < ALPHABET_LEN`.
pub fn letter_at(idx: usize) -> Option<char> {
    Letter::from_index(idx).map(Letter::to_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_a_bijection() {
        for (i, &ch) in ALPHABET.iter().enumerate() {
            assert_eq!(index_of(ch), Some(i), "letter {ch}");
            assert_eq!(letter_at(i), Some(ch));
        }
        assert_eq!(letter_at(ALPHABET_LEN), None);
    }

    #[test]
    fn yo_is_a_separate_letter() {
        assert_eq!(index_of('Е'), Some(5));
        assert_eq!(index_of('Ё'), Some(6));
        assert_eq!(index_of('Ж'), Some(7));
        assert_eq!(index_of('Я'), Some(ALPHABET_LEN - 1));
    }

    #[test]
    fn lowercase_and_foreign_chars_are_unknown() {
        assert_eq!(index_of('а'), None);
        assert_eq!(index_of('ё'), None);
        assert_eq!(index_of('A'), None);
        assert_eq!(index_of('1'), None);
        assert_eq!(index_of(' '), None);
    }

    #[test]
    fn shift_wraps_around() {
        let ya = Letter::from_char('Я').unwrap();
        assert_eq!(ya.shift(1).to_char(), 'А');
        assert_eq!(ya.shift(1).unshift(1), ya);
        let a = Letter::from_char('А').unwrap();
        assert_eq!(a.unshift(1).to_char(), 'Я');
        assert_eq!(a.shift(ALPHABET_LEN), a);
    }
}

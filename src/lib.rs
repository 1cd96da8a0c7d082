//! Classical ciphers over the uppercase Russian alphabet.
//!
//! Two engines share one contract ([`Cipher`]): the Gronsfeld shift cipher and
//! a columnar route transposition. Both validate their input the same way
//! (case folding, letters only) and are immutable once built.
//!
//! ```
//! use cyrcipher::{Cipher, Gronsfeld, RouteTransposition};
//!
//! let g = Gronsfeld::new("БВГ").unwrap();
//! assert_eq!(g.encrypt("абвг").unwrap(), "БГЕД");
//!
//! let r = RouteTransposition::new(3).unwrap();
//! assert_eq!(r.encrypt("АБВГДЕ").unwrap(), "АГБДВЕ");
//! ```

mod alphabet;
mod cipher;
mod config;
mod error;
mod gronsfeld;
mod route;
mod validate;

pub use alphabet::{ALPHABET, ALPHABET_LEN, Letter, index_of, letter_at};
pub use cipher::{Cipher, CipherKind, build_cipher};
pub use config::CipherProfile;
pub use error::CipherError;
pub use gronsfeld::Gronsfeld;
pub use route::{RouteTransposition, column_heights, route_permutation};
pub use validate::{Text, Validator, WhitespacePolicy};

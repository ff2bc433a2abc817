//! A single guessed letter.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// An ASCII letter, stored lowercase.
///
/// Guesses compare case-insensitively against the password, so `'A'` and
/// `'a'` produce the same `Letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

/// Error for a guess that is not an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LetterError {
    /// The character is outside A-Z/a-z.
    #[display("{:?} is not a letter A-Z", _0)]
    NotAlphabetic(#[error(not(source))] char),
}

impl Letter {
    /// Returns the lowercase character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Returns the uppercase character, as shown on letter tiles.
    pub fn to_upper(self) -> char {
        self.0.to_ascii_uppercase()
    }

    /// Zero-based position in the alphabet.
    pub fn index(self) -> usize {
        (self.0 as u8 - b'a') as usize
    }

    /// Returns the letter at `index` in the alphabet, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|i| *i < 26)
            .map(|i| Self((b'a' + i) as char))
    }

    /// Whether `c` is this letter in either case.
    pub fn matches(self, c: char) -> bool {
        c.to_ascii_lowercase() == self.0
    }

    /// All 26 letters in alphabetical order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (b'a'..=b'z').map(|b| Letter(b as char))
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self('a')
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase()))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

//! Co-ordle word representation
//!
//! A Word stores a 6-letter word as uppercase ASCII letter codes.

use std::fmt;
use thiserror::Error;

/// Number of letters in every Co-ordle word
pub const WORD_LENGTH: usize = 6;

/// Size of the letter alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// Per-letter occurrence tally, indexed by `letter - b'A'`
pub type LetterCounts = [u8; ALPHABET_SIZE];

/// A 6-letter Co-ordle word
///
/// Words are canonicalized to uppercase, so `Word::new("planet")` and
/// `Word::new("PLANET")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    codes: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("word '{0}' contains characters outside A-Z")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 6
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use coordle_eval::core::Word;
    ///
    /// let word = Word::new("planet").unwrap();
    /// assert_eq!(word.text(), "PLANET");
    ///
    /// assert!(Word::new("plane").is_err());
    /// assert!(Word::new("plan3t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let actual = text.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordError::LengthMismatch {
                expected: WORD_LENGTH,
                actual,
            });
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(text.to_string()));
        }

        let mut codes = [0u8; WORD_LENGTH];
        for (slot, byte) in codes.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self { codes })
    }

    /// Rebuild a word from stored letter codes
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_codes(codes: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        if !codes.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters(
                String::from_utf8_lossy(&codes).into_owned(),
            ));
        }
        Ok(Self { codes })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.codes).unwrap_or_default()
    }

    /// Get the uppercase letter codes
    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &[u8; WORD_LENGTH] {
        &self.codes
    }

    /// Count occurrences of every letter in the word
    ///
    /// This is the starting tally for the duplicate-aware matcher.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &code in &self.codes {
            counts[letter_slot(code)] += 1;
        }
        counts
    }
}

/// Tally slot for an uppercase letter code
#[inline]
pub(crate) const fn letter_slot(code: u8) -> usize {
    (code - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("PLANET").unwrap();
        assert_eq!(word.text(), "PLANET");
        assert_eq!(word.codes(), b"PLANET");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("planet").unwrap();
        assert_eq!(word.text(), "PLANET");

        let word2 = Word::new("PlAnEt").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_length_mismatch() {
        assert_eq!(
            Word::new("plane"),
            Err(WordError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(
            Word::new("planets"),
            Err(WordError::LengthMismatch {
                expected: 6,
                actual: 7
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::LengthMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("plan3t"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("plan t").is_err());
        assert!(Word::new("plane!").is_err());
        // Six characters but not six ASCII letters
        assert!(Word::new("planèt").is_err());
    }

    #[test]
    fn word_from_codes() {
        let word = Word::from_codes(*b"COCCYX").unwrap();
        assert_eq!(word.text(), "COCCYX");
        assert!(Word::from_codes(*b"coccyx").is_err());
        assert!(Word::from_codes([0; WORD_LENGTH]).is_err());
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("llamas").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_slot(b'L')], 2);
        assert_eq!(counts[letter_slot(b'A')], 2);
        assert_eq!(counts[letter_slot(b'M')], 1);
        assert_eq!(counts[letter_slot(b'S')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 6);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "coccyx".parse().unwrap();
        assert_eq!(format!("{word}"), "COCCYX");
        assert_eq!(format!("{word:>8}"), "  COCCYX");
    }
}

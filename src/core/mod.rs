//! Core domain types for Co-ordle
//!
//! Words, per-position feedback and the base-3 pattern codes built from them.
//! Everything here is a pure value with no I/O.

mod pattern;
mod word;

pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use word::{ALPHABET_SIZE, LetterCounts, WORD_LENGTH, Word, WordError};

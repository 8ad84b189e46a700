//! Co-ordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Misplaced (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The pattern is stored as a single u16 value (0-728), where each position
//! contributes digit × 3^position to the total.

use super::word::{LetterCounts, WORD_LENGTH, Word, letter_slot};

/// Number of distinct patterns (3^6)
pub const PATTERN_COUNT: usize = 729;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feedback {
    Absent = 0,
    Misplaced = 1,
    Exact = 2,
}

impl Feedback {
    #[inline]
    const fn from_digit(digit: u16) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Misplaced,
            _ => Self::Absent,
        }
    }

    /// Display glyph for this feedback
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback pattern for a Co-ordle guess
///
/// Value range: 0-728 (3^6 = 729 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u16);

impl Pattern {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self(728); // 2 × (1 + 3 + 9 + 27 + 81 + 243)

    /// All absent
    pub const NONE: Self = Self(0);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 729
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        debug_assert!((value as usize) < PATTERN_COUNT, "Pattern value must be < 729");
        Self(value)
    }

    /// Create a pattern from a raw value, rejecting out-of-range codes
    #[inline]
    #[must_use]
    pub const fn try_new(value: u16) -> Option<Self> {
        if (value as usize) < PATTERN_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw pattern value (0-728)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Bucket index of this pattern in a distribution
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Pack per-position feedback into a pattern
    #[must_use]
    pub fn encode(feedback: &[Feedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u16;
        let mut multiplier = 1u16;
        for &digit in feedback {
            pattern += digit as u16 * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Unpack the pattern into per-position feedback
    #[must_use]
    pub fn decode(self) -> [Feedback; WORD_LENGTH] {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the answer tally
    /// 2. Second pass: mark misplaced letters while the tally still has that letter
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use coordle_eval::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("llamas").unwrap();
    /// let answer = Word::new("alarms").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // The answer's only L is taken by the exact match at position 1
    /// use Feedback::*;
    /// assert_eq!(
    ///     pattern.decode(),
    ///     [Absent, Exact, Exact, Misplaced, Misplaced, Exact]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        Self::calculate_with_counts(guess, answer, answer.letter_counts())
    }

    /// Same as [`Pattern::calculate`] with the answer's letter tally supplied
    ///
    /// The matrix builder computes each answer's tally once and reuses it for
    /// every guess row.
    #[must_use]
    pub(crate) fn calculate_with_counts(
        guess: &Word,
        answer: &Word,
        mut remaining: LetterCounts,
    ) -> Self {
        let guess = guess.codes();
        let answer = answer.codes();
        let mut result = [Feedback::Absent; WORD_LENGTH];

        for ((slot, &g), &a) in result.iter_mut().zip(guess).zip(answer) {
            if g == a {
                *slot = Feedback::Exact;
                remaining[letter_slot(g)] -= 1;
            }
        }

        for (slot, &g) in result.iter_mut().zip(guess) {
            if *slot == Feedback::Absent {
                let count = &mut remaining[letter_slot(g)];
                if *count > 0 {
                    *slot = Feedback::Misplaced;
                    *count -= 1;
                }
            }
        }

        Self::encode(&result)
    }

    /// Count the number of exact feedback squares
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.decode()
            .iter()
            .filter(|&&f| f == Feedback::Exact)
            .count()
    }

    /// Count the number of misplaced feedback squares
    #[must_use]
    pub fn count_misplaced(self) -> usize {
        self.decode()
            .iter()
            .filter(|&&f| f == Feedback::Misplaced)
            .count()
    }

    /// Parse a pattern from a string like "GY-GYB" or "🟩🟨⬛🟩🟨⬛"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for misplaced
    /// - '-'/'_'/'B'/'b'/⬛/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in feedback.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Feedback::Exact,
                'Y' | 'y' | '🟨' => Feedback::Misplaced,
                '-' | '_' | 'B' | 'b' | '⬛' | '⬜' => Feedback::Absent,
                _ => return None,
            };
        }

        Some(Self::encode(&feedback))
    }

    /// Render the pattern as one glyph per position
    ///
    /// # Examples
    /// ```
    /// use coordle_eval::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GYB").unwrap();
    /// assert_eq!(p.to_glyphs(), "🟩🟨⬛🟩🟨⬛");
    /// ```
    #[must_use]
    pub fn to_glyphs(self) -> String {
        self.decode().iter().map(|f| f.glyph()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

//! Skill and luck scores for a single guess
//!
//! Skill compares a guess's expected entropy with the best available one.
//! Luck compares the information a guess actually produced with what it was
//! expected to produce.

use std::fmt;

/// Bits of slack either side of the expectation that still count as average luck
pub const LUCK_TOLERANCE_BITS: f64 = 1.0;

/// Skill score from 0 to 100
///
/// `info_ratio = expected / optimal` (1 when `optimal` is 0). Guesses that
/// can no longer be the answer are weighted by `1 - 1/space_len`, so they
/// cost little while many candidates remain and a lot near the end.
///
/// # Examples
/// ```
/// use coordle_eval::engine::skill_score;
///
/// assert_eq!(skill_score(4.0, 4.0, true, 100), 100);
/// assert_eq!(skill_score(2.0, 4.0, true, 100), 50);
/// assert_eq!(skill_score(4.0, 4.0, false, 4), 75);
/// assert_eq!(skill_score(0.0, 0.0, true, 1), 100);
/// ```
#[must_use]
pub fn skill_score(expected: f64, optimal: f64, in_space: bool, space_len: usize) -> u8 {
    let info_ratio = if optimal > 0.0 {
        expected / optimal
    } else {
        1.0
    };

    let penalty = if in_space || space_len == 0 {
        1.0
    } else {
        1.0 - 1.0 / space_len as f64
    };

    (info_ratio * penalty * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Bits of information actually gained when the space shrank from `before` to `after`
///
/// # Panics
/// Panics in debug mode if `after` is 0 or larger than `before`.
#[must_use]
pub fn actual_entropy(before: usize, after: usize) -> f64 {
    debug_assert!(after > 0 && after <= before, "reduction must keep the solution");
    (before as f64 / after as f64).log2()
}

/// How a guess's actual outcome compared with its expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Luck {
    Bad,
    Average,
    Good,
}

impl Luck {
    /// Classify `actual - expected`
    ///
    /// Within ±1 bit (inclusive) is average.
    ///
    /// # Examples
    /// ```
    /// use coordle_eval::engine::Luck;
    ///
    /// assert_eq!(Luck::classify(4.0, 3.0), Luck::Average);
    /// assert_eq!(Luck::classify(5.5, 3.0), Luck::Good);
    /// assert_eq!(Luck::classify(2.0, 3.0), Luck::Average);
    /// assert_eq!(Luck::classify(0.5, 3.0), Luck::Bad);
    /// ```
    #[must_use]
    pub fn classify(actual: f64, expected: f64) -> Self {
        let delta = actual - expected;
        if delta.abs() <= LUCK_TOLERANCE_BITS {
            Self::Average
        } else if delta < 0.0 {
            Self::Bad
        } else {
            Self::Good
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bad => "BAD",
            Self::Average => "AVERAGE",
            Self::Good => "GOOD",
        }
    }
}

impl fmt::Display for Luck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Coarse band of a skill score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillTier {
    Weak,
    Decent,
    Great,
}

impl SkillTier {
    /// Below 50 is weak, 50 through 80 decent, above 80 great
    #[must_use]
    pub const fn from_score(skill: u8) -> Self {
        if skill < 50 {
            Self::Weak
        } else if skill <= 80 {
            Self::Decent
        } else {
            Self::Great
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "WEAK",
            Self::Decent => "DECENT",
            Self::Great => "GREAT",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

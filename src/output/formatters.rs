//! Formatting utilities for terminal output

use crate::core::Pattern;
use crate::engine::{Luck, SkillTier};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 8.0; // Roughly log2 of a few hundred answers
    create_progress_bar(entropy, max_entropy, width)
}

/// Format a skill score as a bar
#[must_use]
pub fn skill_bar(skill: u8, width: usize) -> String {
    create_progress_bar(f64::from(skill), 100.0, width)
}

/// Short tally of a pattern's exact and misplaced letters
#[must_use]
pub fn pattern_summary(pattern: Pattern) -> String {
    format!(
        "{} exact, {} misplaced",
        pattern.count_exact(),
        pattern.count_misplaced()
    )
}

/// One-sentence summary of a guess's skill and luck
///
/// # Examples
/// ```
/// use coordle_eval::engine::Luck;
/// use coordle_eval::output::formatters::explanation;
///
/// assert_eq!(
///     explanation(85, Luck::Bad),
///     "This was a GREAT guess, and it performed WORSE THAN expected."
/// );
/// ```
#[must_use]
pub fn explanation(skill: u8, luck: Luck) -> String {
    let luck_desc = match luck {
        Luck::Bad => "WORSE THAN",
        Luck::Average => "ABOUT AS",
        Luck::Good => "BETTER THAN",
    };
    format!(
        "This was a {} guess, and it performed {luck_desc} expected.",
        SkillTier::from_score(skill)
    )
}

//! Word analysis commands
//!
//! Analyzes the entropy of a specific word, or ranks the best opening
//! guesses, against the full answer pool.

use crate::core::Word;
use crate::engine::{
    CandidateSpace, Priors, RankedGuess, distribution, expected_entropies, top_guesses,
};
use crate::error::Result;
use crate::matrix::PatternMatrix;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Number of distinct patterns the word can produce
    pub patterns: usize,
    /// Whether the word could itself be the answer
    pub is_candidate: bool,
}

/// Analyze the entropy of a word as an opening guess
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 6 letters or contains non-letters)
/// - The word is not in the guess list
/// - An answer pool word is not in the answer list
pub fn analyze_word(
    word: &str,
    matrix: &PatternMatrix,
    answer_pool: &[Word],
) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    let space = CandidateSpace::from_words(matrix, answer_pool)?;
    let priors = Priors::uniform(matrix, &space);

    let dist = distribution(matrix, &word, &space, &priors.normalized(&space))?;
    let entropy = crate::engine::entropy(&dist);
    let patterns = dist.iter().filter(|&&p| p > 0.0).count();

    let total_candidates = space.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        is_candidate: space.contains(matrix, &word),
        word,
        entropy,
        expected_reduction,
        expected_remaining,
        total_candidates,
        patterns,
    })
}

/// Best `k` opening guesses from the whole guess list
///
/// # Errors
///
/// Returns `UnknownWord` if an answer pool word is not in the answer list.
pub fn opening_guesses(
    matrix: &PatternMatrix,
    answer_pool: &[Word],
    k: usize,
) -> Result<Vec<RankedGuess>> {
    let space = CandidateSpace::from_words(matrix, answer_pool)?;
    let priors = Priors::uniform(matrix, &space);
    let pool: Vec<usize> = (0..matrix.guesses().len()).collect();

    let entropies = expected_entropies(matrix, &pool, &space, &priors);
    Ok(top_guesses(matrix, &entropies, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::wordlists::loader::words_from_slice;

    fn setup() -> (PatternMatrix, Vec<Word>) {
        let answers = words_from_slice(&["ABCDEF", "AXXXXX", "XBXXXX", "XXCXXX"]);
        let mut guesses = answers.clone();
        guesses.extend(words_from_slice(&["ZZZZZZ", "PLANET"]));
        (PatternMatrix::build(guesses, answers.clone()), answers)
    }

    #[test]
    fn analyze_valid_word() {
        let (matrix, answers) = setup();
        let result = analyze_word("abcdef", &matrix, &answers).unwrap();

        assert_eq!(result.word.text(), "ABCDEF");
        assert!((result.entropy - 2.0).abs() < 1e-12);
        assert!((result.expected_reduction - 4.0).abs() < 1e-9);
        assert!((result.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.patterns, 4);
        assert!(result.is_candidate);
    }

    #[test]
    fn analyze_uninformative_word() {
        let (matrix, answers) = setup();
        let result = analyze_word("ZZZZZZ", &matrix, &answers).unwrap();

        assert!(result.entropy.abs() < f64::EPSILON);
        assert_eq!(result.patterns, 1);
        assert!(!result.is_candidate);
        assert!((result.expected_remaining - 4.0).abs() < 1e-9);
    }

    #[test]
    fn analyze_unknown_word() {
        let (matrix, answers) = setup();
        assert!(matches!(
            analyze_word("COCCYX", &matrix, &answers),
            Err(EvalError::UnknownWord { .. })
        ));
        assert!(matches!(
            analyze_word("COCCY", &matrix, &answers),
            Err(EvalError::Word(_))
        ));
    }

    #[test]
    fn opening_guesses_ranked() {
        let (matrix, answers) = setup();
        let best = opening_guesses(&matrix, &answers, 2).unwrap();

        assert_eq!(best.len(), 2);
        assert_eq!(best[0].word.text(), "ABCDEF");
        assert!(best[0].entropy >= best[1].entropy);
    }
}

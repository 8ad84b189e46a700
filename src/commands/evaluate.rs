//! Game evaluation command
//!
//! Scores every guess of a finished game against its solution.

use crate::core::Word;
use crate::engine::{DEFAULT_TOP_K, EvalConfig, Evaluator, GuessRecord};
use crate::error::Result;
use crate::matrix::PatternMatrix;

/// Configuration for evaluating a game
pub struct EvaluateConfig {
    pub solution: String,
    pub guesses: Vec<String>,
    pub top_k: usize,
}

impl EvaluateConfig {
    #[must_use]
    pub const fn new(solution: String, guesses: Vec<String>) -> Self {
        Self {
            solution,
            guesses,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Result of evaluating a game
pub struct EvaluationResult {
    pub solution: Word,
    pub records: Vec<GuessRecord>,
    pub answer_pool_size: usize,
}

/// Evaluate a game using every guess of the matrix as the ranking pool
///
/// # Errors
///
/// Returns an error if:
/// - The solution or a guess is not a valid 6-letter word
/// - A word is missing from the matrix
/// - The solution is not in the answer pool
pub fn evaluate(
    config: &EvaluateConfig,
    matrix: &PatternMatrix,
    answer_pool: &[Word],
) -> Result<EvaluationResult> {
    let solution = Word::new(&config.solution)?;
    let guesses = config
        .guesses
        .iter()
        .map(Word::new)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let records = Evaluator::new(matrix)
        .with_config(EvalConfig {
            top_k: config.top_k,
        })
        .evaluate_game(&guesses, &solution, answer_pool)?;

    Ok(EvaluationResult {
        solution,
        records,
        answer_pool_size: answer_pool.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::wordlists::loader::words_from_slice;

    fn setup() -> (PatternMatrix, Vec<Word>) {
        let answers = words_from_slice(&["PLANET", "PLATES", "STAPLE", "LLAMAS", "ALARMS"]);
        let mut guesses = answers.clone();
        guesses.extend(words_from_slice(&["AAAAAA", "COCCYX"]));
        (PatternMatrix::build(guesses, answers.clone()), answers)
    }

    #[test]
    fn evaluates_each_guess() {
        let (matrix, answers) = setup();
        let config = EvaluateConfig::new(
            "plates".to_string(),
            vec!["coccyx".to_string(), "planet".to_string(), "plates".to_string()],
        );

        let result = evaluate(&config, &matrix, &answers).unwrap();
        assert_eq!(result.solution.text(), "PLATES");
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.answer_pool_size, 5);
        assert!(result.records[2].pattern.is_perfect());
    }

    #[test]
    fn invalid_word_is_rejected() {
        let (matrix, answers) = setup();
        let config = EvaluateConfig::new("plate".to_string(), vec![]);
        assert!(matches!(
            evaluate(&config, &matrix, &answers),
            Err(EvalError::Word(_))
        ));

        let config = EvaluateConfig::new("plates".to_string(), vec!["pl4net".to_string()]);
        assert!(matches!(
            evaluate(&config, &matrix, &answers),
            Err(EvalError::Word(_))
        ));
    }

    #[test]
    fn top_k_is_applied() {
        let (matrix, answers) = setup();
        let mut config = EvaluateConfig::new("plates".to_string(), vec!["aaaaaa".to_string()]);
        config.top_k = 2;

        let result = evaluate(&config, &matrix, &answers).unwrap();
        assert_eq!(result.records[0].best_guesses.len(), 2);
    }
}

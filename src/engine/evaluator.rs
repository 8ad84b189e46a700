//! Whole-game evaluation
//!
//! Walks a finished game guess by guess, scoring each guess against the
//! candidate space that was left before it and then narrowing the space by
//! the pattern it produced.

use super::entropy::{expected_entropies, expected_entropy};
use super::ranking::{RankedGuess, best_guesses};
use super::reducer::reduce;
use super::scoring::{Luck, actual_entropy, skill_score};
use super::space::{CandidateSpace, Priors};
use crate::core::{Pattern, Word};
use crate::error::{EvalError, Result};
use crate::matrix::PatternMatrix;

/// Number of alternative guesses reported per step by default
pub const DEFAULT_TOP_K: usize = 5;

/// Tuning for game evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Alternative guesses to keep per step
    pub top_k: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Evaluation of one guess of a game
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub guess: Word,
    /// Pattern the guess produced
    pub pattern: Pattern,
    /// Candidates left before this guess
    pub candidates_before: CandidateSpace,
    /// Candidates left after this guess
    pub candidates_after: usize,
    /// Expected information gain of the guess, in bits
    pub expected_entropy: f64,
    /// Best expected information gain available from the guess pool
    pub optimal_entropy: f64,
    /// Information actually gained, in bits
    pub actual_entropy: f64,
    pub skill: u8,
    pub luck: Luck,
    /// Strongest guesses that could still have been the answer
    pub best_guesses: Vec<RankedGuess>,
}

/// Scores games against a loaded pattern matrix
///
/// The matrix is only read, so one instance can back any number of
/// evaluators on different threads.
pub struct Evaluator<'m> {
    matrix: &'m PatternMatrix,
    guess_pool: Vec<usize>,
    config: EvalConfig,
}

impl<'m> Evaluator<'m> {
    /// Evaluator that ranks every guess of the matrix
    #[must_use]
    pub fn new(matrix: &'m PatternMatrix) -> Self {
        Self {
            matrix,
            guess_pool: (0..matrix.guesses().len()).collect(),
            config: EvalConfig::default(),
        }
    }

    /// Evaluator that ranks only `pool`
    ///
    /// # Errors
    /// Returns `UnknownWord` if a pool word is not in the guess list.
    pub fn with_guess_pool(matrix: &'m PatternMatrix, pool: &[Word]) -> Result<Self> {
        let guess_pool = pool
            .iter()
            .map(|w| matrix.guess_index(w))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            matrix,
            guess_pool,
            config: EvalConfig::default(),
        })
    }

    #[must_use]
    pub const fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn matrix(&self) -> &'m PatternMatrix {
        self.matrix
    }

    /// Evaluate `guesses` played against a known `solution`
    ///
    /// The candidate space starts as `answer_pool`.
    ///
    /// # Errors
    /// - `UnknownWord` if a guess, the solution or a pool word is not indexed
    /// - `EmptyCandidateSpace` if the solution is not in `answer_pool`
    pub fn evaluate_game(
        &self,
        guesses: &[Word],
        solution: &Word,
        answer_pool: &[Word],
    ) -> Result<Vec<GuessRecord>> {
        let steps = guesses
            .iter()
            .map(|guess| Ok((guess.clone(), self.matrix.lookup(guess, solution)?)))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "evaluating {} guesses against {solution} over {} answers",
            steps.len(),
            answer_pool.len()
        );
        self.evaluate_observed(&steps, answer_pool)
    }

    /// Evaluate guesses whose patterns were observed without knowing the solution
    ///
    /// # Errors
    /// - `UnknownWord` if a guess or a pool word is not indexed
    /// - `EmptyCandidateSpace` if some observation rules out every candidate
    pub fn evaluate_observed(
        &self,
        steps: &[(Word, Pattern)],
        answer_pool: &[Word],
    ) -> Result<Vec<GuessRecord>> {
        let mut space = CandidateSpace::from_words(self.matrix, answer_pool)?;
        let priors = Priors::uniform(self.matrix, &space);

        let mut records = Vec::with_capacity(steps.len());
        for (step, (guess, pattern)) in steps.iter().enumerate() {
            let (record, reduced) = self.score_step(step + 1, guess, *pattern, &space, &priors)?;
            log::debug!(
                "guess {} {guess}: {} -> {} candidates, expected {:.3} bits, actual {:.3} bits",
                step + 1,
                record.candidates_before.len(),
                record.candidates_after,
                record.expected_entropy,
                record.actual_entropy
            );
            space = reduced;
            records.push(record);
        }

        Ok(records)
    }

    fn score_step(
        &self,
        step: usize,
        guess: &Word,
        pattern: Pattern,
        space: &CandidateSpace,
        priors: &Priors,
    ) -> Result<(GuessRecord, CandidateSpace)> {
        let entropies = expected_entropies(self.matrix, &self.guess_pool, space, priors);
        let optimal = entropies
            .iter()
            .map(|scored| scored.entropy)
            .fold(0.0, f64::max);
        let expected = expected_entropy(self.matrix, guess, space, priors)?;

        let skill = skill_score(expected, optimal, space.contains(self.matrix, guess), space.len());

        let reduced = reduce(self.matrix, guess, pattern, space)?;
        if reduced.is_empty() {
            return Err(EvalError::EmptyCandidateSpace {
                guess: guess.to_string(),
                step,
            });
        }
        let actual = actual_entropy(space.len(), reduced.len());

        let record = GuessRecord {
            guess: guess.clone(),
            pattern,
            candidates_before: space.clone(),
            candidates_after: reduced.len(),
            expected_entropy: expected,
            optimal_entropy: optimal,
            actual_entropy: actual,
            skill,
            luck: Luck::classify(actual, expected),
            best_guesses: best_guesses(self.matrix, guess, &entropies, space, self.config.top_k),
        };
        Ok((record, reduced))
    }
}

/// Evaluate a finished game in one call
///
/// # Errors
/// See [`Evaluator::evaluate_game`]; also `UnknownWord` for guess pool words
/// missing from the matrix.
///
/// # Examples
/// ```
/// use coordle_eval::core::Word;
/// use coordle_eval::engine::evaluate_game;
/// use coordle_eval::matrix::PatternMatrix;
/// use coordle_eval::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["AAAAAA", "ABCDEF", "PLANET", "LLAMAS"]);
/// let matrix = PatternMatrix::build(words.clone(), words.clone());
///
/// let guesses = words_from_slice(&["PLANET", "ABCDEF"]);
/// let solution = Word::new("abcdef").unwrap();
/// let records = evaluate_game(&matrix, &guesses, &solution, &words, &words).unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert!(records[1].pattern.is_perfect());
/// assert_eq!(records[1].candidates_after, 1);
/// ```
pub fn evaluate_game(
    matrix: &PatternMatrix,
    guesses: &[Word],
    solution: &Word,
    answer_pool: &[Word],
    guess_pool: &[Word],
) -> Result<Vec<GuessRecord>> {
    Evaluator::with_guess_pool(matrix, guess_pool)?.evaluate_game(guesses, solution, answer_pool)
}

//! Dense guess × answer pattern matrix construction
//!
//! Rows are independent, so they are filled in parallel across threads rather
//! than by vectorised comparisons over the whole list pair. Each answer's
//! letter tally is computed once up front instead of once per pair.

use crate::core::{LetterCounts, Pattern, Word};
use rayon::prelude::*;

/// Compute the pattern of every (guess, answer) pair
///
/// The result is row-major: the pattern for `guesses[g]` against `answers[a]`
/// is at index `g * answers.len() + a`.
///
/// `on_row` is called once per finished row (from worker threads), which lets
/// callers drive a progress bar.
///
/// # Examples
/// ```
/// use coordle_eval::core::{Pattern, Word};
/// use coordle_eval::matrix::build_matrix;
///
/// let words = vec![Word::new("planet").unwrap(), Word::new("coccyx").unwrap()];
/// let matrix = build_matrix(&words, &words, || {});
///
/// assert_eq!(matrix.len(), 4);
/// assert_eq!(matrix[0], Pattern::PERFECT);
/// assert_eq!(matrix[3], Pattern::PERFECT);
/// ```
pub fn build_matrix<F>(guesses: &[Word], answers: &[Word], on_row: F) -> Vec<Pattern>
where
    F: Fn() + Sync,
{
    let mut codes = vec![Pattern::NONE; guesses.len() * answers.len()];
    if answers.is_empty() {
        return codes;
    }

    let answer_counts: Vec<LetterCounts> = answers.iter().map(Word::letter_counts).collect();

    codes
        .par_chunks_mut(answers.len())
        .zip(guesses.par_iter())
        .for_each(|(row, guess)| {
            for ((cell, answer), counts) in row.iter_mut().zip(answers).zip(&answer_counts) {
                *cell = Pattern::calculate_with_counts(guess, answer, *counts);
            }
            on_row();
        });

    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE: &[&str] = &[
        "PLANET", "LLAMAS", "ALARMS", "COCCYX", "ABCDEF", "AAAAAA", "SEESAW", "BANANA", "ANANAS",
        "STREET", "TESTER", "GHIJKL",
    ];

    #[test]
    fn matches_pairwise_definition() {
        let words = words_from_slice(SAMPLE);
        let answers = &words[3..];
        let codes = build_matrix(&words, answers, || {});

        assert_eq!(codes.len(), words.len() * answers.len());
        for (g, guess) in words.iter().enumerate() {
            for (a, answer) in answers.iter().enumerate() {
                assert_eq!(
                    codes[g * answers.len() + a],
                    Pattern::calculate(guess, answer),
                    "{guess} vs {answer}"
                );
            }
        }
    }

    #[test]
    fn diagonal_is_perfect_on_square_matrix() {
        let words = words_from_slice(SAMPLE);
        let codes = build_matrix(&words, &words, || {});
        for i in 0..words.len() {
            assert!(codes[i * words.len() + i].is_perfect());
        }
    }

    #[test]
    fn reports_every_row() {
        let words = words_from_slice(SAMPLE);
        let rows = AtomicUsize::new(0);
        build_matrix(&words, &words[..4], || {
            rows.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(rows.load(Ordering::Relaxed), words.len());
    }

    #[test]
    fn empty_axes_give_empty_matrix() {
        let words = words_from_slice(SAMPLE);
        assert!(build_matrix(&words, &[], || {}).is_empty());
        assert!(build_matrix(&[], &words, || {}).is_empty());
    }
}

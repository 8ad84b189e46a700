//! Ranking of alternative guesses by expected entropy

use super::entropy::GuessEntropy;
use super::space::CandidateSpace;
use crate::core::Word;
use crate::matrix::PatternMatrix;

/// A guess together with its expected information gain
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    pub entropy: f64,
}

/// Best `k` alternatives to `guess` that could still be the answer
///
/// Only pool entries that are members of `space` and differ from `guess`
/// are considered. Sorting is stable, so equal entropies keep pool order.
#[must_use]
pub fn best_guesses(
    matrix: &PatternMatrix,
    guess: &Word,
    entropies: &[GuessEntropy],
    space: &CandidateSpace,
    k: usize,
) -> Vec<RankedGuess> {
    let eligible = entropies.iter().filter(|scored| {
        let word = matrix.guess_at(scored.guess);
        word != guess && space.contains(matrix, word)
    });
    top_k(matrix, eligible, k)
}

/// Highest-entropy `k` guesses of the pool with no membership filter
#[must_use]
pub fn top_guesses(matrix: &PatternMatrix, entropies: &[GuessEntropy], k: usize) -> Vec<RankedGuess> {
    top_k(matrix, entropies.iter(), k)
}

fn top_k<'a, I>(matrix: &PatternMatrix, entropies: I, k: usize) -> Vec<RankedGuess>
where
    I: Iterator<Item = &'a GuessEntropy>,
{
    let mut ranked: Vec<&GuessEntropy> = entropies.collect();
    ranked.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
    ranked
        .into_iter()
        .take(k)
        .map(|scored| RankedGuess {
            word: matrix.guess_at(scored.guess).clone(),
            entropy: scored.entropy,
        })
        .collect()
}

//! Shannon entropy of pattern distributions
//!
//! Given a guess and a weighted candidate space, computes the probability of
//! every pattern and the expected information gain of the guess.

use super::space::{CandidateSpace, Priors};
use crate::core::{PATTERN_COUNT, Pattern, Word};
use crate::error::Result;
use crate::matrix::PatternMatrix;
use rayon::prelude::*;

/// Expected entropy of one guess from the guess pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessEntropy {
    /// Index of the guess in the matrix's guess list
    pub guess: usize,
    /// Expected information gain in bits
    pub entropy: f64,
}

/// Probability of each pattern when `guess` is played against `space`
///
/// `weights` must be aligned with `space.indices()` (see
/// [`Priors::normalized`]). The result has one bucket per pattern code.
///
/// # Errors
/// Returns `UnknownWord` if the guess is not in the guess list.
pub fn distribution(
    matrix: &PatternMatrix,
    guess: &Word,
    space: &CandidateSpace,
    weights: &[f64],
) -> Result<Vec<f64>> {
    let row = matrix.lookup_row(guess)?;
    Ok(row_distribution(row, space, weights).to_vec())
}

fn row_distribution(row: &[Pattern], space: &CandidateSpace, weights: &[f64]) -> [f64; PATTERN_COUNT] {
    let mut buckets = [0.0; PATTERN_COUNT];
    for (&answer, &weight) in space.indices().iter().zip(weights) {
        if weight > 0.0 {
            buckets[row[answer].index()] += weight;
        }
    }
    buckets
}

/// Calculate Shannon entropy of a distribution in bits
///
/// H = -Σ p * log₂(p), with p normalized by the bucket total
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one nonzero bucket)
/// - Returns 0.0 for an empty or all-zero distribution
/// - Always in range [0, log₂(n)] for n nonzero buckets
///
/// # Examples
/// ```
/// use coordle_eval::engine::entropy;
///
/// let uniform = [0.25, 0.25, 0.25, 0.25];
/// assert!((entropy(&uniform) - 2.0).abs() < 1e-12);
/// assert_eq!(entropy(&[]), 0.0);
/// ```
#[must_use]
pub fn entropy(distribution: &[f64]) -> f64 {
    let total: f64 = distribution.iter().filter(|&&p| p > 0.0).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let h: f64 = distribution
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| {
            let p = p / total;
            -p * p.log2()
        })
        .sum();

    // A single bucket gives -1·log₂(1) = -0.0
    h.max(0.0)
}

/// Expected information gain of `guess` over `space` weighted by `priors`
///
/// # Errors
/// Returns `UnknownWord` if the guess is not in the guess list.
pub fn expected_entropy(
    matrix: &PatternMatrix,
    guess: &Word,
    space: &CandidateSpace,
    priors: &Priors,
) -> Result<f64> {
    let weights = priors.normalized(space);
    let row = matrix.lookup_row(guess)?;
    Ok(entropy(&row_distribution(row, space, &weights)))
}

/// Expected entropy of every guess in `pool` (guess indices), in pool order
///
/// Guesses are scored in parallel.
#[must_use]
pub fn expected_entropies(
    matrix: &PatternMatrix,
    pool: &[usize],
    space: &CandidateSpace,
    priors: &Priors,
) -> Vec<GuessEntropy> {
    let weights = priors.normalized(space);
    if weights.iter().all(|&w| w <= 0.0) {
        return pool
            .iter()
            .map(|&guess| GuessEntropy {
                guess,
                entropy: 0.0,
            })
            .collect();
    }

    pool.par_iter()
        .map(|&guess| GuessEntropy {
            guess,
            entropy: entropy(&row_distribution(matrix.row(guess), space, &weights)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn setup() -> (PatternMatrix, CandidateSpace, Priors) {
        let guesses = words_from_slice(&["ABCDEF", "AAAAAA", "ZZZZZZ", "PLANET"]);
        let answers = words_from_slice(&["ABCDEF", "AXXXXX", "XBXXXX", "XXCXXX"]);
        let matrix = PatternMatrix::build(guesses, answers);
        let space = CandidateSpace::all(&matrix);
        let priors = Priors::uniform(&matrix, &space);
        (matrix, space, priors)
    }

    #[test]
    fn entropy_uniform_distribution() {
        let dist = [0.125; 8];
        assert!((entropy(&dist) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_point_mass_is_zero() {
        let mut dist = vec![0.0; PATTERN_COUNT];
        dist[42] = 1.0;
        assert!(entropy(&dist).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_positive_with_two_or_more_outcomes() {
        let mut dist = vec![0.0; PATTERN_COUNT];
        dist[0] = 1.0 - 1e-6;
        dist[PATTERN_COUNT - 1] = 1e-6;
        assert!(entropy(&dist) > 0.0);

        let (matrix, space, priors) = setup();
        let weights = priors.normalized(&space);
        for guess in matrix.guesses() {
            let dist = distribution(&matrix, guess, &space, &weights).unwrap();
            let outcomes = dist.iter().filter(|&&p| p > 0.0).count();
            assert_eq!(outcomes > 1, entropy(&dist) > 0.0, "{guess}");
        }
    }

    #[test]
    fn entropy_all_zero_is_zero() {
        assert!(entropy(&[0.0; 5]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_bounds() {
        let dist = [0.1, 0.2, 0.3, 0.4];
        let h = entropy(&dist);
        assert!(h > 0.0);
        assert!(h <= (dist.len() as f64).log2());
    }

    #[test]
    fn entropy_skewed_below_uniform() {
        let uniform = [0.25; 4];
        let skewed = [0.97, 0.01, 0.01, 0.01];
        assert!(entropy(&uniform) > entropy(&skewed));
    }

    #[test]
    fn entropy_normalizes_unnormalized_input() {
        assert!((entropy(&[3.0, 3.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distribution_sums_to_one() {
        let (matrix, space, priors) = setup();
        let weights = priors.normalized(&space);
        let dist = distribution(&matrix, &word("ABCDEF"), &space, &weights).unwrap();

        assert_eq!(dist.len(), PATTERN_COUNT);
        assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((dist[Pattern::PERFECT.index()] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn perfect_split_gives_log2_n() {
        // Every answer produces a distinct pattern against ABCDEF
        let (matrix, space, priors) = setup();
        let h = expected_entropy(&matrix, &word("ABCDEF"), &space, &priors).unwrap();
        assert!((h - 2.0).abs() < 1e-12);
    }

    #[test]
    fn uninformative_guess_has_zero_entropy() {
        let (matrix, space, priors) = setup();
        let h = expected_entropy(&matrix, &word("ZZZZZZ"), &space, &priors).unwrap();
        assert!(h.abs() < f64::EPSILON);
    }

    #[test]
    fn zero_weight_candidates_contribute_nothing() {
        let (matrix, space, _) = setup();
        let pool = CandidateSpace::from_words(&matrix, &[word("ABCDEF")]).unwrap();
        let priors = Priors::uniform(&matrix, &pool);

        let weights = priors.normalized(&space);
        let dist = distribution(&matrix, &word("ABCDEF"), &space, &weights).unwrap();
        assert!((dist[Pattern::PERFECT.index()] - 1.0).abs() < 1e-12);
        assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_guess_is_error() {
        let (matrix, space, priors) = setup();
        assert!(expected_entropy(&matrix, &word("COCCYX"), &space, &priors).is_err());
    }

    #[test]
    fn pool_entropies_match_single_guess() {
        let (matrix, space, priors) = setup();
        let pool: Vec<usize> = (0..matrix.guesses().len()).collect();
        let all = expected_entropies(&matrix, &pool, &space, &priors);

        assert_eq!(all.len(), pool.len());
        for (scored, &g) in all.iter().zip(&pool) {
            assert_eq!(scored.guess, g);
            let single =
                expected_entropy(&matrix, matrix.guess_at(g), &space, &priors).unwrap();
            assert!((scored.entropy - single).abs() < 1e-12);
        }
    }

    #[test]
    fn weightless_space_scores_zero() {
        let (matrix, _, priors) = setup();
        let empty = CandidateSpace::default();
        let all = expected_entropies(&matrix, &[0, 1], &empty, &priors);
        assert!(all.iter().all(|g| g.entropy.abs() < f64::EPSILON));
    }
}

//! Candidate solution space and prior weights
//!
//! Both are expressed in answer-axis indices of a [`PatternMatrix`], so
//! every pattern lookup during scoring is a plain array access.

use crate::core::Word;
use crate::error::Result;
use crate::matrix::PatternMatrix;

/// Set of answers still consistent with every observation so far
///
/// Holds sorted, unique answer indices of the matrix it was created from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSpace {
    indices: Vec<usize>,
}

impl CandidateSpace {
    /// Every answer of the matrix
    #[must_use]
    pub fn all(matrix: &PatternMatrix) -> Self {
        Self {
            indices: (0..matrix.answers().len()).collect(),
        }
    }

    /// Space made of the given answer words
    ///
    /// # Errors
    /// Returns `UnknownWord` if a word is not in the matrix's answer list.
    pub fn from_words(matrix: &PatternMatrix, words: &[Word]) -> Result<Self> {
        let mut indices = words
            .iter()
            .map(|w| matrix.answer_index(w))
            .collect::<Result<Vec<_>>>()?;
        indices.sort_unstable();
        indices.dedup();
        Ok(Self { indices })
    }

    /// Wrap indices that are already sorted and unique
    pub(crate) fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Answer indices in ascending order
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Check membership of a word; words outside the answer list never match
    #[must_use]
    pub fn contains(&self, matrix: &PatternMatrix, word: &Word) -> bool {
        matrix
            .answer_index(word)
            .is_ok_and(|index| self.contains_index(index))
    }

    /// Words of the space, in answer-list order
    pub fn words<'m>(&self, matrix: &'m PatternMatrix) -> impl Iterator<Item = &'m Word> {
        self.indices.iter().map(move |&i| matrix.answer_at(i))
    }
}

/// Prior weight of every answer in the matrix
#[derive(Debug, Clone)]
pub struct Priors {
    weights: Vec<f64>,
}

impl Priors {
    /// Weight 1 for every word of `pool`, 0 for every other answer
    #[must_use]
    pub fn uniform(matrix: &PatternMatrix, pool: &CandidateSpace) -> Self {
        let mut weights = vec![0.0; matrix.answers().len()];
        for &i in pool.indices() {
            weights[i] = 1.0;
        }
        Self { weights }
    }

    /// Explicit per-word weights; unlisted answers get 0, negatives clamp to 0
    ///
    /// # Errors
    /// Returns `UnknownWord` if a word is not in the matrix's answer list.
    pub fn from_weights(matrix: &PatternMatrix, weighted: &[(Word, f64)]) -> Result<Self> {
        let mut weights = vec![0.0; matrix.answers().len()];
        for (word, weight) in weighted {
            weights[matrix.answer_index(word)?] = weight.max(0.0);
        }
        Ok(Self { weights })
    }

    #[inline]
    #[must_use]
    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(0.0)
    }

    /// Weights of the space's members normalized to sum to 1
    ///
    /// Aligned with `space.indices()`. All zeros if the space carries no weight.
    #[must_use]
    pub fn normalized(&self, space: &CandidateSpace) -> Vec<f64> {
        let raw: Vec<f64> = space.indices().iter().map(|&i| self.weight(i)).collect();
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return vec![0.0; raw.len()];
        }
        raw.into_iter().map(|w| w / total).collect()
    }
}

//! Persisted pattern matrix with word indices for both axes
//!
//! File layout (all integers little-endian):
//!
//! | field        | size            |
//! |--------------|-----------------|
//! | magic        | 8 bytes         |
//! | word length  | u32             |
//! | guess count  | u32             |
//! | answer count | u32             |
//! | guess words  | 6 bytes each    |
//! | answer words | 6 bytes each    |
//! | patterns     | u16 each, row-major |
//!
//! Storing the word lists in the file binds the matrix to one exact
//! (guess list, answer list) pairing.

use super::builder::build_matrix;
use crate::core::{PATTERN_COUNT, Pattern, WORD_LENGTH, Word};
use crate::error::{Axis, EvalError, Result};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8; 8] = b"CDLPAT01";

/// Magic plus the three u32 header fields
const HEADER_LEN: u64 = MAGIC.len() as u64 + 3 * 4;

/// Outcome matrix for a fixed guess list and answer list
#[derive(Debug)]
pub struct PatternMatrix {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    guess_index: FxHashMap<Word, usize>,
    answer_index: FxHashMap<Word, usize>,
    codes: Vec<Pattern>,
}

impl PatternMatrix {
    /// Compute the matrix for the given word lists
    #[must_use]
    pub fn build(guesses: Vec<Word>, answers: Vec<Word>) -> Self {
        Self::build_with_progress(guesses, answers, || {})
    }

    /// Compute the matrix, calling `on_row` after each guess row
    #[must_use]
    pub fn build_with_progress<F>(guesses: Vec<Word>, answers: Vec<Word>, on_row: F) -> Self
    where
        F: Fn() + Sync,
    {
        log::info!(
            "building {}x{} pattern matrix",
            guesses.len(),
            answers.len()
        );
        let codes = build_matrix(&guesses, &answers, on_row);
        Self::from_parts(guesses, answers, codes)
    }

    fn from_parts(guesses: Vec<Word>, answers: Vec<Word>, codes: Vec<Pattern>) -> Self {
        debug_assert_eq!(codes.len(), guesses.len() * answers.len());
        Self {
            guess_index: index_of(&guesses),
            answer_index: index_of(&answers),
            guesses,
            answers,
            codes,
        }
    }

    /// Open the matrix stored at `path` for the given word lists
    ///
    /// With `rebuild` set, the matrix is recomputed and written to `path`
    /// first. Otherwise a missing or mismatched file is an error.
    ///
    /// # Errors
    /// Returns `StaleOrMissingIndex` if the file can't be used, or an I/O
    /// error if a rebuilt matrix can't be written.
    pub fn open(path: &Path, guesses: Vec<Word>, answers: Vec<Word>, rebuild: bool) -> Result<Self> {
        if rebuild {
            let matrix = Self::build(guesses, answers);
            matrix.save(path)?;
            return Ok(matrix);
        }
        Self::load_for(path, &guesses, &answers)
    }

    /// Write the matrix to `path`
    ///
    /// # Errors
    /// Returns an I/O error if the file can't be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(MAGIC)?;
        write_u32(&mut out, WORD_LENGTH)?;
        write_u32(&mut out, self.guesses.len())?;
        write_u32(&mut out, self.answers.len())?;
        for word in self.guesses.iter().chain(&self.answers) {
            out.write_all(word.codes())?;
        }
        for pattern in &self.codes {
            out.write_all(&pattern.value().to_le_bytes())?;
        }
        out.flush()?;

        log::info!(
            "saved {}x{} pattern matrix to {}",
            self.guesses.len(),
            self.answers.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a matrix from `path`, rebuilding both word indices
    ///
    /// # Errors
    /// Returns `StaleOrMissingIndex` if the file is missing, truncated or
    /// malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let stale = |reason: String| EvalError::StaleOrMissingIndex {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| stale(e.to_string()))?;
        let file_len = file.metadata().map_err(|e| stale(e.to_string()))?.len();
        let matrix = read_matrix(&mut BufReader::new(file), file_len)
            .map_err(|e| stale(e.to_string()))?;

        log::info!(
            "loaded {}x{} pattern matrix from {}",
            matrix.guesses.len(),
            matrix.answers.len(),
            path.display()
        );
        Ok(matrix)
    }

    /// Read a matrix and check that it was built for exactly these lists
    ///
    /// # Errors
    /// Returns `StaleOrMissingIndex` if loading fails or either stored list
    /// differs from the supplied one.
    pub fn load_for(path: &Path, guesses: &[Word], answers: &[Word]) -> Result<Self> {
        let matrix = Self::load(path)?;

        let mismatch = if matrix.guesses != guesses {
            Some("guess list")
        } else if matrix.answers != answers {
            Some("answer list")
        } else {
            None
        };

        match mismatch {
            Some(list) => Err(EvalError::StaleOrMissingIndex {
                path: path.to_path_buf(),
                reason: format!("{list} differs from the one the matrix was built for"),
            }),
            None => Ok(matrix),
        }
    }

    /// Pattern for `guess` against `answer`
    ///
    /// # Errors
    /// Returns `UnknownWord` if either word is missing from its axis.
    pub fn lookup(&self, guess: &Word, answer: &Word) -> Result<Pattern> {
        let row = self.guess_index(guess)?;
        let col = self.answer_index(answer)?;
        Ok(self.pattern_at(row, col))
    }

    /// Patterns for `guess` against every answer, in answer-list order
    ///
    /// # Errors
    /// Returns `UnknownWord` if the guess is not in the guess list.
    pub fn lookup_row(&self, guess: &Word) -> Result<&[Pattern]> {
        Ok(self.row(self.guess_index(guess)?))
    }

    /// Row of patterns by guess index
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[Pattern] {
        let width = self.answers.len();
        &self.codes[row * width..(row + 1) * width]
    }

    /// Pattern by (guess index, answer index)
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn pattern_at(&self, row: usize, col: usize) -> Pattern {
        self.codes[row * self.answers.len() + col]
    }

    /// Index of `word` in the guess list
    ///
    /// # Errors
    /// Returns `UnknownWord` if the word is not a guess.
    pub fn guess_index(&self, word: &Word) -> Result<usize> {
        self.guess_index
            .get(word)
            .copied()
            .ok_or_else(|| unknown(word, Axis::Guess))
    }

    /// Index of `word` in the answer list
    ///
    /// # Errors
    /// Returns `UnknownWord` if the word is not an answer.
    pub fn answer_index(&self, word: &Word) -> Result<usize> {
        self.answer_index
            .get(word)
            .copied()
            .ok_or_else(|| unknown(word, Axis::Answer))
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn guess_at(&self, index: usize) -> &Word {
        &self.guesses[index]
    }

    #[inline]
    #[must_use]
    pub fn answer_at(&self, index: usize) -> &Word {
        &self.answers[index]
    }
}

fn unknown(word: &Word, axis: Axis) -> EvalError {
    EvalError::UnknownWord {
        word: word.to_string(),
        axis,
    }
}

/// Map each word to its first position in the list
fn index_of(words: &[Word]) -> FxHashMap<Word, usize> {
    let mut index = FxHashMap::default();
    index.reserve(words.len());
    for (i, word) in words.iter().enumerate() {
        index.entry(word.clone()).or_insert(i);
    }
    index
}

fn write_u32<W: Write>(out: &mut W, value: usize) -> io::Result<()> {
    let value = u32::try_from(value)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "list too large for matrix file"))?;
    out.write_all(&value.to_le_bytes())
}

fn read_u32<R: Read>(input: &mut R) -> io::Result<usize> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf) as usize)
}

fn read_words<R: Read>(input: &mut R, count: usize) -> io::Result<Vec<Word>> {
    let mut words = Vec::with_capacity(count);
    let mut buf = [0u8; WORD_LENGTH];
    for _ in 0..count {
        input.read_exact(&mut buf)?;
        let word = Word::from_codes(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        words.push(word);
    }
    Ok(words)
}

/// Total file size implied by the header counts, if it fits in a `u64`
fn expected_file_len(guess_count: usize, answer_count: usize) -> Option<u64> {
    let guesses = u64::try_from(guess_count).ok()?;
    let answers = u64::try_from(answer_count).ok()?;
    let words = guesses.checked_add(answers)?.checked_mul(WORD_LENGTH as u64)?;
    let patterns = guesses.checked_mul(answers)?.checked_mul(2)?;
    HEADER_LEN.checked_add(words)?.checked_add(patterns)
}

fn read_matrix<R: Read>(input: &mut R, file_len: u64) -> io::Result<PatternMatrix> {
    let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);

    let mut magic = [0u8; MAGIC.len()];
    input.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(invalid("not a pattern matrix file".to_string()));
    }

    let word_length = read_u32(input)?;
    if word_length != WORD_LENGTH {
        return Err(invalid(format!(
            "built for {word_length}-letter words, expected {WORD_LENGTH}"
        )));
    }

    let guess_count = read_u32(input)?;
    let answer_count = read_u32(input)?;
    if expected_file_len(guess_count, answer_count) != Some(file_len) {
        return Err(invalid(format!(
            "header claims {guess_count}x{answer_count} words but file is {file_len} bytes"
        )));
    }

    let guesses = read_words(input, guess_count)?;
    let answers = read_words(input, answer_count)?;

    let cells = guess_count * answer_count;
    let mut raw = vec![0u8; cells * 2];
    input.read_exact(&mut raw)?;

    let codes = raw
        .chunks_exact(2)
        .map(|pair| {
            let value = u16::from_le_bytes([pair[0], pair[1]]);
            Pattern::try_new(value)
                .ok_or_else(|| invalid(format!("pattern {value} out of range 0..{PATTERN_COUNT}")))
        })
        .collect::<io::Result<Vec<_>>>()?;

    let mut trailing = [0u8; 1];
    if input.read(&mut trailing)? != 0 {
        return Err(invalid("trailing data after patterns".to_string()));
    }

    Ok(PatternMatrix::from_parts(guesses, answers, codes))
}

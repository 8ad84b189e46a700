//! Word list loading utilities
//!
//! Lists are plain text, one word per line. Blank lines are skipped and
//! words are canonicalized to uppercase.

use crate::core::Word;
use crate::error::{EvalError, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Duplicates are dropped (keeping the first occurrence) so that word
/// indices stay unique.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InvalidWordList`
/// for the first line that is not a valid word.
///
/// # Examples
/// ```no_run
/// use coordle_eval::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content, path)?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_lines(content: &str, path: &Path) -> Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut duplicates = 0usize;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| EvalError::InvalidWordList {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;

        if seen.insert(word.clone()) {
            words.push(word);
        } else {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        log::warn!("{}: skipped {duplicates} duplicate words", path.display());
    }
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use coordle_eval::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["planet", "plane", "coccyx"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "COCCYX");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

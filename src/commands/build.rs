//! Matrix build command
//!
//! Computes the full guess × answer pattern matrix and writes it to disk.

use crate::core::Word;
use crate::error::Result;
use crate::matrix::PatternMatrix;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of building the matrix
pub struct BuildResult {
    pub path: PathBuf,
    pub guesses: usize,
    pub answers: usize,
    pub duration: Duration,
}

/// Build the pattern matrix for the given lists and persist it at `path`
///
/// Shows a progress bar on stderr while rows are computed.
///
/// # Errors
///
/// Returns an I/O error if the matrix file can't be written.
pub fn build_and_persist_matrix(
    guesses: Vec<Word>,
    answers: Vec<Word>,
    path: &Path,
) -> Result<BuildResult> {
    let start = Instant::now();

    let pb = ProgressBar::new(guesses.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%) | {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let matrix = PatternMatrix::build_with_progress(guesses, answers, || pb.inc(1));
    pb.finish_and_clear();

    matrix.save(path)?;

    Ok(BuildResult {
        path: path.to_path_buf(),
        guesses: matrix.guesses().len(),
        answers: matrix.answers().len(),
        duration: start.elapsed(),
    })
}

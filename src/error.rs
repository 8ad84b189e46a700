//! Error type shared by the evaluation engine

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of the pattern matrix a word was looked up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Guess,
    Answer,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guess => f.write_str("guess"),
            Self::Answer => f.write_str("answer"),
        }
    }
}

#[derive(Error, Debug)]
pub enum EvalError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("{path}:{line}: {source}")]
    InvalidWordList {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("'{word}' is not in the {axis} list")]
    UnknownWord { word: String, axis: Axis },
    #[error("pattern matrix {path} is missing or stale: {reason}")]
    StaleOrMissingIndex { path: PathBuf, reason: String },
    #[error("guess {step} ('{guess}') left no candidates; the solution is not in the answer pool")]
    EmptyCandidateSpace { guess: String, step: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;

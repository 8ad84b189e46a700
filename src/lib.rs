//! Co-ordle Evaluator
//!
//! Scores each guess of a finished 6-letter Co-ordle game for skill and luck
//! using the information gained against a precomputed pattern matrix.
//!
//! # Quick Start
//!
//! ```rust
//! use coordle_eval::core::{Pattern, Word};
//! use coordle_eval::engine::evaluate_game;
//! use coordle_eval::matrix::PatternMatrix;
//! use coordle_eval::wordlists::words_from_slice;
//!
//! let answers = words_from_slice(&["PLANET", "PLATES", "STAPLE"]);
//! let mut guesses = answers.clone();
//! guesses.extend(words_from_slice(&["LLAMAS"]));
//! let matrix = PatternMatrix::build(guesses.clone(), answers.clone());
//!
//! let played = words_from_slice(&["LLAMAS", "PLATES"]);
//! let solution = Word::new("plates").unwrap();
//! let records = evaluate_game(&matrix, &played, &solution, &answers, &guesses).unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].pattern, Pattern::PERFECT);
//! println!("{}", records[0].pattern.to_glyphs());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Pattern matrix construction and persistence
pub mod matrix;

// Entropy, reduction and scoring
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

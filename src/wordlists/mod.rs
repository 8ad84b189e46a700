//! Word lists for Co-ordle evaluation
//!
//! The guess list and the answer list are read from text files at startup.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};

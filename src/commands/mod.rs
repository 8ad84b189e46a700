//! Command implementations

pub mod analyze;
pub mod build;
pub mod evaluate;

pub use analyze::{AnalysisResult, analyze_word, opening_guesses};
pub use build::{BuildResult, build_and_persist_matrix};
pub use evaluate::{EvaluateConfig, EvaluationResult, evaluate};

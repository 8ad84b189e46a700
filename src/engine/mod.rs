//! Guess evaluation engine
//!
//! Turns the pattern matrix into expected information, narrows candidate
//! spaces and scores the skill and luck of every guess in a finished game.

mod entropy;
mod evaluator;
mod ranking;
mod reducer;
mod scoring;
mod space;

pub use entropy::{GuessEntropy, distribution, entropy, expected_entropies, expected_entropy};
pub use evaluator::{DEFAULT_TOP_K, EvalConfig, Evaluator, GuessRecord, evaluate_game};
pub use ranking::{RankedGuess, best_guesses, top_guesses};
pub use reducer::reduce;
pub use scoring::{LUCK_TOLERANCE_BITS, Luck, SkillTier, actual_entropy, skill_score};
pub use space::{CandidateSpace, Priors};

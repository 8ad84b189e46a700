//! Precomputed guess × answer pattern matrix
//!
//! Building the matrix is the only expensive step; afterwards every pattern
//! lookup is an index into a flat array.

mod builder;
mod store;

pub use builder::build_matrix;
pub use store::PatternMatrix;

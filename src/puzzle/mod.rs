//! N-queens problem definition and solution handling

pub mod problem;
pub mod solution;

pub use problem::QueensProblem;
pub use solution::{Solution, SolutionReport};

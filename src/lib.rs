//! N-Queens SAT Solver
//!
//! Encodes the N-queens puzzle as CNF, hands it to a SAT backend and decodes
//! the model back into a board.

pub mod board;
pub mod config;
pub mod error;
pub mod puzzle;
pub mod sat;
pub mod utils;

pub use board::{Board, BoardSize};
pub use config::Settings;
pub use error::{QueensError, Result};
pub use puzzle::{QueensProblem, Solution};

/// Main entry point: solve the puzzle described by `settings`
pub fn solve_queens(settings: Settings) -> anyhow::Result<Option<Solution>> {
    let mut problem = QueensProblem::new(settings)?;
    problem.solve()
}

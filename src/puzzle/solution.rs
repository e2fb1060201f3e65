//! Solution representation for N-queens problems

use crate::board::Board;
use crate::config::SolverBackend;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// A validated queen placement found by the solver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The decoded board
    pub board: Board,
    /// Backend that produced the model
    pub backend: SolverBackend,
    /// Time spent inside the solver
    #[serde(skip)]
    pub solve_time: Duration,
}

/// Flat, serializable view of a solve outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub size: usize,
    pub satisfiable: bool,
    pub queens: Vec<(usize, usize)>,
    pub rows: Vec<String>,
    pub backend: SolverBackend,
    pub solve_time_ms: u64,
}

impl Solution {
    pub fn new(board: Board, backend: SolverBackend, solve_time: Duration) -> Self {
        Self {
            board,
            backend,
            solve_time,
        }
    }

    pub fn queens(&self) -> Vec<(usize, usize)> {
        self.board.queens()
    }

    /// Report for this solution using the given markers
    pub fn report(&self, queen_marker: char, empty_marker: char) -> SolutionReport {
        SolutionReport {
            size: self.board.width(),
            satisfiable: true,
            queens: self.queens(),
            rows: self
                .board
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|&queen| if queen { queen_marker } else { empty_marker })
                        .collect::<String>()
                })
                .collect(),
            backend: self.backend,
            solve_time_ms: self.solve_time.as_millis() as u64,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save the full solution as JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json().context("Failed to serialize solution")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write solution to {}", path.as_ref().display()))?;
        Ok(())
    }
}

impl SolutionReport {
    /// Report for an unsatisfiable board
    pub fn unsatisfiable(size: usize, backend: SolverBackend, solve_time: Duration) -> Self {
        Self {
            size,
            satisfiable: false,
            queens: Vec::new(),
            rows: Vec::new(),
            backend,
            solve_time_ms: solve_time.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use tempfile::tempdir;

    fn four_queens() -> Solution {
        let queens = [(0, 1), (1, 3), (2, 0), (3, 2)];
        let board = Board::from_queens(BoardSize::new(4).unwrap(), &queens);
        Solution::new(board, SolverBackend::Cadical, Duration::from_millis(3))
    }

    #[test]
    fn test_report_rows() {
        let report = four_queens().report('Q', '-');
        assert!(report.satisfiable);
        assert_eq!(report.size, 4);
        assert_eq!(report.rows, vec!["-Q--", "---Q", "Q---", "--Q-"]);
        assert_eq!(report.solve_time_ms, 3);
    }

    #[test]
    fn test_unsatisfiable_report() {
        let report = SolutionReport::unsatisfiable(3, SolverBackend::Varisat, Duration::ZERO);
        assert!(!report.satisfiable);
        assert!(report.queens.is_empty());
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.json");
        let solution = four_queens();
        solution.save_to_file(&path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let loaded: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.board, solution.board);
        assert_eq!(loaded.backend, SolverBackend::Cadical);
    }
}

//! N-queens problem definition

use super::Solution;
use crate::board::{Board, BoardSize, SolutionValidator};
use crate::config::Settings;
use crate::error::QueensError;
use crate::sat::{
    CnfSolver, EncodingStatistics, Formula, PuzzleEncoder, SolverStatistics, UnifiedSatSolver,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// One N-queens instance: settings, its encoder and the chosen backend
pub struct QueensProblem {
    settings: Settings,
    size: BoardSize,
    encoder: PuzzleEncoder,
    solver: Box<dyn CnfSolver>,
}

impl QueensProblem {
    /// Create a problem from validated settings
    pub fn new(settings: Settings) -> Result<Self> {
        let solver = Box::new(UnifiedSatSolver::new(settings.solver.backend));
        Self::with_solver(settings, solver)
    }

    /// Create a problem that solves with a caller-supplied backend
    pub fn with_solver(settings: Settings, solver: Box<dyn CnfSolver>) -> Result<Self> {
        settings.validate().context("Configuration validation failed")?;
        let size = settings.board_size()?;
        let encoder = PuzzleEncoder::new(size, settings.encoding.deduplicate_threats);

        Ok(Self {
            settings,
            size,
            encoder,
            solver,
        })
    }

    /// Encode, solve and decode; `None` means the board has no placement
    pub fn solve(&mut self) -> Result<Option<Solution>> {
        let formula = self.encode();
        let stats = self.encoder.statistics(&formula);
        info!(
            size = self.size.get(),
            variables = stats.total_variables,
            clauses = stats.total_clauses,
            backend = ?self.solver.backend(),
            "solving n-queens"
        );

        let model = self.solver.solve(&formula).context("SAT solving failed")?;
        let solve_time = self.solver.statistics().solve_time;

        let Some(model) = model else {
            info!(size = self.size.get(), "formula is unsatisfiable");
            return Ok(None);
        };

        if !formula.is_satisfied_by(&model) {
            let message = "model violates a clause of the formula".to_string();
            warn!(%message, "solver returned an invalid model");
            return Err(QueensError::InvalidModel { message }.into());
        }

        let board = Board::from_model(&model, self.size)
            .context("Failed to decode solver model")?;

        let validation = SolutionValidator::validate(&board);
        if !validation.is_valid {
            let message = validation
                .error_message()
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(%message, "solver returned an invalid placement");
            return Err(QueensError::InvalidModel { message }.into());
        }

        info!(
            queens = board.queen_count(),
            elapsed_ms = solve_time.as_millis() as u64,
            "found placement"
        );
        Ok(Some(Solution::new(board, self.solver.backend(), solve_time)))
    }

    /// The CNF formula for this board
    pub fn encode(&self) -> Formula {
        self.encoder.encode()
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Get the problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get encoding statistics
    pub fn encoding_statistics(&self) -> EncodingStatistics {
        self.encoder.statistics(&self.encode())
    }

    /// Statistics for the last solve
    pub fn solver_statistics(&self) -> SolverStatistics {
        self.solver.statistics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverBackend;
    use crate::sat::Model;
    use std::collections::HashSet;

    const BACKENDS: [SolverBackend; 2] = [SolverBackend::Cadical, SolverBackend::Varisat];

    fn problem(n: i64, backend: SolverBackend, deduplicate: bool) -> QueensProblem {
        let mut settings = Settings::with_size(n);
        settings.solver.backend = backend;
        settings.encoding.deduplicate_threats = deduplicate;
        QueensProblem::new(settings).unwrap()
    }

    fn assert_non_attacking(board: &Board) {
        let n = board.width();
        let queens = board.queens();
        assert_eq!(queens.len(), n);

        let rows: HashSet<_> = queens.iter().map(|q| q.0).collect();
        let cols: HashSet<_> = queens.iter().map(|q| q.1).collect();
        let diags: HashSet<_> = queens.iter().map(|q| q.0 as isize - q.1 as isize).collect();
        let anti: HashSet<_> = queens.iter().map(|q| q.0 + q.1).collect();
        assert_eq!(rows.len(), n);
        assert_eq!(cols.len(), n);
        assert_eq!(diags.len(), n);
        assert_eq!(anti.len(), n);
    }

    #[test]
    fn test_solvable_sizes() {
        for backend in BACKENDS {
            for n in [1, 4, 5, 8] {
                let solution = problem(n, backend, false)
                    .solve()
                    .unwrap()
                    .unwrap_or_else(|| panic!("{}-queens should be solvable", n));
                assert_non_attacking(&solution.board);
                assert_eq!(solution.backend, backend);
            }
        }
    }

    #[test]
    fn test_unsolvable_sizes() {
        for backend in BACKENDS {
            for n in [2, 3] {
                assert!(problem(n, backend, false).solve().unwrap().is_none());
            }
        }
    }

    #[test]
    fn test_deduplicated_encoding_preserves_satisfiability() {
        for n in 1..=6 {
            let full = problem(n, SolverBackend::Cadical, false).solve().unwrap();
            let dedup = problem(n, SolverBackend::Cadical, true).solve().unwrap();
            assert_eq!(full.is_some(), dedup.is_some(), "n = {}", n);
            if let Some(solution) = dedup {
                assert_non_attacking(&solution.board);
            }
        }
    }

    #[test]
    fn test_single_queen() {
        let solution = problem(1, SolverBackend::Cadical, false).solve().unwrap().unwrap();
        assert_eq!(solution.queens(), vec![(0, 0)]);
    }

    #[test]
    fn test_rejects_invalid_size() {
        assert!(QueensProblem::new(Settings::with_size(0)).is_err());
        assert!(QueensProblem::new(Settings::with_size(-1)).is_err());
    }

    struct FixedModel(Option<Model>);

    impl CnfSolver for FixedModel {
        fn solve(&mut self, _formula: &Formula) -> crate::error::Result<Option<Model>> {
            Ok(self.0.clone())
        }

        fn backend(&self) -> SolverBackend {
            SolverBackend::Cadical
        }

        fn statistics(&self) -> SolverStatistics {
            SolverStatistics::not_run()
        }
    }

    #[test]
    fn test_invalid_model_is_an_error() {
        // Two queens in the same row of a 2x2 board
        let model = Model::from_values([true, true, false, false]);
        let solver = Box::new(FixedModel(Some(model)));
        let mut problem = QueensProblem::with_solver(Settings::with_size(2), solver).unwrap();
        let err = problem.solve().unwrap_err();
        assert!(err.downcast_ref::<QueensError>().is_some());
    }

    #[test]
    fn test_model_missing_row_queen_is_rejected() {
        // Empty 1x1 board breaks the row-presence clause
        let solver = Box::new(FixedModel(Some(Model::from_values([false]))));
        let mut problem = QueensProblem::with_solver(Settings::with_size(1), solver).unwrap();
        let err = problem.solve().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QueensError>(),
            Some(QueensError::InvalidModel { .. })
        ));
    }

    #[test]
    fn test_solver_failure_propagates() {
        struct Broken;

        impl CnfSolver for Broken {
            fn solve(&mut self, _formula: &Formula) -> crate::error::Result<Option<Model>> {
                Err(QueensError::solver("broken", "no engine"))
            }

            fn backend(&self) -> SolverBackend {
                SolverBackend::Cadical
            }

            fn statistics(&self) -> SolverStatistics {
                SolverStatistics::not_run()
            }
        }

        let mut problem =
            QueensProblem::with_solver(Settings::with_size(4), Box::new(Broken)).unwrap();
        assert!(problem.solve().is_err());
    }

    #[test]
    fn test_statistics_after_solve() {
        let mut problem = problem(4, SolverBackend::Cadical, false);
        problem.solve().unwrap();
        let stats = problem.solver_statistics();
        assert_eq!(stats.variable_count, 16);
        assert_eq!(stats.clause_count, problem.encoding_statistics().total_clauses);
    }
}

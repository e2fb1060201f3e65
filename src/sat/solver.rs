//! SAT solver capability and the CaDiCaL backend

use super::{Formula, Model};
use crate::config::SolverBackend;
use crate::error::{QueensError, Result};
use std::time::{Duration, Instant};
use tracing::debug;

/// Anything that can decide a CNF formula and hand back one model
pub trait CnfSolver {
    /// Solve `formula`, returning `None` when it is unsatisfiable
    ///
    /// A model covers every variable in `1..=formula.variable_count()`.
    fn solve(&mut self, formula: &Formula) -> Result<Option<Model>>;

    fn backend(&self) -> SolverBackend;

    /// Statistics for the most recent call to [`CnfSolver::solve`]
    fn statistics(&self) -> SolverStatistics;
}

/// Statistics about the solving process
#[derive(Debug, Clone)]
pub struct SolverStatistics {
    pub variable_count: usize,
    pub clause_count: usize,
    pub solve_time: Duration,
    pub result: SolverResultType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverResultType {
    NotRun,
    Satisfiable,
    Unsatisfiable,
    Error,
}

impl SolverStatistics {
    pub(crate) fn not_run() -> Self {
        Self {
            variable_count: 0,
            clause_count: 0,
            solve_time: Duration::ZERO,
            result: SolverResultType::NotRun,
        }
    }

    pub(crate) fn record(
        formula: &Formula,
        solve_time: Duration,
        result: SolverResultType,
    ) -> Self {
        Self {
            variable_count: formula.variable_count(),
            clause_count: formula.clause_count(),
            solve_time,
            result,
        }
    }
}

/// SAT solver wrapper for CaDiCaL
///
/// A fresh `cadical::Solver` is built for each call and dropped before
/// returning.
#[derive(Debug)]
pub struct CadicalSolver {
    last_run: SolverStatistics,
}

impl CadicalSolver {
    pub fn new() -> Self {
        Self {
            last_run: SolverStatistics::not_run(),
        }
    }
}

impl Default for CadicalSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CnfSolver for CadicalSolver {
    fn solve(&mut self, formula: &Formula) -> Result<Option<Model>> {
        let start_time = Instant::now();
        let mut solver: cadical::Solver = cadical::Solver::new();

        for clause in formula.clauses() {
            if clause.is_empty() {
                let elapsed = start_time.elapsed();
                self.last_run =
                    SolverStatistics::record(formula, elapsed, SolverResultType::Unsatisfiable);
                return Ok(None);
            }
            solver.add_clause(clause.literals.iter().copied());
        }

        let outcome = solver.solve();
        let solve_time = start_time.elapsed();

        let model = match outcome {
            Some(true) => {
                let values = (1..=formula.variable_count() as i32)
                    .map(|var| solver.value(var).unwrap_or(false));
                Some(Model::from_values(values))
            }
            Some(false) => None,
            None => {
                self.last_run =
                    SolverStatistics::record(formula, solve_time, SolverResultType::Error);
                return Err(QueensError::solver("cadical", "solver stopped without a result"));
            }
        };

        let result = if model.is_some() {
            SolverResultType::Satisfiable
        } else {
            SolverResultType::Unsatisfiable
        };
        let elapsed_ms = solve_time.as_millis() as u64;
        debug!(backend = "cadical", ?result, elapsed_ms, "solve finished");
        self.last_run = SolverStatistics::record(formula, solve_time, result);

        Ok(model)
    }

    fn backend(&self) -> SolverBackend {
        SolverBackend::Cadical
    }

    fn statistics(&self) -> SolverStatistics {
        self.last_run.clone()
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Solver Statistics:")?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Clauses: {}", self.clause_count)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        writeln!(f, "  Result: {:?}", self.result)?;
        Ok(())
    }
}

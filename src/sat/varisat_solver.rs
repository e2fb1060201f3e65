//! Varisat SAT solver integration

use super::solver::{CnfSolver, SolverResultType, SolverStatistics};
use super::{Formula, Model};
use crate::config::SolverBackend;
use crate::error::{QueensError, Result};
use std::time::{Duration, Instant};
use tracing::debug;
use varisat::{ExtendFormula, Lit};

/// SAT solver wrapper for Varisat
#[derive(Debug)]
pub struct VarisatSolver {
    last_run: SolverStatistics,
}

impl VarisatSolver {
    pub fn new() -> Self {
        Self {
            last_run: SolverStatistics::not_run(),
        }
    }
}

impl VarisatSolver {
    /// Turn a finished search into a model and record the run
    fn conclude(
        &mut self,
        formula: &Formula,
        solve_time: Duration,
        satisfiable: bool,
        lits: Option<Vec<Lit>>,
    ) -> Result<Option<Model>> {
        let elapsed_ms = solve_time.as_millis() as u64;
        if !satisfiable {
            debug!(backend = "varisat", elapsed_ms, "unsatisfiable");
            self.last_run =
                SolverStatistics::record(formula, solve_time, SolverResultType::Unsatisfiable);
            return Ok(None);
        }

        let Some(lits) = lits else {
            self.last_run = SolverStatistics::record(formula, solve_time, SolverResultType::Error);
            return Err(QueensError::solver("varisat", "satisfiable result without a model"));
        };

        let mut values = vec![false; formula.variable_count()];
        for lit in lits {
            let index = lit.var().index();
            if index < values.len() {
                values[index] = lit.is_positive();
            }
        }

        debug!(backend = "varisat", elapsed_ms, "satisfiable");
        self.last_run =
            SolverStatistics::record(formula, solve_time, SolverResultType::Satisfiable);
        Ok(Some(Model::from_values(values)))
    }
}

impl Default for VarisatSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CnfSolver for VarisatSolver {
    fn solve(&mut self, formula: &Formula) -> Result<Option<Model>> {
        let start_time = Instant::now();
        let mut solver = varisat::Solver::new();

        let mut lits = Vec::new();
        for clause in formula.clauses() {
            lits.clear();
            lits.extend(clause.literals.iter().map(|&lit| Lit::from_dimacs(lit as isize)));
            solver.add_clause(&lits);
        }

        let outcome = solver.solve();
        let solve_time = start_time.elapsed();

        let satisfiable = match outcome {
            Ok(satisfiable) => satisfiable,
            Err(err) => {
                self.last_run =
                    SolverStatistics::record(formula, solve_time, SolverResultType::Error);
                return Err(QueensError::solver("varisat", err.to_string()));
            }
        };

        let model = if satisfiable { solver.model() } else { None };
        self.conclude(formula, solve_time, satisfiable, model)
    }

    fn backend(&self) -> SolverBackend {
        SolverBackend::Varisat
    }

    fn statistics(&self) -> SolverStatistics {
        self.last_run.clone()
    }
}

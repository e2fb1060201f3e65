//! Factory for creating SAT solver instances based on configuration

use super::solver::{CadicalSolver, CnfSolver, SolverStatistics};
use super::varisat_solver::VarisatSolver;
use super::{Formula, Model};
use crate::config::SolverBackend;
use crate::error::Result;

/// SAT solver that dispatches to the configured backend
#[derive(Debug)]
pub enum UnifiedSatSolver {
    Cadical(CadicalSolver),
    Varisat(VarisatSolver),
}

impl UnifiedSatSolver {
    /// Create a new solver instance based on the specified backend
    pub fn new(backend: SolverBackend) -> Self {
        match backend {
            SolverBackend::Cadical => UnifiedSatSolver::Cadical(CadicalSolver::new()),
            SolverBackend::Varisat => UnifiedSatSolver::Varisat(VarisatSolver::new()),
        }
    }
}

impl CnfSolver for UnifiedSatSolver {
    fn solve(&mut self, formula: &Formula) -> Result<Option<Model>> {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.solve(formula),
            UnifiedSatSolver::Varisat(solver) => solver.solve(formula),
        }
    }

    fn backend(&self) -> SolverBackend {
        match self {
            UnifiedSatSolver::Cadical(_) => SolverBackend::Cadical,
            UnifiedSatSolver::Varisat(_) => SolverBackend::Varisat,
        }
    }

    fn statistics(&self) -> SolverStatistics {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.statistics(),
            UnifiedSatSolver::Varisat(solver) => solver.statistics(),
        }
    }
}

impl Default for UnifiedSatSolver {
    fn default() -> Self {
        UnifiedSatSolver::Cadical(CadicalSolver::new())
    }
}

//! SAT encoding and solving components for N-queens

pub mod variables;
pub mod constraints;
pub mod formula;
pub mod encoder;
pub mod solver;
pub mod varisat_solver;
pub mod solver_factory;

pub use variables::CellCodec;
pub use constraints::{Clause, ThreatGenerator};
pub use formula::{Formula, Model};
pub use encoder::{EncodingStatistics, PuzzleEncoder};
pub use solver::{CadicalSolver, CnfSolver, SolverStatistics};
pub use varisat_solver::VarisatSolver;
pub use solver_factory::UnifiedSatSolver;

//! Board size, decoded placements and their validation

pub mod size;
pub mod grid;
pub mod validator;

pub use size::{BoardSize, MAX_BOARD_SIZE};
pub use grid::Board;
pub use validator::{AttackLine, Conflict, SolutionValidator, ValidationResult};

//! Placement validation independent of the SAT encoding

use super::Board;
use std::fmt;

/// Line along which two queens attack each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackLine {
    Row,
    Column,
    Diagonal,
    AntiDiagonal,
}

/// A pair of queens that attack each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub first: (usize, usize),
    pub second: (usize, usize),
    pub line: AttackLine,
}

/// Result of validating a placement
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub queen_count: usize,
    pub expected_queens: usize,
    pub conflicts: Vec<Conflict>,
}

impl ValidationResult {
    /// Human-readable reason for an invalid placement
    pub fn error_message(&self) -> Option<String> {
        if self.is_valid {
            return None;
        }
        if self.queen_count != self.expected_queens {
            return Some(format!(
                "expected {} queens, found {}",
                self.expected_queens, self.queen_count
            ));
        }
        self.conflicts.first().map(|c| {
            format!(
                "queens at {:?} and {:?} share a {:?}",
                c.first, c.second, c.line
            )
        })
    }
}

/// Checks that a board holds exactly N mutually non-attacking queens
pub struct SolutionValidator;

impl SolutionValidator {
    pub fn validate(board: &Board) -> ValidationResult {
        let queens = board.queens();
        let expected_queens = board.width();
        let mut conflicts = Vec::new();

        for (i, &first) in queens.iter().enumerate() {
            for &second in &queens[i + 1..] {
                if let Some(line) = Self::attack_line(first, second) {
                    conflicts.push(Conflict {
                        first,
                        second,
                        line,
                    });
                }
            }
        }

        ValidationResult {
            is_valid: conflicts.is_empty() && queens.len() == expected_queens,
            queen_count: queens.len(),
            expected_queens,
            conflicts,
        }
    }

    fn attack_line(a: (usize, usize), b: (usize, usize)) -> Option<AttackLine> {
        let (ax, ay) = (a.0 as isize, a.1 as isize);
        let (bx, by) = (b.0 as isize, b.1 as isize);
        if ax == bx {
            Some(AttackLine::Row)
        } else if ay == by {
            Some(AttackLine::Column)
        } else if ax - ay == bx - by {
            Some(AttackLine::Diagonal)
        } else if ax + ay == bx + by {
            Some(AttackLine::AntiDiagonal)
        } else {
            None
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Result:")?;
        writeln!(f, "  Valid: {}", self.is_valid)?;
        writeln!(f, "  Queens: {}/{}", self.queen_count, self.expected_queens)?;
        writeln!(f, "  Conflicts: {}", self.conflicts.len())?;
        Ok(())
    }
}

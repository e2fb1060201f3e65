//! Clause generation for queen attack constraints

use super::CellCodec;
use itertools::iproduct;

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self { literals: vec![literal] }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self { literals: vec![lit1, lit2] }
    }

    /// "Not both": at most one of the two variables is true
    pub fn exclusion(var1: i32, var2: i32) -> Self {
        Self::binary(-var1, -var2)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Whether a total assignment (indexed by variable) satisfies this clause
    pub fn is_satisfied_by(&self, value: impl Fn(i32) -> bool) -> bool {
        self.literals
            .iter()
            .any(|&lit| value(lit.abs()) == (lit > 0))
    }
}

/// The 8 queen move directions, in `(dx, dy)` lexicographic order
pub fn ray_directions() -> impl Iterator<Item = (isize, isize)> {
    iproduct!(-1isize..=1, -1isize..=1).filter(|&(dx, dy)| dx != 0 || dy != 0)
}

/// Generates mutual-exclusion clauses for every cell a queen attacks
#[derive(Debug, Clone)]
pub struct ThreatGenerator {
    codec: CellCodec,
    deduplicate: bool,
}

impl ThreatGenerator {
    /// With `deduplicate` set, each attacking pair is emitted only from the
    /// endpoint with the smaller variable id.
    pub fn new(codec: CellCodec, deduplicate: bool) -> Self {
        Self { codec, deduplicate }
    }

    /// Clauses `[-v(x, y), -v(x2, y2)]` for every `(x2, y2)` on the 8 rays from `(x, y)`
    pub fn threat_clauses(&self, x: usize, y: usize) -> Vec<Clause> {
        let source = self.codec.encode(x, y);
        let mut clauses = Vec::new();

        for (dx, dy) in ray_directions() {
            for i in 1..=self.codec.size() as isize {
                let new_x = x as isize + dx * i;
                let new_y = y as isize + dy * i;
                if !self.codec.contains(new_x, new_y) {
                    break;
                }

                let target = self.codec.encode(new_x as usize, new_y as usize);
                if self.deduplicate && target < source {
                    continue;
                }
                clauses.push(Clause::exclusion(source, target));
            }
        }

        clauses
    }
}

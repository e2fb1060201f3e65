//! CNF formulas and solver models

use super::Clause;
use std::io::Write;

/// A conjunction of clauses over variables `1..=variable_count`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
    variable_count: usize,
}

impl Formula {
    pub fn new(clauses: Vec<Clause>, variable_count: usize) -> Self {
        Self {
            clauses,
            variable_count,
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(Clause::len).sum()
    }

    /// Check a model against every clause
    pub fn is_satisfied_by(&self, model: &Model) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.is_satisfied_by(|var| model.value(var)))
    }

    /// Stream in DIMACS CNF format
    pub fn write_dimacs<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "p cnf {} {}", self.variable_count, self.clauses.len())?;
        for clause in &self.clauses {
            for literal in &clause.literals {
                write!(writer, "{} ", literal)?;
            }
            writeln!(writer, "0")?;
        }
        writer.flush()
    }
}

/// A total assignment: one signed literal per variable, in variable order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    literals: Vec<i32>,
}

impl Model {
    /// Build from per-variable truth values, `values[0]` being variable 1
    pub fn from_values(values: impl IntoIterator<Item = bool>) -> Self {
        let literals = values
            .into_iter()
            .zip(1i32..)
            .map(|(value, var)| if value { var } else { -var })
            .collect();
        Self { literals }
    }

    /// Build from signed literals; entries are sorted by variable
    pub fn from_literals(mut literals: Vec<i32>) -> Self {
        literals.sort_by_key(|lit| lit.abs());
        Self { literals }
    }

    pub fn literals(&self) -> &[i32] {
        &self.literals
    }

    /// Variables assigned true
    pub fn true_variables(&self) -> impl Iterator<Item = i32> + '_ {
        self.literals.iter().copied().filter(|&lit| lit > 0)
    }

    /// Truth value of `variable`; unassigned variables read as false
    pub fn value(&self, variable: i32) -> bool {
        self.literals
            .binary_search_by_key(&variable, |lit| lit.abs())
            .is_ok_and(|idx| self.literals[idx] > 0)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

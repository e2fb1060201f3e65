//! SAT encoder for the N-queens puzzle

use super::{CellCodec, Clause, Formula, ThreatGenerator};
use crate::board::BoardSize;
use itertools::iproduct;
use tracing::debug;

/// Builds the CNF formula for an N×N board
///
/// The formula has two groups, in this order:
/// 1. one "row has a queen" clause per row,
/// 2. the threat clauses of every cell, visited row-major.
#[derive(Debug, Clone)]
pub struct PuzzleEncoder {
    size: BoardSize,
    codec: CellCodec,
    threats: ThreatGenerator,
}

impl PuzzleEncoder {
    pub fn new(size: BoardSize, deduplicate_threats: bool) -> Self {
        let codec = CellCodec::new(size);
        Self {
            size,
            codec,
            threats: ThreatGenerator::new(codec, deduplicate_threats),
        }
    }

    /// Encode the complete puzzle
    pub fn encode(&self) -> Formula {
        let mut clauses = self.row_presence_clauses();
        clauses.extend(self.mutual_threat_clauses());

        let formula = Formula::new(clauses, self.codec.variable_count());
        debug!(
            size = self.size.get(),
            variables = formula.variable_count(),
            clauses = formula.clause_count(),
            "encoded n-queens formula"
        );
        formula
    }

    /// One clause per row listing all its cells
    pub fn row_presence_clauses(&self) -> Vec<Clause> {
        (0..self.size.get())
            .map(|x| Clause::new(self.codec.row_variables(x)))
            .collect()
    }

    /// Pairwise exclusion for every queen-move pair on the board
    pub fn mutual_threat_clauses(&self) -> Vec<Clause> {
        let n = self.size.get();
        iproduct!(0..n, 0..n)
            .flat_map(|(x, y)| self.threats.threat_clauses(x, y))
            .collect()
    }

    pub fn codec(&self) -> &CellCodec {
        &self.codec
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Statistics for an encoded formula
    pub fn statistics(&self, formula: &Formula) -> EncodingStatistics {
        let row_clauses = self.size.get();
        EncodingStatistics {
            board_size: self.size.get(),
            total_variables: formula.variable_count(),
            row_clauses,
            threat_clauses: formula.clause_count().saturating_sub(row_clauses),
            total_clauses: formula.clause_count(),
            total_literals: formula.literal_count(),
        }
    }
}

/// Statistics about the SAT encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingStatistics {
    pub board_size: usize,
    pub total_variables: usize,
    pub row_clauses: usize,
    pub threat_clauses: usize,
    pub total_clauses: usize,
    pub total_literals: usize,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Encoding Statistics:")?;
        writeln!(f, "  Board: {}x{}", self.board_size, self.board_size)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Row clauses: {}", self.row_clauses)?;
        writeln!(f, "  Threat clauses: {}", self.threat_clauses)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses)?;
        writeln!(f, "  Total literals: {}", self.total_literals)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(n: i64) -> PuzzleEncoder {
        PuzzleEncoder::new(BoardSize::new(n).unwrap(), false)
    }

    #[test]
    fn test_single_cell_formula() {
        let formula = encoder(1).encode();
        assert_eq!(formula.clauses(), &[Clause::unit(1)]);
        assert_eq!(formula.variable_count(), 1);
    }

    #[test]
    fn test_row_presence_group() {
        for n in 1..=8 {
            let encoder = encoder(n);
            let formula = encoder.encode();
            let n = n as usize;
            let rows = &formula.clauses()[..n];
            assert_eq!(rows.len(), n);
            for (x, clause) in rows.iter().enumerate() {
                assert_eq!(clause.len(), n);
                assert_eq!(clause.literals, encoder.codec().row_variables(x));
            }
        }
    }

    #[test]
    fn test_threat_group_follows_rows() {
        let formula = encoder(4).encode();
        assert!(formula.clauses()[4..].iter().all(|c| c.len() == 2));
        // First threat clauses come from (0, 0)
        assert_eq!(formula.clauses()[4].literals[0], -1);
    }

    #[test]
    fn test_clause_count_2x2() {
        // Every pair of cells on a 2x2 board attacks: 4 cells * 3 targets
        let formula = encoder(2).encode();
        assert_eq!(formula.clause_count(), 2 + 12);
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let encoder = encoder(6);
        assert_eq!(encoder.encode(), encoder.encode());
        assert_eq!(self::encoder(6).encode(), encoder.encode());
    }

    #[test]
    fn test_deduplicated_encoding_halves_threats() {
        let size = BoardSize::new(5).unwrap();
        let full = PuzzleEncoder::new(size, false);
        let dedup = PuzzleEncoder::new(size, true);
        let full_stats = full.statistics(&full.encode());
        let dedup_stats = dedup.statistics(&dedup.encode());

        assert_eq!(dedup_stats.row_clauses, full_stats.row_clauses);
        assert_eq!(dedup_stats.threat_clauses * 2, full_stats.threat_clauses);
    }

    #[test]
    fn test_statistics() {
        let encoder = encoder(3);
        let formula = encoder.encode();
        let stats = encoder.statistics(&formula);
        assert_eq!(stats.board_size, 3);
        assert_eq!(stats.total_variables, 9);
        assert_eq!(stats.row_clauses, 3);
        assert_eq!(stats.total_clauses, formula.clause_count());
        assert_eq!(stats.total_literals, 3 * 3 + stats.threat_clauses * 2);

        let text = stats.to_string();
        assert!(text.contains("Board: 3x3"));
    }
}

//! Mapping between board cells and SAT variables

use crate::board::BoardSize;
use crate::error::{QueensError, Result};

/// Bijection between cells `(x, y)` of an N×N board and variables `1..=N²`
///
/// `x` is the row and `y` the column, both zero-based. Variables are laid out
/// row-major, so the cell `(x, y)` is variable `x * N + y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCodec {
    size: usize,
}

impl CellCodec {
    pub fn new(size: BoardSize) -> Self {
        Self { size: size.get() }
    }

    /// Variable id for the cell at row `x`, column `y`
    ///
    /// The caller keeps `x` and `y` inside the board.
    #[inline]
    pub fn encode(&self, x: usize, y: usize) -> i32 {
        debug_assert!(
            x < self.size && y < self.size,
            "cell ({}, {}) off a {} board",
            x,
            y,
            self.size
        );
        (x * self.size + y + 1) as i32
    }

    /// Cell for a variable id produced by [`CellCodec::encode`]
    #[inline]
    pub fn decode(&self, variable: i32) -> (usize, usize) {
        let zero_based = (variable - 1) as usize;
        (zero_based / self.size, zero_based % self.size)
    }

    /// Checked inverse for variables coming from outside the encoder
    pub fn try_decode(&self, variable: i32) -> Result<(usize, usize)> {
        if variable < 1 || variable as usize > self.variable_count() {
            return Err(QueensError::VariableOutOfRange {
                variable,
                size: self.size,
            });
        }
        Ok(self.decode(variable))
    }

    /// All variables of row `x`, in column order
    pub fn row_variables(&self, x: usize) -> Vec<i32> {
        (0..self.size).map(|y| self.encode(x, y)).collect()
    }

    pub fn variable_count(&self) -> usize {
        self.size * self.size
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a signed step from `(x, y)` stays on the board
    pub fn contains(&self, x: isize, y: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&x) && (0..n).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn codec(n: i64) -> CellCodec {
        CellCodec::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_row_major_layout() {
        let codec = codec(8);
        assert_eq!(codec.encode(0, 0), 1);
        assert_eq!(codec.encode(0, 7), 8);
        assert_eq!(codec.encode(1, 0), 9);
        assert_eq!(codec.encode(7, 7), 64);
        assert_eq!(codec.decode(10), (1, 1));
    }

    #[test]
    fn test_single_cell_board() {
        let codec = codec(1);
        assert_eq!(codec.encode(0, 0), 1);
        assert_eq!(codec.decode(1), (0, 0));
        assert_eq!(codec.variable_count(), 1);
    }

    #[test]
    fn test_bijection_covers_all_variables() {
        for n in 1..=9 {
            let codec = codec(n);
            let n = n as usize;
            let variables: HashSet<i32> = (0..n)
                .flat_map(|x| (0..n).map(move |y| (x, y)))
                .map(|(x, y)| codec.encode(x, y))
                .collect();
            let expected: HashSet<i32> = (1..=(n * n) as i32).collect();
            assert_eq!(variables, expected);
        }
    }

    #[test]
    fn test_try_decode_bounds() {
        let codec = codec(3);
        assert_eq!(codec.try_decode(9).unwrap(), (2, 2));
        assert!(matches!(
            codec.try_decode(10),
            Err(QueensError::VariableOutOfRange { variable: 10, size: 3 })
        ));
        assert!(codec.try_decode(0).is_err());
        assert!(codec.try_decode(-4).is_err());
    }

    #[test]
    fn test_row_variables() {
        let codec = codec(4);
        assert_eq!(codec.row_variables(2), vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_contains() {
        let codec = codec(4);
        assert!(codec.contains(0, 3));
        assert!(!codec.contains(-1, 0));
        assert!(!codec.contains(2, 4));
    }

    proptest! {
        #[test]
        fn prop_round_trip(n in 1usize..64, x_seed in any::<usize>(), y_seed in any::<usize>()) {
            let codec = CellCodec::new(BoardSize::new(n as i64).unwrap());
            let (x, y) = (x_seed % n, y_seed % n);
            let variable = codec.encode(x, y);
            prop_assert!(variable >= 1 && variable as usize <= n * n);
            prop_assert_eq!(codec.decode(variable), (x, y));
        }

        #[test]
        fn prop_decode_then_encode(n in 1usize..64, v_seed in any::<usize>()) {
            let codec = CellCodec::new(BoardSize::new(n as i64).unwrap());
            let variable = (v_seed % (n * n)) as i32 + 1;
            let (x, y) = codec.try_decode(variable).unwrap();
            prop_assert_eq!(codec.encode(x, y), variable);
        }
    }
}

//! Board representation decoded from a solver model

use super::BoardSize;
use crate::error::Result;
use crate::sat::{CellCodec, Model};
use serde::{Deserialize, Serialize};

/// An N×N board of queens, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: BoardSize,
    pub cells: Vec<bool>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![false; size.cell_count()],
        }
    }

    /// Place a queen on every cell whose variable is true in `model`
    pub fn from_model(model: &Model, size: BoardSize) -> Result<Self> {
        let codec = CellCodec::new(size);
        let mut board = Self::new(size);
        for variable in model.true_variables() {
            let (x, y) = codec.try_decode(variable)?;
            board.place(x, y);
        }
        Ok(board)
    }

    /// Build a board from queen coordinates
    pub fn from_queens(size: BoardSize, queens: &[(usize, usize)]) -> Self {
        let mut board = Self::new(size);
        for &(x, y) in queens {
            board.place(x, y);
        }
        board
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.size.get() + y
    }

    pub fn width(&self) -> usize {
        self.size.get()
    }

    /// Whether a queen stands on row `x`, column `y`
    pub fn has_queen(&self, x: usize, y: usize) -> bool {
        let n = self.size.get();
        x < n && y < n && self.cells[self.index(x, y)]
    }

    /// Place a queen; cells off the board are ignored
    pub fn place(&mut self, x: usize, y: usize) {
        let n = self.size.get();
        if x < n && y < n {
            let idx = self.index(x, y);
            self.cells[idx] = true;
        }
    }

    /// Queen coordinates in row-major order
    pub fn queens(&self) -> Vec<(usize, usize)> {
        let n = self.size.get();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, queen)| **queen)
            .map(|(idx, _)| (idx / n, idx % n))
            .collect()
    }

    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&queen| queen).count()
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueensError;

    fn size(n: i64) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn test_from_model_places_true_variables() {
        // 4x4: queens at (0,1), (1,3), (2,0), (3,2) -> variables 2, 8, 9, 15
        let values = (1..=16).map(|v| [2, 8, 9, 15].contains(&v));
        let model = Model::from_values(values);
        let board = Board::from_model(&model, size(4)).unwrap();

        assert_eq!(board.queen_count(), 4);
        assert_eq!(board.queens(), vec![(0, 1), (1, 3), (2, 0), (3, 2)]);
        assert!(board.has_queen(1, 3));
        assert!(!board.has_queen(0, 0));
    }

    #[test]
    fn test_from_model_rejects_foreign_variables() {
        let model = Model::from_literals(vec![1, -2, -3, -4, 5]);
        assert!(matches!(
            Board::from_model(&model, size(2)),
            Err(QueensError::VariableOutOfRange { variable: 5, size: 2 })
        ));
    }

    #[test]
    fn test_rows() {
        let board = Board::from_queens(size(2), &[(1, 0)]);
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows, vec![&[false, false][..], &[true, false][..]]);
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let mut board = Board::new(size(3));
        board.place(5, 5);
        assert_eq!(board.queen_count(), 0);
        assert!(!board.has_queen(3, 0));
    }
}

//! Validated board dimension

use crate::error::{QueensError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest N whose N² variables still fit a positive `i32` literal
pub const MAX_BOARD_SIZE: usize = 46_340;

/// Side length of an N×N board, guaranteed to be in `1..=MAX_BOARD_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Check a raw queen count and wrap it
    pub fn new(size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(QueensError::invalid_size(size, "must be at least 1"));
        }
        if size as u64 > MAX_BOARD_SIZE as u64 {
            return Err(QueensError::invalid_size(
                size,
                format!("must not exceed {}", MAX_BOARD_SIZE),
            ));
        }
        Ok(Self(size as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells, which is also the number of SAT variables
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = QueensError;

    fn try_from(size: i64) -> Result<Self> {
        Self::new(size)
    }
}

impl From<BoardSize> for i64 {
    fn from(size: BoardSize) -> Self {
        size.0 as i64
    }
}

impl FromStr for BoardSize {
    type Err = QueensError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let size = trimmed.parse::<i64>().map_err(|_| QueensError::NotAnInteger {
            input: trimmed.to_string(),
        })?;
        Self::new(size)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_sizes() {
        assert_eq!(BoardSize::new(1).unwrap().get(), 1);
        assert_eq!(BoardSize::new(8).unwrap().cell_count(), 64);
        assert!(BoardSize::new(MAX_BOARD_SIZE as i64).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        assert!(matches!(
            BoardSize::new(0),
            Err(QueensError::InvalidBoardSize { size: 0, .. })
        ));
        assert!(BoardSize::new(-3).is_err());
        assert!(BoardSize::new(MAX_BOARD_SIZE as i64 + 1).is_err());
    }

    #[test]
    fn test_parse_from_console_input() {
        assert_eq!("  4\n".parse::<BoardSize>().unwrap().get(), 4);
        assert!(matches!(
            "four".parse::<BoardSize>(),
            Err(QueensError::NotAnInteger { .. })
        ));
        assert!(matches!(
            "0".parse::<BoardSize>(),
            Err(QueensError::InvalidBoardSize { .. })
        ));
    }

    #[test]
    fn test_serde_rejects_invalid_size() {
        let size: BoardSize = serde_yaml::from_str("5").unwrap();
        assert_eq!(size.get(), 5);
        assert!(serde_yaml::from_str::<BoardSize>("-1").is_err());
    }
}

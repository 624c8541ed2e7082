use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One column index per decided row; the row of entry `i` is `i`.
pub type Placement = Vec<usize>;

/// Side length of a square board, always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize(usize);

impl BoardSize {
    pub fn new(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(Error::NonPositive(n));
        }
        let size = usize::try_from(n).map_err(|_| Error::TooLarge {
            value: n,
            max: usize::MAX,
        })?;
        Ok(Self(size))
    }

    /// Like [`BoardSize::new`], but also rejects sizes above `max`.
    pub fn with_max(n: i64, max: usize) -> Result<Self> {
        let size = Self::new(n)?;
        if size.0 > max {
            return Err(Error::TooLarge { value: n, max });
        }
        Ok(size)
    }

    /// Parses user input and applies [`BoardSize::with_max`].
    pub fn parse_bounded(s: &str, max: usize) -> Result<Self> {
        Self::with_max(parse_integer(s)?, max)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for BoardSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_integer(s)?)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Parses a strictly positive count, such as a solution limit.
pub fn parse_positive(s: &str) -> Result<usize> {
    let n = parse_integer(s)?;
    if n <= 0 {
        return Err(Error::NonPositive(n));
    }
    usize::try_from(n).map_err(|_| Error::TooLarge {
        value: n,
        max: usize::MAX,
    })
}

fn parse_integer(s: &str) -> Result<i64> {
    let trimmed = s.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::NotANumber(trimmed.to_owned()))
}

/// `(row, col)` pairs for every placed queen.
pub fn coordinates(state: &[usize]) -> Vec<(usize, usize)> {
    state.iter().copied().enumerate().collect()
}

/// Renders the coordinates as `(0, 1), (1, 3), ...`.
pub fn format_coordinates(state: &[usize]) -> String {
    coordinates(state)
        .iter()
        .map(|(row, col)| format!("({}, {})", row, col))
        .collect::<Vec<_>>()
        .join(", ")
}

/// True when every column is on the board and no two queens attack each other.
pub fn is_consistent(state: &[usize], n: usize) -> bool {
    if state.len() > n || state.iter().any(|&col| col >= n) {
        return false;
    }
    for (i, &a) in state.iter().enumerate() {
        for (j, &b) in state.iter().enumerate().skip(i + 1) {
            if a == b || a.abs_diff(b) == j - i {
                return false;
            }
        }
    }
    true
}

/// Squares that share a row, column or diagonal with a placed queen.
///
/// Indexed `[row][col]`. Squares holding a queen are never marked.
pub fn attacked_squares(state: &[usize], n: usize) -> Vec<Vec<bool>> {
    let mut attacked = vec![vec![false; n]; n];
    for (row, cells) in attacked.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            if state.get(row) == Some(&col) {
                continue;
            }
            *cell = state.iter().enumerate().any(|(qr, &qc)| {
                qr == row || qc == col || qr.abs_diff(row) == qc.abs_diff(col)
            });
        }
    }
    attacked
}

/// Text board: `Q` for a queen, `-` for an empty square.
pub fn render_board(state: &[usize], n: usize) -> String {
    (0..n)
        .map(|row| {
            (0..n)
                .map(|col| if state.get(row) == Some(&col) { "Q" } else { "-" })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A (row, column) cell reference on a board.
///
/// Components are signed so that negative input from a client reaches path
/// validation and is rejected as out of bounds, rather than failing to
/// deserialize. On the wire a coordinate is a two-element array `[row, col]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    /// Row index, top to bottom.
    pub row: i32,
    /// Column index, left to right.
    pub col: i32,
}

impl Coordinate {
    /// Returns true if both components lie in `[0, size)`.
    pub fn within(&self, size: usize) -> bool {
        let in_range = |v: i32| usize::try_from(v).is_ok_and(|v| v < size);
        in_range(self.row) && in_range(self.col)
    }

    /// Returns true if `other` touches this cell horizontally, vertically or
    /// diagonally.
    ///
    /// A cell is not adjacent to itself.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! Path validation and word extraction.
//!
//! A path is the ordered list of cells a player traced. Validation is pure
//! geometry and knows nothing about words; extraction reads letters off a
//! board and never fails, so callers can always echo what was attempted.

use crate::{Board, Coordinate};
use derive_more::Display;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Fewest cells a path may contain.
pub const MIN_PATH_LEN: usize = 3;

/// First geometry rule a path broke.
///
/// Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PathError {
    /// Fewer than [`MIN_PATH_LEN`] cells.
    #[display("a word needs at least {} letters, got {}", MIN_PATH_LEN, _0)]
    TooShort(usize),

    /// The same cell appears twice.
    #[display("cell {} is used more than once", _0)]
    RevisitedCell(Coordinate),

    /// A cell lies outside the board.
    #[display("cell {} is off the board", _0)]
    OutOfBounds(Coordinate),

    /// Two consecutive cells do not touch.
    #[display("letters must be directly connected, {} does not touch {}", _0, _1)]
    NotAdjacent(Coordinate, Coordinate),
}

impl PathError {
    /// Stable snake_case identifier for clients.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl std::error::Error for PathError {}

/// Checks `path` against a `board_size`×`board_size` grid.
#[instrument(skip(path), fields(len = path.len()))]
pub fn validate(path: &[Coordinate], board_size: usize) -> Result<(), PathError> {
    if path.len() < MIN_PATH_LEN {
        return Err(PathError::TooShort(path.len()));
    }

    let mut seen = HashSet::with_capacity(path.len());
    if let Some(dup) = path.iter().find(|c| !seen.insert(**c)) {
        return Err(PathError::RevisitedCell(*dup));
    }

    if let Some(off) = path.iter().find(|c| !c.within(board_size)) {
        return Err(PathError::OutOfBounds(*off));
    }

    if let Some(pair) = path.windows(2).find(|w| !w[0].is_adjacent(&w[1])) {
        return Err(PathError::NotAdjacent(pair[0], pair[1]));
    }

    debug!("Path is valid");
    Ok(())
}

/// Reads the lowercase word spelled by `path`, skipping off-board cells.
pub fn word_from_path(board: &Board, path: &[Coordinate]) -> String {
    path.iter()
        .filter_map(|c| board.letter_at(*c).ok())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(i32, i32)]) -> Vec<Coordinate> {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_straight_line_is_valid() {
        assert_eq!(validate(&path(&[(0, 0), (0, 1), (0, 2)]), 4), Ok(()));
    }

    #[test]
    fn test_diagonal_path_is_valid() {
        assert_eq!(validate(&path(&[(0, 0), (1, 1), (2, 2), (3, 3)]), 4), Ok(()));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate(&path(&[(0, 0), (0, 1)]), 4),
            Err(PathError::TooShort(2))
        );
        assert_eq!(validate(&[], 4), Err(PathError::TooShort(0)));
    }

    #[test]
    fn test_revisited_cell() {
        assert_eq!(
            validate(&path(&[(0, 0), (0, 1), (0, 0)]), 4),
            Err(PathError::RevisitedCell(Coordinate::new(0, 0)))
        );
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            validate(&path(&[(0, 2), (0, 3), (0, 4)]), 4),
            Err(PathError::OutOfBounds(Coordinate::new(0, 4)))
        );
        assert_eq!(
            validate(&path(&[(-1, 0), (0, 0), (1, 0)]), 4),
            Err(PathError::OutOfBounds(Coordinate::new(-1, 0)))
        );
    }

    #[test]
    fn test_not_adjacent() {
        assert_eq!(
            validate(&path(&[(0, 0), (0, 1), (2, 1)]), 4),
            Err(PathError::NotAdjacent(Coordinate::new(0, 1), Coordinate::new(2, 1)))
        );
    }

    #[test]
    fn test_earlier_rule_wins() {
        // Short and repeated: length is reported.
        assert_eq!(
            validate(&path(&[(0, 0), (0, 0)]), 4),
            Err(PathError::TooShort(2))
        );
        // Repeated, off-board and gapped: repetition is reported.
        assert_eq!(
            validate(&path(&[(9, 9), (0, 0), (9, 9)]), 4),
            Err(PathError::RevisitedCell(Coordinate::new(9, 9)))
        );
        // Off-board and gapped: bounds are reported.
        assert_eq!(
            validate(&path(&[(0, 0), (3, 3), (5, 5)]), 4),
            Err(PathError::OutOfBounds(Coordinate::new(5, 5)))
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(PathError::TooShort(1).code(), "too_short");
        assert_eq!(
            PathError::RevisitedCell(Coordinate::new(0, 0)).code(),
            "revisited_cell"
        );
        assert_eq!(
            PathError::OutOfBounds(Coordinate::new(0, 0)).code(),
            "out_of_bounds"
        );
        assert_eq!(
            PathError::NotAdjacent(Coordinate::new(0, 0), Coordinate::new(2, 2)).code(),
            "not_adjacent"
        );
    }

    #[test]
    fn test_word_from_path_skips_off_board() {
        let board = Board::from_rows(&["CATS", "DOGE", "BIRD", "FISH"]).unwrap();
        assert_eq!(word_from_path(&board, &path(&[(0, 0), (0, 1), (0, 2)])), "cat");
        assert_eq!(
            word_from_path(&board, &path(&[(0, 0), (7, 7), (0, 1)])),
            "ca"
        );
    }
}

//! Letter grid.

use crate::Coordinate;
use derive_more::Display;
use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::{debug, instrument};

/// Side length of a standard board.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest side length a server will generate boards for.
pub const MAX_BOARD_SIZE: usize = 16;

/// Letters a board may contain.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error from board construction or lookup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The coordinate lies outside the grid.
    #[display("Coordinate {} is off the board", _0)]
    OutOfBounds(Coordinate),

    /// Rows given to [`Board::from_rows`] do not form a square.
    #[display("Board must be square, got {} rows of lengths {:?}", rows, lengths)]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Length of each supplied row.
        lengths: Vec<usize>,
    },

    /// A cell holds something other than A-Z.
    #[display("Invalid board letter {:?}", _0)]
    InvalidLetter(char),
}

impl std::error::Error for BoardError {}

/// Square grid of uppercase letters.
///
/// Immutable once built. Cells are stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<char>,
}

impl Board {
    /// Fills a `size`×`size` grid with letters drawn uniformly from A-Z.
    ///
    /// There is no check that the resulting board contains any word.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        let board = Self { size, cells };
        debug!(board = %board, "Generated board");
        board
    }

    /// Generates a board from the thread-local RNG.
    pub fn random(size: usize) -> Self {
        Self::generate(size, &mut rand::thread_rng())
    }

    /// Builds a board from one string per row.
    ///
    /// Letters are uppercased; anything outside A-Z is rejected.
    #[instrument]
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let size = rows.len();
        let lengths: Vec<usize> = rows.iter().map(|r| r.chars().count()).collect();
        if lengths.iter().any(|&len| len != size) {
            return Err(BoardError::NotSquare { rows: size, lengths });
        }

        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| {
                let upper = c.to_ascii_uppercase();
                if upper.is_ascii_uppercase() {
                    Ok(upper)
                } else {
                    Err(BoardError::InvalidLetter(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Returns true if `coord` addresses a cell of this board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.within(self.size)
    }

    /// Returns the letter at `coord`.
    pub fn letter_at(&self, coord: Coordinate) -> Result<char, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        // In bounds, so both components are non-negative.
        let index = coord.row as usize * self.size + coord.col as usize;
        Ok(self.cells[index])
    }

    /// Grid as rows of single-letter strings, the shape clients receive.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

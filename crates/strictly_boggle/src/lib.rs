//! Strictly Boggle - word-search game engine
//!
//! Generates letter grids, checks traced paths, looks words up in a word
//! list and keeps score for a single game.
//!
//! # Architecture
//!
//! - **Dictionary**: immutable word set, loaded once and shared
//! - **Board**: square grid of uppercase letters
//! - **Path**: geometry rules for a traced sequence of cells
//! - **Scoring**: points per word length
//! - **Session**: one game, composing all of the above
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_boggle::{Board, Coordinate, Dictionary, GameSession};
//!
//! let board = Board::from_rows(&["CATS", "DOGE", "BIRD", "FISH"]).unwrap();
//! let dictionary = Arc::new(Dictionary::from_words(["cat"]));
//! let mut session = GameSession::new(board, dictionary);
//!
//! let path = [Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)];
//! assert!(session.attempt_word(&path).is_accepted());
//! assert_eq!(*session.score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod dictionary;
mod generator;
pub mod path;
mod scoring;
mod session;

pub use board::{ALPHABET, Board, BoardError, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use coordinate::Coordinate;
pub use dictionary::{Dictionary, DictionaryError};
pub use generator::{BoardGenerator, FixedBoard, RandomBoards, SeededBoards};
pub use path::{MIN_PATH_LEN, PathError};
pub use scoring::points_for;
pub use session::{
    Accepted, AttemptOutcome, GameSession, Rejected, Rejection, SessionSnapshot,
};
